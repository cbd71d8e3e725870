//! Seniority level classification

use crate::analysis::taxonomy::{JUNIOR_KEYWORDS, PLENO_KEYWORDS, SENIOR_KEYWORDS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seniority {
    Junior,
    Pleno,
    Senior,
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seniority::Junior => "Junior",
            Seniority::Pleno => "Pleno",
            Seniority::Senior => "Senior",
        };
        write!(f, "{}", label)
    }
}

/// Bonus granted to exactly one level based on estimated experience years.
const EXPERIENCE_BONUS: usize = 3;

pub struct SeniorityClassifier {
    levels: Vec<(Seniority, Vec<Regex>)>,
}

impl SeniorityClassifier {
    pub fn new() -> Self {
        let compile = |keywords: &[&str]| -> Vec<Regex> {
            keywords
                .iter()
                .map(|kw| {
                    Regex::new(&format!(r"\b{}\b", regex::escape(kw)))
                        .expect("invalid seniority keyword pattern")
                })
                .collect()
        };

        Self {
            levels: vec![
                (Seniority::Junior, compile(JUNIOR_KEYWORDS)),
                (Seniority::Pleno, compile(PLENO_KEYWORDS)),
                (Seniority::Senior, compile(SENIOR_KEYWORDS)),
            ],
        }
    }

    /// Count whole-word keyword occurrences per level, add the experience
    /// bonus, and pick the highest total. Exact ties resolve to the earliest
    /// declared level (junior, then pleno, then senior).
    pub fn classify(&self, text: &str, experience_years: u8) -> Seniority {
        let lower = text.to_lowercase();

        let bonus_level = match experience_years {
            0..=2 => Seniority::Junior,
            3..=5 => Seniority::Pleno,
            _ => Seniority::Senior,
        };

        let mut winner = Seniority::Junior;
        let mut best_score = 0usize;
        let mut first = true;

        for (level, patterns) in &self.levels {
            let mut score: usize = patterns.iter().map(|p| p.find_iter(&lower).count()).sum();
            if *level == bonus_level {
                score += EXPERIENCE_BONUS;
            }
            if first || score > best_score {
                winner = *level;
                best_score = score;
                first = false;
            }
        }

        winner
    }
}

impl Default for SeniorityClassifier {
    fn default() -> Self {
        Self::new()
    }
}
