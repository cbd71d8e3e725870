//! Education level detection

use crate::analysis::taxonomy::{HIGHER_KEYWORDS, POSTGRADUATE_KEYWORDS, TECHNICAL_KEYWORDS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Education tiers in ascending order; when several tiers are mentioned the
/// highest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Education {
    NotInformed,
    Technical,
    Higher,
    PostGraduate,
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Education::NotInformed => "Não informado",
            Education::Technical => "Ensino Técnico",
            Education::Higher => "Ensino Superior",
            Education::PostGraduate => "Pós-graduação",
        };
        write!(f, "{}", label)
    }
}

pub struct EducationClassifier {
    tiers: Vec<(Education, &'static [&'static str])>,
}

impl EducationClassifier {
    pub fn new() -> Self {
        Self {
            tiers: vec![
                (Education::Technical, TECHNICAL_KEYWORDS),
                (Education::Higher, HIGHER_KEYWORDS),
                (Education::PostGraduate, POSTGRADUATE_KEYWORDS),
            ],
        }
    }

    /// Flag each tier whose keywords appear anywhere in the lowercased text
    /// (plain substring containment) and return the highest flagged tier.
    pub fn classify(&self, text: &str) -> Education {
        let lower = text.to_lowercase();
        let mut highest = Education::NotInformed;

        for (tier, keywords) in &self.tiers {
            if keywords.iter().any(|kw| lower.contains(kw)) {
                highest = highest.max(*tier);
            }
        }

        highest
    }
}

impl Default for EducationClassifier {
    fn default() -> Self {
        Self::new()
    }
}
