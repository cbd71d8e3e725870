//! Compatibility scoring between a resume and a job description

use crate::analysis::skills::SkillExtractor;
use log::debug;
use regex::Regex;
use std::collections::HashSet;

const DEFAULT_COMPATIBILITY: u8 = 85;
const KEYWORD_LIMIT: usize = 10;
const KEYWORD_BONUS_WEIGHT: f64 = 20.0;
const MIN_COMPATIBILITY: f64 = 60.0;
const MAX_COMPATIBILITY: f64 = 95.0;

pub struct CompatibilityScorer {
    keyword_pattern: Regex,
}

impl CompatibilityScorer {
    pub fn new() -> Self {
        Self {
            keyword_pattern: Regex::new(r"\b\w{4,}\b").expect("invalid keyword pattern"),
        }
    }

    /// Percentage fit of a resume against a job description, in [60, 95].
    /// Returns `None` when no job description was supplied.
    pub fn score(
        &self,
        skills: &SkillExtractor,
        resume_text: &str,
        job_description: &str,
    ) -> Option<u8> {
        if job_description.trim().is_empty() {
            return None;
        }

        let resume_skills = skills.extract(resume_text);
        let job_skills = skills.extract(job_description);

        let mut common = 0usize;
        let mut total_job_skills = 0usize;

        for category in &job_skills.categories {
            total_job_skills += category.skills.len();
            if let Some(resume_terms) = resume_skills.get(&category.name) {
                let resume_set: HashSet<&String> = resume_terms.iter().collect();
                common += category
                    .skills
                    .iter()
                    .filter(|s| resume_set.contains(s))
                    .count();
            }
        }

        // No classifiable skill terms in the job text: fixed default
        if total_job_skills == 0 {
            debug!("Job description yielded no skill terms, using default compatibility");
            return Some(DEFAULT_COMPATIBILITY);
        }

        let base = common as f64 / total_job_skills as f64 * 100.0;
        let bonus = self.keyword_bonus(resume_text, job_description);
        let final_score = (base + bonus).clamp(MIN_COMPATIBILITY, MAX_COMPATIBILITY);

        debug!(
            "Compatibility: {}/{} common skills, base {:.1}, keyword bonus {:.1}",
            common, total_job_skills, base, bonus
        );

        Some(final_score as u8)
    }

    /// Bonus from the first 10 distinct tokens of length >= 4 in the job
    /// text, counted by substring presence in the resume. Positional
    /// selection, not frequency-ranked.
    fn keyword_bonus(&self, resume_text: &str, job_description: &str) -> f64 {
        let resume_lower = resume_text.to_lowercase();
        let job_lower = job_description.to_lowercase();

        let mut seen = HashSet::new();
        let keywords: Vec<&str> = self
            .keyword_pattern
            .find_iter(&job_lower)
            .map(|m| m.as_str())
            .filter(|token| seen.insert(token.to_string()))
            .take(KEYWORD_LIMIT)
            .collect();

        if keywords.is_empty() {
            return 0.0;
        }

        let matches = keywords
            .iter()
            .filter(|kw| resume_lower.contains(**kw))
            .count();

        matches as f64 / keywords.len() as f64 * KEYWORD_BONUS_WEIGHT
    }
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::new()
    }
}
