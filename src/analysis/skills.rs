//! Skill keyword extraction grouped by taxonomy category

use crate::analysis::taxonomy::SKILL_CATEGORIES;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches taxonomy terms as whole words against lowercased text.
pub struct SkillExtractor {
    categories: Vec<CategoryMatcher>,
}

struct CategoryMatcher {
    name: &'static str,
    terms: Vec<TermMatcher>,
}

struct TermMatcher {
    term: &'static str,
    pattern: Regex,
}

/// Skills found in a document, grouped by category in taxonomy order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillFindings {
    pub categories: Vec<CategoryFindings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryFindings {
    pub name: String,
    pub skills: Vec<String>,
}

impl SkillFindings {
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.skills.as_slice())
    }

    pub fn has(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    /// Number of categories with at least one match.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total matched terms across all categories.
    pub fn total_skills(&self) -> usize {
        self.categories.iter().map(|c| c.skills.len()).sum()
    }

    /// All matched terms flattened in category order.
    pub fn flatten(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.skills.iter().cloned())
            .collect()
    }
}

impl SkillExtractor {
    pub fn new() -> Self {
        let categories = SKILL_CATEGORIES
            .iter()
            .map(|(name, terms)| CategoryMatcher {
                name,
                terms: terms
                    .iter()
                    .map(|term| TermMatcher {
                        term,
                        pattern: Regex::new(&format!(r"\b{}\b", regex::escape(term)))
                            .expect("invalid skill term pattern"),
                    })
                    .collect(),
            })
            .collect();

        Self { categories }
    }

    /// Extract skill findings from text. Existence-only: the first occurrence
    /// of a term suffices, matched terms are title-cased for display.
    pub fn extract(&self, text: &str) -> SkillFindings {
        let lower = text.to_lowercase();
        let mut findings = SkillFindings::default();

        for category in &self.categories {
            let matched: Vec<String> = category
                .terms
                .iter()
                .filter(|t| t.pattern.is_match(&lower))
                .map(|t| title_case(t.term))
                .collect();

            if !matched.is_empty() {
                findings.categories.push(CategoryFindings {
                    name: category.name.to_string(),
                    skills: matched,
                });
            }
        }

        findings
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest:
/// "node.js" becomes "Node.Js", "sql server" becomes "Sql Server".
pub fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut at_boundary = true;
    for ch in term.chars() {
        if ch.is_alphabetic() {
            if at_boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(ch);
            at_boundary = true;
        }
    }
    out
}
