//! Resume analysis engine
//!
//! A deterministic, rule-based pipeline: skill keyword extraction, experience
//! estimation, seniority and education classification, job compatibility
//! scoring, and narrative synthesis. Works primarily on Portuguese text.

pub mod compatibility;
pub mod education;
pub mod engine;
pub mod experience;
pub mod narrative;
pub mod seniority;
pub mod skills;
pub mod taxonomy;
