//! Cv screener library

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use analysis::engine::{AnalysisReport, ResumeAnalyzer, SimpleAssessment};
pub use config::Config;
pub use error::{Result, ScreenerError};
pub use input::text_extractor::extract_text;
