//! Input processing module
//! Handles file type detection and text extraction from uploaded documents

pub mod file_detector;
pub mod text_extractor;
