//! File type detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Word,
    Text,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "doc" | "docx" => FileType::Word,
            "txt" => FileType::Text,
            _ => FileType::Unknown,
        }
    }

    /// Detect the file type from the last dot-separated segment of a filename.
    pub fn from_filename(filename: &str) -> Self {
        match filename.rsplit('.').next() {
            Some(ext) if ext != filename => Self::from_extension(ext),
            _ => FileType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("docx"), FileType::Word);
        assert_eq!(FileType::from_extension("doc"), FileType::Word);
        assert_eq!(FileType::from_extension("txt"), FileType::Text);
        assert_eq!(FileType::from_extension("xyz"), FileType::Unknown);
    }

    #[test]
    fn test_from_filename() {
        assert_eq!(FileType::from_filename("resume.pdf"), FileType::Pdf);
        assert_eq!(FileType::from_filename("curriculo.DOCX"), FileType::Word);
        assert_eq!(FileType::from_filename("notes.backup.txt"), FileType::Text);
        assert_eq!(FileType::from_filename("no_extension"), FileType::Unknown);
    }
}
