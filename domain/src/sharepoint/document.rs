//! Document kinds that `read_document` can turn into text.

/// Returned verbatim when a document is neither `.txt` nor `.docx`.
pub const UNSUPPORTED_FILE_TYPE: &str =
    "Not supported type of files entered. Supported types are TXT and DOCX only at the moment";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    WordDocument,
    Unsupported,
}

impl DocumentKind {
    /// Classify by extension, case-insensitively.
    pub fn from_path(path: &str) -> Self {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("txt") => DocumentKind::PlainText,
            Some("docx") => DocumentKind::WordDocument,
            _ => DocumentKind::Unsupported,
        }
    }

    pub fn is_supported(self) -> bool {
        self != DocumentKind::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            DocumentKind::from_path("/sites/x/Shared Documents/notes.txt"),
            DocumentKind::PlainText
        );
        assert_eq!(DocumentKind::from_path("Report.DOCX"), DocumentKind::WordDocument);
        assert_eq!(DocumentKind::from_path("data.xyz"), DocumentKind::Unsupported);
        assert_eq!(DocumentKind::from_path("README"), DocumentKind::Unsupported);
        // dot in a folder name is not an extension
        assert_eq!(DocumentKind::from_path("v1.txt/README"), DocumentKind::Unsupported);
    }
}
