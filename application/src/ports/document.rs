//! Document text extraction port

/// Turns a word-processing document into plain paragraph text.
pub trait DocumentTextPort: Send + Sync {
    /// Paragraphs joined by newlines. `Err` carries a human-readable reason.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, String>;
}
