//! Plain text from `.docx` packages
//!
//! A `.docx` file is a zip archive whose `word/document.xml` part holds the
//! body. Text runs (`w:t`) are collected per paragraph (`w:p`); tabs and line
//! breaks inside a run are kept.

use std::io::{Cursor, Read};

use toolkits_application::DocumentTextPort;
use xml::reader::{EventReader, XmlEvent};

const DOCUMENT_PART: &str = "word/document.xml";
const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// [`DocumentTextPort`] backed by `zip` and `xml-rs`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxTextExtractor;

impl DocxTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentTextPort for DocxTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| format!("Failed to read docx archive: {}", e))?;
        let mut part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| format!("Missing {}: {}", DOCUMENT_PART, e))?;
        let mut xml = String::new();
        part.read_to_string(&mut xml)
            .map_err(|e| format!("Failed to read {}: {}", DOCUMENT_PART, e))?;

        paragraphs(&xml).map(|paragraphs| paragraphs.join("\n"))
    }
}

fn paragraphs(xml: &str) -> Result<Vec<String>, String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    for event in EventReader::new(xml.as_bytes()) {
        match event.map_err(|e| format!("Malformed document XML: {}", e))? {
            XmlEvent::StartElement { name, .. } if name.namespace.as_deref() == Some(WORD_NS) => {
                match name.local_name.as_str() {
                    "t" => in_text = true,
                    "tab" => current.push('\t'),
                    "br" | "cr" => current.push('\n'),
                    _ => {}
                }
            }
            XmlEvent::EndElement { name } if name.namespace.as_deref() == Some(WORD_NS) => {
                match name.local_name.as_str() {
                    "t" => in_text = false,
                    "p" => paragraphs.push(std::mem::take(&mut current)),
                    _ => {}
                }
            }
            XmlEvent::Characters(text) | XmlEvent::Whitespace(text) if in_text => current.push_str(&text),
            _ => {}
        }
    }

    Ok(paragraphs)
}
