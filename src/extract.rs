//! The text-extraction boundary.
//!
//! Turning a document file into per-page text is an external capability:
//! the index engine only consumes ordered `(page_number, text)` pairs.
//! `PlainTextExtractor` is the shipped backend; a PDF or OCR backend would
//! implement the same trait.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// One page of extracted text. Pages are numbered from 0 in reading order.
#[derive(Debug, Clone)]
pub struct Page {
    pub number: u32,
    pub text: String,
}

/// Yields the ordered pages of a document.
///
/// A failure covers that document only; the corpus walk in
/// [`IndexEngine::index_all`](crate::index::engine::IndexEngine::index_all)
/// skips the document and continues.
pub trait TextExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<Page>>;
}

/// Extractor for plain-text files: the file is read as UTF-8 (lossily) and
/// split into pages on form-feed characters.
#[derive(Debug, Default)]
pub struct PlainTextExtractor;

/// Page delimiter in plain-text documents.
const PAGE_BREAK: char = '\u{0c}';

impl TextExtractor for PlainTextExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<Page>> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);

        let pages = text
            .split(PAGE_BREAK)
            .enumerate()
            .map(|(number, text)| Page {
                number: number as u32,
                text: text.to_string(),
            })
            .collect();

        Ok(pages)
    }
}
