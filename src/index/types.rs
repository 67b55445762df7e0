use serde::{Deserialize, Serialize};

/// Unique identifier for a document in the registry.
///
/// Ids are dense and zero-based: the id of a document is its position in
/// registration order, and `id < document_count` always holds.
pub type DocId = u32;

/// A single recorded hit of a token at a specific document, page and position.
///
/// `position` is the byte offset of the token's first byte within the
/// extracted text of its page, so positions are strictly increasing across
/// the tokens of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub doc_id: DocId,
    pub page_number: u32,
    pub position: u64,
}

/// Configuration for the indexer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// File extensions eligible for registration, matched case-insensitively
    pub extensions: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_string()],
        }
    }
}
