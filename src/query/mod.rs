//! Read-only projections over trie search results.
//!
//! The query layer flattens a token's occurrence list into plain sequences
//! that consumers can iterate without knowing anything about the trie. Both
//! lookups preserve occurrence order exactly as `search` yields it:
//! newest-first on a live engine, oldest-first after a snapshot reload.

use crate::index::engine::IndexEngine;
use crate::index::types::{DocId, Occurrence};

/// Exact-token lookup interface over a borrowed engine.
pub struct QueryEngine<'a> {
    engine: &'a IndexEngine,
}

impl<'a> QueryEngine<'a> {
    pub fn new(engine: &'a IndexEngine) -> Self {
        Self { engine }
    }

    /// Document ids recorded for `token`, one per occurrence, in occurrence
    /// order. Empty if the token was never indexed.
    pub fn lookup_document_ids(&self, token: &str) -> Vec<DocId> {
        match self.engine.search(token) {
            Some(list) => list.iter().map(|occurrence| occurrence.doc_id).collect(),
            None => Vec::new(),
        }
    }

    /// Full occurrence records for `token`, in occurrence order. Empty if
    /// the token was never indexed.
    pub fn lookup_occurrences(&self, token: &str) -> Vec<Occurrence> {
        match self.engine.search(token) {
            Some(list) => list.iter().copied().collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(doc_id: u32, page_number: u32, position: u64) -> Occurrence {
        Occurrence {
            doc_id,
            page_number,
            position,
        }
    }

    #[test]
    fn test_lookup_occurrences_single_record() {
        let mut engine = IndexEngine::new();
        engine.insert("toolkit", occ(1, 1, 15)).unwrap();

        let query = QueryEngine::new(&engine);
        assert_eq!(query.lookup_occurrences("toolkit"), vec![occ(1, 1, 15)]);
    }

    #[test]
    fn test_lookup_preserves_occurrence_order() {
        let mut engine = IndexEngine::new();
        engine.insert("shared", occ(3, 0, 10)).unwrap();
        engine.insert("shared", occ(1, 2, 20)).unwrap();
        engine.insert("shared", occ(2, 4, 30)).unwrap();

        let query = QueryEngine::new(&engine);
        assert_eq!(query.lookup_document_ids("shared"), vec![2, 1, 3]);
        assert_eq!(
            query.lookup_occurrences("shared"),
            vec![occ(2, 4, 30), occ(1, 2, 20), occ(3, 0, 10)]
        );
    }

    #[test]
    fn test_missing_token_is_empty() {
        let engine = IndexEngine::new();
        let query = QueryEngine::new(&engine);
        assert!(query.lookup_document_ids("absent").is_empty());
        assert!(query.lookup_occurrences("absent").is_empty());
    }
}
