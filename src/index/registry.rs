use crate::error::{IndexError, Result};
use crate::index::types::DocId;
use std::path::{Path, PathBuf};

/// Starting capacity of a fresh registry.
const INITIAL_DOC_CAPACITY: usize = 100;

/// Append-only list mapping document id to source path.
///
/// Ids are dense, zero-based and assigned strictly in registration order.
#[derive(Debug)]
pub struct DocumentRegistry {
    paths: Vec<PathBuf>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_DOC_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            paths: Vec::with_capacity(capacity),
        }
    }

    /// Append a document path, returning its new id.
    ///
    /// Capacity doubles on overflow; a failed growth leaves the registry
    /// exactly as it was and surfaces the error.
    pub fn register(&mut self, path: impl Into<PathBuf>) -> Result<DocId> {
        if self.paths.len() == self.paths.capacity() {
            let additional = self.paths.capacity().max(1);
            self.paths.try_reserve(additional)?;
        }
        let doc_id = self.paths.len() as DocId;
        self.paths.push(path.into());
        Ok(doc_id)
    }

    /// Path registered under `doc_id`, bounds-checked.
    pub fn get_path(&self, doc_id: DocId) -> Result<&Path> {
        self.paths
            .get(doc_id as usize)
            .map(PathBuf::as_path)
            .ok_or(IndexError::DocumentNotFound(doc_id))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Registered paths in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

impl Default for DocumentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
