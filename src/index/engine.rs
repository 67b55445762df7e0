use crate::error::{IndexError, Result};
use crate::extract::TextExtractor;
use crate::index::codec;
use crate::index::registry::DocumentRegistry;
use crate::index::trie::{OccurrenceList, Trie};
use crate::index::types::{DocId, Occurrence};
use crate::utils::tokenizer::tokenize;
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Outcome of an [`IndexEngine::index_all`] corpus walk.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndexSummary {
    pub documents_indexed: usize,
    pub documents_failed: usize,
    pub tokens_inserted: u64,
}

/// The index engine: one trie plus one document registry, built in memory
/// and snapshotted to disk as a unit.
///
/// An engine is either being built live (register + index) or restored
/// wholesale from a snapshot; there is no incremental update model.
#[derive(Debug, Default)]
pub struct IndexEngine {
    trie: Trie,
    registry: DocumentRegistry,
}

impl IndexEngine {
    /// Create an engine with an empty trie and an empty registry.
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            registry: DocumentRegistry::new(),
        }
    }

    /// Register a document path, returning its new id.
    pub fn register(&mut self, path: impl Into<std::path::PathBuf>) -> Result<DocId> {
        self.registry.register(path)
    }

    /// Path registered under `doc_id`, bounds-checked.
    pub fn get_path(&self, doc_id: DocId) -> Result<&Path> {
        self.registry.get_path(doc_id)
    }

    pub fn document_count(&self) -> usize {
        self.registry.len()
    }

    pub fn registry(&self) -> &DocumentRegistry {
        &self.registry
    }

    pub(crate) fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Insert one occurrence of `token` directly (checked append).
    pub fn insert(&mut self, token: &str, occurrence: Occurrence) -> Result<()> {
        self.trie.insert(token, occurrence)
    }

    /// Occurrence list for `token`, or `None` if it was never indexed.
    pub fn search(&self, token: &str) -> Option<&OccurrenceList> {
        self.trie.search(token)
    }

    /// Tokenize one page of text and insert every token, attributing each
    /// occurrence the byte offset of the token within the page. Returns the
    /// number of insertions attempted.
    pub fn index_page(&mut self, doc_id: DocId, page_number: u32, text: &str) -> Result<u64> {
        let mut tokens = 0u64;
        for span in tokenize(text) {
            self.trie.insert(
                &span.text,
                Occurrence {
                    doc_id,
                    page_number,
                    position: span.offset,
                },
            )?;
            tokens += 1;
        }
        Ok(tokens)
    }

    /// Extract and index a single registered document. Extraction failure
    /// propagates; callers walking a corpus decide whether to skip.
    pub fn index_document(
        &mut self,
        doc_id: DocId,
        extractor: &dyn TextExtractor,
    ) -> Result<u64> {
        let path = self.registry.get_path(doc_id)?.to_path_buf();
        let pages = extractor.extract_pages(&path)?;

        let mut tokens = 0u64;
        for page in &pages {
            tokens += self.index_page(doc_id, page.number, &page.text)?;
        }
        debug!(
            doc_id,
            path = %path.display(),
            pages = pages.len(),
            tokens,
            "indexed document"
        );
        Ok(tokens)
    }

    /// Index every registered document in id order.
    ///
    /// A document the extractor cannot handle (corrupt, encrypted,
    /// unreadable) is logged and skipped; the rest of the corpus is still
    /// indexed. Trie failures abort the walk.
    pub fn index_all(&mut self, extractor: &dyn TextExtractor) -> Result<IndexSummary> {
        let mut summary = IndexSummary::default();

        for doc_id in 0..self.registry.len() as DocId {
            let path = self.registry.get_path(doc_id)?.to_path_buf();
            let pages = match extractor.extract_pages(&path) {
                Ok(pages) => pages,
                Err(e) => {
                    warn!(doc_id, path = %path.display(), error = %e, "skipping document");
                    summary.documents_failed += 1;
                    continue;
                }
            };

            for page in &pages {
                summary.tokens_inserted += self.index_page(doc_id, page.number, &page.text)?;
            }
            summary.documents_indexed += 1;
        }

        Ok(summary)
    }

    /// Snapshot the whole engine to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        codec::write_index(&self.trie, &self.registry, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Reconstruct an engine from a snapshot written by [`save`](Self::save).
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            // mmap rejects empty files; an empty snapshot is just truncation
            return Err(IndexError::Truncated("magic"));
        }
        let mmap = unsafe { Mmap::map(&file)? };
        let (trie, registry) = codec::read_index(&mut &mmap[..])?;
        Ok(Self { trie, registry })
    }
}
