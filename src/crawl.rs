//! Corpus discovery: walk a directory tree and register candidate documents.
//!
//! The walk recurses into every directory (including dot-directories) and
//! registers each regular file whose extension matches the configured suffix
//! set, case-insensitively. Files with no extension, and hidden files whose
//! leading dot is their only dot, are skipped. Unreadable entries are
//! counted and skipped, never fatal to the walk.

use crate::error::Result;
use crate::index::engine::IndexEngine;
use crate::index::types::IndexConfig;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::Path;
use tracing::{debug, warn};

/// Outcome of one corpus walk.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrawlSummary {
    pub registered: usize,
    pub errors: usize,
}

/// Filesystem crawler feeding the engine's registry.
pub struct Crawler {
    matcher: GlobSet,
}

impl Crawler {
    pub fn new(config: &IndexConfig) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for extension in &config.extensions {
            let glob = GlobBuilder::new(&format!("*.{extension}"))
                .case_insensitive(true)
                .build()?;
            builder.add(glob);
        }
        Ok(Self {
            matcher: builder.build()?,
        })
    }

    /// Walk `root`, registering every eligible file. Returns how many
    /// documents were registered and how many entries could not be read.
    pub fn crawl(&self, root: &Path, engine: &mut IndexEngine) -> Result<CrawlSummary> {
        let mut summary = CrawlSummary::default();

        // Standard filters honor ignore files and skip hidden entries; this
        // walk wants neither, so eligibility is decided here alone.
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    summary.errors += 1;
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !has_real_extension(&name) || !self.matcher.is_match(&*name) {
                continue;
            }

            let doc_id = engine.register(entry.path().to_path_buf())?;
            debug!(doc_id, path = %entry.path().display(), "registered document");
            summary.registered += 1;
        }

        Ok(summary)
    }
}

/// A name qualifies when its last dot is neither missing nor leading:
/// `report.pdf` and `.drafts.pdf` do, `README` and `.pdf` do not.
fn has_real_extension(name: &str) -> bool {
    matches!(name.rfind('.'), Some(pos) if pos > 0)
}
