//! # docdex - persistent full-text page index
//!
//! docdex builds a trie-based inverted index over the pages of a document
//! corpus, snapshots it to a single binary file, and answers exact-token
//! lookups against the live or reloaded index.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - the trie, document registry, binary codec and engine
//! - [`query`] - flat read-only projections over search results
//! - [`crawl`] - corpus discovery and registration
//! - [`extract`] - the per-page text extraction boundary
//! - [`output`] - result formatting for the terminal
//! - [`utils`] - tokenizer and app-data helpers
//!
//! ## Quick Start
//!
//! ```no_run
//! use docdex::crawl::Crawler;
//! use docdex::extract::PlainTextExtractor;
//! use docdex::index::types::IndexConfig;
//! use docdex::{IndexEngine, QueryEngine};
//! use std::path::Path;
//!
//! # fn main() -> docdex::Result<()> {
//! let mut engine = IndexEngine::new();
//! let crawler = Crawler::new(&IndexConfig::default())?;
//! crawler.crawl(Path::new("/corpus"), &mut engine)?;
//! engine.index_all(&PlainTextExtractor)?;
//! engine.save(Path::new("/tmp/index.db"))?;
//!
//! let query = QueryEngine::new(&engine);
//! for occurrence in query.lookup_occurrences("toolkit") {
//!     println!("{occurrence:?}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Ordering contract
//!
//! A live engine returns a token's occurrences newest-first; after one
//! save/load cycle the same token's occurrences come back oldest-first.
//! Both orders are part of the persisted format's contract - see
//! [`index::codec`].

pub mod crawl;
pub mod error;
pub mod extract;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use error::{IndexError, Result};
pub use index::engine::IndexEngine;
pub use query::QueryEngine;
