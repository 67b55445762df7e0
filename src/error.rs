//! Error types for docdex.
//!
//! [`IndexError`] is the crate's single typed error; [`Result`] is the
//! matching alias used throughout the library surface.

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

use crate::index::types::DocId;

/// The crate-wide result alias.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Every failure mode the index can surface.
#[derive(Debug, Error)]
pub enum IndexError {
    /// An underlying I/O failure that is not a truncated snapshot.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// A snapshot ended early while reading the named field.
    #[error("truncated snapshot while reading {0}")]
    Truncated(&'static str),

    /// A snapshot is structurally corrupt for the stated reason.
    #[error("corrupt snapshot: {0}")]
    Corrupt(&'static str),

    /// The leading magic number did not match the expected value.
    #[error("corrupt format: found {found:#010x}, expected {expected:#010x}")]
    CorruptFormat { found: u32, expected: u32 },

    /// The snapshot declares a format version this build cannot read.
    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u16),

    /// A document id had no registered path.
    #[error("no document registered under id {0}")]
    DocumentNotFound(DocId),

    /// A token failed validation before insertion or lookup.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// A container could not grow; the operation left state unchanged.
    #[error("allocation failure: {0}")]
    Allocation(#[from] TryReserveError),

    /// An extension glob could not be compiled into a matcher.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] globset::Error),
}
