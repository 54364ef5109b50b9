//! Error types for arrex-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in arrex-core
#[derive(Debug, Error)]
pub enum Error {
    /// A name used in an expression has no entry in the symbol table
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    /// Array access outside the allocated storage
    #[error("Index {index} out of range for array '{name}' (len: {len})")]
    IndexOutOfRange {
        /// Array name
        name: String,
        /// Requested index (may be negative)
        index: i64,
        /// Allocated length
        len: usize,
    },
}
