//! Storage error taxonomy.
//!
//! A local single-file store has no transient-failure class worth retrying,
//! so both variants surface to the caller unmodified. "Not found" and "zero
//! rows affected" are normal boolean results, never errors.

use thiserror::Error;

/// Errors raised by the store and the repositories.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database file could not be opened or the connection is gone.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A statement failed mid-query.
    #[error("query failed: {0}")]
    QueryFailed(#[from] rusqlite::Error),
}
