//! Key-value store error types.

use thiserror::Error;

/// Errors that can occur against a key-value backend.
#[derive(Error, Debug)]
pub enum KvError {
    /// The backing store rejected or failed the operation.
    #[error("Store error: {0}")]
    Backend(String),

    /// A stored value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
