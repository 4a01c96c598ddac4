//! Catalog error types.

use crate::content::ContentKind;
use thiserror::Error;

/// Errors that can occur in catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No entry of that kind with that id. Recoverable; the site renders a
    /// dedicated not-found view for it.
    #[error("{} not found: {id}", .kind.display_name())]
    NotFound { kind: ContentKind, id: String },

    /// An entry with that id already exists.
    #[error("{} already exists: {id}", .kind.display_name())]
    AlreadyExists { kind: ContentKind, id: String },

    /// The backing store rejected or failed the operation.
    #[error("Catalog backend error: {0}")]
    Backend(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
