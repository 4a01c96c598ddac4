//! Scientific publication type.

use serde::{Deserialize, Serialize};
use vitrine_commerce::PublicationId;

/// A scientific publication authored or co-authored by the professional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Publication {
    /// Unique publication identifier.
    pub id: PublicationId,
    /// Publication title.
    pub title: String,
    /// Author list, in citation order.
    pub authors: Vec<String>,
    /// Journal or venue.
    pub journal: Option<String>,
    /// Publication year.
    pub year: Option<i32>,
    /// External link (DOI or publisher page).
    pub url: Option<String>,
    /// Abstract.
    pub summary: Option<String>,
}

impl Publication {
    /// Create a new publication.
    pub fn new(title: impl Into<String>, authors: Vec<String>) -> Self {
        Self {
            id: PublicationId::generate(),
            title: title.into(),
            authors,
            journal: None,
            year: None,
            url: None,
            summary: None,
        }
    }

    /// Set the abstract.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the journal and year.
    pub fn with_journal(mut self, journal: impl Into<String>, year: i32) -> Self {
        self.journal = Some(journal.into());
        self.year = Some(year);
        self
    }

    /// Authors joined for display (e.g., "Silva M, Souza R").
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }
}
