//! Search result shape.

use crate::content::{ContentKind, Course, Product, Publication};
use serde::{Deserialize, Serialize};

/// One search hit, normalized across the three catalogs.
///
/// Produced fresh per query; the `id` is only meaningful together with
/// `kind` (each catalog numbers its own entries).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Identifier within the source catalog.
    pub id: String,
    /// Which catalog the hit came from.
    pub kind: ContentKind,
    /// Display title.
    pub title: String,
    /// Secondary line: formatted price for products, author list for
    /// publications, nothing for courses.
    pub subtitle: Option<String>,
    /// Description or abstract, when the entry has one.
    pub description: Option<String>,
}

impl SearchResult {
    /// Normalize a course.
    pub fn course(course: &Course) -> Self {
        Self {
            id: course.id.as_str().to_string(),
            kind: ContentKind::Course,
            title: course.title.clone(),
            subtitle: None,
            description: course.description.clone(),
        }
    }

    /// Normalize a product. The subtitle is its formatted price.
    pub fn product(product: &Product) -> Self {
        Self {
            id: product.id.as_str().to_string(),
            kind: ContentKind::Product,
            title: product.name.clone(),
            subtitle: Some(product.price.display()),
            description: product.description.clone(),
        }
    }

    /// Normalize a publication. The subtitle is its author list.
    pub fn publication(publication: &Publication) -> Self {
        Self {
            id: publication.id.as_str().to_string(),
            kind: ContentKind::Publication,
            title: publication.title.clone(),
            subtitle: Some(publication.author_line()),
            description: publication.summary.clone(),
        }
    }
}
