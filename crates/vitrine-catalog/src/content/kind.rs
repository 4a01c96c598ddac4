//! Content kind tag.

use serde::{Deserialize, Serialize};

/// The three content collections the site publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Course,
    Product,
    Publication,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Course => "course",
            ContentKind::Product => "product",
            ContentKind::Publication => "publication",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContentKind::Course => "Course",
            ContentKind::Product => "Product",
            ContentKind::Publication => "Publication",
        }
    }
}
