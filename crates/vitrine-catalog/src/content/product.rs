//! Product type.

use serde::{Deserialize, Serialize};
use vitrine_commerce::{Money, ProductId};

/// A physical product in the shop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Full description (may contain HTML/markdown).
    pub description: Option<String>,
    /// Unit price.
    pub price: Money,
    /// Image reference.
    pub image: Option<String>,
}

impl Product {
    /// Create a new product.
    pub fn new(name: impl Into<String>, slug: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            price,
            image: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
