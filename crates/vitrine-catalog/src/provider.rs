//! Catalog data-access trait.

use crate::content::{Course, Product, Publication};
use crate::error::CatalogError;
use async_trait::async_trait;
use vitrine_commerce::{CourseId, ProductId, PublicationId};

/// Data access for the three content collections.
///
/// This is the boundary between the core and whatever actually stores the
/// catalog (a relational database in production, [`MemoryCatalog`] in tests
/// and native development). The admin pages drive the create/update/delete
/// side; the public site and the search aggregator only read.
///
/// `list_*` returns the full collection in its stored order; collections
/// are small enough that filtering happens in the caller.
///
/// [`MemoryCatalog`]: crate::memory::MemoryCatalog
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    // Courses
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogError>;
    async fn get_course(&self, id: &CourseId) -> Result<Course, CatalogError>;
    async fn create_course(&self, course: Course) -> Result<(), CatalogError>;
    async fn update_course(&self, course: Course) -> Result<(), CatalogError>;
    async fn delete_course(&self, id: &CourseId) -> Result<(), CatalogError>;

    // Products
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;
    async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError>;
    async fn create_product(&self, product: Product) -> Result<(), CatalogError>;
    async fn update_product(&self, product: Product) -> Result<(), CatalogError>;
    async fn delete_product(&self, id: &ProductId) -> Result<(), CatalogError>;

    // Publications
    async fn list_publications(&self) -> Result<Vec<Publication>, CatalogError>;
    async fn get_publication(&self, id: &PublicationId) -> Result<Publication, CatalogError>;
    async fn create_publication(&self, publication: Publication) -> Result<(), CatalogError>;
    async fn update_publication(&self, publication: Publication) -> Result<(), CatalogError>;
    async fn delete_publication(&self, id: &PublicationId) -> Result<(), CatalogError>;
}
