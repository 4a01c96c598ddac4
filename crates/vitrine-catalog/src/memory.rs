//! In-memory catalog backend.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use vitrine_commerce::{CourseId, ProductId, PublicationId};

use crate::content::{ContentKind, Course, Product, Publication};
use crate::error::CatalogError;
use crate::provider::CatalogProvider;

/// [`CatalogProvider`] backed by in-process vectors.
///
/// Entries keep their insertion order, which is the order `list_*` returns
/// and therefore the per-catalog order search results fall back to on rank
/// ties. Serves as the test double and the native development backend.
#[derive(Default)]
pub struct MemoryCatalog {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    courses: Vec<Course>,
    products: Vec<Product>,
    publications: Vec<Publication>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CatalogProvider for MemoryCatalog {
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(self.read().courses.clone())
    }

    async fn get_course(&self, id: &CourseId) -> Result<Course, CatalogError> {
        self.read()
            .courses
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                kind: ContentKind::Course,
                id: id.to_string(),
            })
    }

    async fn create_course(&self, course: Course) -> Result<(), CatalogError> {
        let mut inner = self.write();
        if inner.courses.iter().any(|c| c.id == course.id) {
            return Err(CatalogError::AlreadyExists {
                kind: ContentKind::Course,
                id: course.id.to_string(),
            });
        }
        inner.courses.push(course);
        Ok(())
    }

    async fn update_course(&self, course: Course) -> Result<(), CatalogError> {
        let mut inner = self.write();
        match inner.courses.iter_mut().find(|c| c.id == course.id) {
            Some(existing) => {
                *existing = course;
                Ok(())
            }
            None => Err(CatalogError::NotFound {
                kind: ContentKind::Course,
                id: course.id.to_string(),
            }),
        }
    }

    async fn delete_course(&self, id: &CourseId) -> Result<(), CatalogError> {
        let mut inner = self.write();
        let len_before = inner.courses.len();
        inner.courses.retain(|c| &c.id != id);
        if inner.courses.len() == len_before {
            return Err(CatalogError::NotFound {
                kind: ContentKind::Course,
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.read().products.clone())
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.read()
            .products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                kind: ContentKind::Product,
                id: id.to_string(),
            })
    }

    async fn create_product(&self, product: Product) -> Result<(), CatalogError> {
        let mut inner = self.write();
        if inner.products.iter().any(|p| p.id == product.id) {
            return Err(CatalogError::AlreadyExists {
                kind: ContentKind::Product,
                id: product.id.to_string(),
            });
        }
        inner.products.push(product);
        Ok(())
    }

    async fn update_product(&self, product: Product) -> Result<(), CatalogError> {
        let mut inner = self.write();
        match inner.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product;
                Ok(())
            }
            None => Err(CatalogError::NotFound {
                kind: ContentKind::Product,
                id: product.id.to_string(),
            }),
        }
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), CatalogError> {
        let mut inner = self.write();
        let len_before = inner.products.len();
        inner.products.retain(|p| &p.id != id);
        if inner.products.len() == len_before {
            return Err(CatalogError::NotFound {
                kind: ContentKind::Product,
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn list_publications(&self) -> Result<Vec<Publication>, CatalogError> {
        Ok(self.read().publications.clone())
    }

    async fn get_publication(&self, id: &PublicationId) -> Result<Publication, CatalogError> {
        self.read()
            .publications
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                kind: ContentKind::Publication,
                id: id.to_string(),
            })
    }

    async fn create_publication(&self, publication: Publication) -> Result<(), CatalogError> {
        let mut inner = self.write();
        if inner.publications.iter().any(|p| p.id == publication.id) {
            return Err(CatalogError::AlreadyExists {
                kind: ContentKind::Publication,
                id: publication.id.to_string(),
            });
        }
        inner.publications.push(publication);
        Ok(())
    }

    async fn update_publication(&self, publication: Publication) -> Result<(), CatalogError> {
        let mut inner = self.write();
        match inner
            .publications
            .iter_mut()
            .find(|p| p.id == publication.id)
        {
            Some(existing) => {
                *existing = publication;
                Ok(())
            }
            None => Err(CatalogError::NotFound {
                kind: ContentKind::Publication,
                id: publication.id.to_string(),
            }),
        }
    }

    async fn delete_publication(&self, id: &PublicationId) -> Result<(), CatalogError> {
        let mut inner = self.write();
        let len_before = inner.publications.len();
        inner.publications.retain(|p| &p.id != id);
        if inner.publications.len() == len_before {
            return Err(CatalogError::NotFound {
                kind: ContentKind::Publication,
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
