//! Cross-catalog search aggregator.

use std::sync::Arc;

use crate::content::{Course, Product, Publication};
use crate::provider::CatalogProvider;
use crate::search::SearchResult;

/// Queries shorter than this (after trimming) return nothing without
/// touching any catalog.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of results returned per query.
pub const MAX_RESULTS: usize = 10;

/// Free-text search across the three content catalogs.
///
/// Each call fans out one lookup per catalog, matches case-insensitively
/// against the searchable text fields, merges the hits into one list with
/// title matches ranked first, and caps the list at [`MAX_RESULTS`].
///
/// Calls are read-only and keep no state, so repeated or overlapping
/// queries are safe; a caller typing fast is expected to debounce and drop
/// stale responses itself.
///
/// When one catalog's lookup fails, that source is dropped from the merge
/// and a warning is logged; the other catalogs still answer.
pub struct CatalogSearch {
    provider: Arc<dyn CatalogProvider>,
}

impl CatalogSearch {
    /// Create an aggregator over a catalog provider.
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    /// Run a query, returning at most [`MAX_RESULTS`] ranked hits.
    ///
    /// Zero matches is a normal outcome and yields an empty list.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        let needle = query.trim().to_lowercase();
        if needle.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        // One lookup per catalog, issued together so latency is bounded by
        // the slowest source rather than the sum.
        let (courses, products, publications) = futures::join!(
            self.provider.list_courses(),
            self.provider.list_products(),
            self.provider.list_publications(),
        );

        let mut results = Vec::new();

        match courses {
            Ok(courses) => results.extend(
                courses
                    .iter()
                    .filter(|c| course_matches(c, &needle))
                    .map(SearchResult::course),
            ),
            Err(error) => {
                tracing::warn!(%error, source = "courses", "catalog lookup failed, degrading search")
            }
        }
        match products {
            Ok(products) => results.extend(
                products
                    .iter()
                    .filter(|p| product_matches(p, &needle))
                    .map(SearchResult::product),
            ),
            Err(error) => {
                tracing::warn!(%error, source = "products", "catalog lookup failed, degrading search")
            }
        }
        match publications {
            Ok(publications) => results.extend(
                publications
                    .iter()
                    .filter(|p| publication_matches(p, &needle))
                    .map(SearchResult::publication),
            ),
            Err(error) => {
                tracing::warn!(%error, source = "publications", "catalog lookup failed, degrading search")
            }
        }

        // Two relevance tiers: title matches first, everything else after.
        // The sort is stable, so within a tier the arrival order holds
        // (courses, then products, then publications, each in catalog order).
        results.sort_by_key(|r| !contains_ci(&r.title, &needle));
        results.truncate(MAX_RESULTS);
        results
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn course_matches(course: &Course, needle: &str) -> bool {
    contains_ci(&course.title, needle)
        || course
            .description
            .as_deref()
            .is_some_and(|d| contains_ci(d, needle))
}

fn product_matches(product: &Product, needle: &str) -> bool {
    contains_ci(&product.name, needle)
        || product
            .description
            .as_deref()
            .is_some_and(|d| contains_ci(d, needle))
}

fn publication_matches(publication: &Publication, needle: &str) -> bool {
    contains_ci(&publication.title, needle)
        || publication
            .summary
            .as_deref()
            .is_some_and(|s| contains_ci(s, needle))
        || publication.authors.iter().any(|a| contains_ci(a, needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentKind;
    use crate::error::CatalogError;
    use crate::memory::MemoryCatalog;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vitrine_commerce::{CourseId, Currency, Money, ProductId, PublicationId};

    fn price(cents: i64) -> Money {
        Money::new(cents, Currency::BRL)
    }

    async fn seeded_catalog() -> Arc<MemoryCatalog> {
        let catalog = MemoryCatalog::new();

        catalog
            .create_course(
                Course::new("Aromaterapia para o Sono", "aromaterapia-sono")
                    .with_description("Protocolos com óleos essenciais para insônia"),
            )
            .await
            .unwrap();
        catalog
            .create_course(
                Course::new("Química dos Óleos Essenciais", "quimica-oleos")
                    .with_description("Composição e segurança"),
            )
            .await
            .unwrap();

        catalog
            .create_product(
                Product::new("Óleo Essencial de Alecrim", "oleo-alecrim", price(4990))
                    .with_description("Rosmarinus officinalis, 10ml"),
            )
            .await
            .unwrap();
        catalog
            .create_product(
                Product::new("Óleo Essencial de Lavanda", "oleo-lavanda", price(3990))
                    .with_description("Ajuda a melhorar o sono"),
            )
            .await
            .unwrap();

        catalog
            .create_publication(
                Publication::new(
                    "Antimicrobial activity of rosemary essential oil",
                    vec!["Silva M".to_string(), "Souza R".to_string()],
                )
                .with_summary("In vitro evaluation against common pathogens"),
            )
            .await
            .unwrap();

        Arc::new(catalog)
    }

    /// Provider double with scripted per-catalog outcomes.
    ///
    /// `None` for a collection makes its lookup fail; list calls are
    /// counted so tests can assert the short-query guard never reaches the
    /// provider. The write side is never exercised by search.
    #[derive(Default)]
    struct ScriptedCatalog {
        courses: Option<Vec<Course>>,
        products: Option<Vec<Product>>,
        publications: Option<Vec<Publication>>,
        list_calls: AtomicUsize,
    }

    impl ScriptedCatalog {
        fn unavailable() -> CatalogError {
            CatalogError::Backend("store unavailable".to_string())
        }

        fn read_only() -> CatalogError {
            CatalogError::Backend("read-only double".to_string())
        }
    }

    #[async_trait]
    impl CatalogProvider for ScriptedCatalog {
        async fn list_courses(&self) -> Result<Vec<Course>, CatalogError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            self.courses.clone().ok_or_else(Self::unavailable)
        }

        async fn get_course(&self, _id: &CourseId) -> Result<Course, CatalogError> {
            Err(Self::read_only())
        }

        async fn create_course(&self, _course: Course) -> Result<(), CatalogError> {
            Err(Self::read_only())
        }

        async fn update_course(&self, _course: Course) -> Result<(), CatalogError> {
            Err(Self::read_only())
        }

        async fn delete_course(&self, _id: &CourseId) -> Result<(), CatalogError> {
            Err(Self::read_only())
        }

        async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            self.products.clone().ok_or_else(Self::unavailable)
        }

        async fn get_product(&self, _id: &ProductId) -> Result<Product, CatalogError> {
            Err(Self::read_only())
        }

        async fn create_product(&self, _product: Product) -> Result<(), CatalogError> {
            Err(Self::read_only())
        }

        async fn update_product(&self, _product: Product) -> Result<(), CatalogError> {
            Err(Self::read_only())
        }

        async fn delete_product(&self, _id: &ProductId) -> Result<(), CatalogError> {
            Err(Self::read_only())
        }

        async fn list_publications(&self) -> Result<Vec<Publication>, CatalogError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            self.publications.clone().ok_or_else(Self::unavailable)
        }

        async fn get_publication(&self, _id: &PublicationId) -> Result<Publication, CatalogError> {
            Err(Self::read_only())
        }

        async fn create_publication(&self, _publication: Publication) -> Result<(), CatalogError> {
            Err(Self::read_only())
        }

        async fn update_publication(&self, _publication: Publication) -> Result<(), CatalogError> {
            Err(Self::read_only())
        }

        async fn delete_publication(&self, _id: &PublicationId) -> Result<(), CatalogError> {
            Err(Self::read_only())
        }
    }

    #[tokio::test]
    async fn test_substring_match_finds_product() {
        let search = CatalogSearch::new(seeded_catalog().await);
        let results = search.search("ale").await;

        assert!(!results.is_empty());
        assert_eq!(results[0].title, "Óleo Essencial de Alecrim");
        assert_eq!(results[0].kind, ContentKind::Product);
        assert_eq!(results[0].subtitle.as_deref(), Some("R$49.90"));
    }

    #[tokio::test]
    async fn test_short_query_skips_catalogs() {
        let provider = Arc::new(ScriptedCatalog {
            courses: Some(vec![]),
            products: Some(vec![]),
            publications: Some(vec![]),
            ..Default::default()
        });
        let search = CatalogSearch::new(provider.clone());

        assert!(search.search("a").await.is_empty());
        assert!(search.search("  á  ").await.is_empty());
        assert_eq!(provider.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_title_match_ranks_first() {
        let search = CatalogSearch::new(seeded_catalog().await);
        // "sono" is in a course title and only in a product description.
        let results = search.search("sono").await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].kind, ContentKind::Course);
        assert_eq!(results[0].title, "Aromaterapia para o Sono");
        assert_eq!(results[1].title, "Óleo Essencial de Lavanda");
    }

    #[tokio::test]
    async fn test_tie_keeps_arrival_order() {
        let search = CatalogSearch::new(seeded_catalog().await);
        // Title matches in both the course and product catalogs: courses
        // arrive first.
        let results = search.search("óleo").await;

        assert_eq!(results[0].kind, ContentKind::Course);
        assert_eq!(results[0].title, "Química dos Óleos Essenciais");
        assert_eq!(results[1].kind, ContentKind::Product);
    }

    #[tokio::test]
    async fn test_author_match() {
        let search = CatalogSearch::new(seeded_catalog().await);
        let results = search.search("silva").await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, ContentKind::Publication);
        assert_eq!(results[0].subtitle.as_deref(), Some("Silva M, Souza R"));
    }

    #[tokio::test]
    async fn test_query_is_trimmed_and_case_insensitive() {
        let search = CatalogSearch::new(seeded_catalog().await);
        let results = search.search("  ALECRIM ").await;
        assert_eq!(results[0].title, "Óleo Essencial de Alecrim");
    }

    #[tokio::test]
    async fn test_results_capped_at_ten() {
        let catalog = MemoryCatalog::new();
        for n in 0..15 {
            catalog
                .create_product(Product::new(
                    format!("Óleo Essencial {n}"),
                    format!("oleo-{n}"),
                    price(1000),
                ))
                .await
                .unwrap();
        }
        let search = CatalogSearch::new(Arc::new(catalog));

        let results = search.search("essencial").await;
        assert_eq!(results.len(), MAX_RESULTS);
    }

    #[tokio::test]
    async fn test_no_match_is_empty_success() {
        let search = CatalogSearch::new(seeded_catalog().await);
        assert!(search.search("inexistente").await.is_empty());
    }

    #[tokio::test]
    async fn test_repeat_query_is_idempotent() {
        let search = CatalogSearch::new(seeded_catalog().await);
        let first = search.search("óleo").await;
        let second = search.search("óleo").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_failed_source_degrades_not_fails() {
        let course = Course::new("Aromaterapia para o Sono", "aromaterapia-sono");
        let provider = Arc::new(ScriptedCatalog {
            courses: Some(vec![course]),
            products: None, // product lookups fail
            publications: Some(vec![]),
            ..Default::default()
        });
        let search = CatalogSearch::new(provider);

        let results = search.search("sono").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, ContentKind::Course);
    }
}
