//! Read-query façade composing the store, type index, and pagination engine.

use std::sync::Arc;

use vitrina_catalog::Product;
use vitrina_core::{Page, PageRequest};

use crate::snapshot::{CatalogSnapshot, CatalogStore};

/// The read port consumed by the HTTP layer.
///
/// The store is injected explicitly; there is no ambient singleton. Every
/// operation takes one snapshot up front and computes purely in memory, so
/// concurrent queries and reloads never interleave partial state. Plural
/// queries are infallible — absence is an empty collection or page; only
/// `find_by_id` can come back empty, and surfacing that as a 404 is the
/// caller's concern.
#[derive(Debug, Clone)]
pub struct CatalogQueries {
    store: Arc<CatalogStore>,
}

impl CatalogQueries {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Product> {
        self.store.snapshot().get(id).cloned()
    }

    pub async fn find_all(&self) -> Vec<Product> {
        self.store.snapshot().all()
    }

    pub async fn find_all_paged(&self, request: &PageRequest) -> Page<Product> {
        let all = self.store.snapshot().all();
        Page::paginate(&all, request)
    }

    pub async fn find_by_type(&self, product_type: &str) -> Vec<Product> {
        let snapshot = self.store.snapshot();
        resolve_ids(&snapshot, snapshot.ids_for_type(product_type))
    }

    /// `total_elements` reflects the full per-type candidate count, not the
    /// slice handed back.
    pub async fn find_by_type_paged(
        &self,
        product_type: &str,
        request: &PageRequest,
    ) -> Page<Product> {
        let snapshot = self.store.snapshot();
        let candidates = resolve_ids(&snapshot, snapshot.ids_for_type(product_type));
        Page::paginate(&candidates, request)
    }
}

/// Map index ids through the store, preserving index order. Ids without a
/// backing product are skipped rather than surfaced as gaps; within one
/// snapshot this cannot occur, but the index is never trusted over the store.
fn resolve_ids(snapshot: &CatalogSnapshot, ids: &[String]) -> Vec<Product> {
    ids.iter().filter_map(|id| snapshot.get(id).cloned()).collect()
}
