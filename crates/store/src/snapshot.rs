//! Immutable catalog snapshots and the copy-on-write store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use vitrina_catalog::Product;

/// One complete, immutable view of the catalog: the id→product map, the
/// enumeration order, and the type index.
///
/// A snapshot is built off to the side and published as a whole; it is never
/// mutated while visible to readers, so every query computed against one
/// snapshot is internally consistent.
#[derive(Debug, Default)]
pub struct CatalogSnapshot {
    products: HashMap<String, Product>,
    /// Dataset order of ids; drives `all()` and the type-index build.
    order: Vec<String>,
    by_type: HashMap<String, Vec<String>>,
}

impl CatalogSnapshot {
    /// Build a snapshot from a freshly loaded dataset.
    ///
    /// Duplicate ids collapse to the last occurrence and keep a single
    /// enumeration slot at the first. The type index is built in one pass
    /// over store iteration order, so bucket order matches enumeration order.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut map: HashMap<String, Product> = HashMap::with_capacity(products.len());
        let mut order: Vec<String> = Vec::with_capacity(products.len());

        for product in products {
            let id = product.id.clone();
            if map.insert(id.clone(), product).is_none() {
                order.push(id);
            }
        }

        let mut by_type: HashMap<String, Vec<String>> = HashMap::new();
        for id in &order {
            if let Some(product_type) = map[id].product_type.as_deref() {
                by_type
                    .entry(product_type.to_string())
                    .or_default()
                    .push(id.clone());
            }
        }

        tracing::info!("built type index with {} distinct types", by_type.len());

        Self {
            products: map,
            order,
            by_type,
        }
    }

    /// Point lookup, O(1) expected.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// All products in enumeration order, as owned clones: the result is
    /// unaffected by later store reloads.
    pub fn all(&self) -> Vec<Product> {
        self.order.iter().map(|id| self.products[id].clone()).collect()
    }

    /// Ids of every product carrying `product_type`, in enumeration order.
    /// Unknown types yield an empty slice, not an error.
    pub fn ids_for_type(&self, product_type: &str) -> &[String] {
        self.by_type
            .get(product_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct type labels in the index.
    pub fn type_count(&self) -> usize {
        self.by_type.len()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Shared handle to the current catalog snapshot.
///
/// There is one writer phase per load: `load` builds a complete replacement
/// snapshot and swaps the `Arc` under the write lock. Readers clone the `Arc`
/// under the read lock and keep using whichever snapshot they obtained, so a
/// concurrent reload never tears an in-flight query.
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(CatalogSnapshot::default())),
        }
    }

    /// Replace the entire catalog contents.
    pub fn load(&self, products: Vec<Product>) {
        let next = Arc::new(CatalogSnapshot::from_products(products));
        match self.current.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }

    /// The current snapshot; callers hold it for the whole query.
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, product_type: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            title: format!("product {id}"),
            description: String::new(),
            price: Decimal::ZERO,
            images: Vec::new(),
            payment_methods: Vec::new(),
            seller: None,
            stock: None,
            rating: None,
            reviews: Vec::new(),
            product_type: product_type.map(str::to_string),
        }
    }

    #[test]
    fn all_preserves_dataset_order() {
        let snapshot = CatalogSnapshot::from_products(vec![
            product("p2", None),
            product("p1", None),
            product("p3", None),
        ]);

        let all = snapshot.all();
        let ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p2", "p1", "p3"]);
    }

    #[test]
    fn duplicate_ids_keep_last_value_and_one_slot() {
        let mut first = product("p1", Some("a"));
        first.title = "old".to_string();
        let mut second = product("p1", Some("b"));
        second.title = "new".to_string();

        let snapshot = CatalogSnapshot::from_products(vec![first, second, product("p2", None)]);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("p1").unwrap().title, "new");
        assert_eq!(snapshot.all().len(), 2);
        // The index reflects the surviving value, not the overwritten one.
        assert!(snapshot.ids_for_type("a").is_empty());
        assert_eq!(snapshot.ids_for_type("b"), ["p1".to_string()]);
    }

    #[test]
    fn type_index_buckets_follow_enumeration_order() {
        let snapshot = CatalogSnapshot::from_products(vec![
            product("p1", Some("a")),
            product("p2", Some("b")),
            product("p3", Some("a")),
            product("p4", None),
        ]);

        assert_eq!(snapshot.ids_for_type("a"), ["p1".to_string(), "p3".to_string()]);
        assert_eq!(snapshot.ids_for_type("b"), ["p2".to_string()]);
        assert!(snapshot.ids_for_type("unknown").is_empty());
        assert_eq!(snapshot.type_count(), 2);
    }

    #[test]
    fn untyped_products_are_not_indexed() {
        let snapshot = CatalogSnapshot::from_products(vec![product("p1", None)]);
        assert_eq!(snapshot.type_count(), 0);
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn load_replaces_the_whole_snapshot() {
        let store = CatalogStore::new();
        assert!(store.is_empty());

        store.load(vec![product("p1", Some("a")), product("p2", None)]);
        assert_eq!(store.len(), 2);

        store.load(vec![product("p9", None)]);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get("p1").is_none());
        assert!(snapshot.get("p9").is_some());
    }

    #[test]
    fn a_held_snapshot_survives_a_reload() {
        let store = CatalogStore::new();
        store.load(vec![product("p1", None), product("p2", None)]);

        let before = store.snapshot();
        store.load(Vec::new());

        assert_eq!(before.len(), 2);
        assert!(before.get("p1").is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_readers_only_see_complete_snapshots() {
        use std::thread;

        let store = Arc::new(CatalogStore::new());
        let small: Vec<Product> = (0..3).map(|i| product(&format!("s{i}"), Some("a"))).collect();
        let large: Vec<Product> = (0..64).map(|i| product(&format!("l{i}"), Some("a"))).collect();
        store.load(small.clone());

        let mut readers = Vec::new();
        for _ in 0..4 {
            let store = Arc::clone(&store);
            readers.push(thread::spawn(move || {
                for _ in 0..500 {
                    let snapshot = store.snapshot();
                    let n = snapshot.all().len();
                    assert!(n == 3 || n == 64, "torn snapshot with {n} products");
                    assert_eq!(snapshot.ids_for_type("a").len(), n);
                }
            }));
        }

        for i in 0..100 {
            store.load(if i % 2 == 0 { large.clone() } else { small.clone() });
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }
}
