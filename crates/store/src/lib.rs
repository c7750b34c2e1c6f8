//! `vitrina-store` — in-memory catalog infrastructure.
//!
//! Owns the authoritative product collection: the startup data loader, the
//! immutable catalog snapshot (id map + type index), the copy-on-write store
//! that publishes snapshots to concurrent readers, and the query façade
//! consumed by the HTTP layer.

pub mod loader;
pub mod query;
pub mod snapshot;

pub use loader::{LoadError, load};
pub use query::CatalogQueries;
pub use snapshot::{CatalogSnapshot, CatalogStore};
