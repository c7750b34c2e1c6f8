//! `vitrina-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): the pagination value objects and the slicing engine shared by
//! the store and the HTTP layer.

pub mod page;

pub use page::{DEFAULT_PAGE_SIZE, Page, PageRequest};
