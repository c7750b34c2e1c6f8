//! Catalog domain model.
//!
//! This crate contains the product entity and its nested records, implemented
//! purely as data (no IO, no HTTP, no storage).

pub mod product;

pub use product::{PaymentMethod, Product, Review, Seller};
