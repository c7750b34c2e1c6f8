//! Product entity and nested records.
//!
//! The serde mappings mirror the JSON dataset consumed at startup: field
//! names are camelCase on the wire, absent optional fields default to
//! `None`/empty collections, and timestamps use ISO-8601 text.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product.
///
/// `id` is assigned at creation time by the dataset and is immutable; it is
/// the key the store indexes on. `product_type` is a free-form label used for
/// categorical filtering (serialized as `type`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Exact decimal price; the dataset contract keeps this non-negative.
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
    #[serde(default)]
    pub seller: Option<Seller>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default, rename = "type")]
    pub product_type: Option<String>,
}

/// Payment method accepted for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Seller offering a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// User review attached to a product. `rating` is 1-5 by dataset contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub comment: String,
    pub rating: i32,
    pub created_at: NaiveDateTime,
}
