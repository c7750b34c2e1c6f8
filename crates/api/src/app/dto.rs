//! Response DTOs: the JSON shapes exposed by the HTTP API.
//!
//! Wire names are camelCase; `Page` metadata is materialized into explicit
//! `hasPrevious`/`hasNext` fields on the way out.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use vitrina_catalog::{PaymentMethod, Product, Review, Seller};
use vitrina_core::Page;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub images: Vec<String>,
    pub payment_methods: Vec<PaymentMethodResponse>,
    pub seller: Option<SellerResponse>,
    pub stock: Option<i64>,
    pub rating: Option<f64>,
    pub reviews: Vec<ReviewResponse>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodResponse {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub rating: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub comment: String,
    pub rating: i32,
    pub created_at: NaiveDateTime,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            images: product.images,
            payment_methods: product
                .payment_methods
                .into_iter()
                .map(PaymentMethodResponse::from)
                .collect(),
            seller: product.seller.map(SellerResponse::from),
            stock: product.stock,
            rating: product.rating,
            reviews: product.reviews.into_iter().map(ReviewResponse::from).collect(),
            product_type: product.product_type,
        }
    }
}

impl From<PaymentMethod> for PaymentMethodResponse {
    fn from(method: PaymentMethod) -> Self {
        Self {
            id: method.id,
            name: method.name,
            description: method.description,
        }
    }
}

impl From<Seller> for SellerResponse {
    fn from(seller: Seller) -> Self {
        Self {
            id: seller.id,
            name: seller.name,
            email: seller.email,
            phone: seller.phone,
            rating: seller.rating,
        }
    }
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            user_name: review.user_name,
            comment: review.comment,
            rating: review.rating,
            created_at: review.created_at,
        }
    }
}

/// Pagination envelope exposed outward.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: usize,
    pub page: usize,
    pub size: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

pub fn product_page_to_response(page: Page<Product>) -> PageResponse<ProductResponse> {
    let total_elements = page.total_elements();
    let total_pages = page.total_pages();
    let page_index = page.page();
    let size = page.size();
    let has_previous = page.has_previous();
    let has_next = page.has_next();

    PageResponse {
        content: page.into_content().into_iter().map(ProductResponse::from).collect(),
        total_elements,
        total_pages,
        page: page_index,
        size,
        has_previous,
        has_next,
    }
}
