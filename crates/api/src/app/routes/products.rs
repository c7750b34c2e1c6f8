use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use vitrina_core::{DEFAULT_PAGE_SIZE, PageRequest};
use vitrina_store::CatalogQueries;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/page", get(list_products_paged))
        .route("/:id", get(get_product))
        .route("/type/:type", get(list_products_by_type))
        .route("/type/:type/page", get(list_products_by_type_paged))
}

/// Query parameters for the paginated endpoints. Out-of-range values are
/// clamped by `PageRequest::of`, never rejected.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    page: i64,
    #[serde(default = "default_page_size")]
    size: i64,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE as i64
}

impl PageParams {
    fn to_request(&self) -> PageRequest {
        PageRequest::of(self.page, self.size)
    }
}

pub async fn list_products(
    Extension(queries): Extension<Arc<CatalogQueries>>,
) -> axum::response::Response {
    tracing::info!("request to get all products");
    let items = queries
        .find_all()
        .await
        .into_iter()
        .map(dto::ProductResponse::from)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(items)).into_response()
}

pub async fn list_products_paged(
    Extension(queries): Extension<Arc<CatalogQueries>>,
    Query(params): Query<PageParams>,
) -> axum::response::Response {
    tracing::info!(
        "request to get all products with pagination: page={}, size={}",
        params.page,
        params.size
    );
    let page = queries.find_all_paged(&params.to_request()).await;
    (StatusCode::OK, Json(dto::product_page_to_response(page))).into_response()
}

pub async fn get_product(
    Extension(queries): Extension<Arc<CatalogQueries>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    tracing::info!("request to get product with id: {id}");
    match queries.find_by_id(&id).await {
        Some(product) => {
            (StatusCode::OK, Json(dto::ProductResponse::from(product))).into_response()
        }
        None => errors::product_not_found(&id),
    }
}

pub async fn list_products_by_type(
    Extension(queries): Extension<Arc<CatalogQueries>>,
    Path(product_type): Path<String>,
) -> axum::response::Response {
    tracing::info!("request to get products with type: {product_type}");
    let items = queries
        .find_by_type(&product_type)
        .await
        .into_iter()
        .map(dto::ProductResponse::from)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(items)).into_response()
}

pub async fn list_products_by_type_paged(
    Extension(queries): Extension<Arc<CatalogQueries>>,
    Path(product_type): Path<String>,
    Query(params): Query<PageParams>,
) -> axum::response::Response {
    tracing::info!(
        "request to get products with type: {product_type} and pagination: page={}, size={}",
        params.page,
        params.size
    );
    let page = queries
        .find_by_type_paged(&product_type, &params.to_request())
        .await;
    (StatusCode::OK, Json(dto::product_page_to_response(page))).into_response()
}
