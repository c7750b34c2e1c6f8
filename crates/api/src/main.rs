use std::sync::Arc;

use anyhow::Context;

use vitrina_store::{CatalogQueries, CatalogStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vitrina_observability::init();

    let data_file = std::env::var("VITRINA_DATA_FILE")
        .unwrap_or_else(|_| "data/products.json".to_string());
    let listen_addr = std::env::var("VITRINA_LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    // A load failure is fatal: the process must not serve from an
    // inconsistent catalog.
    let products = vitrina_store::load(&data_file)
        .with_context(|| format!("failed to initialize catalog from {data_file}"))?;

    let store = Arc::new(CatalogStore::new());
    store.load(products);
    let queries = Arc::new(CatalogQueries::new(store));

    let app = vitrina_api::app::build_app(queries);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
