use std::sync::Arc;

use anyhow::Context;

use despacho_api::app::{self, AppServices};
use despacho_store::JsonFileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    despacho_observability::init();

    let db_path = std::env::var("DESPACHO_DB_PATH").unwrap_or_else(|_| {
        tracing::info!("DESPACHO_DB_PATH not set; using ./orders.json");
        "orders.json".to_string()
    });
    let addr = std::env::var("DESPACHO_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    let services = Arc::new(AppServices::new(JsonFileStore::new(&db_path)));
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(db_path = %db_path, "listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
