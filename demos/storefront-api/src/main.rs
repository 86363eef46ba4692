mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use storefront_catalog::{AsyncCatalogService, Credentials};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog = match Credentials::from_env() {
        Ok(credentials) => AsyncCatalogService::builder(credentials).build().await,
        Err(e) => Err(e),
    };
    match &catalog {
        Ok(_) => tracing::info!("catalog client ready"),
        Err(e) => tracing::error!(error = %e, "catalog client unavailable"),
    }

    let state = Arc::new(AppState { catalog });

    let app = Router::new()
        .route("/api/products", get(routes::products::list_products))
        .route("/api/inventory", get(routes::inventory::inventory_fragment))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::env::var("STOREFRONT_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
