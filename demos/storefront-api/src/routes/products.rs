use std::sync::Arc;

use axum::extract::{Query, State};
use serde::Deserialize;
use storefront_catalog::{ListEnvelope, PageRequest};

use crate::error::Reply;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListProductsParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// GET /api/products?page=2&per_page=12
///
/// One page of the catalog with pagination metadata.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListProductsParams>,
) -> Reply<ListEnvelope> {
    let catalog = match &state.catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            let envelope = ListEnvelope::failure(e);
            return Reply::new(envelope.status_code(), envelope);
        }
    };

    let request = PageRequest::from_query(params.page.as_deref(), params.per_page.as_deref());
    let envelope = ListEnvelope::from_result(
        catalog
            .list_products(request.page(), request.per_page())
            .await,
    );
    if !envelope.success {
        tracing::warn!(error = ?envelope.error, "product listing failed");
    }
    Reply::new(envelope.status_code(), envelope)
}
