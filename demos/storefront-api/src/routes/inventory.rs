use std::sync::Arc;

use axum::extract::{Query, State};
use serde::Deserialize;
use storefront_catalog::response::product_id_from_query;
use storefront_catalog::StockEnvelope;

use crate::error::Reply;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct InventoryParams {
    pub product_id: Option<String>,
}

/// GET /api/inventory?product_id=42
///
/// Current stock line for one product. The storefront polls this to refresh
/// stock badges in place.
pub async fn inventory_fragment(
    State(state): State<Arc<AppState>>,
    Query(params): Query<InventoryParams>,
) -> Reply<StockEnvelope> {
    let catalog = match &state.catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            let envelope = StockEnvelope::failure(e);
            return Reply::new(envelope.status_code(), envelope);
        }
    };

    let product_id = match product_id_from_query(params.product_id.as_deref()) {
        Ok(id) => id,
        Err(e) => {
            let envelope = StockEnvelope::failure(&e);
            return Reply::new(envelope.status_code(), envelope);
        }
    };

    let envelope =
        StockEnvelope::from_result(product_id, catalog.get_product_by_id(product_id).await);
    Reply::new(envelope.status_code(), envelope)
}
