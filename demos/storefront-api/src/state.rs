use storefront_catalog::{AsyncCatalogService, CatalogError};

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The catalog client, or the configuration error that prevented building
    /// it. Handlers answer 500 with the error message in the latter case.
    pub catalog: Result<AsyncCatalogService, CatalogError>,
}
