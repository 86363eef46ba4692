//! Async wrapper around [`CatalogService`] for use in async runtimes (Tokio, etc.).
//!
//! The service performs blocking HTTP calls, so every operation is moved onto
//! the blocking thread pool via [`tokio::task::spawn_blocking`], keeping the
//! async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use storefront_catalog::{AsyncCatalogService, Credentials};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let credentials = Credentials::from_env().unwrap();
//!     let catalog = AsyncCatalogService::builder(credentials).build().await.unwrap();
//!
//!     let page = catalog.list_products(1, 12).await.unwrap();
//!     let product = catalog.get_product("42").await.unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::config::Credentials;
use crate::error::{CatalogError, Result};
use crate::models::{Product, ProductPage};
use crate::CatalogService;

// ---------------------------------------------------------------------------
// AsyncCatalogServiceBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCatalogService`].
pub struct AsyncCatalogServiceBuilder {
    inner: crate::CatalogServiceBuilder,
}

impl AsyncCatalogServiceBuilder {
    /// Set the overall request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.connect_timeout(timeout);
        self
    }

    /// Set the page size used by [`AsyncCatalogService::list_products_default`].
    pub fn default_per_page(mut self, per_page: u32) -> Self {
        self.inner = self.inner.default_per_page(per_page);
        self
    }

    /// Build the async service. Client construction runs on the blocking pool
    /// because the blocking `reqwest` client may not be created inside a
    /// runtime thread.
    pub async fn build(self) -> Result<AsyncCatalogService> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || inner.build())
            .await
            .map_err(join_error)?
            .map(AsyncCatalogService::from)
    }
}

// ---------------------------------------------------------------------------
// AsyncCatalogService
// ---------------------------------------------------------------------------

/// Async wrapper around [`CatalogService`].
///
/// Cheap to clone; clones share the same underlying service.
#[derive(Clone)]
pub struct AsyncCatalogService {
    inner: Arc<CatalogService>,
}

impl From<CatalogService> for AsyncCatalogService {
    fn from(service: CatalogService) -> Self {
        Self {
            inner: Arc::new(service),
        }
    }
}

impl AsyncCatalogService {
    /// Create a new builder for the given credentials.
    pub fn builder(credentials: Credentials) -> AsyncCatalogServiceBuilder {
        AsyncCatalogServiceBuilder {
            inner: CatalogService::builder(credentials),
        }
    }

    /// Run a sync service operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CatalogService) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let service = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&service))
            .await
            .map_err(join_error)?
    }

    /// See [`CatalogService::list_products`].
    pub async fn list_products(&self, page: u32, per_page: u32) -> Result<ProductPage> {
        self.run(move |s| s.list_products(page, per_page)).await
    }

    /// See [`CatalogService::list_products_default`].
    pub async fn list_products_default(&self, page: u32) -> Result<ProductPage> {
        self.run(move |s| s.list_products_default(page)).await
    }

    /// See [`CatalogService::get_product`].
    pub async fn get_product(&self, id: &str) -> Result<Product> {
        let id = id.to_string();
        self.run(move |s| s.get_product(&id)).await
    }

    /// See [`CatalogService::get_product_by_id`].
    pub async fn get_product_by_id(&self, id: u64) -> Result<Product> {
        self.run(move |s| s.get_product_by_id(id)).await
    }
}

fn join_error(e: tokio::task::JoinError) -> CatalogError {
    CatalogError::Configuration(format!("Task join error: {e}"))
}
