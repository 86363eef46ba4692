//! Storefront catalog client for the WooCommerce REST API.
//!
//! Signs requests with OAuth 1.0a (consumer key and secret, HMAC-SHA1),
//! fetches products from `wp-json/wc/v3/products`, and reshapes them into the
//! small, stable structure a paginated storefront renders.
//!
//! # Quick start
//!
//! ```no_run
//! use storefront_catalog::{CatalogService, Credentials};
//!
//! let credentials = Credentials::from_env().unwrap();
//! let catalog = CatalogService::builder(credentials).build().unwrap();
//!
//! // Second page, twelve per page
//! let page = catalog.list_products(2, 12).unwrap();
//! println!("{} of {} pages", page.pagination.current_page, page.pagination.total_pages);
//!
//! // Live stock line for one product
//! let product = catalog.get_product("42").unwrap();
//! println!("{}", product.stock_summary().text);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod oauth;
pub mod parser;
pub mod response;

#[cfg(feature = "async")]
pub use async_client::AsyncCatalogService;
pub use catalog::CatalogService;
pub use config::Credentials;
pub use error::{CatalogError, ErrorKind, Result};
pub use http::{HttpGateway, RawResponse, Transport};
pub use models::{PageRequest, Pagination, Product, ProductPage, StockStatus, StockSummary};
pub use oauth::SignedRequest;
pub use response::{ListEnvelope, StockEnvelope};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// CatalogServiceBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CatalogService`].
///
/// Use [`CatalogService::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CatalogServiceBuilder::build).
pub struct CatalogServiceBuilder {
    credentials: Credentials,
    timeout: Duration,
    connect_timeout: Duration,
    default_per_page: u32,
    transport: Option<Box<dyn Transport>>,
}

impl CatalogServiceBuilder {
    /// Set the overall HTTP request timeout.
    ///
    /// Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the TCP/TLS connect timeout.
    ///
    /// Defaults to 5 seconds.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Page size used by [`CatalogService::list_products_default`].
    ///
    /// Clamped to `1..=100`; defaults to 12.
    pub fn default_per_page(mut self, per_page: u32) -> Self {
        self.default_per_page = per_page;
        self
    }

    /// Replace the HTTP gateway with a custom [`Transport`].
    ///
    /// The timeouts are ignored when a transport is supplied.
    pub fn transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the service. Fails only if the HTTP client cannot be created.
    pub fn build(self) -> Result<CatalogService> {
        let transport = match self.transport {
            Some(t) => t,
            None => Box::new(HttpGateway::new(self.timeout, self.connect_timeout)?),
        };
        Ok(CatalogService::new(self.credentials, transport)
            .with_default_per_page(self.default_per_page))
    }
}

impl CatalogService {
    /// Create a new builder around validated credentials.
    pub fn builder(credentials: Credentials) -> CatalogServiceBuilder {
        CatalogServiceBuilder {
            credentials,
            timeout: config::DEFAULT_TIMEOUT,
            connect_timeout: config::DEFAULT_CONNECT_TIMEOUT,
            default_per_page: config::DEFAULT_PER_PAGE,
            transport: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CatalogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CatalogService(base_url={}, default_per_page={})",
            self.credentials().base_url(),
            self.default_per_page()
        )
    }
}
