//! The catalog façade: listing and single-product lookups.
//!
//! Each call signs one request, performs one GET and normalizes the result.
//! Nothing is cached between calls.

use tracing::{debug, instrument, warn};

use crate::config::Credentials;
use crate::error::{CatalogError, Result};
use crate::http::Transport;
use crate::models::{PageRequest, Pagination, Product, ProductPage};
use crate::oauth;
use crate::parser;

/// Queries the remote catalog on behalf of the storefront.
///
/// Created via [`CatalogService::builder()`](crate::CatalogService::builder)
/// or [`CatalogService::new`] with an explicit transport.
pub struct CatalogService {
    credentials: Credentials,
    transport: Box<dyn Transport>,
    default_per_page: u32,
}

impl CatalogService {
    /// Create a service around an arbitrary [`Transport`].
    pub fn new(credentials: Credentials, transport: Box<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
            default_per_page: crate::config::DEFAULT_PER_PAGE,
        }
    }

    pub(crate) fn with_default_per_page(mut self, per_page: u32) -> Self {
        self.default_per_page = PageRequest::new(1, per_page).per_page();
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn default_per_page(&self) -> u32 {
        self.default_per_page
    }

    /// Fetch page `page` of the catalog with `per_page` products per page.
    ///
    /// Out-of-range arguments are clamped (`page >= 1`, `1..=100` per page).
    /// A non-200 upstream answer becomes [`CatalogError::UpstreamStatus`].
    #[instrument(skip(self))]
    pub fn list_products(&self, page: u32, per_page: u32) -> Result<ProductPage> {
        self.list_page(PageRequest::new(page, per_page))
    }

    /// Fetch page `page` using the service's default page size.
    pub fn list_products_default(&self, page: u32) -> Result<ProductPage> {
        self.list_page(PageRequest::new(page, self.default_per_page))
    }

    /// Fetch one page described by an already clamped [`PageRequest`].
    pub fn list_page(&self, request: PageRequest) -> Result<ProductPage> {
        let url = self
            .credentials
            .products_url(request.page(), request.per_page())?;
        let signed = oauth::sign("GET", &url, &self.credentials);

        let response = self.transport.get(&signed, true)?;
        if response.status != 200 {
            warn!(url = %url, status = response.status, "product listing request failed");
            return Err(CatalogError::UpstreamStatus {
                status: response.status,
            });
        }

        let payload = parser::parse_list(&response.headers, &response.body)?;
        let products: Vec<Product> = payload.records.iter().map(Product::from_raw).collect();
        debug!(
            count = products.len(),
            total = payload.total,
            "normalized product listing"
        );

        Ok(ProductPage {
            products,
            pagination: Pagination::new(request, payload.total),
        })
    }

    /// Fetch a single product by its id as received from a caller.
    ///
    /// The id must be a positive decimal integer; anything else is rejected
    /// with `"Invalid product ID"` before any request is made.
    #[instrument(skip(self))]
    pub fn get_product(&self, id: &str) -> Result<Product> {
        let id = parse_product_id(id)?;
        self.fetch_product(id)
    }

    /// Fetch a single product by numeric id. Zero is rejected.
    pub fn get_product_by_id(&self, id: u64) -> Result<Product> {
        if id == 0 {
            return Err(invalid_product_id());
        }
        self.fetch_product(id)
    }

    fn fetch_product(&self, id: u64) -> Result<Product> {
        let url = self.credentials.product_url(id)?;
        let signed = oauth::sign("GET", &url, &self.credentials);

        let response = self.transport.get(&signed, false)?;
        if response.status != 200 {
            warn!(url = %url, status = response.status, "product request failed");
            return Err(CatalogError::ProductNotFound {
                status: response.status,
            });
        }

        let raw = parser::parse_single(&response.body)?;
        if parser::is_empty_value(&raw) {
            return Err(CatalogError::Decode("Invalid product data".into()));
        }

        Ok(Product::from_raw(&raw))
    }
}

/// Parse a caller-supplied product id: a positive decimal integer.
pub fn parse_product_id(id: &str) -> Result<u64> {
    match id.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid_product_id()),
    }
}

fn invalid_product_id() -> CatalogError {
    CatalogError::Validation("Invalid product ID".into())
}
