//! JSON envelopes returned to the storefront.
//!
//! Both endpoints answer `{ "success": bool, ... }`. On failure the envelope
//! carries a single `error` message and the HTTP status from
//! [`CatalogError::status_code`].

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::catalog::parse_product_id;
use crate::error::{CatalogError, Result};
use crate::models::{Pagination, Product, ProductPage, StockSummary};

const LIST_ERROR_PREFIX: &str = "Failed to fetch products: ";
const PRODUCT_ERROR_PREFIX: &str = "Failed to fetch product: ";

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Body of the product listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub data: ListData,
    #[serde(skip)]
    status: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListData {
    pub products: Vec<Product>,
    /// Serialized as `{}` when absent.
    #[serde(serialize_with = "pagination_or_empty")]
    pub pagination: Option<Pagination>,
}

impl ListEnvelope {
    pub fn from_result(result: Result<ProductPage>) -> Self {
        match result {
            Ok(page) => Self::success(page),
            Err(e) => Self::failure(&e),
        }
    }

    pub fn success(page: ProductPage) -> Self {
        Self {
            success: true,
            error: None,
            data: ListData {
                products: page.products,
                pagination: Some(page.pagination),
            },
            status: 200,
        }
    }

    pub fn failure(error: &CatalogError) -> Self {
        Self {
            success: false,
            error: Some(describe(LIST_ERROR_PREFIX, error)),
            data: ListData {
                products: Vec::new(),
                pagination: None,
            },
            status: error.status_code(),
        }
    }

    /// HTTP status to answer with.
    pub fn status_code(&self) -> u16 {
        self.status
    }
}

fn pagination_or_empty<S: Serializer>(
    pagination: &Option<Pagination>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match pagination {
        Some(p) => p.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

// ---------------------------------------------------------------------------
// Inventory fragment
// ---------------------------------------------------------------------------

/// Body of the single-product stock endpoint polled by the storefront.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<StockData>,
    #[serde(skip)]
    status: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockData {
    pub product_id: u64,
    pub stock: StockView,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockView {
    pub quantity: i64,
    pub status: String,
    pub text: String,
}

impl StockEnvelope {
    pub fn from_result(product_id: u64, result: Result<Product>) -> Self {
        match result {
            Ok(product) => Self::success(product_id, product.stock_summary()),
            Err(e) => Self::failure(&e),
        }
    }

    pub fn success(product_id: u64, summary: StockSummary) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(StockData {
                product_id,
                stock: StockView {
                    quantity: summary.quantity,
                    status: summary.status,
                    text: summary.text,
                },
                html: summary.html,
            }),
            status: 200,
        }
    }

    pub fn failure(error: &CatalogError) -> Self {
        Self {
            success: false,
            error: Some(describe(PRODUCT_ERROR_PREFIX, error)),
            data: None,
            status: error.status_code(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }
}

/// Product id from the `product_id` query parameter.
///
/// Missing, zero or non-numeric values all read as "no id given".
pub fn product_id_from_query(raw: Option<&str>) -> Result<u64> {
    raw.and_then(|s| parse_product_id(s).ok())
        .ok_or_else(|| CatalogError::Validation("Product ID is required".into()))
}

/// Configuration and validation messages are shown as-is; everything that
/// went wrong while talking to the store gets the operation prefix.
fn describe(prefix: &str, error: &CatalogError) -> String {
    match error {
        CatalogError::Configuration(_) | CatalogError::Validation(_) => error.to_string(),
        _ => format!("{prefix}{error}"),
    }
}
