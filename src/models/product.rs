use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// StockStatus
// ---------------------------------------------------------------------------

/// Stock state as reported by the store.
///
/// Values other than `instock`/`outofstock` (for example `onbackorder`) are
/// kept verbatim in [`StockStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StockStatus {
    InStock,
    OutOfStock,
    Other(String),
}

impl StockStatus {
    pub fn as_str(&self) -> &str {
        match self {
            StockStatus::InStock => "instock",
            StockStatus::OutOfStock => "outofstock",
            StockStatus::Other(s) => s,
        }
    }

    pub fn is_in_stock(&self) -> bool {
        matches!(self, StockStatus::InStock)
    }
}

impl From<&str> for StockStatus {
    fn from(s: &str) -> Self {
        match s {
            "instock" => StockStatus::InStock,
            "outofstock" => StockStatus::OutOfStock,
            other => StockStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for StockStatus {
    fn from(s: String) -> Self {
        StockStatus::from(s.as_str())
    }
}

impl From<StockStatus> for String {
    fn from(status: StockStatus) -> Self {
        status.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Product — canonical storefront shape
// ---------------------------------------------------------------------------

/// A catalog product reshaped for the storefront.
///
/// Serialized with the snake_case keys the storefront script reads.
/// `featured_image` is `""` when the product has no image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price: String,
    pub regular_price: String,
    pub sale_price: Option<String>,
    pub featured_image: String,
    pub stock_status: StockStatus,
    pub stock_quantity: i64,
}

impl Product {
    /// Normalize a raw upstream record. Never fails: every field has a default.
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: raw.get("id").and_then(Value::as_i64),
            name: text_field(raw, "name").unwrap_or_default(),
            price: text_field(raw, "price").unwrap_or_default(),
            regular_price: text_field(raw, "regular_price").unwrap_or_default(),
            sale_price: text_field(raw, "sale_price"),
            featured_image: raw
                .pointer("/images/0/src")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            stock_status: raw
                .get("stock_status")
                .and_then(Value::as_str)
                .map(StockStatus::from)
                .unwrap_or(StockStatus::InStock),
            stock_quantity: raw
                .get("stock_quantity")
                .and_then(Value::as_i64)
                .unwrap_or(0),
        }
    }

    pub fn has_image(&self) -> bool {
        !self.featured_image.is_empty()
    }

    /// Display summary of this product's stock.
    pub fn stock_summary(&self) -> StockSummary {
        StockSummary::new(self.stock_quantity, &self.stock_status)
    }
}

/// Strings pass through; numbers are rendered as decimal text.
fn text_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// StockSummary
// ---------------------------------------------------------------------------

pub const IN_STOCK_CLASS: &str = "stock-instock";
pub const OUT_OF_STOCK_CLASS: &str = "stock-outofstock";

/// Human-readable stock line, derived per request.
///
/// Anything but `instock` reads as out of stock. `html` is not escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSummary {
    pub quantity: i64,
    pub status: String,
    pub text: String,
    pub class: String,
    pub html: String,
}

impl StockSummary {
    pub fn new(quantity: i64, status: &StockStatus) -> Self {
        let (class, text) = if status.is_in_stock() {
            let unit = if quantity == 1 { "item" } else { "items" };
            (IN_STOCK_CLASS, format!("✓ In Stock ({quantity} {unit})"))
        } else {
            (OUT_OF_STOCK_CLASS, "✗ Out of Stock".to_string())
        };

        Self {
            quantity,
            status: status.as_str().to_string(),
            html: format!("<span class=\"product-stock {class}\">{text}</span>"),
            class: class.to_string(),
            text,
        }
    }
}
