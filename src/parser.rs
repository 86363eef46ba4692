//! Decoding of raw upstream responses.
//!
//! Everything here hands back schema-less [`serde_json::Value`] records; the
//! conversion into typed products happens in [`crate::models::product`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::error::{CatalogError, Result};

static TOTAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)X-WP-Total:\s*(\d+)").expect("valid total header pattern"));

/// Records and total count decoded from a listing response.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPayload {
    pub records: Vec<Value>,
    pub total: u64,
}

/// Read the `X-WP-Total` count out of a rendered header block.
///
/// Returns 0 when the header is absent or its value does not fit a `u64`.
pub fn parse_total(header_text: &str) -> u64 {
    TOTAL_RE
        .captures(header_text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Decode a listing response. The body must be a JSON array.
pub fn parse_list(header_text: &str, body: &str) -> Result<ListPayload> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "listing body is not valid JSON");
        CatalogError::Decode(format!("Invalid product list data: {e}"))
    })?;

    let records = match value {
        Value::Array(records) => records,
        other => {
            warn!(kind = json_kind(&other), "listing body is not a JSON array");
            return Err(CatalogError::Decode(format!(
                "Invalid product list data: expected an array, got {}",
                json_kind(&other)
            )));
        }
    };

    Ok(ListPayload {
        records,
        total: parse_total(header_text),
    })
}

/// Decode a single-product response.
pub fn parse_single(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Err(CatalogError::Decode("Invalid product data".into()));
    }
    serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "product body is not valid JSON");
        CatalogError::Decode(format!("Invalid product data: {e}"))
    })
}

/// `true` for `null`, `false`, `0`, `""`, `[]` and `{}`.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
