use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PER_PAGE, MAX_PER_PAGE};

use super::product::Product;

// ---------------------------------------------------------------------------
// PageRequest — clamped page/per_page pair
// ---------------------------------------------------------------------------

/// Page coordinates, always within `page >= 1` and `1 <= per_page <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Build from raw, possibly malformed query values.
    ///
    /// A missing value falls back to page 1 and 12 per page. A present value
    /// is read by its leading integer, so `"abc"` counts as 0 and `"5x"` as 5,
    /// then clamped.
    pub fn from_query(page: Option<&str>, per_page: Option<&str>) -> Self {
        let page = page.map_or(1, leading_int).clamp(1, i64::from(u32::MAX));
        let per_page = per_page
            .map_or(i64::from(DEFAULT_PER_PAGE), leading_int)
            .clamp(1, i64::from(MAX_PER_PAGE));
        // Both values were clamped into u32 range above.
        Self::new(page as u32, per_page as u32)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}

/// Optional whitespace, an optional sign, then digits; anything else reads as
/// 0. Saturates instead of overflowing.
fn leading_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(request: PageRequest, total: u64) -> Self {
        Self {
            current_page: request.page(),
            per_page: request.per_page(),
            total,
            total_pages: total_pages(total, request.per_page()),
        }
    }
}

/// `ceil(total / per_page)`, or 1 for an empty catalog.
pub fn total_pages(total: u64, per_page: u32) -> u64 {
    let per_page = u64::from(per_page.max(1));
    if total == 0 {
        1
    } else {
        total.div_ceil(per_page)
    }
}

// ---------------------------------------------------------------------------
// ProductPage
// ---------------------------------------------------------------------------

/// One page of normalized products with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}
