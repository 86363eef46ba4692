//! JSON envelopes and the error-to-status table.

use serde_json::json;
use storefront_catalog::response::product_id_from_query;
use storefront_catalog::{
    CatalogError, ListEnvelope, PageRequest, Pagination, Product, ProductPage, StockEnvelope,
};

// ---------------------------------------------------------------------------
// ListEnvelope
// ---------------------------------------------------------------------------

#[test]
fn successful_listing_envelope() {
    let page = ProductPage {
        products: vec![Product::from_raw(&json!({ "id": 1, "name": "Mug", "images": [] }))],
        pagination: Pagination::new(PageRequest::new(1, 12), 1),
    };
    let envelope = ListEnvelope::from_result(Ok(page));

    assert_eq!(envelope.status_code(), 200);
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "success": true,
            "data": {
                "products": [{
                    "id": 1,
                    "name": "Mug",
                    "price": "",
                    "regular_price": "",
                    "sale_price": null,
                    "featured_image": "",
                    "stock_status": "instock",
                    "stock_quantity": 0
                }],
                "pagination": { "currentPage": 1, "perPage": 12, "total": 1, "totalPages": 1 }
            }
        })
    );
}

#[test]
fn failed_listing_envelope_has_empty_data() {
    let envelope = ListEnvelope::from_result(Err(CatalogError::UpstreamStatus { status: 401 }));

    assert_eq!(envelope.status_code(), 401);
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "success": false,
            "error": "Failed to fetch products: API returned HTTP 401",
            "data": { "products": [], "pagination": {} }
        })
    );
}

#[test]
fn configuration_failure_is_not_prefixed() {
    let err = CatalogError::Configuration(
        "API credentials not configured. Please check your .env file.".into(),
    );
    let envelope = ListEnvelope::failure(&err);

    assert_eq!(envelope.status_code(), 500);
    assert_eq!(
        envelope.error.as_deref(),
        Some("API credentials not configured. Please check your .env file.")
    );
}

#[test]
fn other_listing_failures_are_bad_requests() {
    let envelope = ListEnvelope::failure(&CatalogError::UpstreamStatus { status: 503 });
    assert_eq!(envelope.status_code(), 400);

    let envelope = ListEnvelope::failure(&CatalogError::Decode("bad json".into()));
    assert_eq!(envelope.status_code(), 400);
    assert_eq!(
        envelope.error.as_deref(),
        Some("Failed to fetch products: bad json")
    );
}

// ---------------------------------------------------------------------------
// StockEnvelope
// ---------------------------------------------------------------------------

#[test]
fn successful_stock_envelope() {
    let product = Product::from_raw(&json!({
        "id": 7,
        "stock_status": "instock",
        "stock_quantity": 1
    }));
    let envelope = StockEnvelope::from_result(7, Ok(product));

    assert_eq!(envelope.status_code(), 200);
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "success": true,
            "data": {
                "product_id": 7,
                "stock": { "quantity": 1, "status": "instock", "text": "✓ In Stock (1 item)" },
                "html": "<span class=\"product-stock stock-instock\">✓ In Stock (1 item)</span>"
            }
        })
    );
}

#[test]
fn missing_product_stock_envelope() {
    let envelope =
        StockEnvelope::from_result(9, Err(CatalogError::ProductNotFound { status: 404 }));

    assert_eq!(envelope.status_code(), 404);
    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "success": false,
            "error": "Failed to fetch product: Product not found (HTTP 404)"
        })
    );
}

#[test]
fn validation_failure_stock_envelope() {
    let err = product_id_from_query(None).unwrap_err();
    let envelope = StockEnvelope::failure(&err);

    assert_eq!(envelope.status_code(), 400);
    assert_eq!(envelope.error.as_deref(), Some("Product ID is required"));
}

#[test]
fn product_id_query_parsing() {
    assert_eq!(product_id_from_query(Some("12")).unwrap(), 12);
    assert!(product_id_from_query(Some("0")).is_err());
    assert!(product_id_from_query(Some("abc")).is_err());
    assert!(product_id_from_query(Some("")).is_err());
}

// ---------------------------------------------------------------------------
// Status table
// ---------------------------------------------------------------------------

#[test]
fn status_table_matches_adapter_contract() {
    let cases = [
        (CatalogError::Configuration("not configured".into()), 500),
        (CatalogError::Validation("Invalid product ID".into()), 400),
        (CatalogError::UpstreamStatus { status: 401 }, 401),
        (CatalogError::UpstreamStatus { status: 403 }, 400),
        (CatalogError::UpstreamStatus { status: 500 }, 400),
        (CatalogError::ProductNotFound { status: 401 }, 401),
        (CatalogError::ProductNotFound { status: 404 }, 404),
        (CatalogError::ProductNotFound { status: 500 }, 404),
        (CatalogError::Decode("Invalid product data".into()), 400),
    ];
    for (err, status) in cases {
        assert_eq!(err.status_code(), status, "{err}");
    }
}

#[test]
fn messages_keep_substrings_for_legacy_classifiers() {
    assert!(CatalogError::UpstreamStatus { status: 401 }
        .to_string()
        .contains("401"));
    assert!(CatalogError::ProductNotFound { status: 404 }
        .to_string()
        .contains("not found"));
    assert_eq!(CatalogError::Decode("x".into()).upstream_status(), None);
}
