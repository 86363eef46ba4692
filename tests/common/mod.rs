//! Shared test fixtures for the storefront catalog integration tests.
//!
//! Provides a `FakeTransport` that records every signed request and replays
//! canned responses, sample WooCommerce product records, and a parser for the
//! `Authorization` header.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use storefront_catalog::{
    CatalogError, CatalogService, Credentials, RawResponse, Result, SignedRequest, Transport,
};

pub const BASE_URL: &str = "https://shop.example.com";
pub const CONSUMER_KEY: &str = "ck_test";
pub const CONSUMER_SECRET: &str = "cs_test";

pub fn credentials() -> Credentials {
    Credentials::new(BASE_URL, CONSUMER_KEY, CONSUMER_SECRET).unwrap()
}

// ---------------------------------------------------------------------------
// FakeTransport
// ---------------------------------------------------------------------------

/// A recorded call: the signed request and whether headers were requested.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub request: SignedRequest,
    pub capture_headers: bool,
}

#[derive(Default)]
struct FakeState {
    queued: VecDeque<RawResponse>,
    fallback: Option<RawResponse>,
    calls: Vec<RecordedCall>,
}

/// In-memory [`Transport`]. Clones share state, so a test can keep one handle
/// while the service owns another.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call with the same response.
    pub fn always(status: u16, headers: &str, body: &str) -> Self {
        let fake = Self::new();
        fake.state.lock().unwrap().fallback = Some(raw(status, headers, body));
        fake
    }

    /// Queue a response for the next call.
    pub fn push(&self, status: u16, headers: &str, body: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .queued
            .push_back(raw(status, headers, body));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls().pop().expect("no calls recorded")
    }

    /// Build a service that talks to this fake.
    pub fn service(&self) -> CatalogService {
        CatalogService::new(credentials(), Box::new(self.clone()))
    }
}

impl Transport for FakeTransport {
    fn get(&self, request: &SignedRequest, capture_headers: bool) -> Result<RawResponse> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall {
            request: request.clone(),
            capture_headers,
        });
        let next = state.queued.pop_front().or_else(|| state.fallback.clone());
        let mut response = next.ok_or_else(|| {
            CatalogError::Configuration("FakeTransport has no response queued".into())
        })?;
        if !capture_headers {
            response.headers.clear();
        }
        Ok(response)
    }
}

fn raw(status: u16, headers: &str, body: &str) -> RawResponse {
    RawResponse {
        status,
        headers: headers.to_string(),
        body: body.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Sample records
// ---------------------------------------------------------------------------

/// A WooCommerce product record with the fields the storefront reads plus a
/// few it ignores.
pub fn product_record(id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("Product {id}"),
        "slug": format!("product-{id}"),
        "permalink": format!("https://shop.example.com/product/product-{id}/"),
        "type": "simple",
        "status": "publish",
        "price": "19.99",
        "regular_price": "24.99",
        "sale_price": "19.99",
        "on_sale": true,
        "images": [
            {
                "id": id * 10,
                "src": format!("https://shop.example.com/img/{id}.jpg"),
                "alt": ""
            },
            {
                "id": id * 10 + 1,
                "src": format!("https://shop.example.com/img/{id}-b.jpg"),
                "alt": ""
            }
        ],
        "categories": [{ "id": 15, "name": "Uncategorized" }],
        "stock_status": "instock",
        "stock_quantity": 5,
        "manage_stock": true
    })
}

/// JSON array body with `count` records, ids starting at `first_id`.
pub fn product_list_body(first_id: i64, count: usize) -> String {
    let records: Vec<Value> = (0..count as i64)
        .map(|i| product_record(first_id + i))
        .collect();
    serde_json::to_string(&records).unwrap()
}

/// Header block as the gateway renders it.
pub fn listing_headers(total: u64) -> String {
    format!(
        "content-type: application/json; charset=UTF-8\r\n\
         x-wp-total: {total}\r\n\
         x-wp-totalpages: 1\r\n"
    )
}

// ---------------------------------------------------------------------------
// Authorization header parsing
// ---------------------------------------------------------------------------

/// Split an `OAuth k="v", ...` header into decoded `(key, value)` pairs in
/// header order.
pub fn parse_authorization(header: &str) -> Vec<(String, String)> {
    let params = header
        .strip_prefix("OAuth ")
        .expect("header starts with OAuth");
    params
        .split(", ")
        .map(|pair| {
            let (key, quoted) = pair.split_once('=').expect("key=value pair");
            let value = quoted
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .expect("quoted value");
            (
                key.to_string(),
                urlencoding::decode(value).unwrap().into_owned(),
            )
        })
        .collect()
}

pub fn auth_param(header: &str, key: &str) -> String {
    parse_authorization(header)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
        .unwrap_or_else(|| panic!("{key} missing from Authorization header"))
}
