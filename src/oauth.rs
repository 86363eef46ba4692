//! OAuth 1.0a request signing (two-legged, HMAC-SHA1).
//!
//! WooCommerce accepts consumer-key/secret signed requests over plain HTTP
//! and HTTPS alike. There is no token secret, so the signing key is the
//! encoded consumer secret followed by a bare `&`.
//!
//! The signature base string sorts the `oauth_*` parameters together with the
//! request's query parameters; the `Authorization` header lists the `oauth_*`
//! parameters in a fixed order with the signature last.

use std::collections::BTreeMap;
use std::iter;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha1::Sha1;
use url::Url;

use crate::config::Credentials;

type HmacSha1 = Hmac<Sha1>;

pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const OAUTH_VERSION: &str = "1.0";

const NONCE_BYTES: usize = 20;

// ---------------------------------------------------------------------------
// SignedRequest
// ---------------------------------------------------------------------------

/// A request ready to hand to a [`Transport`](crate::http::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: String,
    pub url: Url,
    /// Full `Authorization` header value, starting with `OAuth `.
    pub authorization: String,
}

// ---------------------------------------------------------------------------
// Signing
// ---------------------------------------------------------------------------

/// Sign `method url` with a fresh nonce and the current Unix timestamp.
pub fn sign(method: &str, url: &Url, credentials: &Credentials) -> SignedRequest {
    let nonce = generate_nonce();
    let timestamp = chrono::Utc::now().timestamp();
    sign_with(method, url, credentials, &nonce, timestamp)
}

/// Sign with a caller-supplied nonce and timestamp.
///
/// Deterministic: the same inputs always produce the same header.
pub fn sign_with(
    method: &str,
    url: &Url,
    credentials: &Credentials,
    nonce: &str,
    timestamp: i64,
) -> SignedRequest {
    let method = method.to_ascii_uppercase();
    let timestamp = timestamp.to_string();

    let oauth_params = [
        ("oauth_consumer_key", credentials.consumer_key()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", SIGNATURE_METHOD),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_version", OAUTH_VERSION),
    ];

    // Query parameters are merged after the oauth_* ones, so a duplicate key
    // in the query overwrites.
    let mut params: BTreeMap<String, String> = oauth_params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    for (key, value) in url.query_pairs() {
        params.insert(key.into_owned(), value.into_owned());
    }

    let base_string = signature_base_string(&method, &normalized_base_url(url), &params);
    let signature = hmac_sha1_base64(&signing_key(credentials.consumer_secret()), &base_string);

    let header = oauth_params
        .iter()
        .map(|(k, v)| format!("{k}=\"{}\"", percent_encode(v)))
        .chain(iter::once(format!(
            "oauth_signature=\"{}\"",
            percent_encode(&signature)
        )))
        .collect::<Vec<_>>()
        .join(", ");

    SignedRequest {
        method,
        url: url.clone(),
        authorization: format!("OAuth {header}"),
    }
}

/// 20 random bytes, standard base64.
pub fn generate_nonce() -> String {
    let mut bytes = [0u8; NONCE_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

// ---------------------------------------------------------------------------
// Base string construction
// ---------------------------------------------------------------------------

/// RFC 3986 percent-encoding: only `A-Z a-z 0-9 - _ . ~` pass through.
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Scheme, host, non-default port and path; no query or fragment.
///
/// A non-default port stays in, as RFC 5849 §3.4.1.2 requires and as the
/// store rebuilds the URL when verifying. Dropping it would break signatures
/// against stores served on e.g. `:8080`.
pub fn normalized_base_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    let port = url.port().map(|p| format!(":{p}")).unwrap_or_default();
    format!("{}://{}{}{}", url.scheme(), host, port, url.path())
}

/// `key=value` pairs in sorted key order, both sides encoded, joined by `&`.
pub fn parameter_string(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// `METHOD&enc(base_url)&enc(parameter_string)`.
pub fn signature_base_string(
    method: &str,
    base_url: &str,
    params: &BTreeMap<String, String>,
) -> String {
    format!(
        "{}&{}&{}",
        method,
        percent_encode(base_url),
        percent_encode(&parameter_string(params))
    )
}

fn signing_key(consumer_secret: &str) -> String {
    format!("{}&", percent_encode(consumer_secret))
}

fn hmac_sha1_base64(key: &str, message: &str) -> String {
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(message.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}
