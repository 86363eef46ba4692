use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::error::{CatalogError, Result};

pub const PRODUCTS_PATH: &str = "/wp-json/wc/v3/products";
pub const TOTAL_HEADER: &str = "X-WP-Total";

pub const DEFAULT_PER_PAGE: u32 = 12;
pub const MAX_PER_PAGE: u32 = 100;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub const ENV_API_URL: &str = "WC_API_URL";
pub const ENV_CONSUMER_KEY: &str = "WC_CONSUMER_KEY";
pub const ENV_CONSUMER_SECRET: &str = "WC_CONSUMER_SECRET";

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// Consumer key/secret pair plus the store's base URL.
///
/// Immutable once built. The secret is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: String,
    base_url: String,
}

impl Credentials {
    /// Validate and build a credential set.
    ///
    /// Fails with [`CatalogError::Configuration`] if any field is empty or the
    /// base URL is not an absolute `http`/`https` URL. Trailing slashes on the
    /// base URL are dropped.
    pub fn new(
        base_url: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let consumer_key = consumer_key.into().trim().to_string();
        let consumer_secret = consumer_secret.into().trim().to_string();

        if base_url.is_empty() || consumer_key.is_empty() || consumer_secret.is_empty() {
            return Err(CatalogError::Configuration(
                "WooCommerce API credentials are not configured properly.".into(),
            ));
        }

        let parsed = Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(CatalogError::Configuration(format!(
                "Invalid API URL: {base_url} is not configured as an http(s) address"
            )));
        }

        Ok(Self {
            consumer_key,
            consumer_secret,
            base_url,
        })
    }

    /// Load credentials from the process environment, reading a `.env` file in
    /// the working directory first if one exists.
    ///
    /// Variables already set in the environment take precedence over `.env`.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine; the variables may come from the shell.
        let _ = dotenvy::dotenv();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load credentials from a specific `.env`-style file without touching the
    /// process environment.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let iter = dotenvy::from_path_iter(path).map_err(|e| {
            CatalogError::Configuration(format!(
                "Configuration file not found: {} ({e})",
                path.display()
            ))
        })?;

        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| {
                CatalogError::Configuration(format!(
                    "Configuration file {} could not be parsed: {e}",
                    path.display()
                ))
            })?;
            vars.insert(key, value);
        }

        Self::from_vars(|name| vars.get(name).cloned())
    }

    /// Build credentials from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).unwrap_or_default();

        let base_url = get(ENV_API_URL);
        let consumer_key = get(ENV_CONSUMER_KEY);
        let consumer_secret = get(ENV_CONSUMER_SECRET);

        if base_url.is_empty() || consumer_key.is_empty() || consumer_secret.is_empty() {
            return Err(CatalogError::Configuration(
                "API credentials not configured. Please check your .env file.".into(),
            ));
        }

        Self::new(base_url, consumer_key, consumer_secret)
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Listing endpoint with `page` and `per_page` query parameters.
    pub fn products_url(&self, page: u32, per_page: u32) -> Result<Url> {
        let url = Url::parse_with_params(
            &format!("{}{}", self.base_url, PRODUCTS_PATH),
            &[("page", page.to_string()), ("per_page", per_page.to_string())],
        )?;
        Ok(url)
    }

    /// Single-product endpoint.
    pub fn product_url(&self, id: u64) -> Result<Url> {
        let url = Url::parse(&format!("{}{}/{}", self.base_url, PRODUCTS_PATH, id))?;
        Ok(url)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .finish()
    }
}
