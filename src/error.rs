/// Every failure the catalog core can produce.
///
/// Messages keep the upstream status code in their text (`"API returned HTTP
/// 401"`, `"Product not found (HTTP 404)"`) so consumers that classify by
/// substring keep working; [`CatalogError::status_code`] is the structured
/// alternative.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    #[error("Product not found (HTTP {status})")]
    ProductNotFound { status: u16 },

    #[error("{0}")]
    Decode(String),
}

/// Coarse classification of a [`CatalogError`], useful for logging and for
/// adapters that want to branch without matching on payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Validation,
    Transport,
    UpstreamStatus,
    Decode,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Configuration(_) => ErrorKind::Configuration,
            CatalogError::Validation(_) => ErrorKind::Validation,
            CatalogError::Transport(_) => ErrorKind::Transport,
            CatalogError::UpstreamStatus { .. } | CatalogError::ProductNotFound { .. } => {
                ErrorKind::UpstreamStatus
            }
            CatalogError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// The upstream HTTP status carried by this error, if any.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            CatalogError::UpstreamStatus { status } | CatalogError::ProductNotFound { status } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// HTTP status an adapter should answer with for this error.
    ///
    /// | error                         | status |
    /// |-------------------------------|--------|
    /// | `Configuration`               | 500    |
    /// | upstream 401 (either variant) | 401    |
    /// | `ProductNotFound`             | 404    |
    /// | everything else               | 400    |
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Configuration(_) => 500,
            CatalogError::UpstreamStatus { status: 401 }
            | CatalogError::ProductNotFound { status: 401 } => 401,
            CatalogError::ProductNotFound { .. } => 404,
            CatalogError::Validation(_)
            | CatalogError::Transport(_)
            | CatalogError::UpstreamStatus { .. }
            | CatalogError::Decode(_) => 400,
        }
    }
}

impl From<url::ParseError> for CatalogError {
    fn from(e: url::ParseError) -> Self {
        CatalogError::Configuration(format!("Invalid API URL: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
