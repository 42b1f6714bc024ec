//! Catalog error types.

use thiserror::Error;

/// Errors raised while fetching the product catalog.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The endpoint answered with a non-success status.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// The request could not be sent or the body could not be read.
    #[error("Request error: {0}")]
    Request(String),

    /// The payload is not a list of products.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Deserialization(e.to_string())
    }
}

/// Errors that can occur while driving the catalog page.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Fetching products failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// An expected page anchor is absent.
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A product record breaks the catalog invariants.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// Configuration could not be parsed or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::Config(e.to_string())
    }
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Http {
            status: 503,
            url: "http://localhost:5000/products".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP error: 503 for http://localhost:5000/products"
        );
    }

    #[test]
    fn test_catalog_error_wraps_fetch_transparently() {
        let err: CatalogError = FetchError::Request("connection refused".to_string()).into();
        assert!(matches!(err, CatalogError::Fetch(_)));
        assert_eq!(err.to_string(), "Request error: connection refused");
    }

    #[test]
    fn test_json_error_becomes_deserialization() {
        let json_err = serde_json::from_str::<Vec<u32>>("{not json").unwrap_err();
        let err = FetchError::from(json_err);
        assert!(matches!(err, FetchError::Deserialization(_)));
    }
}
