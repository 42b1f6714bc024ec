//! Where product lists come from.

use std::cell::Cell;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::product::Product;

/// Fetches the full product list.
///
/// Implementations must not cache: every call re-fetches.
#[async_trait(?Send)]
pub trait ProductSource {
    /// Fetch every product in the catalog.
    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError>;
}

/// In-memory product source.
///
/// Serves a fixed catalog, or answers every call with an HTTP error status
/// while a failure is set.
#[derive(Debug, Default)]
pub struct StaticProductSource {
    products: Vec<Product>,
    failure_status: Cell<Option<u16>>,
    calls: Cell<usize>,
}

impl StaticProductSource {
    /// Serve the given catalog.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            failure_status: Cell::new(None),
            calls: Cell::new(0),
        }
    }

    /// Fail every fetch with the given status.
    pub fn failing(status: u16) -> Self {
        let source = Self::default();
        source.fail_with(Some(status));
        source
    }

    /// Start failing with `status`, or recover with `None`.
    pub fn fail_with(&self, status: Option<u16>) {
        self.failure_status.set(status);
    }

    /// Number of fetches served so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl ProductSource for StaticProductSource {
    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        match self.failure_status.get() {
            Some(status) => Err(FetchError::Http {
                status,
                url: "static://catalog".to_string(),
            }),
            None => Ok(self.products.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::product;
    use futures::executor::block_on;

    #[test]
    fn test_static_source_refetches() {
        let source = StaticProductSource::new(vec![product("A", 1.0, "red", &["M"], "2024-01-01")]);
        assert_eq!(block_on(source.fetch_all()).unwrap().len(), 1);
        assert_eq!(block_on(source.fetch_all()).unwrap().len(), 1);
        assert_eq!(source.calls(), 2);
    }

    #[test]
    fn test_failing_source() {
        let source = StaticProductSource::failing(500);
        let err = block_on(source.fetch_all()).unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 500, .. }));

        source.fail_with(None);
        assert!(block_on(source.fetch_all()).unwrap().is_empty());
    }
}
