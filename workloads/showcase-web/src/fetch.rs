//! Product source backed by the browser `fetch` API.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use showcase_core::{parse_catalog, FetchError, Product, ProductSource};

/// Fetches the catalog from a fixed endpoint on every call.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    endpoint: String,
}

impl HttpProductSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl ProductSource for HttpProductSource {
    async fn fetch_all(&self) -> Result<Vec<Product>, FetchError> {
        let window = web_sys::window()
            .ok_or_else(|| FetchError::Request("no window available".to_string()))?;

        let response: Response = JsFuture::from(window.fetch_with_str(&self.endpoint))
            .await
            .map_err(request_error)?
            .dyn_into()
            .map_err(request_error)?;

        if !response.ok() {
            return Err(FetchError::Http {
                status: response.status(),
                url: self.endpoint.clone(),
            });
        }

        let body = JsFuture::from(response.text().map_err(request_error)?)
            .await
            .map_err(request_error)?
            .as_string()
            .ok_or_else(|| FetchError::Deserialization("response body is not text".to_string()))?;

        parse_catalog(&body)
    }
}

fn request_error(e: JsValue) -> FetchError {
    FetchError::Request(format!("{:?}", e))
}
