//! Page configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::money::{Currency, Locale};

/// Configuration for the catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Endpoint serving the product list.
    pub endpoint: String,

    /// Prefix prepended to product image names.
    pub asset_base: String,

    /// Products revealed on first render and after a sort or filter change.
    pub initial_page_size: usize,

    /// Products revealed per "load more" click.
    pub page_step: usize,

    /// Currency prices are expressed in.
    pub currency: Currency,

    /// Locale used for price formatting.
    pub locale: Locale,

    /// Page anchors.
    pub selectors: Selectors,

    /// Visible copy.
    pub labels: Labels,

    /// Logging setup.
    pub log: LogConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000/products".to_string(),
            asset_base: "./assets/".to_string(),
            initial_page_size: 6,
            page_step: 6,
            currency: Currency::BRL,
            locale: Locale::PtBr,
            selectors: Selectors::default(),
            labels: Labels::default(),
            log: LogConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> CatalogResult<Self> {
        let config: CatalogConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the page cannot work with.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(CatalogError::Config("endpoint must not be empty".to_string()));
        }
        if self.initial_page_size == 0 {
            return Err(CatalogError::Config(
                "initial_page_size must be at least 1".to_string(),
            ));
        }
        if self.page_step == 0 {
            return Err(CatalogError::Config("page_step must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// CSS selectors of the page anchors the script attaches to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Container of the product cards. Required.
    pub product_list: String,
    /// Container of the filter checkboxes. Required.
    pub filters: String,
    /// Sort select control.
    pub sort: String,
    /// "Load more" button.
    pub load_more: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            product_list: "#product-list".to_string(),
            filters: ".filters-sidebar".to_string(),
            sort: "#Ordenar".to_string(),
            load_more: ".load-more".to_string(),
        }
    }
}

/// Copy rendered into the page.
///
/// Templates use `{count}`, `{value}`, `{min}` and `{max}` placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub installments: String,
    pub buy: String,
    pub fallback: String,
    pub colors_title: String,
    pub sizes_title: String,
    pub prices_title: String,
    pub first_price_band: String,
    pub price_band: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            installments: "{count}x of {value}".to_string(),
            buy: "Buy".to_string(),
            fallback: "Could not load the products.".to_string(),
            colors_title: "Colors".to_string(),
            sizes_title: "Sizes".to_string(),
            prices_title: "Price range".to_string(),
            first_price_band: "up to {max}".to_string(),
            price_band: "{min} to {max}".to_string(),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `showcase_core=debug`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Human,
        }
    }
}
