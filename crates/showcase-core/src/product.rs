//! Product records as served by the catalog endpoint.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult, FetchError};

/// Installment plan offered for a product.
///
/// Serialized as a two-element array: `[count, value]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(u32, f64)", into = "(u32, f64)")]
pub struct Installments {
    /// Number of installments.
    pub count: u32,
    /// Value of each installment, in currency units.
    pub value: f64,
}

impl From<(u32, f64)> for Installments {
    fn from((count, value): (u32, f64)) -> Self {
        Self { count, value }
    }
}

impl From<Installments> for (u32, f64) {
    fn from(i: Installments) -> Self {
        (i.count, i.value)
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name.
    pub name: String,
    /// Price in currency units.
    pub price: f64,
    /// Color label, used as a filter value.
    pub color: String,
    /// Sizes this product fits.
    pub size: Vec<String>,
    /// Image file name, relative to the asset base.
    pub image: String,
    /// Publication timestamp.
    pub date: String,
    /// Installment plan.
    #[serde(alias = "parcelamento")]
    pub installments: Installments,
}

impl Product {
    /// Check the catalog invariants for this record.
    pub fn validate(&self) -> CatalogResult<()> {
        if !(self.price >= 0.0) {
            return Err(CatalogError::InvalidProduct(format!(
                "{}: price must be non-negative, got {}",
                self.name, self.price
            )));
        }
        if self.installments.count == 0 {
            return Err(CatalogError::InvalidProduct(format!(
                "{}: installment count must be at least 1",
                self.name
            )));
        }
        if self.size.is_empty() {
            return Err(CatalogError::InvalidProduct(format!(
                "{}: at least one size is required",
                self.name
            )));
        }
        Ok(())
    }

    /// Parse the publication date.
    ///
    /// Accepts RFC 3339 timestamps, plain `YYYY-MM-DD` dates and
    /// `YYYY-MM-DDTHH:MM:SS` datetimes. Returns `None` for anything else.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
            return Some(dt.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

/// Parse and validate a catalog payload.
///
/// Records that break the catalog invariants reject the whole payload.
pub fn parse_catalog(body: &str) -> Result<Vec<Product>, FetchError> {
    let products: Vec<Product> = serde_json::from_str(body)?;
    for product in &products {
        product
            .validate()
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;
    }
    Ok(products)
}
