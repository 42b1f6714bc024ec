//! Catalog domain types and page logic for the Showcase product listing.
//!
//! This crate is target-independent and holds everything the listing page
//! does apart from talking to the browser:
//!
//! - **Product**: records served by the catalog endpoint
//! - **Money**: locale-aware price formatting
//! - **Catalog**: filter values, filtering, sorting, pagination
//! - **Render**: product cards, filter sidebar, fallback markup
//! - **Controller**: the page's event handlers, generic over a
//!   [`ProductSource`] and a [`CatalogView`]
//!
//! # Example
//!
//! ```rust,ignore
//! use showcase_core::prelude::*;
//!
//! let config = CatalogConfig::from_toml_str(include_str!("showcase.toml"))?;
//! let controller = PageController::new(source, view, &config);
//!
//! controller.initial_load().await;
//! controller.change_sort("lowest price").await;
//! controller.load_more().await;
//! ```

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod money;
pub mod product;
pub mod render;
pub mod source;

pub use config::CatalogConfig;
pub use controller::{CatalogView, PageController, ViewState};
pub use error::{CatalogError, CatalogResult, FetchError};
pub use money::{Currency, Locale, Money, PriceFormatter};
pub use product::{parse_catalog, Installments, Product};
pub use render::Renderer;
pub use source::{ProductSource, StaticProductSource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{FilterSelection, PaginationState, SortOption};
    pub use crate::config::{CatalogConfig, LogConfig, LogFormat};
    pub use crate::controller::{CatalogView, PageController};
    pub use crate::error::{CatalogError, CatalogResult, FetchError};
    pub use crate::product::Product;
    pub use crate::source::ProductSource;
}
