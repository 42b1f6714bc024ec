//! Catalog module.
//!
//! Contains filtering, sorting and pagination over an in-memory product list.

mod filter;
mod pagination;
mod sort;

pub use filter::{
    apply, available_values, AvailableValues, FilterSelection, PriceBand, PriceRange,
    COLOR_PREFIX, PRICE_PREFIX, SIZE_PREFIX,
};
pub use pagination::PaginationState;
pub use sort::{sort, SortOption};
