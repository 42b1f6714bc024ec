//! Catalog ordering.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::product::Product;

/// Sort options offered by the sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOption {
    /// Keep the order the endpoint returned.
    #[default]
    Unspecified,
    /// Sort by price, low to high.
    LowestPrice,
    /// Sort by price, high to low.
    HighestPrice,
    /// Sort by publication date, newest first.
    MostRecent,
}

impl SortOption {
    /// Map a sort control value to an option.
    ///
    /// Unknown values fall back to [`SortOption::Unspecified`].
    pub fn from_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "lowest price" | "menor preço" | "price_asc" => Self::LowestPrice,
            "highest price" | "maior preço" | "price_desc" => Self::HighestPrice,
            "most recent" | "mais recentes" | "newest" => Self::MostRecent,
            _ => Self::Unspecified,
        }
    }

    /// Stable identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::LowestPrice => "price_asc",
            Self::HighestPrice => "price_desc",
            Self::MostRecent => "newest",
        }
    }
}

/// Order products by the given option.
///
/// All sorts are stable, so ties keep their relative order.
pub fn sort(mut products: Vec<Product>, option: SortOption) -> Vec<Product> {
    match option {
        SortOption::Unspecified => {}
        SortOption::LowestPrice => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOption::HighestPrice => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOption::MostRecent => {
            products.sort_by(|a, b| compare_recency(b.published_at(), a.published_at()))
        }
    }
    products
}

// Unparseable dates sort as the earliest instant.
fn compare_recency(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::product;

    fn prices(products: &[Product]) -> Vec<f64> {
        products.iter().map(|p| p.price).collect()
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    fn scenario() -> Vec<Product> {
        vec![
            product("A", 100.0, "red", &["M"], "2024-01-01"),
            product("B", 50.0, "blue", &["S"], "2024-06-01"),
        ]
    }

    #[test]
    fn test_scenario_lowest_price() {
        assert_eq!(prices(&sort(scenario(), SortOption::LowestPrice)), vec![50.0, 100.0]);
    }

    #[test]
    fn test_scenario_most_recent() {
        assert_eq!(prices(&sort(scenario(), SortOption::MostRecent)), vec![50.0, 100.0]);
    }

    #[test]
    fn test_price_orders_are_reversed_without_ties() {
        let products: Vec<Product> = [30.0, 5.0, 99.9, 12.0, 47.5]
            .iter()
            .map(|&price| product("P", price, "red", &["M"], "2024-01-01"))
            .collect();

        let mut ascending = prices(&sort(products.clone(), SortOption::LowestPrice));
        let descending = prices(&sort(products, SortOption::HighestPrice));
        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_price_sort_is_stable() {
        let products = vec![
            product("First", 10.0, "red", &["M"], "2024-01-01"),
            product("Cheap", 5.0, "red", &["M"], "2024-01-01"),
            product("Second", 10.0, "red", &["M"], "2024-01-01"),
        ];
        assert_eq!(
            names(&sort(products.clone(), SortOption::LowestPrice)),
            vec!["Cheap", "First", "Second"]
        );
        assert_eq!(
            names(&sort(products, SortOption::HighestPrice)),
            vec!["First", "Second", "Cheap"]
        );
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let products = vec![
            product("Broken", 1.0, "red", &["M"], "not a date"),
            product("Old", 1.0, "red", &["M"], "2020-01-01"),
            product("New", 1.0, "red", &["M"], "2024-01-01T10:00:00Z"),
            product("Empty", 1.0, "red", &["M"], ""),
        ];
        assert_eq!(
            names(&sort(products, SortOption::MostRecent)),
            vec!["New", "Old", "Broken", "Empty"]
        );
    }

    #[test]
    fn test_unspecified_keeps_input_order() {
        let products = scenario();
        assert_eq!(sort(products.clone(), SortOption::Unspecified), products);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(SortOption::from_value("Menor preço"), SortOption::LowestPrice);
        assert_eq!(SortOption::from_value("Maior preço"), SortOption::HighestPrice);
        assert_eq!(SortOption::from_value("Mais recentes"), SortOption::MostRecent);
        assert_eq!(SortOption::from_value("lowest price"), SortOption::LowestPrice);
        assert_eq!(SortOption::from_value("newest"), SortOption::MostRecent);
        assert_eq!(SortOption::from_value(""), SortOption::Unspecified);
        assert_eq!(SortOption::from_value("Ordenar por:"), SortOption::Unspecified);
    }
}
