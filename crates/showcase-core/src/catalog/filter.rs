//! Filter values and filter application.

use std::collections::BTreeSet;

use crate::product::Product;

/// Id prefix of color filter inputs.
pub const COLOR_PREFIX: &str = "color-";
/// Id prefix of size filter inputs.
pub const SIZE_PREFIX: &str = "size-";
/// Id prefix of price band filter inputs.
pub const PRICE_PREFIX: &str = "price-";

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Check whether a price lies within the bounds.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Filter criteria selected by the visitor.
///
/// An empty dimension places no constraint on the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub colors: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub price_range: Option<PriceRange>,
}

impl FilterSelection {
    /// Build a selection from checked filter inputs, given as `(id, name)` pairs.
    ///
    /// The id prefix picks the dimension and the name carries the raw value.
    /// Price names are breakpoints; the range spans the smallest to the largest
    /// checked breakpoint. Inputs with an unknown prefix or a price that is not
    /// a finite number are ignored.
    pub fn from_checked<'a, I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut selection = Self::default();
        let mut prices: Vec<f64> = Vec::new();

        for (id, name) in inputs {
            if id.starts_with(COLOR_PREFIX) {
                selection.colors.insert(name.to_string());
            } else if id.starts_with(SIZE_PREFIX) {
                selection.sizes.insert(name.to_string());
            } else if id.starts_with(PRICE_PREFIX) {
                if let Some(price) = name.trim().parse::<f64>().ok().filter(|p| p.is_finite()) {
                    prices.push(price);
                }
            }
        }

        prices.sort_by(f64::total_cmp);
        if let (Some(&min), Some(&max)) = (prices.first(), prices.last()) {
            selection.price_range = Some(PriceRange { min, max });
        }

        selection
    }

    /// Check whether no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.sizes.is_empty() && self.price_range.is_none()
    }

    /// Check whether a single product passes every constrained dimension.
    pub fn matches(&self, product: &Product) -> bool {
        let color_ok = self.colors.is_empty() || self.colors.contains(&product.color);
        let size_ok =
            self.sizes.is_empty() || product.size.iter().any(|s| self.sizes.contains(s));
        let price_ok = self
            .price_range
            .map_or(true, |range| range.contains(product.price));

        color_ok && size_ok && price_ok
    }
}

/// One price band offered as a filter option.
///
/// Band `i` spans `(lower, upper]`; the first band has no lower bound and
/// spans `[0, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub index: usize,
    pub lower: Option<f64>,
    pub upper: f64,
}

/// Distinct filter values found in a catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailableValues {
    /// Colors in first-seen order.
    pub colors: Vec<String>,
    /// Sizes in first-seen order.
    pub sizes: Vec<String>,
    /// Distinct prices, strictly ascending.
    pub price_breakpoints: Vec<f64>,
}

impl AvailableValues {
    /// Contiguous price bands derived from the breakpoints.
    pub fn price_bands(&self) -> Vec<PriceBand> {
        self.price_breakpoints
            .iter()
            .enumerate()
            .map(|(index, &upper)| PriceBand {
                index,
                lower: index.checked_sub(1).map(|prev| self.price_breakpoints[prev]),
                upper,
            })
            .collect()
    }
}

/// Collect the distinct colors, sizes and price breakpoints of a catalog.
pub fn available_values(products: &[Product]) -> AvailableValues {
    let mut values = AvailableValues::default();

    for product in products {
        if !values.colors.contains(&product.color) {
            values.colors.push(product.color.clone());
        }
        for size in &product.size {
            if !values.sizes.contains(size) {
                values.sizes.push(size.clone());
            }
        }
        values.price_breakpoints.push(product.price);
    }

    values.price_breakpoints.sort_by(f64::total_cmp);
    values.price_breakpoints.dedup();
    values
}

/// Keep the products that pass the selection, preserving order.
pub fn apply(products: Vec<Product>, selection: &FilterSelection) -> Vec<Product> {
    if selection.is_empty() {
        return products;
    }
    products
        .into_iter()
        .filter(|p| selection.matches(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::product;

    fn catalog() -> Vec<Product> {
        vec![
            product("Red M", 100.0, "red", &["M"], "2024-01-01"),
            product("Blue S", 50.0, "blue", &["S"], "2024-06-01"),
            product("Red SM", 75.0, "red", &["S", "M"], "2024-03-01"),
            product("Green L", 50.0, "green", &["L"], "2023-12-01"),
        ]
    }

    fn selection(colors: &[&str], sizes: &[&str], range: Option<(f64, f64)>) -> FilterSelection {
        FilterSelection {
            colors: colors.iter().map(|s| s.to_string()).collect(),
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
            price_range: range.map(|(min, max)| PriceRange { min, max }),
        }
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let products = catalog();
        assert_eq!(apply(products.clone(), &FilterSelection::default()), products);
    }

    #[test]
    fn test_color_filter() {
        let filtered = apply(catalog(), &selection(&["red"], &[], None));
        assert_eq!(names(&filtered), vec!["Red M", "Red SM"]);
    }

    #[test]
    fn test_size_filter_matches_any_size() {
        let filtered = apply(catalog(), &selection(&[], &["S"], None));
        assert_eq!(names(&filtered), vec!["Blue S", "Red SM"]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let filtered = apply(catalog(), &selection(&[], &[], Some((50.0, 75.0))));
        assert_eq!(names(&filtered), vec!["Blue S", "Red SM", "Green L"]);
    }

    #[test]
    fn test_dimensions_are_and_combined() {
        let filtered = apply(catalog(), &selection(&["red", "blue"], &["S"], Some((0.0, 60.0))));
        assert_eq!(names(&filtered), vec!["Blue S"]);
    }

    #[test]
    fn test_scenario_red_only() {
        let products = vec![
            product("A", 100.0, "red", &["M"], "2024-01-01"),
            product("B", 50.0, "blue", &["S"], "2024-06-01"),
        ];
        let filtered = apply(products, &selection(&["red"], &[], None));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].price, 100.0);
    }

    #[test]
    fn test_available_values() {
        let values = available_values(&catalog());
        assert_eq!(values.colors, vec!["red", "blue", "green"]);
        assert_eq!(values.sizes, vec!["M", "S", "L"]);
        assert_eq!(values.price_breakpoints, vec![50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_breakpoints_strictly_ascending() {
        let products: Vec<Product> = [30.0, 10.0, 20.0, 10.0, 30.0, 0.0, 20.0]
            .iter()
            .map(|&price| product("P", price, "red", &["M"], "2024-01-01"))
            .collect();
        let breakpoints = available_values(&products).price_breakpoints;
        assert_eq!(breakpoints, vec![0.0, 10.0, 20.0, 30.0]);
        assert!(breakpoints.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_catalog() {
        let values = available_values(&[]);
        assert_eq!(values, AvailableValues::default());
        assert!(values.price_bands().is_empty());
        assert!(apply(Vec::new(), &selection(&["red"], &[], None)).is_empty());
    }

    #[test]
    fn test_price_bands() {
        let bands = available_values(&catalog()).price_bands();
        assert_eq!(
            bands,
            vec![
                PriceBand { index: 0, lower: None, upper: 50.0 },
                PriceBand { index: 1, lower: Some(50.0), upper: 75.0 },
                PriceBand { index: 2, lower: Some(75.0), upper: 100.0 },
            ]
        );
    }

    #[test]
    fn test_selection_from_checked_inputs() {
        let selection = FilterSelection::from_checked([
            ("color-red", "red"),
            ("size-M", "M"),
            ("size-G", "G"),
            ("price-2", "100"),
            ("price-0", "50"),
            ("price-1", "not a number"),
            ("newsletter", "yes"),
        ]);
        assert_eq!(selection.colors.len(), 1);
        assert!(selection.sizes.contains("G"));
        assert_eq!(selection.price_range, Some(PriceRange { min: 50.0, max: 100.0 }));
    }

    #[test]
    fn test_non_finite_prices_are_ignored() {
        let selection = FilterSelection::from_checked([
            ("price-0", "NaN"),
            ("price-1", "80"),
            ("price-2", "inf"),
        ]);
        assert_eq!(selection.price_range, Some(PriceRange { min: 80.0, max: 80.0 }));

        let selection = FilterSelection::from_checked([("price-0", "nan"), ("price-1", "-inf")]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_from_nothing_checked() {
        let selection = FilterSelection::from_checked(std::iter::empty());
        assert!(selection.is_empty());
    }
}
