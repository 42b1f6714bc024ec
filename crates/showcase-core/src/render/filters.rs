//! Filter sidebar markup.

use super::{fill, html_escape, Renderer};
use crate::catalog::{AvailableValues, PriceBand, COLOR_PREFIX, PRICE_PREFIX, SIZE_PREFIX};

impl Renderer {
    /// Render one labeled checkbox per color, size and price band.
    ///
    /// Checkbox ids are prefixed by dimension and the `name` attribute
    /// carries the raw filter value; price bands carry their upper breakpoint.
    pub fn render_filters(&self, values: &AvailableValues) -> String {
        let colors: String = values
            .colors
            .iter()
            .map(|color| render_option(COLOR_PREFIX, color, color, color))
            .collect();

        let sizes: String = values
            .sizes
            .iter()
            .map(|size| render_option(SIZE_PREFIX, size, size, size))
            .collect();

        let prices: String = values
            .price_bands()
            .iter()
            .map(|band| {
                render_option(
                    PRICE_PREFIX,
                    &band.index.to_string(),
                    &band.upper.to_string(),
                    &self.price_band_label(band),
                )
            })
            .collect();

        format!(
            r#"<div class="filter-group" data-dimension="color">
    <h3 class="filter-group__title">{}</h3>
    <div class="filter-options">{}</div>
</div>
<div class="filter-group" data-dimension="size">
    <h3 class="filter-group__title">{}</h3>
    <div class="filter-options filter-options__size">{}</div>
</div>
<div class="filter-group" data-dimension="price">
    <h3 class="filter-group__title">{}</h3>
    <div class="filter-options">{}</div>
</div>"#,
            html_escape(&self.labels.colors_title),
            colors,
            html_escape(&self.labels.sizes_title),
            sizes,
            html_escape(&self.labels.prices_title),
            prices,
        )
    }

    fn price_band_label(&self, band: &PriceBand) -> String {
        let max = self.format_price(band.upper);
        match band.lower {
            None => fill(&self.labels.first_price_band, &[("max", max.as_str())]),
            Some(lower) => {
                let min = self.format_price(lower);
                fill(&self.labels.price_band, &[("min", min.as_str()), ("max", max.as_str())])
            }
        }
    }
}

fn render_option(prefix: &str, id_suffix: &str, name: &str, text: &str) -> String {
    format!(
        r#"<label class="filter-label">
    <input type="checkbox" name="{}" id="{}{}" class="filter-input">
    <span class="filter-text">{}</span>
</label>"#,
        html_escape(name),
        prefix,
        html_escape(id_suffix),
        html_escape(text),
    )
}

#[cfg(test)]
mod tests {
    use crate::catalog::available_values;
    use crate::config::CatalogConfig;
    use crate::product::fixtures::product;
    use crate::render::Renderer;

    #[test]
    fn test_filter_inputs_follow_id_scheme() {
        let products = vec![
            product("A", 100.0, "red", &["M", "G"], "2024-01-01"),
            product("B", 50.0, "blue", &["P"], "2024-06-01"),
        ];
        let html = Renderer::new(&CatalogConfig::default()).render_filters(&available_values(&products));

        assert!(html.contains(r#"name="red" id="color-red""#));
        assert!(html.contains(r#"name="blue" id="color-blue""#));
        assert!(html.contains(r#"name="G" id="size-G""#));
        assert!(html.contains(r#"name="50" id="price-0""#));
        assert!(html.contains(r#"name="100" id="price-1""#));
        assert_eq!(html.matches(r#"class="filter-input""#).count(), 7);
    }

    #[test]
    fn test_price_band_labels() {
        let products = vec![
            product("A", 100.0, "red", &["M"], "2024-01-01"),
            product("B", 50.0, "blue", &["S"], "2024-06-01"),
        ];
        let html = Renderer::new(&CatalogConfig::default()).render_filters(&available_values(&products));

        assert!(html.contains("up to R$\u{a0}50,00"));
        assert!(html.contains("R$\u{a0}50,00 to R$\u{a0}100,00"));
    }

    #[test]
    fn test_empty_catalog_renders_empty_groups() {
        let html = Renderer::new(&CatalogConfig::default()).render_filters(&Default::default());
        assert_eq!(html.matches(r#"class="filter-group""#).count(), 3);
        assert!(!html.contains("filter-input"));
    }
}
