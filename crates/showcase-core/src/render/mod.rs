//! Markup rendering for product cards, filter controls and fallbacks.

mod card;
mod filters;

use crate::config::{CatalogConfig, Labels};
use crate::money::PriceFormatter;

/// Turns catalog data into markup fragments.
#[derive(Debug, Clone)]
pub struct Renderer {
    formatter: PriceFormatter,
    asset_base: String,
    labels: Labels,
}

impl Renderer {
    /// Create a renderer from page configuration.
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            formatter: PriceFormatter::new(config.currency, config.locale),
            asset_base: config.asset_base.clone(),
            labels: config.labels.clone(),
        }
    }

    /// Format a price with the configured currency and locale.
    pub fn format_price(&self, amount: f64) -> String {
        self.formatter.format(amount)
    }

    /// Render the message shown when the list cannot be loaded.
    pub fn render_fallback(&self) -> String {
        format!(
            r#"<p class="product-list__fallback">{}</p>"#,
            html_escape(&self.labels.fallback)
        )
    }
}

/// Fill `{key}` placeholders of a label template.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{}}}", key), value)
    })
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
