//! Product card markup.

use super::{fill, html_escape, Renderer};
use crate::product::Product;

impl Renderer {
    /// Render a single product card.
    pub fn render_product(&self, product: &Product) -> String {
        let count = product.installments.count.to_string();
        let value = self.format_price(product.installments.value);
        let installments = fill(
            &self.labels.installments,
            &[("count", count.as_str()), ("value", value.as_str())],
        );

        format!(
            r#"<article class="product-card">
    <img src="{}{}" alt="{}" class="product-card__image">
    <div class="product-card__details">
        <h2 class="product-card__title">{}</h2>
        <strong class="product-card__price">{}</strong>
        <span class="product-card__installments">{}</span>
    </div>
    <button class="product-card__button">{}</button>
</article>"#,
            html_escape(&self.asset_base),
            html_escape(&product.image),
            html_escape(&product.name),
            html_escape(&product.name),
            self.format_price(product.price),
            html_escape(&installments),
            html_escape(&self.labels.buy),
        )
    }

    /// Render a run of product cards.
    pub fn render_products(&self, products: &[Product]) -> String {
        products.iter().map(|p| self.render_product(p)).collect()
    }
}
