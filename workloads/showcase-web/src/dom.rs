//! DOM handles for the catalog page.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, HtmlSelectElement};

use showcase_core::catalog::FilterSelection;
use showcase_core::config::Selectors;
use showcase_core::{CatalogError, CatalogResult, CatalogView};

/// The page anchors the controller renders into.
pub struct DomView {
    list: Element,
    filters: Option<Element>,
    sort: Option<HtmlSelectElement>,
    load_more: Option<HtmlButtonElement>,
}

impl DomView {
    /// Look up the page anchors.
    ///
    /// Only the product list is required. Without the filter container the
    /// page still lists products, with no sidebar.
    pub fn attach(document: &Document, selectors: &Selectors) -> CatalogResult<Self> {
        let list = require(document, &selectors.product_list)?;

        let filters = find(document, &selectors.filters);
        if filters.is_none() {
            tracing::warn!(selector = %selectors.filters, "filter container not found");
        }

        let sort = find(document, &selectors.sort).and_then(|el| el.dyn_into().ok());
        if sort.is_none() {
            tracing::warn!(selector = %selectors.sort, "sort control not found");
        }
        let load_more = find(document, &selectors.load_more).and_then(|el| el.dyn_into().ok());
        if load_more.is_none() {
            tracing::warn!(selector = %selectors.load_more, "load-more button not found");
        }

        Ok(Self {
            list,
            filters,
            sort,
            load_more,
        })
    }

    pub fn filters(&self) -> Option<&Element> {
        self.filters.as_ref()
    }

    pub fn sort(&self) -> Option<&HtmlSelectElement> {
        self.sort.as_ref()
    }

    pub fn load_more(&self) -> Option<&HtmlButtonElement> {
        self.load_more.as_ref()
    }

    /// Read the checked filter inputs into a selection.
    pub fn read_selection(&self) -> FilterSelection {
        let Some(filters) = &self.filters else {
            return FilterSelection::default();
        };
        let checked = match filters.query_selector_all(r#"input[type="checkbox"]:checked"#) {
            Ok(nodes) => nodes,
            Err(e) => {
                tracing::warn!(error = ?e, "could not query filter inputs");
                return FilterSelection::default();
            }
        };

        let inputs: Vec<(String, String)> = (0..checked.length())
            .filter_map(|i| checked.get(i))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .map(|input| (input.id(), input.name()))
            .collect();

        FilterSelection::from_checked(inputs.iter().map(|(id, name)| (id.as_str(), name.as_str())))
    }
}

impl CatalogView for DomView {
    fn replace_products(&self, html: &str) {
        self.list.set_inner_html(html);
    }

    fn append_products(&self, html: &str) {
        if let Err(e) = self.list.insert_adjacent_html("beforeend", html) {
            tracing::warn!(error = ?e, "could not append products");
        }
    }

    fn replace_filters(&self, html: &str) {
        if let Some(filters) = &self.filters {
            filters.set_inner_html(html);
        }
    }

    fn set_load_more_enabled(&self, enabled: bool) {
        if let Some(button) = &self.load_more {
            button.set_disabled(!enabled);
        }
    }
}

fn find(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn require(document: &Document, selector: &str) -> CatalogResult<Element> {
    find(document, selector).ok_or_else(|| CatalogError::MissingElement(selector.to_string()))
}
