//! Page controller: turns visitor actions into fetch, filter, sort and render steps.

use std::cell::RefCell;

use tracing::{debug, error, info};

use crate::catalog::{apply, available_values, sort, FilterSelection, PaginationState, SortOption};
use crate::config::CatalogConfig;
use crate::error::CatalogResult;
use crate::product::Product;
use crate::render::Renderer;
use crate::source::ProductSource;

/// The page surface the controller writes to.
pub trait CatalogView {
    /// Replace the product list with `html`.
    fn replace_products(&self, html: &str);

    /// Append `html` after the products already shown.
    fn append_products(&self, html: &str);

    /// Replace the filter sidebar with `html`.
    fn replace_filters(&self, html: &str);

    /// Enable or disable the "load more" control.
    fn set_load_more_enabled(&self, enabled: bool);
}

/// Visitor state carried between actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub pagination: PaginationState,
    pub sort: SortOption,
    pub selection: FilterSelection,
}

/// Drives the catalog page.
///
/// Every handler fetches a fresh catalog. State is borrowed only between
/// awaits, so handlers started by independent events may overlap; the last
/// one to complete decides what the view shows.
pub struct PageController<S, V> {
    source: S,
    view: V,
    renderer: Renderer,
    initial_page_size: usize,
    page_step: usize,
    state: RefCell<ViewState>,
}

impl<S: ProductSource, V: CatalogView> PageController<S, V> {
    /// Create a controller.
    pub fn new(source: S, view: V, config: &CatalogConfig) -> Self {
        Self {
            source,
            view,
            renderer: Renderer::new(config),
            initial_page_size: config.initial_page_size,
            page_step: config.page_step,
            state: RefCell::new(ViewState {
                pagination: PaginationState::new(config.initial_page_size),
                ..Default::default()
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// The product source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The view the controller renders into.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// First render: filter sidebar plus the first page in endpoint order.
    ///
    /// On failure the list shows the fallback message.
    pub async fn initial_load(&self) {
        if let Err(e) = self.try_initial_load().await {
            error!(handler = "initial_load", error = %e, "failed to load catalog");
            self.view.replace_products(&self.renderer.render_fallback());
        }
    }

    /// Re-sort from the first page.
    pub async fn change_sort(&self, value: &str) {
        if let Err(e) = self.try_change_sort(SortOption::from_value(value)).await {
            error!(handler = "change_sort", error = %e, "failed to sort catalog");
        }
    }

    /// Apply a new filter selection from the first page.
    pub async fn change_filters(&self, selection: FilterSelection) {
        if let Err(e) = self.try_change_filters(selection).await {
            error!(handler = "change_filters", error = %e, "failed to filter catalog");
        }
    }

    /// Reveal the next page below the products already shown.
    pub async fn load_more(&self) {
        if let Err(e) = self.try_load_more().await {
            error!(handler = "load_more", error = %e, "failed to load more products");
        }
    }

    async fn try_initial_load(&self) -> CatalogResult<()> {
        let products = self.fetch().await?;
        self.view
            .replace_filters(&self.renderer.render_filters(&available_values(&products)));

        self.state.borrow_mut().sort = SortOption::Unspecified;
        let shown = self.show_first_page(sort(products, SortOption::Unspecified));
        info!(handler = "initial_load", shown, "catalog rendered");
        Ok(())
    }

    async fn try_change_sort(&self, option: SortOption) -> CatalogResult<()> {
        let products = self.fetch().await?;
        // State only moves once there is a catalog to render it with.
        self.state.borrow_mut().sort = option;
        let products = self.narrow(products);
        let shown = self.show_first_page(products);
        info!(handler = "change_sort", sort = option.as_str(), shown, "catalog re-sorted");
        Ok(())
    }

    async fn try_change_filters(&self, selection: FilterSelection) -> CatalogResult<()> {
        let products = self.fetch().await?;
        self.state.borrow_mut().selection = selection;
        let products = self.narrow(products);
        let matched = products.len();
        let shown = self.show_first_page(products);
        info!(handler = "change_filters", matched, shown, "catalog filtered");
        Ok(())
    }

    async fn try_load_more(&self) -> CatalogResult<()> {
        let products = self.fetch().await?;
        let products = self.narrow(products);
        let total = products.len();

        let (start, end, has_more) = {
            let mut state = self.state.borrow_mut();
            let start = state.pagination.displayed_count().min(total);
            let end = start.saturating_add(self.page_step).min(total);
            state.pagination.advance(self.page_step);
            state.pagination.clamp(total);
            (start, end, state.pagination.has_more(total))
        };

        if start < end {
            self.view
                .append_products(&self.renderer.render_products(&products[start..end]));
        }
        self.view.set_load_more_enabled(has_more);
        debug!(handler = "load_more", start, end, total, "page appended");
        Ok(())
    }

    async fn fetch(&self) -> CatalogResult<Vec<Product>> {
        let products = self.source.fetch_all().await?;
        debug!(count = products.len(), "catalog fetched");
        Ok(products)
    }

    /// Apply the current selection and sort option.
    fn narrow(&self, products: Vec<Product>) -> Vec<Product> {
        let (selection, option) = {
            let state = self.state.borrow();
            (state.selection.clone(), state.sort)
        };
        sort(apply(products, &selection), option)
    }

    /// Reset pagination, render the first page and return how many products it shows.
    fn show_first_page(&self, products: Vec<Product>) -> usize {
        let total = products.len();
        let (shown, has_more) = {
            let mut state = self.state.borrow_mut();
            state.pagination.reset(self.initial_page_size);
            state.pagination.clamp(total);
            let shown = state.pagination.displayed_count();
            (shown, state.pagination.has_more(total))
        };

        self.view
            .replace_products(&self.renderer.render_products(&products[..shown]));
        self.view.set_load_more_enabled(has_more);
        shown
    }
}
