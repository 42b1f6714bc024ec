//! Showcase catalog page - browser workload.
//!
//! Binds the catalog controller to the page:
//! - Products fetched with the browser `fetch` API on every action
//! - Product list, filter sidebar and load-more button driven through `web-sys`
//! - One delegated listener for all filter checkboxes
//! - `tracing` output routed to the browser console

mod dom;
mod events;
mod fetch;
mod logging;

use std::rc::Rc;

use anyhow::Context;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use showcase_core::{CatalogConfig, PageController};

pub use dom::DomView;
pub use fetch::HttpProductSource;

/// Controller type used by the page.
pub(crate) type Controller = PageController<HttpProductSource, DomView>;

const CONFIG: &str = include_str!("../showcase.toml");

/// Module entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = match CatalogConfig::from_toml_str(CONFIG) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "invalid showcase.toml, using defaults: {}",
                e
            )));
            CatalogConfig::default()
        }
    };
    logging::init(&config.log);

    if let Err(e) = when_ready(config) {
        tracing::error!(error = ?e, "catalog page failed to start");
    }
}

/// Boot now, or once the document has finished parsing.
fn when_ready(config: CatalogConfig) -> anyhow::Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("no document available")?;

    if document.ready_state() != "loading" {
        return boot(&document, &config);
    }

    let ready = Closure::<dyn FnMut()>::once(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Err(e) = boot(&document, &config) {
            tracing::error!(error = ?e, "catalog page failed to start");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("failed to wait for DOMContentLoaded: {:?}", e))?;
    ready.forget();
    Ok(())
}

fn boot(document: &Document, config: &CatalogConfig) -> anyhow::Result<()> {
    let view = DomView::attach(document, &config.selectors)
        .context("catalog page skeleton is incomplete")?;
    let source = HttpProductSource::new(config.endpoint.clone());
    let controller = Rc::new(PageController::new(source, view, config));

    events::bind(&controller).context("failed to attach listeners")?;
    tracing::info!(endpoint = %config.endpoint, "catalog page attached");

    spawn_local(async move { controller.initial_load().await });
    Ok(())
}
