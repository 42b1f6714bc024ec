//! Event wiring between the page and the controller.

use std::rc::Rc;

use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget, HtmlInputElement, HtmlSelectElement};

use showcase_core::catalog::{COLOR_PREFIX, PRICE_PREFIX, SIZE_PREFIX};

use crate::Controller;

/// Attach the filter, sort and load-more listeners.
///
/// Filters use one delegated listener on their container, so re-rendering
/// the checkboxes never needs re-attaching.
pub fn bind(controller: &Rc<Controller>) -> anyhow::Result<()> {
    if let Some(filters) = controller.view().filters() {
        let ctl = Rc::clone(controller);
        listen(filters, "change", move |event| {
            let is_filter = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .is_some_and(|input| is_filter_id(&input.id()));
            if !is_filter {
                return;
            }

            let selection = ctl.view().read_selection();
            let ctl = Rc::clone(&ctl);
            spawn_local(async move { ctl.change_filters(selection).await });
        })?;
    }

    if let Some(select) = controller.view().sort() {
        let ctl = Rc::clone(controller);
        listen(select, "change", move |event| {
            let Some(select) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };

            let value = select.value();
            let ctl = Rc::clone(&ctl);
            spawn_local(async move { ctl.change_sort(&value).await });
        })?;
    }

    if let Some(button) = controller.view().load_more() {
        let ctl = Rc::clone(controller);
        listen(button, "click", move |_| {
            let ctl = Rc::clone(&ctl);
            spawn_local(async move { ctl.load_more().await });
        })?;
    }

    Ok(())
}

/// Register a listener for the lifetime of the page.
fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> anyhow::Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("failed to listen for {}: {:?}", kind, e))?;
    closure.forget();
    Ok(())
}

fn is_filter_id(id: &str) -> bool {
    [COLOR_PREFIX, SIZE_PREFIX, PRICE_PREFIX]
        .iter()
        .any(|prefix| id.starts_with(prefix))
}
