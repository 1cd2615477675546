//! DOM Helpers
//!
//! Lookup of the mount points supplied by the page markup, mounting a view
//! in place of an element's content, and raw event binding.

use leptos::prelude::IntoView;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::{BoardError, BoardResult};

pub fn page_document() -> BoardResult<web_sys::Document> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| BoardError::Dom("no document".into()))
}

/// First element matching `selector`
pub fn query(doc: &web_sys::Document, selector: &str) -> BoardResult<web_sys::Element> {
    doc.query_selector(selector)
        .map_err(|e| BoardError::Dom(format!("bad selector '{}': {:?}", selector, e)))?
        .ok_or_else(|| BoardError::MissingElement(selector.to_string()))
}

/// First element matching `selector`, cast to `T`
pub fn query_as<T: JsCast>(doc: &web_sys::Document, selector: &str) -> BoardResult<T> {
    query(doc, selector)?
        .dyn_into::<T>()
        .map_err(|_| BoardError::Dom(format!("'{}' has unexpected element type", selector)))
}

/// Drop the container's current content and mount `view` as its only child
pub fn replace_children<F, N>(container: web_sys::Element, view: F) -> BoardResult<()>
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let parent = container
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| BoardError::Dom("container is not an HTML element".into()))?;
    parent.set_inner_html("");
    leptos::mount::mount_to(parent, view).forget();
    Ok(())
}

/// Bind a `submit` listener for the lifetime of the page
pub fn on_submit<F>(form: &web_sys::Element, handler: F) -> BoardResult<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|e| BoardError::Dom(format!("{:?}", e)))?;
    on_submit.forget();
    Ok(())
}
