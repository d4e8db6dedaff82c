//! Thin helpers over `web-sys` lookups and listener registration.

use folio_core::{FolioError, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    NodeList, Window,
};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| FolioError::Dom("no window".to_string()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| FolioError::Dom("no document".to_string()))
}

pub fn body() -> Result<HtmlElement> {
    document()?.body().ok_or_else(|| FolioError::missing("body"))
}

/// Stringify a thrown JS value for logs and errors.
pub fn js_error(value: JsValue) -> FolioError {
    FolioError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Log a failed DOM write without interrupting the caller.
pub fn warn_on_err(result: std::result::Result<(), JsValue>, what: &str) {
    if let Err(e) = result {
        tracing::warn!(error = ?e, "{what} failed");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lookups
// ─────────────────────────────────────────────────────────────────────────────

pub fn by_id(id: &str) -> Result<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| FolioError::missing(format!("#{id}")))
}

pub fn query(selector: &str) -> Result<Element> {
    document()?
        .query_selector(selector)
        .map_err(js_error)?
        .ok_or_else(|| FolioError::missing(selector))
}

/// All matches in document order. Errors when nothing matches.
pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    let list = document()?.query_selector_all(selector).map_err(js_error)?;
    let found = collect_elements(&list);
    if found.is_empty() {
        return Err(FolioError::missing(selector));
    }
    Ok(found)
}

/// All matches under `root`, possibly none.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let list = root.query_selector_all(selector).map_err(js_error)?;
    Ok(collect_elements(&list))
}

fn collect_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn as_html(elements: Vec<Element>) -> Vec<HtmlElement> {
    elements
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Current value of an `<input>` or `<textarea>`; empty for anything else.
pub fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    warn_on_err(el.style().set_property(property, value), property);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let classes = el.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    warn_on_err(result, class);
}

// ─────────────────────────────────────────────────────────────────────────────
// Listeners
// ─────────────────────────────────────────────────────────────────────────────

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    // Page-lifetime listener; never removed
    closure.forget();
    Ok(())
}
