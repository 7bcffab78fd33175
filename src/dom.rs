//! DOM Helpers
//!
//! Thin wrappers over web-sys used by the flash and favorite modules.

use leptos::prelude::document;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, FormData, HtmlFormElement};

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(list) = document().query_selector_all(selector) else {
        log::warn!("[Dom] Invalid selector: {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Nearest ancestor-or-self of an event target matching `selector`
pub fn closest_from_target(target: &EventTarget, selector: &str) -> Option<Element> {
    let element = match target.dyn_ref::<Element>() {
        Some(el) => el.clone(),
        // Text nodes and the like
        None => target.dyn_ref::<web_sys::Node>()?.parent_element()?,
    };
    element.closest(selector).ok().flatten()
}

/// Swap one class for another on an element
pub fn swap_class(el: &Element, add: &str, remove: &str) -> Result<(), JsValue> {
    let classes = el.class_list();
    classes.remove_1(remove)?;
    classes.add_1(add)
}

/// Text fields of a form, the same set a urlencoded submit would send
pub fn form_fields(form: &HtmlFormElement) -> Result<Vec<(String, String)>, JsValue> {
    let data = FormData::new_with_form(form)?;
    let entries = js_sys::try_iter(&data)?
        .ok_or_else(|| JsValue::from_str("FormData is not iterable"))?;

    let mut fields = Vec::new();
    for entry in entries {
        let entry: js_sys::Array = entry?.dyn_into()?;
        let Some(name) = entry.get(0).as_string() else { continue };
        // File entries have no urlencoded form
        if let Some(value) = entry.get(1).as_string() {
            fields.push((name, value));
        }
    }
    Ok(fields)
}

/// Attribute (name, value) pairs in attribute order
pub fn attributes(el: &Element) -> Vec<(String, String)> {
    let attrs = el.attributes();
    (0..attrs.length())
        .filter_map(|i| attrs.item(i))
        .map(|attr| (attr.name(), attr.value()))
        .collect()
}

/// Base URI relative actions resolve against
pub fn base_uri() -> Option<String> {
    let doc = document();
    doc.base_uri().ok().flatten().or_else(|| doc.url().ok())
}

/// `lang` attribute of the root element
pub fn page_lang() -> Option<String> {
    document()
        .document_element()
        .and_then(|root| root.get_attribute("lang"))
        .filter(|lang| !lang.is_empty())
}

/// Run `f` once the document has been parsed
pub fn on_page_ready(f: impl FnOnce() + 'static) {
    let doc = document();
    if doc.ready_state() != "loading" {
        f();
        return;
    }

    let on_ready: Closure<dyn FnMut()> = Closure::once(f);
    if doc
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .is_err()
    {
        log::error!("[Dom] Could not wait for DOMContentLoaded");
    }
    on_ready.forget();
}

/// Bind a listener on the document for the page lifetime
pub fn bind_document_listener<F>(event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(e) = document().add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        log::error!("[Dom] Failed to bind {} listener: {:?}", event, e);
    }
    callback.forget();
}
