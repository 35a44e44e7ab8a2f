//! DOM element bindings.
//!
//! `Elements` holds the nodes the catalog/cart widget cannot work without; they
//! are resolved once at startup and a missing one aborts widget setup. Optional
//! controls (customer panel buttons, forms) are looked up where they are wired.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement};

// ── Helpers ──

fn doc() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn body() -> HtmlElement {
    gloo_utils::body()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match doc().query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

fn collect(nl: &web_sys::NodeList) -> Vec<Element> {
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

/// Flip a class, returning whether it is now present.
pub fn toggle_class(el: &Element, cls: &str) -> bool {
    el.class_list().toggle(cls).unwrap_or(false)
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

/// Set (or with an empty value, clear) an inline style property.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let style = html.style();
        if value.is_empty() {
            let _ = style.remove_property(property);
        } else {
            let _ = style.set_property(property, value);
        }
    }
}

/// The element an event was dispatched to, if it is an element.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Whether `container` is, or contains, the event's target.
pub fn contains_target(container: &Element, event: &Event) -> bool {
    let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    container.contains(target.as_ref())
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

pub fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        gloo_console::error!("alert failed:", message);
    }
}

pub fn prompt(message: &str) -> Option<String> {
    window().prompt_with_message(message).ok().flatten()
}

pub fn navigate(url: &str) -> Result<(), JsValue> {
    window().location().set_href(url)
}

pub fn document() -> Document {
    doc()
}

// ── Elements struct ──

/// Nodes used by the catalog/cart widget.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub product_grid: Element,
    pub cart_btn: HtmlElement,
    pub overlay: HtmlElement,
    pub cart_items: Element,
    pub cart_summary: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve the widget's required nodes. Call once at startup.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            product_grid: get_el!("productGrid"),
            cart_btn: get_html!("cartBtn"),
            overlay: get_html!("overlay"),
            cart_items: get_el!("cartItems"),
            cart_summary: get_el!("cartSummary"),
        })
    }
}
