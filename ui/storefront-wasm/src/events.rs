//! Event binding for the catalog/cart widget.
//!
//! Product-card and cart-line controls are re-rendered on every change, so
//! their clicks are delegated to the document instead of bound per element.

use crate::cart;
use crate::catalog;
use crate::checkout;
use crate::dom::{self, Elements};
use crate::modal;
use crate::panel;
use crate::theme;
use shop_view::ModalId;
use wasm_bindgen::prelude::*;

/// Helper: attach a click handler that receives the bound elements.
macro_rules! on_click {
    ($el:expr, $els:expr, $handler:expr) => {{
        let els2 = $els.clone();
        dom::listen(&$el, "click", move |_: web_sys::Event| $handler(&els2))?;
    }};
}

/// Bind all widget listeners. Call once after init.
pub fn bind_events(els: &Elements) -> Result<(), JsValue> {
    // ── Delegated product / cart controls ──
    {
        let els2 = els.clone();
        dom::listen(&dom::document(), "click", move |event| {
            cart::on_add_click(&els2, &event);
            cart::on_adjust_click(&els2, &event);
        })?;
    }

    catalog::bind_filter_buttons(els)?;

    // ── Cart modal ──
    on_click!(els.cart_btn, els, |els: &Elements| {
        modal::open_modal(els, ModalId::Cart);
        cart::refresh(els);
    });
    if let Some(close) = dom::by_id("closeCart") {
        on_click!(close, els, modal::close_modals);
    }
    if let Some(pay) = dom::by_id("mpesaPayBtn") {
        on_click!(pay, els, checkout::on_pay);
    }

    // ── Generic close triggers ──
    for el in dom::query_all("[data-close]") {
        on_click!(el, els, modal::close_modals);
    }
    {
        let els2 = els.clone();
        let overlay = els.overlay.clone();
        dom::listen(&els.overlay, "click", move |event| {
            if dom::event_element(&event).is_some_and(|t| t == *overlay) {
                modal::close_modals(&els2);
            }
        })?;
    }

    // ── Customer panel ──
    panel::bind(els)?;
    if let Some(btn) = dom::by_id("themeBtn") {
        dom::listen(&btn, "click", |_| theme::toggle())?;
    }

    Ok(())
}
