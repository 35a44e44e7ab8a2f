//! Alimaq storefront WASM frontend.
//!
//! Drives the product grid, the in-page cart and its modals, plus the page
//! chrome shared by every storefront and admin page. Each concern lives in
//! its own module; the cart and catalog logic itself comes from the
//! `shop-*` crates.

pub mod admin;
pub mod api;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod chrome;
pub mod dom;
pub mod events;
pub mod modal;
pub mod panel;
pub mod state;
pub mod theme;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

/// Main initialisation sequence.
async fn init() -> Result<(), JsValue> {
    theme::restore();

    // Chrome runs on every page; each feature checks for its own elements.
    chrome::bind()?;
    admin::bind()?;
    api::start_cart_count_poll();

    // The catalog/cart widget only exists on pages with a product grid.
    if dom::by_id("productGrid").is_none() {
        return Ok(());
    }
    let els = dom::Elements::bind()?;

    catalog::render_products(&els, &state::filter());
    cart::refresh(&els);
    events::bind_events(&els)?;

    gloo_console::log!("storefront ready");
    Ok(())
}
