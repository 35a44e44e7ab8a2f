//! Product grid rendering and the catalog filter buttons.

use crate::dom::{self, Elements};
use crate::state;
use shop_catalog::CategoryFilter;
use shop_view::render;
use wasm_bindgen::prelude::*;

/// Replace the grid with one card per product matching `filter`.
pub fn render_products(els: &Elements, filter: &CategoryFilter) {
    let html = state::with(|s| render::product_grid_html(&s.catalog, filter));
    dom::set_inner_html(&els.product_grid, &html);
}

/// Apply a new filter and re-render.
pub fn show(els: &Elements, filter: CategoryFilter) {
    render_products(els, &filter);
    state::set_filter(filter);
}

/// `.filterBtn[data-cat]` and `.nav-btn[data-filter]` re-render the grid.
pub fn bind_filter_buttons(els: &Elements) -> Result<(), JsValue> {
    for btn in dom::query_all(".filterBtn, .nav-btn") {
        let raw = btn
            .get_attribute("data-cat")
            .or_else(|| btn.get_attribute("data-filter"))
            .unwrap_or_default();
        let els2 = els.clone();
        dom::listen(&btn, "click", move |_| {
            show(&els2, CategoryFilter::parse(&raw));
        })?;
    }
    Ok(())
}
