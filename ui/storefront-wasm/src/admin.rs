//! Admin panel chrome: sidebar toggles and analytics placeholders.

use crate::dom;
use shop_view::render;
use wasm_bindgen::prelude::*;

pub fn bind() -> Result<(), JsValue> {
    let sidebar = dom::query(".admin-sidebar");

    if let (Some(toggle), Some(sidebar), Some(main)) =
        (dom::query(".admin-toggle"), sidebar.clone(), dom::query(".admin-main"))
    {
        dom::listen(&toggle, "click", move |_| {
            dom::toggle_class(&sidebar, "hidden");
            dom::toggle_class(&main, "full-width");
        })?;
    }

    if let (Some(toggle), Some(sidebar)) = (dom::query(".mobile-admin-toggle"), sidebar) {
        dom::listen(&toggle, "click", move |_| {
            dom::toggle_class(&sidebar, "mobile-open");
        })?;
    }

    for chart in dom::query_all(".chart-placeholder") {
        dom::set_inner_html(&chart, render::chart_placeholder_html());
    }
    Ok(())
}
