//! Cart widget: add-to-cart from product cards, quantity controls, and the
//! cart panel projection.

use crate::dom::{self, Elements};
use crate::state;
use shop_catalog::ProductId;
use shop_view::render;
use web_sys::{Element, Event, HtmlInputElement};

/// Re-render the line list, summary and badge from the current cart.
pub fn refresh(els: &Elements) {
    let (lines, summary, label) = state::with(|s| {
        (
            render::cart_lines_html(&s.cart),
            render::cart_summary_html(&s.cart),
            render::cart_button_label(&s.cart),
        )
    });
    dom::set_inner_html(&els.cart_items, &lines);
    dom::set_inner_html(&els.cart_summary, &summary);
    dom::set_text(&els.cart_btn, &label);
}

fn product_id(el: &Element) -> Option<ProductId> {
    el.get_attribute("data-id")?.parse().ok()
}

fn requested_qty(id: ProductId) -> Option<u32> {
    let input = dom::by_id_typed::<HtmlInputElement>(&render::qty_input_id(id))?;
    dom::get_input_value(&input).parse().ok()
}

/// Delegated click handler for `.addCartBtn` in the product grid.
pub fn on_add_click(els: &Elements, event: &Event) {
    let Some(target) = dom::event_element(event) else {
        return;
    };
    if !dom::has_class(&target, "addCartBtn") {
        return;
    }
    let Some(id) = product_id(&target) else {
        gloo_console::error!("add to cart: button has no product id");
        return;
    };
    let Some(qty) = requested_qty(id) else {
        gloo_console::warn!("add to cart: invalid quantity for product", id.to_string());
        return;
    };

    let result = state::with_mut(|s| s.cart.add(&s.catalog, id, qty).map(|_| ()));
    if let Err(err) = result {
        gloo_console::warn!("add to cart rejected:", err.to_string());
        return;
    }
    refresh(els);
}

/// Delegated click handler for the `.minus`, `.plus` and `.remove` controls.
pub fn on_adjust_click(els: &Elements, event: &Event) {
    let Some(target) = dom::event_element(event) else {
        return;
    };
    let action = if dom::has_class(&target, "minus") {
        Adjust::Decrement
    } else if dom::has_class(&target, "plus") {
        Adjust::Increment
    } else if dom::has_class(&target, "remove") {
        Adjust::Remove
    } else {
        return;
    };
    let Some(id) = product_id(&target) else {
        return;
    };

    state::with_mut(|s| match action {
        Adjust::Decrement => {
            if let Err(err) = s.cart.decrement(id) {
                gloo_console::warn!("decrement rejected:", err.to_string());
            }
        }
        Adjust::Increment => {
            if let Err(err) = s.cart.increment(id) {
                gloo_console::warn!("increment rejected:", err.to_string());
            }
        }
        Adjust::Remove => {
            s.cart.remove(id);
        }
    });
    refresh(els);
}

#[derive(Clone, Copy)]
enum Adjust {
    Decrement,
    Increment,
    Remove,
}
