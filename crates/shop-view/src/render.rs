//! Markup templates for the product grid and the cart panel.
//!
//! The grid and cart are always regenerated in full; there is no diffing.

use crate::escape;
use shop_cart::{Cart, CartLine};
use shop_catalog::{Catalog, CategoryFilter, Product, ProductId};

pub const CURRENCY: &str = "KSh";

pub fn price(amount: u64) -> String {
    format!("{CURRENCY} {amount}")
}

/// Element id of the quantity input embedded in a product card.
pub fn qty_input_id(id: ProductId) -> String {
    format!("qty-{id}")
}

pub fn product_card_html(product: &Product) -> String {
    let name = escape::html(&product.name);
    format!(
        r#"<div class="product-card" data-category="{category}">
  <img src="{image}" alt="{name}">
  <h4>{name}</h4>
  <p>{price}</p>
  <label>Qty: <input type="number" value="1" min="1" id="{qty_id}" class="qty-input"></label>
  <button class="addCartBtn" data-id="{id}">Add to Cart</button>
</div>"#,
        category = product.category.as_str(),
        image = escape::html(&product.image),
        name = name,
        price = price(product.price),
        qty_id = qty_input_id(product.id),
        id = product.id,
    )
}

pub fn product_grid_html(catalog: &Catalog, filter: &CategoryFilter) -> String {
    catalog
        .filtered(filter)
        .map(product_card_html)
        .collect::<Vec<_>>()
        .join("\n")
}

fn cart_line_html(line: &CartLine) -> String {
    format!(
        r#"<div class="cart-item">
  <p>{name} ({qty}) - {subtotal}</p>
  <button class="minus" data-id="{id}">-</button>
  <button class="plus" data-id="{id}">+</button>
  <button class="remove" data-id="{id}">Remove</button>
</div>"#,
        name = escape::html(&line.name),
        qty = line.qty,
        subtotal = price(line.subtotal()),
        id = line.product_id,
    )
}

pub fn cart_lines_html(cart: &Cart) -> String {
    if cart.is_empty() {
        return r#"<p class="cart-empty">Your cart is empty.</p>"#.to_owned();
    }
    cart.lines()
        .iter()
        .map(cart_line_html)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn cart_summary_html(cart: &Cart) -> String {
    format!("<h4>Total: {}</h4>", price(cart.total()))
}

pub fn cart_button_label(cart: &Cart) -> String {
    format!("🛒 Cart ({})", cart.line_count())
}

pub fn chart_placeholder_html() -> &'static str {
    r#"<div style="text-align: center; color: var(--text-light);">
  <i class="fas fa-chart-bar" style="font-size: 3rem; margin-bottom: 1rem; opacity: 0.5;"></i>
  <p>Sales analytics chart would be displayed here</p>
  <small>Integration with Chart.js or similar library</small>
</div>"#
}
