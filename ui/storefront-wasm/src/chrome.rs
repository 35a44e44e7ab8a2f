//! Page chrome shared by every storefront page.
//!
//! Mobile navigation, flash messages, the server-rendered card filter,
//! add-to-cart links, smooth anchor scrolling and touch detection. Each feature
//! is skipped when its elements are absent.

use crate::dom;
use gloo_timers::callback::Timeout;
use shop_catalog::CategoryFilter;
use wasm_bindgen::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

const FLASH_TIMEOUT_MS: u32 = 5_000;
const FADE_IN_DELAY_MS: u32 = 50;
const FADE_OUT_MS: u32 = 300;

pub fn bind() -> Result<(), JsValue> {
    bind_mobile_nav()?;
    bind_flash_messages()?;
    bind_card_filter()?;
    bind_add_to_cart_links()?;
    bind_anchor_scrolling()?;
    mark_touch_device();
    Ok(())
}

// ── Mobile navigation ──

fn set_mobile_menu(toggle: &Element, menu: &Element, open: bool) {
    let _ = toggle.class_list().toggle_with_force("active", open);
    let _ = menu.class_list().toggle_with_force("active", open);
    dom::set_style(&dom::body(), "overflow", if open { "hidden" } else { "" });
}

fn bind_mobile_nav() -> Result<(), JsValue> {
    let (Some(toggle), Some(menu)) = (dom::by_id("mobileNavToggle"), dom::by_id("mobileMenu")) else {
        return Ok(());
    };

    {
        let (toggle2, menu2) = (toggle.clone(), menu.clone());
        dom::listen(&toggle, "click", move |_| {
            let open = !dom::has_class(&menu2, "active");
            set_mobile_menu(&toggle2, &menu2, open);
        })?;
    }

    for link in dom::query_all_within(&menu, ".mobile-nav-link") {
        let (toggle2, menu2) = (toggle.clone(), menu.clone());
        dom::listen(&link, "click", move |_| set_mobile_menu(&toggle2, &menu2, false))?;
    }

    let (toggle2, menu2) = (toggle.clone(), menu.clone());
    dom::listen(&dom::document(), "click", move |event| {
        if !dom::contains_target(&toggle2, &event) && !dom::contains_target(&menu2, &event) {
            set_mobile_menu(&toggle2, &menu2, false);
        }
    })
}

// ── Flash messages ──

fn hide(el: &Element) {
    dom::set_style(el, "display", "none");
}

fn bind_flash_messages() -> Result<(), JsValue> {
    for button in dom::query_all(".alert-close") {
        let button2 = button.clone();
        dom::listen(&button, "click", move |_| {
            if let Ok(Some(alert)) = button2.closest(".alert") {
                hide(&alert);
            }
        })?;
    }

    for alert in dom::query_all(".alert") {
        Timeout::new(FLASH_TIMEOUT_MS, move || hide(&alert)).forget();
    }
    Ok(())
}

// ── Server-rendered card filter ──

/// Show or hide one `.product-card` with the fade transition.
fn apply_card_filter(card: &Element, filter: &CategoryFilter) {
    let category = card.get_attribute("data-category").unwrap_or_default();
    let card = card.clone();
    if filter.matches(&category) {
        dom::set_style(&card, "display", "block");
        Timeout::new(FADE_IN_DELAY_MS, move || {
            dom::set_style(&card, "opacity", "1");
            dom::set_style(&card, "transform", "translateY(0)");
        })
        .forget();
    } else {
        dom::set_style(&card, "opacity", "0");
        dom::set_style(&card, "transform", "translateY(20px)");
        Timeout::new(FADE_OUT_MS, move || hide(&card)).forget();
    }
}

fn bind_card_filter() -> Result<(), JsValue> {
    let buttons = dom::query_all(".filter-btn");
    for button in &buttons {
        let filter = CategoryFilter::parse(&button.get_attribute("data-filter").unwrap_or_default());
        let (button2, all_buttons) = (button.clone(), buttons.clone());
        dom::listen(button, "click", move |_| {
            for other in &all_buttons {
                dom::remove_class(other, "active");
            }
            dom::add_class(&button2, "active");

            for card in dom::query_all(".product-card") {
                apply_card_filter(&card, &filter);
            }
        })?;
    }
    Ok(())
}

// ── Add-to-cart links ──

fn bind_add_to_cart_links() -> Result<(), JsValue> {
    for button in dom::query_all(".add-to-cart-btn") {
        let product_id = button.get_attribute("data-product-id").unwrap_or_default();
        dom::listen(&button, "click", move |_| {
            if let Err(err) = dom::navigate(&format!("/add-to-cart/{product_id}")) {
                gloo_console::error!("navigation failed:", err);
            }
        })?;
    }
    Ok(())
}

// ── Anchor scrolling ──

fn bind_anchor_scrolling() -> Result<(), JsValue> {
    for anchor in dom::query_all(r##"a[href^="#"]"##) {
        let anchor2 = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let href = anchor2.get_attribute("href").unwrap_or_default();
            if let Some(target) = dom::query(&href) {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        })?;
    }
    Ok(())
}

// ── Touch devices ──

fn mark_touch_device() {
    let window: JsValue = dom::window().into();
    if js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false) {
        dom::add_class(&dom::body(), "touch-device");
    }
}
