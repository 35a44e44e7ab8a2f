//! Cart-count polling against the storefront service.
//!
//! Fire-and-forget: failures are logged and the next tick tries again. There
//! is no retry, backoff or cancellation.

use crate::dom;
use gloo_net::http::Request;
use gloo_timers::callback::Interval;
use shop_api_types::CartCountResponse;

pub const CART_COUNT_PATH: &str = "/api/cart-count";
pub const CART_COUNT_INTERVAL_MS: u32 = 30_000;

pub async fn fetch_cart_count() -> Result<usize, gloo_net::Error> {
    let resp = Request::get(CART_COUNT_PATH).send().await?;
    if !resp.ok() {
        return Err(gloo_net::Error::GlooError(format!(
            "{} {}",
            resp.status(),
            resp.status_text()
        )));
    }
    let body: CartCountResponse = resp.json().await?;
    Ok(body.count)
}

/// Write the server-side count into every `.cart-count` element.
pub async fn update_cart_count() {
    if dom::query(".cart-link").is_none() {
        return;
    }
    match fetch_cart_count().await {
        Ok(count) => {
            let text = count.to_string();
            for el in dom::query_all(".cart-count") {
                dom::set_text(&el, &text);
            }
        }
        Err(err) => gloo_console::error!("Error updating cart count:", err.to_string()),
    }
}

pub fn start_cart_count_poll() {
    Interval::new(CART_COUNT_INTERVAL_MS, || {
        wasm_bindgen_futures::spawn_local(update_cart_count());
    })
    .forget();
}
