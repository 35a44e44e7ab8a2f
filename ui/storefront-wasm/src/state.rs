//! Page-session state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! The cart lives only as long as the page; nothing here is persisted except
//! the theme preference.

use gloo_storage::{LocalStorage, Storage};
use shop_cart::Cart;
use shop_catalog::{Catalog, CategoryFilter};
use shop_view::ModalSet;
use std::cell::RefCell;

const DARK_THEME_KEY: &str = "alimaq_dark_theme";

/// Central application state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub cart: Cart,
    pub modals: ModalSet,
    pub filter: CategoryFilter,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: Catalog::builtin(),
            cart: Cart::new(),
            modals: ModalSet::new(),
            filter: CategoryFilter::All,
        }
    }
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn filter() -> CategoryFilter {
    with(|s| s.filter.clone())
}

pub fn set_filter(filter: CategoryFilter) {
    with_mut(|s| s.filter = filter);
}

// ── localStorage helpers ──

pub fn dark_theme() -> bool {
    LocalStorage::get(DARK_THEME_KEY).unwrap_or(false)
}

pub fn set_dark_theme(enabled: bool) {
    if let Err(err) = LocalStorage::set(DARK_THEME_KEY, enabled) {
        gloo_console::warn!("could not save theme preference:", err.to_string());
    }
}
