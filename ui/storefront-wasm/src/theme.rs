//! Light/dark theme on `<body>`.

use crate::dom;
use crate::state;

const DARK_CLASS: &str = "dark-theme";

/// Re-apply the remembered theme.
pub fn restore() {
    if state::dark_theme() {
        dom::add_class(&dom::body(), DARK_CLASS);
    }
}

pub fn toggle() {
    let enabled = dom::toggle_class(&dom::body(), DARK_CLASS);
    state::set_dark_theme(enabled);
}
