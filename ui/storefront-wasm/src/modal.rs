//! Applies the modal state machine to the page.
//!
//! The overlay is shown with the `hidden` property; modals use `aria-hidden`.
//! Every `.modal` element is projected from `ModalSet`, so ones unknown to
//! `ModalId` stay hidden.

use crate::dom::{self, Elements};
use crate::state;
use shop_view::ModalId;

pub fn open_modal(els: &Elements, id: ModalId) {
    if dom::by_id(id.element_id()).is_none() {
        gloo_console::warn!("missing modal", id.element_id());
    }
    state::with_mut(|s| s.modals.open(id));
    apply(els);
}

pub fn close_modals(els: &Elements) {
    state::with_mut(|s| s.modals.close_all());
    apply(els);
}

/// Sync the overlay and every `.modal` element with the current state.
fn apply(els: &Elements) {
    state::with(|s| {
        els.overlay.set_hidden(!s.modals.overlay_visible());
        for modal in dom::query_all(".modal") {
            let hidden = !s.modals.is_element_open(&modal.id());
            let _ = modal.set_attribute("aria-hidden", if hidden { "true" } else { "false" });
        }
    });
}
