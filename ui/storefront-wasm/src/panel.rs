//! Customer panel buttons and the placeholder forms.
//!
//! Every control here is optional: a page without it simply skips the binding.

use crate::catalog;
use crate::dom::{self, Elements};
use crate::modal;
use shop_catalog::CategoryFilter;
use shop_view::ModalId;
use shop_view::notice::Notice;
use wasm_bindgen::prelude::*;

const MODAL_TRIGGERS: [(&str, ModalId); 5] = [
    ("sellBtn", ModalId::Seller),
    ("profileBtn", ModalId::Profile),
    ("myOrdersBtn", ModalId::Orders),
    ("registerBtn", ModalId::Register),
    ("loginBtn", ModalId::Login),
];

const NOTICE_BUTTONS: [(&str, Notice); 2] = [
    ("wishlistBtn", Notice::WishlistUnavailable),
    ("feedbackBtn", Notice::FeedbackUnavailable),
];

const FORMS: [(&str, Notice); 3] = [
    ("registerForm", Notice::RegistrationSubmitted),
    ("loginForm", Notice::LoginSubmitted),
    ("sellerForm", Notice::ProductSubmitted),
];

pub fn bind(els: &Elements) -> Result<(), JsValue> {
    for (id, modal_id) in MODAL_TRIGGERS {
        if let Some(btn) = dom::by_id(id) {
            let els2 = els.clone();
            dom::listen(&btn, "click", move |_| modal::open_modal(&els2, modal_id))?;
        }
    }

    for (id, notice) in NOTICE_BUTTONS {
        if let Some(btn) = dom::by_id(id) {
            dom::listen(&btn, "click", move |_| dom::alert(notice.message()))?;
        }
    }

    for (id, notice) in FORMS {
        if let Some(form) = dom::by_id(id) {
            let els2 = els.clone();
            dom::listen(&form, "submit", move |event| {
                event.prevent_default();
                show_notice(&els2, notice);
            })?;
        }
    }

    if let Some(btn) = dom::by_id("viewProducts") {
        let els2 = els.clone();
        dom::listen(&btn, "click", move |_| catalog::show(&els2, CategoryFilter::All))?;
    }

    Ok(())
}

fn show_notice(els: &Elements, notice: Notice) {
    dom::alert(notice.message());
    if notice.closes_modals() {
        modal::close_modals(els);
    }
}
