//! Checkout placeholder: asks for an M-Pesa number and acknowledges it.

use crate::dom::{self, Elements};
use crate::modal;
use shop_view::PaymentPrompt;
use shop_view::payment::PHONE_PROMPT;

pub fn on_pay(els: &Elements) {
    if let Some(request) = PaymentPrompt::from_input(dom::prompt(PHONE_PROMPT)) {
        gloo_console::log!("simulated payment request for", request.phone());
        dom::alert(&request.confirmation());
    }
    modal::close_modals(els);
}
