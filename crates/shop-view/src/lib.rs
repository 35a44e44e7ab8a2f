//! Presentation layer for the storefront.
//!
//! Everything here is a pure function of catalog and cart state: markup
//! templates, the modal visibility state machine, the payment prompt and the
//! canned notices shown by placeholder flows. The browser module applies the
//! results to the DOM.

pub mod escape;
pub mod modal;
pub mod notice;
pub mod payment;
pub mod render;

pub use modal::{ModalId, ModalSet};
pub use payment::PaymentPrompt;
