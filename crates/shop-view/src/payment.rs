//! M-Pesa payment placeholder.
//!
//! The checkout asks for a phone number and acknowledges it. Nothing is
//! validated or transmitted.

pub const PHONE_PROMPT: &str = "Enter your M-Pesa phone number (2547...)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPrompt {
    phone: String,
}

impl PaymentPrompt {
    /// Turn the answer to [`PHONE_PROMPT`] into a request. A cancelled or empty
    /// answer yields `None`.
    pub fn from_input(answer: Option<String>) -> Option<Self> {
        answer
            .filter(|phone| !phone.is_empty())
            .map(|phone| Self { phone })
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn confirmation(&self) -> String {
        format!("M-Pesa payment request sent to {}. Thank you!", self.phone)
    }
}
