//! Canned messages for flows that are placeholders in the storefront.
//!
//! Form submissions always report success; no validation takes place.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    RegistrationSubmitted,
    LoginSubmitted,
    ProductSubmitted,
    WishlistUnavailable,
    FeedbackUnavailable,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::RegistrationSubmitted => "Registration successful!",
            Notice::LoginSubmitted => "Login successful!",
            Notice::ProductSubmitted => "Your product has been submitted to ALIMAQ for review!",
            Notice::WishlistUnavailable => "Wishlist feature coming soon!",
            Notice::FeedbackUnavailable => "Thank you for your feedback! Feature under development.",
        }
    }

    /// Whether the notice ends the current modal flow.
    pub fn closes_modals(&self) -> bool {
        matches!(
            self,
            Notice::RegistrationSubmitted | Notice::LoginSubmitted | Notice::ProductSubmitted
        )
    }
}
