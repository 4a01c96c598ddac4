//! Commerce error types.

use crate::checkout::FormErrors;
use thiserror::Error;

/// Errors that can occur in cart and checkout operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout cannot leave the cart step with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// A form failed validation. Field-scoped messages are carried along.
    #[error("Validation failed: {0}")]
    Validation(FormErrors),

    /// The payment processor rejected or failed the charge.
    #[error("Payment failed: {0}")]
    PaymentFailed(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CommerceError {
    /// Field-scoped validation errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FormErrors> {
        match self {
            CommerceError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
