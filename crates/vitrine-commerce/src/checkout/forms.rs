//! Checkout forms and their validation.
//!
//! Constraints are declarative: each field names the checks that apply to
//! it, and one checker runs them all, accumulating field-scoped errors
//! instead of throwing on the first problem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validation error scoped to one form field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    /// Field name as rendered in the form.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

/// Accumulated validation errors for a form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    /// Check if validation passed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a given field, if it failed.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Iterate over all field errors.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn push(&mut self, field: &str, message: String) {
        self.0.push(FieldError {
            field: field.to_string(),
            message,
        });
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{} {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

/// A single declarative field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Constraint {
    /// Field must be non-empty after trimming.
    Required,
    /// Minimum character count.
    MinLen(usize),
    /// Must look like an email address.
    Email,
    /// Must be an MM/YY expiry.
    Expiry,
    /// ASCII digits only.
    Digits,
}

impl Constraint {
    /// The violation message for this constraint against a value, if any.
    fn violation(&self, value: &str) -> Option<String> {
        match self {
            Constraint::Required => value.is_empty().then(|| "is required".to_string()),
            Constraint::MinLen(min) => (value.chars().count() < *min)
                .then(|| format!("must have at least {} characters", min)),
            Constraint::Email => (!is_email(value)).then(|| "is not a valid email".to_string()),
            Constraint::Expiry => {
                (!is_expiry(value)).then(|| "must be in MM/YY format".to_string())
            }
            Constraint::Digits => value
                .chars()
                .any(|c| !c.is_ascii_digit())
                .then(|| "must contain only digits".to_string()),
        }
    }
}

/// Run a field's constraints in order, recording the first violation.
fn check(errors: &mut FormErrors, field: &str, value: &str, constraints: &[Constraint]) {
    let value = value.trim();
    for constraint in constraints {
        if let Some(message) = constraint.violation(value) {
            errors.push(field, message);
            break;
        }
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.len() >= 3
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn is_expiry(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b'/' {
        return false;
    }
    let (month, year) = (&value[..2], &value[3..]);
    if !month.bytes().all(|b| b.is_ascii_digit()) || !year.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(1..=12))
}

/// Shipping address form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AddressForm {
    pub full_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    /// Postal code (CEP), at least 8 characters.
    pub postal_code: String,
}

impl AddressForm {
    /// Validate the form, returning every field that fails.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        check(&mut errors, "full_name", &self.full_name, &[Constraint::Required]);
        check(
            &mut errors,
            "email",
            &self.email,
            &[Constraint::Required, Constraint::Email],
        );
        check(&mut errors, "street", &self.street, &[Constraint::Required]);
        check(&mut errors, "city", &self.city, &[Constraint::Required]);
        check(&mut errors, "state", &self.state, &[Constraint::Required]);
        check(
            &mut errors,
            "postal_code",
            &self.postal_code,
            &[Constraint::Required, Constraint::MinLen(8)],
        );
        errors
    }
}

/// Payment card form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PaymentForm {
    pub cardholder: String,
    pub card_number: String,
    /// Expiry in MM/YY format.
    pub expiry: String,
    pub cvc: String,
}

impl PaymentForm {
    /// Validate the form, returning every field that fails.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        check(&mut errors, "cardholder", &self.cardholder, &[Constraint::Required]);
        check(
            &mut errors,
            "card_number",
            &self.normalized_card_number(),
            &[Constraint::Required, Constraint::Digits, Constraint::MinLen(13)],
        );
        check(
            &mut errors,
            "expiry",
            &self.expiry,
            &[Constraint::Required, Constraint::Expiry],
        );
        check(
            &mut errors,
            "cvc",
            &self.cvc,
            &[Constraint::Required, Constraint::Digits, Constraint::MinLen(3)],
        );
        errors
    }

    /// Card number with spaces stripped.
    pub fn normalized_card_number(&self) -> String {
        self.card_number.replace(' ', "")
    }
}
