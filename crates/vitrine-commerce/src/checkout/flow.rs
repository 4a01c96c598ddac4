//! Checkout state machine.

use crate::cart::{Cart, CartStore};
use crate::checkout::forms::{AddressForm, PaymentForm};
use crate::checkout::payment::{CardSummary, PaymentProcessor, PaymentReceipt};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use vitrine_kv::KeyValue;

/// Flat delivery fee in centavos (R$15.00).
pub const DELIVERY_FEE_CENTS: i64 = 1500;

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Cart review.
    Cart,
    /// Shipping address.
    Address,
    /// Payment details.
    Payment,
    /// Order confirmed; terminal.
    Confirmation,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "cart",
            CheckoutStep::Address => "address",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Confirmation => "confirmation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "Cart",
            CheckoutStep::Address => "Address",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Confirmation => "Confirmation",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Cart => 1,
            CheckoutStep::Address => 2,
            CheckoutStep::Payment => 3,
            CheckoutStep::Confirmation => 4,
        }
    }
}

/// Totals shown from the address step onward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CheckoutTotals {
    /// Cart subtotal.
    pub subtotal: Money,
    /// Flat delivery fee.
    pub delivery_fee: Money,
    /// subtotal + delivery fee.
    pub total: Money,
}

/// One checkout attempt, created when the user leaves the cart step.
///
/// Steps move strictly forward (Cart, Address, Payment, Confirmation) with
/// explicit single-step `back` transitions; nothing skips ahead, and
/// Confirmation cannot be left. Every forward transition is guarded, and a
/// failed guard changes no state at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSession {
    /// Current step.
    step: CheckoutStep,
    /// Shipping address, present once the address step has been passed.
    shipping_address: Option<AddressForm>,
    /// Masked card details, present once payment has been taken.
    payment_card: Option<CardSummary>,
    /// Flat delivery fee.
    delivery_fee: Money,
}

impl CheckoutSession {
    /// Create a new session at the cart step.
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::Cart,
            shipping_address: None,
            payment_card: None,
            delivery_fee: Money::new(DELIVERY_FEE_CENTS, Currency::BRL),
        }
    }

    /// Override the delivery fee (e.g., for a non-BRL cart).
    pub fn with_delivery_fee(mut self, fee: Money) -> Self {
        self.delivery_fee = fee;
        self
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Flat delivery fee.
    pub fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    /// Shipping address, once submitted.
    pub fn shipping_address(&self) -> Option<&AddressForm> {
        self.shipping_address.as_ref()
    }

    /// Masked card details, once payment has been taken.
    pub fn payment_card(&self) -> Option<&CardSummary> {
        self.payment_card.as_ref()
    }

    /// Check if checkout reached confirmation.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Confirmation
    }

    /// Totals for display. Recomputed on every call.
    ///
    /// # Panics
    /// Panics if the delivery fee currency differs from the cart currency.
    pub fn totals(&self, cart: &Cart) -> CheckoutTotals {
        let subtotal = cart.subtotal();
        CheckoutTotals {
            subtotal,
            delivery_fee: self.delivery_fee,
            total: subtotal + self.delivery_fee,
        }
    }

    /// Leave the cart step for the address step.
    ///
    /// Blocked with [`CommerceError::EmptyCart`] when the cart holds
    /// nothing; the step does not change.
    pub fn proceed_to_address(&mut self, cart: &Cart) -> Result<CheckoutStep, CommerceError> {
        self.expect_step(CheckoutStep::Cart, CheckoutStep::Address)?;
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        self.step = CheckoutStep::Address;
        Ok(self.step)
    }

    /// Submit the shipping address and move to the payment step.
    ///
    /// Invalid input returns the field-error map and changes nothing.
    pub fn submit_address(&mut self, form: AddressForm) -> Result<CheckoutStep, CommerceError> {
        self.expect_step(CheckoutStep::Address, CheckoutStep::Payment)?;
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(CommerceError::Validation(errors));
        }
        self.shipping_address = Some(form);
        self.step = CheckoutStep::Payment;
        Ok(self.step)
    }

    /// Take payment and confirm the order.
    ///
    /// Validates the card form, runs the processor, and only then clears
    /// the cart and enters Confirmation, so the whole transition is one
    /// step from the caller's point of view. A validation or processor
    /// failure leaves the session and the cart exactly as they were.
    pub async fn submit_payment<S: KeyValue>(
        &mut self,
        cart: &mut CartStore<S>,
        form: PaymentForm,
        gateway: &dyn PaymentProcessor,
    ) -> Result<PaymentReceipt, CommerceError> {
        self.expect_step(CheckoutStep::Payment, CheckoutStep::Confirmation)?;
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(CommerceError::Validation(errors));
        }

        let total = self.totals(cart.cart()).total;
        let receipt = gateway.process(total).await?;

        let digits = form.normalized_card_number();
        self.payment_card = Some(CardSummary {
            cardholder: form.cardholder.trim().to_string(),
            last_four: digits[digits.len().saturating_sub(4)..].to_string(),
        });
        cart.clear();
        self.step = CheckoutStep::Confirmation;
        Ok(receipt)
    }

    /// Go back to the immediately preceding step.
    ///
    /// Only Address → Cart and Payment → Address exist; the cart step has
    /// nothing before it and Confirmation is terminal.
    pub fn back(&mut self) -> Result<CheckoutStep, CommerceError> {
        let prev = match self.step {
            CheckoutStep::Address => CheckoutStep::Cart,
            CheckoutStep::Payment => CheckoutStep::Address,
            CheckoutStep::Cart | CheckoutStep::Confirmation => {
                return Err(CommerceError::InvalidTransition {
                    from: self.step.as_str().to_string(),
                    to: "none".to_string(),
                })
            }
        };
        self.step = prev;
        Ok(prev)
    }

    fn expect_step(
        &self,
        expected: CheckoutStep,
        target: CheckoutStep,
    ) -> Result<(), CommerceError> {
        if self.step != expected {
            return Err(CommerceError::InvalidTransition {
                from: self.step.as_str().to_string(),
                to: target.as_str().to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}
