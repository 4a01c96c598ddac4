//! Simulated payment processing.

use crate::error::CommerceError;
use crate::ids::generate_id;
use crate::money::Money;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default artificial processing delay.
const DEFAULT_DELAY: Duration = Duration::from_millis(800);

/// Acknowledgment returned by a payment processor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentReceipt {
    /// Processor reference for the charge.
    pub reference: String,
    /// Amount charged.
    pub amount: Money,
}

/// Masked card details kept on the checkout session for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardSummary {
    /// Cardholder name as typed.
    pub cardholder: String,
    /// Last four digits of the card number.
    pub last_four: String,
}

/// Payment processing boundary.
///
/// Checkout is generic over this trait so tests can inject an instant or
/// failing processor.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Charge the given amount, resolving to a receipt.
    async fn process(&self, amount: Money) -> Result<PaymentReceipt, CommerceError>;
}

/// Fixed-delay gateway stand-in. There is no real payment provider behind
/// the storefront: the charge always succeeds after the configured delay.
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    /// Create a gateway with the default delay.
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// Create a gateway with a custom delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentProcessor for SimulatedGateway {
    async fn process(&self, amount: Money) -> Result<PaymentReceipt, CommerceError> {
        tokio::time::sleep(self.delay).await;
        Ok(PaymentReceipt {
            reference: format!("pay_{}", generate_id()),
            amount,
        })
    }
}
