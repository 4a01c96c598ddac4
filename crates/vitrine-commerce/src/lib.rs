//! Cart and checkout domain logic for Vitrine.
//!
//! This crate holds the purchase side of the storefront:
//!
//! - **Money**: cents-based monetary values with currency
//! - **Cart**: line items with quantity aggregation and derived totals
//! - **Cart store**: the session cart persisted through a key-value port
//! - **Checkout**: the Cart → Address → Payment → Confirmation state machine
//!   with guarded transitions, form validation, and a simulated gateway
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_commerce::prelude::*;
//! use vitrine_kv::MemoryStore;
//!
//! let mut cart = CartStore::load(MemoryStore::new());
//! cart.add(
//!     ProductId::new("oleo-alecrim"),
//!     "Óleo Essencial de Alecrim",
//!     Money::new(4990, Currency::BRL),
//!     None,
//! );
//!
//! let mut checkout = CheckoutSession::new();
//! checkout.proceed_to_address(cart.cart())?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{Cart, CartStore, LineItem, CART_KEY};

    // Checkout
    pub use crate::checkout::{
        AddressForm, CardSummary, CheckoutSession, CheckoutStep, CheckoutTotals, FieldError,
        FormErrors, PaymentForm, PaymentProcessor, PaymentReceipt, SimulatedGateway,
    };
}
