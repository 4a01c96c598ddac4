//! Cart module.
//!
//! Contains the cart, its line items, and the persisted session store.

mod cart;
mod store;

pub use cart::{Cart, LineItem};
pub use store::{CartStore, CART_KEY};
