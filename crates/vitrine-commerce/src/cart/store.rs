//! Persisted session cart.

use crate::cart::{Cart, LineItem};
use crate::ids::ProductId;
use crate::money::Money;
use vitrine_kv::{KeyValue, KeyValueExt};

/// Fixed key the serialized cart lives under.
pub const CART_KEY: &str = "vitrine:cart";

/// The session cart, persisted through a [`KeyValue`] backend.
///
/// Loaded once at session start and written after every mutation. The
/// in-memory cart is always the source of truth: a backend that fails to
/// read or write is logged and otherwise ignored, so mutations never
/// surface an error to the caller.
pub struct CartStore<S: KeyValue> {
    cart: Cart,
    backend: S,
}

impl<S: KeyValue> CartStore<S> {
    /// Load the stored cart, or start empty.
    ///
    /// A missing key starts a fresh cart; a read or decode failure does the
    /// same, with a warning, rather than blocking the session.
    pub fn load(backend: S) -> Self {
        let cart = match backend.get_json::<Cart>(CART_KEY) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(error) => {
                tracing::warn!(%error, "failed to load stored cart, starting empty");
                Cart::new()
            }
        };
        Self { cart, backend }
    }

    /// Add one unit of a product, then persist.
    pub fn add(
        &mut self,
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        image: Option<String>,
    ) {
        self.cart.add(product_id, name, unit_price, image);
        self.persist();
    }

    /// Remove a line item, then persist. No-op for absent ids.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let removed = self.cart.remove(product_id);
        if removed {
            self.persist();
        }
        removed
    }

    /// Set a line item's quantity (zero or less removes), then persist.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        let changed = self.cart.set_quantity(product_id, quantity);
        if changed {
            self.persist();
        }
        changed
    }

    /// Empty the cart, then persist.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.cart.items
    }

    /// Sum of quantities across all line items.
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    /// Sum of price x quantity over all line items.
    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// The underlying cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    fn persist(&self) {
        if let Err(error) = self.backend.set_json(CART_KEY, &self.cart) {
            tracing::warn!(%error, "failed to persist cart, keeping in-memory state");
        }
    }
}
