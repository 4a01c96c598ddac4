//! Cart and line item types.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// One cart exists per browsing session. Line items keep their insertion
/// order for display, and the cart never holds two line items with the same
/// product id: adding an id that is already present bumps its quantity.
///
/// Totals are derived on every read, never cached. Mutations cannot fail;
/// persistence concerns live in [`CartStore`](crate::cart::CartStore).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart, in insertion order.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new() -> Self {
        let now = current_timestamp();
        Self {
            items: Vec::new(),
            currency: Currency::BRL,
            created_at: now,
            updated_at: now,
        }
    }

    /// Add one unit of a product to the cart.
    ///
    /// If the product is already in the cart its quantity goes up by one and
    /// the stored name/price/image stay as they were when the item first
    /// went in: the cart reflects what the shopper saw when they clicked,
    /// not the catalog's current state. Otherwise a new line item is
    /// appended with quantity 1.
    pub fn add(
        &mut self,
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        image: Option<String>,
    ) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            existing.quantity += 1;
        } else {
            self.items.push(LineItem {
                product_id,
                name: name.into(),
                unit_price,
                image,
                quantity: 1,
            });
        }
        self.updated_at = current_timestamp();
    }

    /// Remove a line item by product id.
    ///
    /// Removing an absent id is a no-op, not an error.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Set a line item's quantity.
    ///
    /// A quantity of zero or less removes the item, so a present line item
    /// always has quantity >= 1. Returns whether the cart changed.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = quantity;
            self.updated_at = current_timestamp();
            true
        } else {
            false
        }
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = current_timestamp();
    }

    /// Get total item count (sum of quantities).
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of price x quantity over all line items. Recomputed on every call.
    pub fn subtotal(&self) -> Money {
        Money::sum(self.items.iter().map(|i| i.line_total()), self.currency)
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line item by product id.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The catalog product this line refers to.
    pub product_id: ProductId,
    /// Product name (as seen when added).
    pub name: String,
    /// Unit price (as seen when added).
    pub unit_price: Money,
    /// Image reference, not owned by the cart.
    pub image: Option<String>,
    /// Quantity, always >= 1.
    pub quantity: i64,
}

impl LineItem {
    /// Total for this line (unit_price * quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(cents: i64) -> Money {
        Money::new(cents, Currency::BRL)
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_repeat_add_aggregates_quantity() {
        let mut cart = Cart::new();
        for _ in 0..4 {
            cart.add(ProductId::new("oleo-alecrim"), "Óleo de Alecrim", price(4990), None);
        }

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.get_item(&ProductId::new("oleo-alecrim")).unwrap().quantity, 4);
    }

    #[test]
    fn test_repeat_add_keeps_first_seen_price() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p-1"), "Difusor", price(1000), None);
        // Same id, different price: the original price stays.
        cart.add(ProductId::new("p-1"), "Difusor", price(9999), None);

        let item = cart.get_item(&ProductId::new("p-1")).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price, price(1000));
    }

    #[test]
    fn test_subtotal_tracks_every_mutation() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p-1"), "A", price(1000), None);
        cart.add(ProductId::new("p-1"), "A", price(1000), None);
        cart.add(ProductId::new("p-2"), "B", price(2500), None);
        assert_eq!(cart.subtotal(), price(4500));

        cart.set_quantity(&ProductId::new("p-1"), 5);
        assert_eq!(cart.subtotal(), price(7500));

        cart.remove(&ProductId::new("p-2"));
        assert_eq!(cart.subtotal(), price(5000));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p-1"), "A", price(1000), None);
        assert!(!cart.remove(&ProductId::new("missing")));
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_zero_quantity_removes_item() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p-1"), "A", price(1000), None);
        assert!(cart.set_quantity(&ProductId::new("p-1"), 0));
        assert!(cart.get_item(&ProductId::new("p-1")).is_none());
    }

    #[test]
    fn test_negative_quantity_removes_item() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p-1"), "A", price(1000), None);
        assert!(cart.set_quantity(&ProductId::new("p-1"), -1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_resets_totals() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p-1"), "A", price(1000), None);
        cart.add(ProductId::new("p-2"), "B", price(2000), None);
        cart.clear();

        assert_eq!(cart.total_items(), 0);
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p-2"), "B", price(2000), None);
        cart.add(ProductId::new("p-1"), "A", price(1000), None);
        cart.add(ProductId::new("p-2"), "B", price(2000), None);

        let names: Vec<&str> = cart.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
