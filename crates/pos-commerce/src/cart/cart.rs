//! Cart and line item types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product's quantity entry within a cart.
///
/// Name and unit price are captured when the line is first added; a later
/// price change on the backend does not affect the line until it is
/// removed and re-added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being sold.
    pub product_id: ProductId,
    /// Display name, captured at add time.
    pub name: String,
    /// Unit price, captured at add time.
    pub unit_price: Money,
    /// Units of this product in the cart. Always at least 1.
    pub quantity: i64,
}

impl LineItem {
    /// Total for this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// An in-memory shopping cart: line items in insertion order, at most one
/// line per product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a product, merging into an existing line when one exists.
    ///
    /// Duplicate adds accumulate quantity; that is the defined behavior,
    /// not a conflict. A non-positive quantity is coerced to 1.
    pub fn add_or_merge(
        &mut self,
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) {
        let quantity = quantity.max(1);

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(LineItem {
            product_id,
            name: name.into(),
            unit_price,
            quantity,
        });
    }

    /// Replace a line's quantity.
    ///
    /// A non-positive quantity removes the line; removal-by-zero is
    /// intentional policy, not an error path. Absent product IDs are a
    /// silent no-op.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Remove a line. Returns whether anything was removed; a missing ID
    /// is not an error.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Sum of all line totals, recomputed from current state on every
    /// call. Pure; no side effects.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Drop every line. Used after a confirmed checkout or a cancelled
    /// sale.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Lines in insertion order, for rendering.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total unit count across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ProductId {
        ProductId::new(7)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_or_merge(widget(), "Widget", Money::new(1000), 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Money::new(2000));
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        cart.add_or_merge(widget(), "Widget", Money::new(1000), 2);
        cart.add_or_merge(widget(), "Widget", Money::new(1000), 3);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get(widget()).map(|i| i.quantity), Some(5));
        assert_eq!(cart.total(), Money::new(5000));
    }

    #[test]
    fn test_add_coerces_non_positive_quantity_to_one() {
        let mut cart = Cart::new();
        cart.add_or_merge(widget(), "Widget", Money::new(1000), 0);
        assert_eq!(cart.get(widget()).map(|i| i.quantity), Some(1));

        cart.add_or_merge(widget(), "Widget", Money::new(1000), -4);
        assert_eq!(cart.get(widget()).map(|i| i.quantity), Some(2));
    }

    #[test]
    fn test_price_captured_at_add_time() {
        let mut cart = Cart::new();
        cart.add_or_merge(widget(), "Widget", Money::new(1000), 1);
        // A merge does not refresh the stored unit price.
        cart.add_or_merge(widget(), "Widget", Money::new(9999), 1);

        assert_eq!(cart.get(widget()).map(|i| i.unit_price), Some(Money::new(1000)));
        assert_eq!(cart.total(), Money::new(2000));
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_or_merge(widget(), "Widget", Money::new(1000), 1);
        cart.set_quantity(widget(), 5);

        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Money::new(5000));
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_or_merge(widget(), "Widget", Money::new(1000), 5);
        cart.set_quantity(widget(), 0);

        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_set_quantity_negative_removes_line() {
        let mut cart = Cart::new();
        cart.add_or_merge(widget(), "Widget", Money::new(1000), 5);
        cart.set_quantity(widget(), -3);

        assert!(cart.get(widget()).is_none());
    }

    #[test]
    fn test_set_quantity_on_missing_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_or_merge(widget(), "Widget", Money::new(1000), 1);
        cart.set_quantity(ProductId::new(999), 4);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total(), Money::new(1000));
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_or_merge(widget(), "Widget", Money::new(1000), 1);

        assert!(cart.remove(widget()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_or_merge(widget(), "Widget", Money::new(1000), 1);

        assert!(!cart.remove(ProductId::new(999)));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_or_merge(ProductId::new(3), "Cola", Money::new(250), 1);
        cart.add_or_merge(ProductId::new(1), "Widget", Money::new(1000), 1);
        // Merging must not reorder.
        cart.add_or_merge(ProductId::new(3), "Cola", Money::new(250), 1);

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Cola", "Widget"]);
    }

    #[test]
    fn test_total_recomputes_after_every_mutation() {
        let mut cart = Cart::new();
        cart.add_or_merge(widget(), "Widget", Money::new(1000), 2);
        assert_eq!(cart.total(), Money::new(2000));

        cart.add_or_merge(widget(), "Widget", Money::new(1000), 3);
        assert_eq!(cart.total(), Money::new(5000));

        cart.set_quantity(widget(), 0);
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_or_merge(widget(), "Widget", Money::new(1000), 2);
        cart.add_or_merge(ProductId::new(3), "Cola", Money::new(250), 1);
        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }
}
