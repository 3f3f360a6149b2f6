//! Checkout submission payload.

use crate::cart::Cart;
use crate::checkout::PaymentMethod;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One `(product, quantity)` pair of a submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutItem {
    /// Product being sold.
    pub product_id: ProductId,
    /// Units sold.
    pub quantity: i64,
}

/// The payload POSTed to the checkout endpoint.
///
/// Built fresh from the cart on every submission attempt; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRequest {
    /// Cart lines in display order.
    pub items: Vec<CheckoutItem>,
    /// Selected payment method.
    pub payment_method: PaymentMethod,
}

impl CheckoutRequest {
    /// Snapshot the current cart lines.
    pub fn from_cart(cart: &Cart, payment_method: PaymentMethod) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|line| CheckoutItem {
                    product_id: line.product_id,
                    quantity: line.quantity,
                })
                .collect(),
            payment_method,
        }
    }
}
