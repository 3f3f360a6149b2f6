//! Shopping cart module.
//!
//! The cart is the only mutable state of a checkout session. Every
//! mutation funnels through its operations so the one-line-per-product
//! and positive-quantity invariants hold at all times.

mod cart;

pub use cart::{Cart, LineItem};
