//! Cart and checkout core for a small point-of-sale application.
//!
//! This crate provides the domain logic a POS front end drives:
//!
//! - **Cart**: ordered line items, quantity merging, derived totals
//! - **Checkout**: product resolution, submission, receipts, payment status
//! - **Catalog**: product records as the backend serves them
//! - **Search**: debounced, latest-wins autocomplete state
//!
//! Rendering, persistence, and the backend API itself live elsewhere; the
//! backend is reached only through the [`backend::SalesBackend`] trait,
//! and the rendering layer re-reads cart state after each mutating call.
//!
//! # Example
//!
//! ```rust,ignore
//! use pos_commerce::prelude::*;
//!
//! let mut session = CheckoutCoordinator::new(backend);
//!
//! // "42" is a plain ID; "cola" goes through name search and must
//! // match exactly one product.
//! session.add_item("42".into(), Some(2)).await?;
//! session.add_item("cola".into(), None).await?;
//!
//! println!("total: {}", session.cart().total());
//!
//! let receipt = session.pay(Some(PaymentMethod::Cash)).await?;
//! println!("recorded transaction #{}", receipt.transaction_id);
//! ```

pub mod backend;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::SalesError;
pub use ids::{ProductId, TransactionId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::backend::{BackendError, SalesBackend};
    pub use crate::error::SalesError;
    pub use crate::ids::{ProductId, TransactionId};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::Product;

    // Cart
    pub use crate::cart::{Cart, LineItem};

    // Checkout
    pub use crate::checkout::{
        CancelOutcome, CheckoutCoordinator, CheckoutItem, CheckoutReceipt, CheckoutRequest,
        LineSummary, PaymentMethod, ProductToken, TxStatus, TxStatusReport,
    };

    // Search
    pub use crate::search::{DebounceWindow, SuggestSession, SUGGEST_DEBOUNCE};
}
