//! Checkout coordinator: product resolution, submission, cancellation.

use tracing::{debug, info, warn};

use crate::backend::{BackendError, SalesBackend};
use crate::cart::Cart;
use crate::checkout::{CheckoutReceipt, CheckoutRequest, PaymentMethod, TxStatusReport};
use crate::error::SalesError;
use crate::ids::{ProductId, TransactionId};

/// User input identifying a product to add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductToken {
    /// An identifier resolved by a prior lookup (e.g., the user picked a
    /// suggestion); used directly without re-resolution.
    Resolved(ProductId),
    /// Raw text from the input field: either a numeric ID or a name.
    Raw(String),
}

impl From<ProductId> for ProductToken {
    fn from(id: ProductId) -> Self {
        Self::Resolved(id)
    }
}

impl From<&str> for ProductToken {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

/// Outcome of a cancel request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// There was nothing to cancel.
    AlreadyEmpty,
    /// The user kept the sale; the cart is untouched.
    Declined,
    /// The cart was cleared.
    Cleared,
}

/// Drives one checkout session against a sales backend.
///
/// Owns the session's cart; the add, quantity-edit, pay, and cancel flows
/// are its only writers. External calls are never retried: each either
/// succeeds once or the whole user action fails and must be manually
/// retried. Serializing rapid repeated triggers (one submission in flight
/// at a time) is the embedding UI's responsibility.
pub struct CheckoutCoordinator<B> {
    backend: B,
    cart: Cart,
}

impl<B: SalesBackend> CheckoutCoordinator<B> {
    /// Create a coordinator with an empty cart.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cart: Cart::new(),
        }
    }

    /// Read access to the cart for the rendering layer.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Resolve `token` to a product and add it to the cart.
    ///
    /// A `quantity` of `None` (blank or unparseable field) or a
    /// non-positive value defaults to 1. Returns the resolved product ID;
    /// on any failure the cart is left exactly as it was.
    pub async fn add_item(
        &mut self,
        token: ProductToken,
        quantity: Option<i64>,
    ) -> Result<ProductId, SalesError> {
        let id = self.resolve(&token).await?;

        let product = match self.backend.product(id).await {
            Ok(product) => product,
            Err(BackendError::NotFound) => return Err(SalesError::ProductNotFound(id)),
            Err(err) => return Err(err.into()),
        };

        let quantity = normalize_quantity(quantity);
        debug!(product_id = %id, quantity, "adding to cart");
        self.cart
            .add_or_merge(product.id, product.name, product.price, quantity);
        Ok(id)
    }

    /// Resolution order: previously resolved ID, then digits-as-ID, then
    /// a name search that must land exactly one match.
    async fn resolve(&self, token: &ProductToken) -> Result<ProductId, SalesError> {
        let text = match token {
            ProductToken::Resolved(id) => return Ok(*id),
            ProductToken::Raw(text) => text.trim(),
        };

        if text.is_empty() {
            return Err(SalesError::InvalidInput(
                "enter a product ID or name".to_string(),
            ));
        }

        if let Some(id) = parse_id(text) {
            return Ok(id);
        }

        let matches = self.backend.search(text).await?;
        match matches.as_slice() {
            [hit] => Ok(hit.id),
            hits => {
                debug!(query = text, matches = hits.len(), "query did not resolve");
                Err(SalesError::AmbiguousProduct {
                    query: text.to_string(),
                    matches: hits.len(),
                })
            }
        }
    }

    /// Replace a line's quantity; non-positive removes the line.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        self.cart.set_quantity(product_id, quantity);
    }

    /// Remove a line outright.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        self.cart.remove(product_id)
    }

    /// Submit the current cart as one checkout transaction.
    ///
    /// The cart is cleared only after the backend confirms; on any
    /// failure it is left untouched for a manual retry. Warnings on the
    /// receipt are non-fatal and never roll the sale back. `method`
    /// defaults to cash when the UI does not specify one.
    pub async fn pay(
        &mut self,
        method: Option<PaymentMethod>,
    ) -> Result<CheckoutReceipt, SalesError> {
        if self.cart.is_empty() {
            return Err(SalesError::EmptyCart);
        }

        let request = CheckoutRequest::from_cart(&self.cart, method.unwrap_or_default());
        let receipt = match self.backend.checkout(&request).await {
            Ok(receipt) => receipt,
            Err(err) => {
                warn!(error = %err, "checkout failed, cart kept intact");
                return Err(SalesError::CheckoutFailed(err.detail()));
            }
        };

        info!(
            transaction_id = %receipt.transaction_id,
            total = %receipt.total_amount,
            method = receipt.payment_method.as_str(),
            "checkout complete"
        );
        for warning in &receipt.warnings {
            warn!(%warning, "checkout warning");
        }

        self.cart.clear();
        Ok(receipt)
    }

    /// Cancel the sale.
    ///
    /// Clearing requires explicit confirmation; an unconfirmed cancel
    /// keeps every line. All-or-nothing, no partial cancellation.
    pub fn cancel(&mut self, confirmed: bool) -> CancelOutcome {
        if self.cart.is_empty() {
            return CancelOutcome::AlreadyEmpty;
        }
        if !confirmed {
            return CancelOutcome::Declined;
        }
        self.cart.clear();
        CancelOutcome::Cleared
    }

    /// Poll the payment status of a recorded transaction (QR flow).
    /// Read-only with respect to the cart.
    pub async fn payment_status(&self, id: TransactionId) -> Result<TxStatusReport, SalesError> {
        Ok(self.backend.transaction_status(id).await?)
    }
}

/// Blank or non-positive quantities default to a single unit.
fn normalize_quantity(quantity: Option<i64>) -> i64 {
    match quantity {
        Some(q) if q > 0 => q,
        _ => 1,
    }
}

/// Accept only plain digit strings as direct product IDs; anything else
/// goes through name search.
fn parse_id(text: &str) -> Option<ProductId> {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse::<u64>().ok().map(ProductId::new)
    } else {
        None
    }
}
