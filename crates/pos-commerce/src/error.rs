//! Sales error types.

use crate::backend::BackendError;
use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can terminate a user-initiated sales action.
///
/// Every variant is terminal for the action that raised it: nothing is
/// retried automatically, and the cart is never left partially mutated.
#[derive(Error, Debug)]
pub enum SalesError {
    /// The entered token could not be interpreted at all.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A name search matched zero or several products; the caller must
    /// disambiguate (e.g., via the suggestion list) rather than guess.
    #[error("search for '{query}' matched {matches} products, expected exactly one")]
    AmbiguousProduct { query: String, matches: usize },

    /// The resolved ID does not exist on the backend.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Checkout was attempted with no lines in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The backend rejected or failed the checkout submission.
    #[error("checkout failed: {0}")]
    CheckoutFailed(String),

    /// A lookup or search call failed in transit.
    #[error(transparent)]
    Backend(#[from] BackendError),
}
