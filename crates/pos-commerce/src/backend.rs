//! Sales backend collaborator seam.
//!
//! The backend is reached through a request/response contract only; this
//! module owns the trait and the transport error taxonomy, not any
//! concrete client. Adapters (HTTP, test doubles) live with the embedder.

use async_trait::async_trait;

use crate::catalog::Product;
use crate::checkout::{CheckoutReceipt, CheckoutRequest, TxStatusReport};
use crate::ids::{ProductId, TransactionId};

/// Error type for backend calls.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The requested record does not exist.
    #[error("not found")]
    NotFound,

    /// HTTP-level failure.
    #[error("HTTP error: {status}")]
    Http {
        status: u16,
        detail: Option<String>,
    },

    /// The backend could not be reached at all.
    #[error("connection error: {0}")]
    Connection(String),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The backend answered with its error envelope
    /// (`{"error": ..., "detail": ...}`).
    #[error("{error}")]
    Rejected {
        error: String,
        detail: Option<String>,
    },
}

impl BackendError {
    /// Best human-readable message for surfacing to the operator.
    pub fn detail(&self) -> String {
        match self {
            BackendError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            BackendError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// The sales backend consumed by the checkout coordinator.
///
/// Every call either succeeds once or fails the surrounding user action;
/// the coordinator never retries. Timeouts are the implementation's
/// concern.
#[async_trait]
pub trait SalesBackend {
    /// Fetch a single product by ID.
    ///
    /// Returns [`BackendError::NotFound`] when the ID does not exist.
    async fn product(&self, id: ProductId) -> Result<Product, BackendError>;

    /// Search products by free-text query.
    ///
    /// Matches are ordered and possibly empty. The reference backend does
    /// a case-insensitive name-prefix match capped at 10 rows.
    async fn search(&self, query: &str) -> Result<Vec<Product>, BackendError>;

    /// Submit a finalized cart as one checkout transaction.
    async fn checkout(&self, request: &CheckoutRequest) -> Result<CheckoutReceipt, BackendError>;

    /// Poll the payment status of a recorded transaction.
    async fn transaction_status(&self, id: TransactionId) -> Result<TxStatusReport, BackendError>;
}
