//! Transaction payment status.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Status of a submitted transaction, as reported by the backend.
///
/// Only QR sales stay `Pending` after checkout; other methods settle
/// immediately. A pending QR sale expires backend-side after its payment
/// window (about five minutes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    /// Awaiting payment; keep polling.
    Pending,
    /// Payment received.
    Paid,
    /// Cancelled before payment.
    Canceled,
    /// The payment window elapsed without payment.
    Expired,
    /// The backend has no record of this transaction.
    #[default]
    Unknown,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Pending => "pending",
            TxStatus::Paid => "paid",
            TxStatus::Canceled => "canceled",
            TxStatus::Expired => "expired",
            TxStatus::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(TxStatus::Pending),
            "paid" => Some(TxStatus::Paid),
            "canceled" => Some(TxStatus::Canceled),
            "expired" => Some(TxStatus::Expired),
            "unknown" => Some(TxStatus::Unknown),
            _ => None,
        }
    }

    /// Check if the transaction has settled; terminal states need no
    /// further polling.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TxStatus::Paid | TxStatus::Canceled | TxStatus::Expired)
    }
}

/// Status poll response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TxStatusReport {
    /// Current status.
    pub status: TxStatus,
    /// Amount due or paid, when the backend knows the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}
