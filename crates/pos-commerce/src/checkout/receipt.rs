//! Checkout confirmation types.

use crate::checkout::PaymentMethod;
use crate::ids::{ProductId, TransactionId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Per-line confirmation echoed back by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    /// Product sold.
    pub product_id: ProductId,
    /// Name at sale time.
    pub name: String,
    /// Unit price charged.
    pub unit_price: Money,
    /// Units sold.
    pub quantity: i64,
    /// Total charged for this line.
    pub line_total: Money,
}

/// A successful checkout confirmation.
///
/// Warnings are informational (e.g., low remaining stock); the sale has
/// already been recorded when they arrive and they never roll it back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutReceipt {
    /// Recorded transaction identifier.
    pub transaction_id: TransactionId,
    /// Confirmed lines.
    #[serde(default)]
    pub items: Vec<LineSummary>,
    /// Confirmed total.
    pub total_amount: Money,
    /// Payment method echo.
    pub payment_method: PaymentMethod,
    /// Backend-side timestamp (ISO 8601).
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Non-fatal notices attached to the sale.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Opaque payment payload, present for QR sales.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_payload: Option<String>,
    /// Base64 PNG of the QR code, present for QR sales.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_png_base64: Option<String>,
    /// Seconds until a pending QR payment expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

impl CheckoutReceipt {
    /// Whether the backend attached non-fatal warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether this sale expects a follow-up status poll before it is
    /// settled (QR flow).
    pub fn awaits_payment(&self) -> bool {
        self.qr_payload.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_wire_format() {
        let json = r#"{
            "transaction_id": 501,
            "items": [
                {"product_id": 7, "name": "Widget", "unit_price": 10.0, "quantity": 2, "line_total": 20.0}
            ],
            "total_amount": 20.0,
            "payment_method": "cash",
            "timestamp": "2025-10-31T14:05:00"
        }"#;

        let receipt: CheckoutReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.transaction_id, TransactionId::new(501));
        assert_eq!(receipt.total_amount, Money::new(2000));
        assert_eq!(receipt.payment_method, PaymentMethod::Cash);
        assert!(!receipt.has_warnings());
        assert!(!receipt.awaits_payment());
    }

    #[test]
    fn test_receipt_with_warnings_and_qr() {
        let json = r#"{
            "transaction_id": 502,
            "total_amount": 3.5,
            "payment_method": "qr",
            "warnings": ["Stock for 'Cola' is low (2 left)"],
            "qr_payload": "PAYMENT|TX:502|AMT:3.50",
            "qr_png_base64": "iVBORw0KGgo=",
            "expires_in": 300
        }"#;

        let receipt: CheckoutReceipt = serde_json::from_str(json).unwrap();
        assert!(receipt.has_warnings());
        assert!(receipt.awaits_payment());
        assert_eq!(receipt.expires_in, Some(300));
        assert!(receipt.items.is_empty());
    }
}
