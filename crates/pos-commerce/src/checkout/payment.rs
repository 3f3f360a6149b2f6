//! Payment method selection.

use serde::{Deserialize, Serialize};

/// Payment methods accepted at the till.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash at the counter. The default when the UI picks nothing.
    #[default]
    Cash,
    /// Credit card.
    Credit,
    /// QR code payment; the receipt carries the payload to display and
    /// the sale stays pending until scanned and paid.
    Qr,
    /// E-wallet.
    Wallet,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Credit => "credit",
            PaymentMethod::Qr => "qr",
            PaymentMethod::Wallet => "wallet",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cash" => Some(PaymentMethod::Cash),
            "credit" => Some(PaymentMethod::Credit),
            "qr" => Some(PaymentMethod::Qr),
            "wallet" => Some(PaymentMethod::Wallet),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Credit => "Credit card",
            PaymentMethod::Qr => "QR code",
            PaymentMethod::Wallet => "E-wallet",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cash() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Cash);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(PaymentMethod::from_str("QR"), Some(PaymentMethod::Qr));
        assert_eq!(PaymentMethod::from_str("Cash"), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::from_str("bitcoin"), None);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Wallet).unwrap(),
            "\"wallet\""
        );

        let method: PaymentMethod = serde_json::from_str("\"qr\"").unwrap();
        assert_eq!(method, PaymentMethod::Qr);
    }
}
