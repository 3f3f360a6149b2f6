//! Product record as returned by the lookup and search endpoints.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as the backend reports it.
///
/// `stock` is the on-hand count at lookup time. It is informational on
/// this side of the wire; stock is checked authoritatively by the backend
/// when the sale is submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    #[serde(rename = "product_id")]
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current unit price.
    pub price: Money,
    /// Units on hand.
    #[serde(rename = "quantity")]
    pub stock: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_format() {
        let json = r#"{"product_id": 7, "name": "Widget", "price": 10.0, "quantity": 25}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, Money::new(1000));
        assert_eq!(product.stock, 25);
    }

    #[test]
    fn test_product_roundtrip_keeps_wire_names() {
        let product = Product {
            id: ProductId::new(3),
            name: "Cola".to_string(),
            price: Money::new(250),
            stock: 12,
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["product_id"], 3);
        assert_eq!(value["quantity"], 12);
    }
}
