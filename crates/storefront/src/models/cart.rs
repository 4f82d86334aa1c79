//! Cart line items.

use serde::{Deserialize, Serialize};

use hear_hut_core::{Price, ProductId};

use crate::catalog::Product;

/// Quantity assumed for line items persisted before quantities existed.
const fn default_quantity() -> u32 {
    1
}

/// One line of a cart.
///
/// Adding the same product twice produces two independent lines; lines are
/// never merged by product id. The catalog fields needed to render and
/// price the line are snapshotted at add time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog product this line refers to.
    #[serde(rename = "id")]
    pub product: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Brand at add time.
    pub brand: String,
    /// Unit price at add time.
    pub price: Price,
    /// Pre-discount unit price at add time.
    #[serde(rename = "originalPrice")]
    pub original_price: Price,
    /// Units of this line, at least 1. Legacy items without the field
    /// deserialize to 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CartItem {
    /// Snapshot a catalog product as a one-unit line item.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            product: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.price,
            original_price: product.original_price,
            quantity: 1,
        }
    }

    /// Price of the whole line (unit price x quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        Price::new(
            self.price.amount * rust_decimal::Decimal::from(self.quantity),
            self.price.currency_code,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_item_defaults_to_quantity_one() {
        let json = r#"{
            "id": "hyperx-cloud-iii",
            "name": "HyperX Cloud III",
            "brand": "HyperX",
            "price": {"amount": "6999", "currency_code": "INR"},
            "originalPrice": {"amount": "8999", "currency_code": "INR"}
        }"#;

        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_line_total() {
        let json = r#"{
            "id": "x",
            "name": "X",
            "brand": "B",
            "price": {"amount": "2599", "currency_code": "INR"},
            "originalPrice": {"amount": "3999", "currency_code": "INR"},
            "quantity": 3
        }"#;

        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.line_total(), Price::from_rupees(7797));
    }
}
