//! Newtype IDs for type-safe entity references.

use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identifies a catalog product by its URL slug (e.g. `hyperx-cloud-iii`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product ID from a slug.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the underlying slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(slug: &str) -> Self {
        Self(slug.to_owned())
    }
}

/// A customer-facing order reference, e.g. `HH-K3F9XQ2M`.
///
/// Generated client-side as `HH-` followed by 8 random uppercase base36
/// characters. There is no collision guarantee and no registry of issued
/// IDs; uniqueness is probabilistic only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

/// Alphabet for the random portion of an order ID (base36, uppercased).
const ORDER_ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of the random portion of an order ID.
const ORDER_ID_RANDOM_LEN: usize = 8;

impl OrderId {
    /// Prefix shared by every order ID.
    pub const PREFIX: &'static str = "HH-";

    /// Generate a fresh order ID.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let mut id = String::with_capacity(Self::PREFIX.len() + ORDER_ID_RANDOM_LEN);
        id.push_str(Self::PREFIX);
        for _ in 0..ORDER_ID_RANDOM_LEN {
            let idx = rng.random_range(0..ORDER_ID_ALPHABET.len());
            id.push(char::from(ORDER_ID_ALPHABET[idx]));
        }
        Self(id)
    }

    /// Get the order ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_shape() {
        let id = OrderId::generate();
        let s = id.as_str();
        assert_eq!(s.len(), 11);
        assert!(s.starts_with("HH-"));
        assert!(
            s.chars()
                .skip(3)
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_product_id_serde_is_transparent() {
        let id = ProductId::new("hyperx-cloud-iii");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"hyperx-cloud-iii\"");
    }
}
