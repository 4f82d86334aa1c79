//! Shipping method selection.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Shipping method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// 3-5 business days. Free above the free-shipping threshold.
    #[default]
    Standard,
    /// 1-2 business days, flat fee regardless of order size.
    Express,
}

impl ShippingMethod {
    /// Customer-facing description used in confirmation messages.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Standard => "Standard (3-5 days)",
            Self::Express => "Express (1-2 days)",
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Express => write!(f, "express"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ShippingMethod::Express).unwrap(),
            "\"express\""
        );
        let parsed: ShippingMethod = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(parsed, ShippingMethod::Standard);
    }
}
