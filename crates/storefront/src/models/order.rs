//! Finalized orders and the shipping form they snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hear_hut_core::{OrderId, Price, ShippingMethod};

use super::CartItem;

/// Shipping details captured by the checkout form.
///
/// Fields hold raw form input; validation happens in the checkout flow,
/// which produces a per-field error set rather than mutating the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    /// `None` until the shopper picks a method.
    pub shipping_method: Option<ShippingMethod>,
}

impl Default for ShippingForm {
    /// The form as first presented: empty fields with the default country
    /// and standard shipping preselected.
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: "India".to_owned(),
            shipping_method: Some(ShippingMethod::Standard),
        }
    }
}

impl ShippingForm {
    /// Full recipient name as prefilled into the payment gateway.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }
}

/// An immutable record of a completed purchase.
///
/// Created only on payment confirmation and appended to the per-identity
/// archive; never updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Customer-facing order reference.
    pub id: OrderId,
    /// Cart lines as purchased.
    pub items: Vec<CartItem>,
    /// Shipping form as submitted.
    pub shipping: ShippingForm,
    /// Amount charged, rounded to whole currency units.
    pub total: Price,
    /// When the payment was confirmed.
    pub placed_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_trims_parts() {
        let form = ShippingForm {
            first_name: " Asha ".to_owned(),
            last_name: "Rao".to_owned(),
            ..ShippingForm::default()
        };
        assert_eq!(form.full_name(), "Asha Rao");
    }

    #[test]
    fn test_default_form_preselects() {
        let form = ShippingForm::default();
        assert_eq!(form.country, "India");
        assert_eq!(form.shipping_method, Some(ShippingMethod::Standard));
    }
}
