//! Pricing engine.
//!
//! A pure function from a cart snapshot and shipping choice to monetary
//! totals. Deterministic, no side effects; fractional precision is kept
//! until the final rounding into a payable amount.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;

use hear_hut_core::{CurrencyCode, Price, ShippingMethod};

use crate::models::CartItem;

/// Subtotal above which standard shipping is free (strictly greater than).
pub const FREE_SHIPPING_THRESHOLD: i64 = 5000;

/// Standard shipping fee below the free threshold.
pub const STANDARD_SHIPPING_FEE: i64 = 99;

/// Express shipping fee, charged regardless of subtotal.
pub const EXPRESS_SHIPPING_FEE: i64 = 299;

/// Flat GST rate applied to the subtotal only (never to shipping).
pub const TAX_RATE_PERCENT: i64 = 18;

/// Monetary breakdown of a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    /// Exact total; fractional paise retained.
    pub total: Decimal,
    pub currency: CurrencyCode,
}

impl Totals {
    /// Total units across all lines.
    #[must_use]
    pub fn item_count(items: &[CartItem]) -> u64 {
        items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// The amount actually charged: the exact total rounded to the nearest
    /// whole currency unit. This is the only place rounding happens.
    #[must_use]
    pub fn payable(&self) -> Price {
        let rounded = self
            .total
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Price::new(rounded, self.currency)
    }

    /// The payable amount in minor currency units, as the gateway expects.
    #[must_use]
    pub fn payable_minor_units(&self) -> i64 {
        self.payable().minor_units()
    }
}

/// Compute totals for a cart snapshot and shipping choice.
///
/// - subtotal is Σ(unit price × quantity)
/// - standard shipping is free strictly above the threshold, a flat fee for
///   any non-empty cart at or below it, and zero for an empty cart
/// - express shipping is a flat fee regardless of subtotal
/// - tax applies to the subtotal only
#[must_use]
pub fn compute_totals(items: &[CartItem], method: ShippingMethod) -> Totals {
    let subtotal: Decimal = items
        .iter()
        .map(|i| i.price.amount * Decimal::from(i.quantity))
        .sum();

    let shipping = match method {
        ShippingMethod::Express => Decimal::from(EXPRESS_SHIPPING_FEE),
        ShippingMethod::Standard => {
            if subtotal > Decimal::from(FREE_SHIPPING_THRESHOLD) || subtotal.is_zero() {
                Decimal::ZERO
            } else {
                Decimal::from(STANDARD_SHIPPING_FEE)
            }
        }
    };

    let tax = subtotal * Decimal::new(TAX_RATE_PERCENT, 2);

    Totals {
        subtotal,
        shipping,
        tax,
        total: subtotal + shipping + tax,
        currency: CurrencyCode::INR,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hear_hut_core::ProductId;

    use super::*;

    fn line(price: i64, quantity: u32) -> CartItem {
        CartItem {
            product: ProductId::from("test-product"),
            name: "Test".to_owned(),
            brand: "Test".to_owned(),
            price: Price::from_rupees(price),
            original_price: Price::from_rupees(price),
            quantity,
        }
    }

    #[test]
    fn test_free_shipping_above_threshold() {
        let totals = compute_totals(&[line(6999, 1)], ShippingMethod::Standard);
        assert_eq!(totals.subtotal, Decimal::from(6999));
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::new(125_982, 2)); // 1259.82
        assert_eq!(totals.total, Decimal::new(825_882, 2)); // 8258.82
        assert_eq!(totals.payable(), Price::from_rupees(8259));
        assert_eq!(totals.payable_minor_units(), 825_900);
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly 5000 still pays the standard fee.
        let totals = compute_totals(&[line(2500, 2)], ShippingMethod::Standard);
        assert_eq!(totals.subtotal, Decimal::from(5000));
        assert_eq!(totals.shipping, Decimal::from(STANDARD_SHIPPING_FEE));
    }

    #[test]
    fn test_empty_cart_ships_free() {
        let totals = compute_totals(&[], ShippingMethod::Standard);
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_express_fee_ignores_subtotal() {
        let small = compute_totals(&[line(100, 1)], ShippingMethod::Express);
        let large = compute_totals(&[line(50_000, 1)], ShippingMethod::Express);
        assert_eq!(small.shipping, Decimal::from(EXPRESS_SHIPPING_FEE));
        assert_eq!(large.shipping, Decimal::from(EXPRESS_SHIPPING_FEE));
    }

    #[test]
    fn test_tax_excludes_shipping() {
        let totals = compute_totals(&[line(1000, 1)], ShippingMethod::Express);
        // 18% of 1000, not of 1299.
        assert_eq!(totals.tax, Decimal::from(180));
    }

    #[test]
    fn test_monotonic_in_subtotal_for_fixed_method() {
        // Express is monotonic across the whole range; standard is
        // monotonic on either side of the free-shipping threshold (the
        // flat fee dropping off at the boundary is the one step down).
        let mut last = Decimal::MIN;
        for rupees in [0, 1, 99, 2500, 5000, 5001, 6999, 20_000] {
            let totals = compute_totals(&[line(rupees, 1)], ShippingMethod::Express);
            assert!(totals.total >= last);
            last = totals.total;
        }

        for range in [[1, 2500, 5000], [5001, 6999, 20_000]] {
            let mut last = Decimal::MIN;
            for rupees in range {
                let totals = compute_totals(&[line(rupees, 1)], ShippingMethod::Standard);
                assert!(totals.total >= last);
                last = totals.total;
            }
        }
    }

    #[test]
    fn test_quantity_multiplies_subtotal() {
        let totals = compute_totals(&[line(2599, 3)], ShippingMethod::Standard);
        assert_eq!(totals.subtotal, Decimal::from(7797));
    }

    #[test]
    fn test_item_count_sums_quantities() {
        assert_eq!(Totals::item_count(&[line(10, 2), line(20, 5)]), 7);
    }
}
