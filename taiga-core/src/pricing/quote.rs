//! Quote computation
//!
//! A quote prices one (item, weight, discount) combination. Uses Decimal
//! internally and rounds once, half-up, to whole currency units.

use rust_decimal::prelude::*;

use super::rule::PricingRule;

/// Totals round to whole currency units (no fractional minor units)
const DECIMAL_PLACES: u32 = 0;

#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

#[inline]
fn round_currency(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Priced line: pre-discount subtotal, discount and final total
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// Pre-discount subtotal, unrounded
    pub subtotal: f64,
    pub discount_percent: f64,
    /// Discount amount taken off the subtotal
    pub discount_amount: f64,
    /// Final total in whole currency units
    pub total: f64,
}

impl Quote {
    /// Price `weight_kg` of an item with base price `base_price` under
    /// `rule`, applying `discount_percent`.
    pub fn compute(
        rule: &PricingRule,
        base_price: f64,
        weight_kg: f64,
        discount_percent: f64,
    ) -> Quote {
        let subtotal = to_decimal(rule.subtotal(base_price, weight_kg));
        let pct = to_decimal(discount_percent);
        let discount = subtotal * pct / Decimal::ONE_HUNDRED;
        let total = round_currency(subtotal - discount);

        Quote {
            subtotal: subtotal.to_f64().unwrap_or_default(),
            discount_percent,
            discount_amount: discount.to_f64().unwrap_or_default(),
            total,
        }
    }

    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0.0
    }

    /// Pre-discount total, rounded for struck-through display next to the
    /// discounted total.
    pub fn original_total(&self) -> f64 {
        round_currency(to_decimal(self.subtotal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_discounted_quote() {
        // 600 ₽/kg, 2.1 kg, 5% off
        let rule = Category::Honey.pricing_rule();
        let quote = Quote::compute(&rule, 600.0, 2.1, 5.0);

        assert_eq!(quote.subtotal, 1260.0);
        assert_eq!(quote.discount_amount, 63.0);
        assert_eq!(quote.total, 1197.0);
        assert!(quote.has_discount());
        assert_eq!(quote.original_total(), 1260.0);
    }

    #[test]
    fn test_no_discount() {
        let rule = Category::Honey.pricing_rule();
        let quote = Quote::compute(&rule, 600.0, 1.0, 0.0);

        assert_eq!(quote.total, 600.0);
        assert!(!quote.has_discount());
    }

    #[test]
    fn test_rounds_half_up_to_whole_units() {
        // 450 ₽/kg of jam, 350 g: 157.5 rounds up to 158
        let rule = Category::Jam.pricing_rule();
        let quote = Quote::compute(&rule, 450.0, 0.35, 0.0);

        assert_eq!(quote.total, 158.0);
    }

    #[test]
    fn test_ten_percent_preset() {
        let rule = Category::Jam.pricing_rule();
        let quote = Quote::compute(&rule, 600.0, 2.8, 10.0);

        // 1680 - 168 = 1512
        assert_eq!(quote.total, 1512.0);
        assert_eq!(quote.original_total(), 1680.0);
    }
}
