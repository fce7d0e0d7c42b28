//! Per-category pricing rules
//!
//! Each category owns its price denomination, display format, weight bounds
//! and input parsing mode. Resolution is an exhaustive match on
//! [`Category`], so adding a category without a rule fails to compile.

use rust_decimal::prelude::*;

use crate::error::{ShopError, ShopResult};
use crate::models::Category;

use super::weight::{ParsedWeight, parse_lenient, parse_smart};

/// How a base price is denominated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBasis {
    /// Price is per kilogram
    PerKilogram,
    /// Price is per 100 grams
    PerHundredGrams,
}

/// Which weight parser the rule's input field uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Unit inferred from the value shape, dead zone rejected
    Smart,
    /// Any positive number, clamped at 100 kg
    Lenient,
}

/// Category-specific pricing configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRule {
    pub category: Category,
    /// Denomination the base price is stored in (drives the subtotal)
    pub basis: PriceBasis,
    /// Denomination the unit price is displayed in (may differ from `basis`)
    pub display_basis: PriceBasis,
    pub min_weight: f64,
    pub max_weight: f64,
    /// Input granularity for the weight field
    pub step: f64,
    pub input_mode: InputMode,
    /// Placeholder hint for the weight field
    pub hint: &'static str,
}

impl Category {
    /// Pricing rule for this category
    pub fn pricing_rule(&self) -> PricingRule {
        match self {
            // Jam is priced per kilogram but advertised per 100 g
            Category::Jam => PricingRule {
                category: Category::Jam,
                basis: PriceBasis::PerKilogram,
                display_basis: PriceBasis::PerHundredGrams,
                min_weight: 0.2,
                max_weight: 50.0,
                step: 0.1,
                input_mode: InputMode::Smart,
                hint: "Enter a weight (200-999 g or 0.2-50 kg)",
            },
            Category::Honey => PricingRule {
                category: Category::Honey,
                basis: PriceBasis::PerKilogram,
                display_basis: PriceBasis::PerKilogram,
                min_weight: 0.2,
                max_weight: 50.0,
                step: 0.1,
                input_mode: InputMode::Smart,
                hint: "Enter a weight (200-999 g or 0.2-50 kg)",
            },
            // Tea is sold in small amounts; its price is already per 100 g
            Category::Tea => PricingRule {
                category: Category::Tea,
                basis: PriceBasis::PerHundredGrams,
                display_basis: PriceBasis::PerHundredGrams,
                min_weight: 0.025,
                max_weight: 1.0,
                step: 0.025,
                input_mode: InputMode::Lenient,
                hint: "Enter a weight (0.025-1 kg)",
            },
        }
    }
}

impl PricingRule {
    /// Rule for a wire category name, falling back to the default category
    pub fn for_name(name: &str) -> PricingRule {
        Category::resolve_or_default(name).pricing_rule()
    }

    /// Pre-discount subtotal for `weight_kg` of an item priced `base_price`.
    ///
    /// Unrounded; rounding happens once, after the discount, in
    /// [`Quote::compute`](super::Quote::compute).
    pub fn subtotal(&self, base_price: f64, weight_kg: f64) -> f64 {
        let price = Decimal::from_f64(base_price).unwrap_or_default();
        let weight = Decimal::from_f64(weight_kg).unwrap_or_default();
        let subtotal = match self.basis {
            PriceBasis::PerKilogram => price * weight,
            PriceBasis::PerHundredGrams => price * weight * Decimal::TEN,
        };
        subtotal.to_f64().unwrap_or_default()
    }

    /// Unit-price label for cards and the detail view, e.g. `600 ₽/kg` or
    /// `60 ₽/100 g`.
    pub fn unit_price_label(&self, base_price: f64) -> String {
        match (self.display_basis, self.basis) {
            (PriceBasis::PerKilogram, _) => format!("{} ₽/kg", base_price),
            (PriceBasis::PerHundredGrams, PriceBasis::PerHundredGrams) => {
                format!("{} ₽/100 g", base_price)
            }
            // Stored per kg, shown per 100 g
            (PriceBasis::PerHundredGrams, PriceBasis::PerKilogram) => {
                let per_100g = Decimal::from_f64(base_price).unwrap_or_default() / Decimal::TEN;
                format!(
                    "{} ₽/100 g",
                    per_100g
                        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                        .normalize()
                )
            }
        }
    }

    /// Check a weight against this rule's bounds
    pub fn check_bounds(&self, weight_kg: f64) -> ShopResult<()> {
        if weight_kg < self.min_weight {
            return Err(ShopError::BelowMinimum {
                min_kg: self.min_weight,
            });
        }
        if weight_kg > self.max_weight {
            return Err(ShopError::AboveMaximum {
                max_kg: self.max_weight,
            });
        }
        Ok(())
    }

    /// Parse free-form weight input with this rule's parser, then check it
    /// against the rule's bounds. A parse success outside the bounds is
    /// still a rejection.
    pub fn parse_weight(&self, input: &str) -> ShopResult<ParsedWeight> {
        let parsed = match self.input_mode {
            InputMode::Smart => parse_smart(input)?,
            InputMode::Lenient => parse_lenient(input)?,
        };
        self.check_bounds(parsed.kilograms)?;
        Ok(parsed)
    }
}
