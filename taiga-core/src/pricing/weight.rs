//! Weight input parsing
//!
//! Two parsers, selected per pricing rule:
//!
//! - [`parse_smart`] infers the unit from the shape of the number (grams vs
//!   kilograms) and rejects the 50-199 integer dead zone where both readings
//!   are plausible. The dead zone is product policy, not a bug.
//! - [`parse_lenient`] accepts any positive number as kilograms and silently
//!   clamps runaway values to 100 kg.
//!
//! Bound checks against the active rule happen afterwards, in
//! [`PricingRule::parse_weight`](super::PricingRule::parse_weight).

use crate::error::{ShopError, ShopResult};

/// Unit the shopper's input was read as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilograms,
    Grams,
}

/// A successfully parsed weight, always stored in kilograms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedWeight {
    pub kilograms: f64,
    /// Unit the input was interpreted in (for echoing back to the shopper)
    pub unit: WeightUnit,
}

/// Upper clamp for the lenient parser
const LENIENT_MAX_KG: f64 = 100.0;

fn parse_number(input: &str) -> ShopResult<f64> {
    let value: f64 = input.trim().parse().map_err(|_| ShopError::NotANumber)?;
    if !value.is_finite() {
        return Err(ShopError::NotANumber);
    }
    Ok(value)
}

/// Smart-unit parser: decides between grams and kilograms from the value
pub fn parse_smart(input: &str) -> ShopResult<ParsedWeight> {
    let value = parse_number(input)?;
    let has_point = input.contains('.');
    let is_integer = value.fract() == 0.0;

    // Fractional 0.2-49.9 reads as kilograms
    if has_point && (0.2..=49.9).contains(&value) {
        return Ok(ParsedWeight {
            kilograms: value,
            unit: WeightUnit::Kilograms,
        });
    }

    // Whole 1-50 reads as kilograms
    if is_integer && (1.0..=50.0).contains(&value) {
        return Ok(ParsedWeight {
            kilograms: value,
            unit: WeightUnit::Kilograms,
        });
    }

    // Whole 200-999 reads as grams
    if is_integer && (200.0..=999.0).contains(&value) {
        return Ok(ParsedWeight {
            kilograms: value / 1000.0,
            unit: WeightUnit::Grams,
        });
    }

    // Whole 50-199: could be either unit, make the shopper disambiguate
    if is_integer && (50.0..=199.0).contains(&value) {
        return Err(ShopError::AmbiguousWeight);
    }

    Err(ShopError::WeightOutOfRange)
}

/// Lenient parser: any positive number is kilograms, clamped to 100 kg
pub fn parse_lenient(input: &str) -> ShopResult<ParsedWeight> {
    let value = parse_number(input)?;
    if value <= 0.0 {
        return Err(ShopError::NonPositiveWeight);
    }
    Ok(ParsedWeight {
        kilograms: value.min(LENIENT_MAX_KG),
        unit: WeightUnit::Kilograms,
    })
}
