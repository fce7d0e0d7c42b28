//! Pricing engine
//!
//! Weight parsing, per-category pricing rules and quote computation.
//! All monetary arithmetic goes through `rust_decimal`; totals are rounded
//! half-up to whole currency units.

mod quote;
mod rule;
mod weight;

pub use quote::Quote;
pub use rule::{InputMode, PriceBasis, PricingRule};
pub use weight::{ParsedWeight, WeightUnit, parse_lenient, parse_smart};
