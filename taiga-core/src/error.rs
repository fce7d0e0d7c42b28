//! Engine error types
//!
//! Every variant carries a message suitable for showing to the shopper
//! directly; none of these are fatal to the session.

use thiserror::Error;

/// Engine error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShopError {
    /// Input could not be read as a number
    #[error("Enter a number")]
    NotANumber,

    /// Value is positive but not a plausible weight in grams or kilograms
    #[error("Enter a weight between 200 g and 50 kg")]
    WeightOutOfRange,

    /// Integer in the 50-199 dead zone between gram and kilogram readings
    #[error("Ambiguous weight. Enter 200-999 (grams) or 0.2-50 (kilograms)")]
    AmbiguousWeight,

    /// Zero or negative weight (lenient parser)
    #[error("Weight must be greater than zero")]
    NonPositiveWeight,

    /// Parsed weight is below the category minimum
    #[error("Minimum weight: {min_kg} kg")]
    BelowMinimum { min_kg: f64 },

    /// Parsed weight is above the category maximum
    #[error("Maximum weight: {max_kg} kg")]
    AboveMaximum { max_kg: f64 },

    /// No product with this id in the loaded catalog
    #[error("Product not found: {id}")]
    ProductNotFound { id: i64 },

    /// Operation requires an open product detail
    #[error("Open a product first")]
    NoProductOpen,

    /// Add-to-cart with no resolved weight selection
    #[error("Select a weight first")]
    NoWeightSelected,

    /// Preset index outside the category's preset list
    #[error("No such weight option")]
    UnknownPreset,
}

/// Result type for engine operations
pub type ShopResult<T> = Result<T, ShopError>;
