//! Weight selection and discount tiers
//!
//! A selection is either one of the fixed presets (weight + discount chosen
//! atomically) or a custom weight, which never carries a discount. Only one
//! selection is active at a time; picking a new option fully replaces the
//! previous one.

use crate::models::Category;

/// Fixed (weight, discount) tier offered as a one-click option
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub weight_kg: f64,
    pub discount_percent: f64,
}

/// Discount schedule for jar-sized categories
pub const STANDARD_PRESETS: [Preset; 3] = [
    Preset {
        weight_kg: 1.4,
        discount_percent: 0.0,
    },
    Preset {
        weight_kg: 2.1,
        discount_percent: 5.0,
    },
    Preset {
        weight_kg: 2.8,
        discount_percent: 10.0,
    },
];

impl Category {
    /// Preset tiers for this category; empty means custom entry only
    pub fn presets(&self) -> &'static [Preset] {
        match self {
            Category::Jam | Category::Honey => &STANDARD_PRESETS,
            Category::Tea => &[],
        }
    }
}

/// The active weight choice for the open product
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightSelection {
    Preset(Preset),
    /// Custom weight in kilograms; always 0% discount
    Custom(f64),
}

impl WeightSelection {
    pub fn weight_kg(&self) -> f64 {
        match self {
            WeightSelection::Preset(preset) => preset.weight_kg,
            WeightSelection::Custom(weight) => *weight,
        }
    }

    pub fn discount_percent(&self) -> f64 {
        match self {
            WeightSelection::Preset(preset) => preset.discount_percent,
            WeightSelection::Custom(_) => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_schedule() {
        let presets = Category::Jam.presets();
        assert_eq!(presets.len(), 3);
        assert_eq!(presets[1].weight_kg, 2.1);
        assert_eq!(presets[1].discount_percent, 5.0);
        assert_eq!(presets[2].discount_percent, 10.0);
    }

    #[test]
    fn test_tea_has_no_presets() {
        assert!(Category::Tea.presets().is_empty());
    }

    #[test]
    fn test_custom_never_discounts() {
        let selection = WeightSelection::Custom(3.2);
        assert_eq!(selection.weight_kg(), 3.2);
        assert_eq!(selection.discount_percent(), 0.0);
    }
}
