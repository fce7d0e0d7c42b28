//! Catalog item model

use serde::{Deserialize, Serialize};

use super::Category;

/// One purchasable item as served by `GET /api/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    /// Free-form category name; resolved to a [`Category`] for pricing
    pub category: String,
    /// Base price in whole currency units, denominated per the category rule
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image reference (path or URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CatalogItem {
    /// Resolve the pricing category, falling back to the default for
    /// unrecognized names.
    pub fn category_kind(&self) -> Category {
        Category::resolve_or_default(&self.category)
    }

    /// Normalize wire quirks: the backend serializes missing description and
    /// image as empty strings.
    pub fn normalize(mut self) -> Self {
        if self.description.as_deref().is_some_and(str::is_empty) {
            self.description = None;
        }
        if self.image.as_deref().is_some_and(str::is_empty) {
            self.image = None;
        }
        self
    }
}
