//! Category model
//!
//! The storefront sells three kinds of goods, each with its own pricing
//! rule. Category names arrive as free-form strings on the wire; unknown
//! names resolve to the default category's rule instead of failing.

/// Pricing category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Jam,
    Honey,
    Tea,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Jam, Category::Honey, Category::Tea];

    /// Default category whose rule covers unrecognized names
    pub const DEFAULT: Category = Category::Jam;

    /// Resolve a wire category name. Matches are case-insensitive and accept
    /// the Russian names the legacy backend serves.
    pub fn resolve(name: &str) -> Option<Category> {
        match name.trim().to_lowercase().as_str() {
            "jam" | "варенье" => Some(Category::Jam),
            "honey" | "мёд" | "мед" => Some(Category::Honey),
            "tea" | "чай" => Some(Category::Tea),
            _ => None,
        }
    }

    /// Resolve a wire category name, falling back to [`Category::DEFAULT`]
    pub fn resolve_or_default(name: &str) -> Category {
        Self::resolve(name).unwrap_or(Self::DEFAULT)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Jam => "Jam",
            Category::Honey => "Honey",
            Category::Tea => "Tea",
        }
    }

    /// Short blurb shown under the category header in the list view
    pub fn description(&self) -> &'static str {
        match self {
            Category::Jam => "Wild-berry preserves from the northern forests",
            Category::Honey => "Fresh honey from local apiaries",
            Category::Tea => "Aromatic herbal blends",
        }
    }
}
