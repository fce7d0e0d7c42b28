//! Session controller
//!
//! Owns the catalog, the cart, the open product and the active weight
//! selection for one page session. Rendering layers read state from here
//! instead of the engine tracking UI controls; all they report back is
//! which weight/discount pair was chosen.
//!
//! Validation failures and invariant violations return an error and leave
//! the session state unchanged.

use tracing::{info, warn};

use crate::cart::{Cart, Receipt, format_weight};
use crate::error::{ShopError, ShopResult};
use crate::models::{CatalogItem, Category};
use crate::pricing::Quote;
use crate::selection::WeightSelection;

/// Session-scoped storefront state
#[derive(Debug, Default)]
pub struct StoreSession {
    catalog: Vec<CatalogItem>,
    cart: Cart,
    open_product: Option<CatalogItem>,
    selection: Option<WeightSelection>,
}

impl StoreSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Catalog ==========

    /// Install a fetched catalog. A failed fetch simply never calls this:
    /// the cart and pricing logic stay consistent with an empty catalog.
    pub fn install_catalog(&mut self, items: Vec<CatalogItem>) {
        info!(count = items.len(), "catalog installed");
        self.catalog = items;
    }

    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }

    /// Items whose category resolves to `category`
    pub fn items_in(&self, category: Category) -> Vec<&CatalogItem> {
        self.catalog
            .iter()
            .filter(|item| Category::resolve(&item.category) == Some(category))
            .collect()
    }

    // ========== Product detail ==========

    /// Open a product's detail view, clearing any prior selection
    pub fn open_product(&mut self, id: i64) -> ShopResult<&CatalogItem> {
        let item = self
            .catalog
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(ShopError::ProductNotFound { id })?;
        self.selection = None;
        Ok(self.open_product.insert(item))
    }

    pub fn open_item(&self) -> Option<&CatalogItem> {
        self.open_product.as_ref()
    }

    /// Close the detail view, dropping product and selection
    pub fn close_product(&mut self) {
        self.open_product = None;
        self.selection = None;
    }

    // ========== Weight selection ==========

    /// Select a preset tier by index. Replaces the prior selection whole,
    /// preset or custom alike.
    pub fn select_preset(&mut self, index: usize) -> ShopResult<Quote> {
        let item = self.open_product.as_ref().ok_or(ShopError::NoProductOpen)?;
        let preset = *item
            .category_kind()
            .presets()
            .get(index)
            .ok_or(ShopError::UnknownPreset)?;
        self.selection = Some(WeightSelection::Preset(preset));
        self.current_quote()
    }

    /// Resolve free-form weight input as the custom selection (always 0%
    /// discount). A rejected input is not a partial selection: on error any
    /// prior selection is cleared and the caller keeps submission disabled.
    pub fn enter_custom_weight(&mut self, input: &str) -> ShopResult<Quote> {
        let item = self.open_product.as_ref().ok_or(ShopError::NoProductOpen)?;
        let rule = item.category_kind().pricing_rule();
        match rule.parse_weight(input) {
            Ok(parsed) => {
                self.selection = Some(WeightSelection::Custom(parsed.kilograms));
                self.current_quote()
            }
            Err(err) => {
                self.selection = None;
                Err(err)
            }
        }
    }

    pub fn selection(&self) -> Option<&WeightSelection> {
        self.selection.as_ref()
    }

    /// Quote for the open product and active selection
    pub fn current_quote(&self) -> ShopResult<Quote> {
        let item = self.open_product.as_ref().ok_or(ShopError::NoProductOpen)?;
        let selection = self.selection.as_ref().ok_or(ShopError::NoWeightSelected)?;
        let rule = item.category_kind().pricing_rule();
        Ok(Quote::compute(
            &rule,
            item.price,
            selection.weight_kg(),
            selection.discount_percent(),
        ))
    }

    // ========== Cart ==========

    /// Add the current selection to the cart and close the detail view.
    /// Returns the confirmation message for the host dialog.
    pub fn add_to_cart(&mut self) -> ShopResult<String> {
        let quote = self.current_quote().inspect_err(|err| {
            warn!(%err, "add to cart rejected");
        })?;
        // current_quote succeeded, so both are present
        let item = self.open_product.as_ref().ok_or(ShopError::NoProductOpen)?;
        let selection = self.selection.as_ref().ok_or(ShopError::NoWeightSelected)?;

        let weight_kg = selection.weight_kg();
        self.cart
            .add(item, weight_kg, quote.total, quote.discount_percent);

        let mut message = format!("Added:\n\n{}\n{}", item.name, format_weight(weight_kg));
        if quote.has_discount() {
            message.push_str(&format!(" (-{}% off)", quote.discount_percent));
        }
        message.push_str(&format!("\n{} ₽", quote.total));

        self.close_product();
        Ok(message)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Distinct-product count for the cart badge
    pub fn cart_badge(&self) -> usize {
        self.cart.distinct_items()
    }

    pub fn receipt(&self) -> Receipt {
        self.cart.receipt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem {
                id: 1,
                name: "Forest honey".to_string(),
                category: "Honey".to_string(),
                price: 600.0,
                description: None,
                image: None,
            },
            CatalogItem {
                id: 2,
                name: "Cloudberry jam".to_string(),
                category: "Jam".to_string(),
                price: 450.0,
                description: Some("Hand-picked cloudberries".to_string()),
                image: None,
            },
            CatalogItem {
                id: 3,
                name: "Fireweed tea".to_string(),
                category: "Tea".to_string(),
                price: 500.0,
                description: None,
                image: None,
            },
        ]
    }

    fn make_session() -> StoreSession {
        let mut session = StoreSession::new();
        session.install_catalog(make_catalog());
        session
    }

    #[test]
    fn test_category_filter() {
        let session = make_session();
        let honey = session.items_in(Category::Honey);
        assert_eq!(honey.len(), 1);
        assert_eq!(honey[0].id, 1);
    }

    #[test]
    fn test_preset_flow() {
        let mut session = make_session();
        session.open_product(1).unwrap();

        // 2.1 kg honey at 5% off
        let quote = session.select_preset(1).unwrap();
        assert_eq!(quote.total, 1197.0);

        let message = session.add_to_cart().unwrap();
        assert!(message.contains("Forest honey"));
        assert!(message.contains("2.1 kg (-5% off)"));
        assert!(message.contains("1197 ₽"));

        // Add-to-cart closes the detail view
        assert!(session.open_item().is_none());
        assert_eq!(session.cart_badge(), 1);
    }

    #[test]
    fn test_preset_replaces_custom_selection() {
        let mut session = make_session();
        session.open_product(1).unwrap();

        session.enter_custom_weight("3").unwrap();
        assert_eq!(session.selection(), Some(&WeightSelection::Custom(3.0)));

        // Picking a preset discards the custom weight and its 0% discount
        let quote = session.select_preset(2).unwrap();
        assert_eq!(quote.discount_percent, 10.0);
        match session.selection().unwrap() {
            WeightSelection::Preset(preset) => assert_eq!(preset.weight_kg, 2.8),
            other => panic!("expected preset selection, got {:?}", other),
        }
    }

    #[test]
    fn test_rejected_input_clears_selection() {
        let mut session = make_session();
        session.open_product(1).unwrap();
        session.select_preset(0).unwrap();

        // A rejected custom input is not a partial selection
        assert_eq!(
            session.enter_custom_weight("100"),
            Err(ShopError::AmbiguousWeight)
        );
        assert!(session.selection().is_none());
        assert_eq!(session.add_to_cart(), Err(ShopError::NoWeightSelected));
    }

    #[test]
    fn test_add_without_product_rejected() {
        let mut session = make_session();
        assert_eq!(session.add_to_cart(), Err(ShopError::NoProductOpen));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_tea_is_custom_only() {
        let mut session = make_session();
        session.open_product(3).unwrap();

        assert_eq!(session.select_preset(0), Err(ShopError::UnknownPreset));

        // 0.1 kg at 500 ₽/100 g
        let quote = session.enter_custom_weight("0.1").unwrap();
        assert_eq!(quote.total, 500.0);
    }

    #[test]
    fn test_merge_is_round_then_sum() {
        let mut session = make_session();

        session.open_product(1).unwrap();
        session.enter_custom_weight("1").unwrap();
        session.add_to_cart().unwrap();

        session.open_product(1).unwrap();
        session.select_preset(1).unwrap(); // 2.1 kg, 5% -> 1197
        session.add_to_cart().unwrap();

        let lines = session.cart().lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].weight_kg, 3.1);
        // 600 + 1197, not a re-discount of 3.1 kg
        assert_eq!(lines[0].total, 1797.0);
    }

    #[test]
    fn test_failed_fetch_leaves_engine_consistent() {
        // No catalog installed at all
        let mut session = StoreSession::new();
        assert!(session.catalog().is_empty());
        assert_eq!(session.open_product(1), Err(ShopError::ProductNotFound { id: 1 }));
        assert_eq!(session.receipt().grand_total, 0.0);
        assert_eq!(session.receipt().to_string(), "Your cart is empty");
    }
}
