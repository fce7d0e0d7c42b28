//! Core engine for the Taiga storefront
//!
//! Pricing rules, weight parsing, discount tiers, cart aggregation and the
//! session controller that ties them together. Everything here is synchronous
//! and deterministic; network access lives in `taiga-client`.

pub mod cart;
pub mod error;
pub mod models;
pub mod pricing;
pub mod selection;
pub mod session;

// Re-exports
pub use cart::{Cart, CartLine, Receipt, ReceiptLine};
pub use error::{ShopError, ShopResult};
pub use models::{CatalogItem, Category};
pub use pricing::{InputMode, ParsedWeight, PriceBasis, PricingRule, Quote, WeightUnit};
pub use selection::{Preset, WeightSelection};
pub use session::StoreSession;
