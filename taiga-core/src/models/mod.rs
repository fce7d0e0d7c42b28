//! Data models
//!
//! Catalog types shared between the engine and the fetch client. Items are
//! immutable once loaded; they live for one page session.

pub mod category;
pub mod product;

// Re-exports
pub use category::*;
pub use product::*;
