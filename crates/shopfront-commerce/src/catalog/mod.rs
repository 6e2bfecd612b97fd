//! Product catalog module.
//!
//! Contains the product type and the Home screen's catalog state.

mod catalog;
mod product;

pub use catalog::ProductCatalog;
pub use product::Product;
