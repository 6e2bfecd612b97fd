//! Shopping cart module.
//!
//! Contains the Home screen's cart membership, the Cart screen's quantity
//! model, and pricing.

mod model;
mod pricing;
mod state;

pub use model::{CartModel, CartParams};
pub use pricing::{CartPricing, LinePricing, DELIVERY_FEE};
pub use state::{CartEntry, CartState};
