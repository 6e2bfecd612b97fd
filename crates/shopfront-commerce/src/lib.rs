//! Storefront model for the shopfront app.
//!
//! Three screens share one data flow:
//!
//! - **Catalog**: the Home screen, its product list and selected-products cart
//! - **Detail**: one product fetched by id, with loading and error states
//! - **Cart**: quantities, subtotal, delivery fee and total
//!
//! Products come from a [`ProductSource`](source::ProductSource), either the
//! remote HTTP API or an in-memory fixture.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_commerce::prelude::*;
//!
//! let source = HttpProductSource::default();
//! let mut session = StoreSession::new();
//! session.mount_home(&source).await;
//!
//! session.catalog_mut().add_to_cart_by_id(&ProductId::from(1))?;
//! session.open_cart();
//!
//! let cart = session.cart_mut().unwrap();
//! cart.increment(&ProductId::from(1))?;
//! println!("Total: {}", cart.total()?.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod detail;
pub mod navigation;
pub mod source;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Product, ProductCatalog};

    // Cart
    pub use crate::cart::{
        CartEntry, CartModel, CartParams, CartPricing, CartState, LinePricing, DELIVERY_FEE,
    };

    // Detail
    pub use crate::detail::{DetailState, LoadTicket, ProductDetail};

    // Navigation
    pub use crate::navigation::{Navigator, Route, Screen, StoreSession};

    // Sources
    pub use crate::source::{HttpProductSource, InMemoryProductSource, ProductSource};
}
