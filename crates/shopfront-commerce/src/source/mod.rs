//! Product sources.
//!
//! The catalog and detail screens never talk to the network directly; they
//! are handed a [`ProductSource`]. [`HttpProductSource`] talks to the REST
//! product service and [`InMemoryProductSource`] serves fixtures.

mod http;
mod memory;

pub use http::{HttpProductSource, DEFAULT_BASE_URL};
pub use memory::InMemoryProductSource;

use async_trait::async_trait;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Where products come from.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the full product list.
    async fn fetch_products(&self) -> Result<Vec<Product>, CommerceError>;

    /// Fetch one product. A missing product is `CommerceError::ProductNotFound`.
    async fn fetch_product(&self, id: &ProductId) -> Result<Product, CommerceError>;

    /// Returns a name for this source (used in logging).
    fn name(&self) -> &str {
        "ProductSource"
    }
}
