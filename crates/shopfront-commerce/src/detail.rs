//! Product detail screen state.
//!
//! Each detail screen fetches its product on its own, with no cache shared
//! with the catalog. `Loaded` and `Error` are terminal for a given product id;
//! switching to another id starts over at `Loading`.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::source::ProductSource;

/// Shown when the service has no product for the id.
pub const NOT_FOUND_MESSAGE: &str = "No product found";

/// Shown for any other fetch failure.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching product details";

/// Where a detail fetch stands.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Arc<Product>),
    Error(String),
}

/// Identifies one fetch so late results for an old id can be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    product_id: ProductId,
    generation: u64,
}

impl LoadTicket {
    /// The id this fetch is for.
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }
}

/// State of the detail screen for one product id.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    product_id: ProductId,
    state: DetailState,
    generation: u64,
}

impl ProductDetail {
    /// Start in `Loading` for `product_id`.
    pub fn new(product_id: impl Into<ProductId>) -> Self {
        Self {
            product_id: product_id.into(),
            state: DetailState::Loading,
            generation: 0,
        }
    }

    /// Point the screen at another product.
    ///
    /// A different id resets to `Loading` and invalidates outstanding
    /// tickets. The same id leaves everything as it is. Returns whether a
    /// restart happened.
    pub fn navigate_to(&mut self, product_id: impl Into<ProductId>) -> bool {
        let product_id = product_id.into();
        if product_id == self.product_id {
            return false;
        }
        self.product_id = product_id;
        self.generation += 1;
        self.state = DetailState::Loading;
        true
    }

    /// Ticket for a fetch of the current id.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket {
            product_id: self.product_id.clone(),
            generation: self.generation,
        }
    }

    /// Apply a fetch result.
    ///
    /// Results for a stale ticket, or arriving after a terminal state, are
    /// ignored. Returns whether the state changed.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<Product, CommerceError>,
    ) -> bool {
        if ticket.generation != self.generation || ticket.product_id != self.product_id {
            info!(
                product_id = %ticket.product_id,
                current = %self.product_id,
                "discarding stale product detail result"
            );
            return false;
        }
        if !self.is_loading() {
            return false;
        }

        self.state = match result {
            Ok(product) => DetailState::Loaded(Arc::new(product)),
            Err(CommerceError::ProductNotFound(_)) => {
                warn!(product_id = %self.product_id, "product not found");
                DetailState::Error(NOT_FOUND_MESSAGE.to_string())
            }
            Err(e) => {
                error!(product_id = %self.product_id, error = %e, "Error fetching product details");
                DetailState::Error(FETCH_ERROR_MESSAGE.to_string())
            }
        };
        true
    }

    /// Fetch the current id and settle the state.
    ///
    /// Does nothing once the state is terminal.
    pub async fn load(&mut self, source: &dyn ProductSource) -> &DetailState {
        if self.is_loading() {
            let ticket = self.begin();
            let result = source.fetch_product(ticket.product_id()).await;
            self.complete(ticket, result);
        }
        &self.state
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Loading)
    }

    /// The product, once loaded.
    pub fn product(&self) -> Option<&Arc<Product>> {
        match &self.state {
            DetailState::Loaded(product) => Some(product),
            _ => None,
        }
    }

    /// The user-facing error message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            DetailState::Error(message) => Some(message),
            _ => None,
        }
    }
}
