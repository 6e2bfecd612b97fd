//! Commerce error types.

use shopfront_data::FetchError;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Fetch failed, returned a non-2xx status, or the body was malformed.
    #[error("Network error: {0}")]
    Network(String),

    /// The product service has no product with this id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Quantity change for a product that was never handed to the cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// An amount that cannot be used as a price or fee.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

impl CommerceError {
    /// Whether this error came from talking to the product service.
    pub fn is_network(&self) -> bool {
        matches!(self, CommerceError::Network(_))
    }
}

impl From<FetchError> for CommerceError {
    fn from(e: FetchError) -> Self {
        CommerceError::Network(e.to_string())
    }
}
