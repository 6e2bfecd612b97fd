//! Fixture-backed product source.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

use super::ProductSource;

/// Serves a fixed product list, or fails every call.
///
/// Counts fetches so callers can check that nothing is fetched twice.
#[derive(Debug, Default)]
pub struct InMemoryProductSource {
    products: Vec<Product>,
    failure: Option<String>,
    list_fetches: AtomicUsize,
    product_fetches: AtomicUsize,
}

impl InMemoryProductSource {
    /// Source serving `products`.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// Source whose every fetch fails with a network error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of `fetch_products` calls so far.
    pub fn list_fetches(&self) -> usize {
        self.list_fetches.load(Ordering::SeqCst)
    }

    /// Number of `fetch_product` calls so far.
    pub fn product_fetches(&self) -> usize {
        self.product_fetches.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), CommerceError> {
        match &self.failure {
            Some(message) => Err(CommerceError::Network(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProductSource for InMemoryProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CommerceError> {
        self.list_fetches.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.products.clone())
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Product, CommerceError> {
        self.product_fetches.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    fn name(&self) -> &str {
        "memory"
    }
}
