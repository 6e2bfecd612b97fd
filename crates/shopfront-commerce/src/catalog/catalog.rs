//! Catalog state for the Home screen.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::cart::{CartParams, CartState};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::source::ProductSource;

use super::Product;

/// The list of available products plus the Home screen's cart.
///
/// The cart is created empty with the catalog and lives as long as it does.
/// Products are shared with cart entries through `Arc`, so the catalog stays
/// the owner of product data.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Arc<Product>>,
    cart: CartState,
    load_error: Option<String>,
}

impl ProductCatalog {
    /// Create an empty catalog with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the product list and replace the catalog contents.
    ///
    /// A failure is logged and leaves the catalog empty; the message stays
    /// available through [`load_error`](Self::load_error). There is no retry.
    /// Returns the number of products now held.
    pub async fn load(&mut self, source: &dyn ProductSource) -> usize {
        match source.fetch_products().await {
            Ok(products) => {
                info!(source = source.name(), count = products.len(), "catalog loaded");
                self.products = products.into_iter().map(Arc::new).collect();
                self.load_error = None;
            }
            Err(e) => {
                error!(source = source.name(), error = %e, "Error fetching products");
                self.products.clear();
                self.load_error = Some(e.to_string());
            }
        }
        self.products.len()
    }

    /// Products in service order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Look up a loaded product by id.
    pub fn find(&self, id: &ProductId) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Whether no products are loaded. An empty catalog is a valid state.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Message of the last failed load, cleared by a successful one.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Add a product to the cart with quantity 1.
    ///
    /// Returns `false` without touching the cart when a product with the
    /// same id is already present.
    pub fn add_to_cart(&mut self, product: &Arc<Product>) -> bool {
        let before = self.cart.len();
        self.cart = std::mem::take(&mut self.cart).with_product(Arc::clone(product));
        let added = self.cart.len() > before;

        if added {
            info!(product_id = %product.id, title = %product.title, "Product added to cart");
        } else {
            debug!(product_id = %product.id, "Product is already in the cart");
        }
        added
    }

    /// Add a loaded product to the cart by id.
    pub fn add_to_cart_by_id(&mut self, id: &ProductId) -> Result<bool, CommerceError> {
        let product = self
            .find(id)
            .cloned()
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        Ok(self.add_to_cart(&product))
    }

    /// Number of distinct products in the cart (the Home badge).
    pub fn selected_count(&self) -> usize {
        self.cart.len()
    }

    /// The Home screen's cart.
    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    /// Navigation parameters for the Cart screen, taken by value.
    pub fn cart_params(&self) -> CartParams {
        CartParams::from_cart(&self.cart)
    }
}
