//! Cart screen model.

use std::sync::Arc;

use tracing::debug;

use crate::cart::pricing::{self, CartPricing, DELIVERY_FEE};
use crate::cart::{CartEntry, CartState};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Navigation parameters handed from Home to the Cart screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartParams {
    /// Products chosen on Home, in addition order.
    pub selected_products: Vec<Arc<Product>>,
}

impl CartParams {
    /// Parameters for a given product list.
    pub fn new(selected_products: Vec<Arc<Product>>) -> Self {
        Self { selected_products }
    }

    /// Snapshot the products of a cart.
    pub fn from_cart(cart: &CartState) -> Self {
        Self::new(cart.products())
    }
}

/// Quantities and totals for the products handed to the Cart screen.
///
/// Membership is fixed at construction; only quantities change. The model
/// owns its own copy of the cart, so changes here are not seen by Home.
#[derive(Debug, Clone)]
pub struct CartModel {
    cart: CartState,
    delivery_fee: Money,
}

impl CartModel {
    /// Build the model with every product at quantity 1.
    pub fn new(params: CartParams) -> Self {
        Self {
            cart: params.selected_products.into_iter().collect(),
            delivery_fee: DELIVERY_FEE,
        }
    }

    /// Use a different fixed delivery fee.
    pub fn with_delivery_fee(mut self, delivery_fee: Money) -> Self {
        self.delivery_fee = delivery_fee;
        self
    }

    /// Raise a product's quantity by one. Returns the new quantity.
    pub fn increment(&mut self, id: &ProductId) -> Result<u32, CommerceError> {
        let quantity = self.entry_mut(id)?.increment()?;
        debug!(product_id = %id, quantity, "quantity incremented");
        Ok(quantity)
    }

    /// Lower a product's quantity by one, never below 1. Returns the new quantity.
    pub fn decrement(&mut self, id: &ProductId) -> Result<u32, CommerceError> {
        let quantity = self.entry_mut(id)?.decrement();
        debug!(product_id = %id, quantity, "quantity decremented");
        Ok(quantity)
    }

    fn entry_mut(&mut self, id: &ProductId) -> Result<&mut CartEntry, CommerceError> {
        self.cart
            .get_mut(id)
            .ok_or_else(|| CommerceError::ItemNotInCart(id.to_string()))
    }

    /// Current quantity of a product.
    pub fn quantity(&self, id: &ProductId) -> Option<u32> {
        self.cart.get(id).map(|e| e.quantity)
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[CartEntry] {
        self.cart.entries()
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.cart.len()
    }

    /// Sum of all quantities.
    pub fn unit_count(&self) -> u64 {
        self.cart.entries().iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum of price * quantity, rounded half-up to cents.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        pricing::subtotal(self.cart.entries())
    }

    /// The fixed delivery fee.
    pub fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    /// Subtotal plus delivery fee.
    pub fn total(&self) -> Result<Money, CommerceError> {
        pricing::total(self.subtotal()?, self.delivery_fee)
    }

    /// Full pricing breakdown.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        pricing::price_entries(self.cart.entries(), self.delivery_fee)
    }
}
