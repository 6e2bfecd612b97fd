//! Cart membership and entries.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// A product in the cart with its quantity.
///
/// `quantity` starts at 1 and never goes below it.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    /// The product, shared with the catalog.
    pub product: Arc<Product>,
    /// Quantity, always >= 1.
    pub quantity: u32,
}

impl CartEntry {
    /// Create an entry with quantity 1.
    pub fn new(product: Arc<Product>) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Id of the product in this entry.
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Exact `price * quantity`, before any rounding.
    pub fn line_total(&self) -> Result<Decimal, CommerceError> {
        self.product
            .price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or(CommerceError::Overflow)
    }

    pub(crate) fn increment(&mut self) -> Result<u32, CommerceError> {
        self.quantity = self
            .quantity
            .checked_add(1)
            .ok_or(CommerceError::Overflow)?;
        Ok(self.quantity)
    }

    pub(crate) fn decrement(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_sub(1).max(1);
        self.quantity
    }
}

/// Products chosen for purchase, in the order they were added.
///
/// A product id appears at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    entries: Vec<CartEntry>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return this cart with `product` added at quantity 1.
    ///
    /// If a product with the same id is already present the cart comes back
    /// unchanged: the existing quantity is neither reset nor incremented.
    pub fn with_product(mut self, product: Arc<Product>) -> Self {
        if !self.contains(&product.id) {
            self.entries.push(CartEntry::new(product));
        }
        self
    }

    /// Whether a product with this id is in the cart.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// The entry for a product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product_id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.product_id() == id)
    }

    /// Entries in addition order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The products in the cart, in addition order.
    pub fn products(&self) -> Vec<Arc<Product>> {
        self.entries.iter().map(|e| Arc::clone(&e.product)).collect()
    }
}

impl FromIterator<Arc<Product>> for CartState {
    fn from_iter<I: IntoIterator<Item = Arc<Product>>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CartState::new(), |cart, product| cart.with_product(product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, cents: i64) -> Arc<Product> {
        Arc::new(Product::new(id, format!("Product {}", id), Decimal::new(cents, 2)))
    }

    #[test]
    fn test_cart_creation() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }

    #[test]
    fn test_with_product_adds_at_quantity_one() {
        let cart = CartState::new().with_product(product(1, 1000));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&ProductId::from(1)).unwrap().quantity, 1);
    }

    #[test]
    fn test_with_product_keeps_existing_quantity() {
        let mut cart = CartState::new().with_product(product(1, 1000));
        cart.get_mut(&ProductId::from(1)).unwrap().increment().unwrap();

        let cart = cart.with_product(product(1, 1000));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&ProductId::from(1)).unwrap().quantity, 2);
    }

    #[test]
    fn test_addition_order_is_kept() {
        let cart: CartState = vec![product(3, 100), product(1, 100), product(3, 100)]
            .into_iter()
            .collect();
        let ids: Vec<_> = cart.entries().iter().map(|e| e.product_id().as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut entry = CartEntry::new(product(1, 100));
        assert_eq!(entry.decrement(), 1);
        assert_eq!(entry.decrement(), 1);
        assert_eq!(entry.increment().unwrap(), 2);
        assert_eq!(entry.decrement(), 1);
    }

    #[test]
    fn test_increment_overflow() {
        let mut entry = CartEntry::new(product(1, 100));
        entry.quantity = u32::MAX;
        assert_eq!(entry.increment(), Err(CommerceError::Overflow));
        assert_eq!(entry.quantity, u32::MAX);
    }

    #[test]
    fn test_line_total_is_exact() {
        let mut entry = CartEntry::new(Arc::new(Product::new(
            1,
            "Fractional",
            Decimal::new(3335, 3),
        )));
        entry.quantity = 3;
        assert_eq!(entry.line_total().unwrap(), Decimal::new(10005, 3));
    }
}
