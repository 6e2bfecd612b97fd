//! Cart pricing calculations.
//!
//! Line totals are summed exactly and the subtotal is rounded once, half-up,
//! to cents. The total adds the delivery fee to the rounded subtotal.

use crate::cart::CartEntry;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use rust_decimal::Decimal;
use serde::Serialize;

/// Fixed delivery fee charged on every cart.
pub const DELIVERY_FEE: Money = Money::from_cents(200);

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartPricing {
    /// Per-line breakdown, in cart order.
    pub line_items: Vec<LinePricing>,
    /// Sum of price * quantity, rounded half-up.
    pub subtotal: Money,
    /// Delivery fee.
    pub delivery_fee: Money,
    /// Subtotal plus delivery fee.
    pub total: Money,
}

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LinePricing {
    /// Product ID.
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Line total, rounded on its own for display.
    pub line_total: Money,
}

/// Sum of `price * quantity` over all entries, rounded to cents.
pub fn subtotal(entries: &[CartEntry]) -> Result<Money, CommerceError> {
    let exact = entries.iter().try_fold(Decimal::ZERO, |acc, entry| {
        acc.checked_add(entry.line_total()?)
            .ok_or(CommerceError::Overflow)
    })?;
    Money::from_decimal(exact)
}

/// Subtotal plus delivery fee.
pub fn total(subtotal: Money, delivery_fee: Money) -> Result<Money, CommerceError> {
    subtotal
        .try_add(&delivery_fee)
        .ok_or(CommerceError::Overflow)
}

/// Build the full breakdown for a set of entries.
pub fn price_entries(
    entries: &[CartEntry],
    delivery_fee: Money,
) -> Result<CartPricing, CommerceError> {
    let line_items = entries
        .iter()
        .map(|entry| {
            Ok(LinePricing {
                product_id: entry.product.id.clone(),
                title: entry.product.title.clone(),
                unit_price: entry.product.unit_price()?,
                quantity: entry.quantity,
                line_total: Money::from_decimal(entry.line_total()?)?,
            })
        })
        .collect::<Result<Vec<_>, CommerceError>>()?;

    let subtotal = subtotal(entries)?;
    let total = total(subtotal, delivery_fee)?;

    Ok(CartPricing {
        line_items,
        subtotal,
        delivery_fee,
        total,
    })
}
