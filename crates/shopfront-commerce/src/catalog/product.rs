//! Product type as served by the product service.

use crate::ids::ProductId;
use crate::money::{round_half_up, Money, CURRENCY_SYMBOL};
use crate::CommerceError;
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A product in the catalog.
///
/// Read-only to the storefront: the service owns these values and any other
/// fields it sends (ratings, stock, images) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Unit price, exact as sent by the service. Never negative.
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "non_negative_price"
    )]
    pub price: Decimal,
    /// Thumbnail image URI.
    #[serde(default)]
    pub thumbnail: String,
    /// Free-text description, shown on the detail screen.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Create a product with no thumbnail or description.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            thumbnail: String::new(),
            description: String::new(),
        }
    }

    /// Set the thumbnail URI.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Unit price rounded to cents.
    pub fn unit_price(&self) -> Result<Money, CommerceError> {
        Money::from_decimal(self.price)
    }

    /// Price formatted for listings (e.g., "$9.99").
    pub fn price_display(&self) -> String {
        format!("{}{:.2}", CURRENCY_SYMBOL, round_half_up(self.price))
    }
}

/// A negative price fails the whole decode, so the response is treated as malformed.
fn non_negative_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let price = rust_decimal::serde::float::deserialize(deserializer)?;
    if price < Decimal::ZERO {
        return Err(D::Error::custom(format!("negative price: {}", price)));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_service_json() {
        let json = r#"{
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "Popular mascara.",
            "category": "beauty",
            "price": 9.99,
            "rating": 4.94,
            "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/1/thumbnail.png"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::from(1));
        assert_eq!(product.title, "Essence Mascara Lash Princess");
        assert_eq!(product.price, Decimal::new(999, 2));
        assert_eq!(product.description, "Popular mascara.");
        assert!(product.thumbnail.ends_with("thumbnail.png"));
    }

    #[test]
    fn test_product_missing_optional_fields() {
        let product: Product =
            serde_json::from_str(r#"{"id": "a1", "title": "Plain", "price": 3}"#).unwrap();
        assert_eq!(product.price, Decimal::from(3));
        assert!(product.thumbnail.is_empty());
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_negative_price_rejected() {
        let result: Result<Product, _> =
            serde_json::from_str(r#"{"id": 4, "title": "Refund", "price": -3.5}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("negative price"));

        let product: Product =
            serde_json::from_str(r#"{"id": 5, "title": "Sample", "price": 0}"#).unwrap();
        assert_eq!(product.price, Decimal::ZERO);
    }

    #[test]
    fn test_price_serializes_as_number() {
        let product = Product::new(1, "Widget", Decimal::new(999, 2));
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["price"], serde_json::json!(9.99));
    }

    #[test]
    fn test_price_display() {
        let product = Product::new(1, "Widget", Decimal::from(10));
        assert_eq!(product.price_display(), "$10.00");

        let product = Product::new(2, "Gadget", Decimal::new(5125, 3));
        assert_eq!(product.price_display(), "$5.13");
        assert_eq!(product.unit_price().unwrap(), Money::from_cents(513));
    }
}
