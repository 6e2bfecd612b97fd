//! REST product service client.

use async_trait::async_trait;
use serde::Deserialize;
use shopfront_data::FetchClient;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

use super::ProductSource;

/// Public product service used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Envelope of `GET /products`. Paging fields are ignored.
#[derive(Debug, Deserialize)]
struct ProductList {
    products: Vec<Product>,
}

/// Product source backed by `GET /products` and `GET /products/{id}`.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: FetchClient,
}

impl HttpProductSource {
    /// Source for a service rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(FetchClient::new().with_base_url(base_url))
    }

    /// Source using a preconfigured client (timeouts, headers).
    pub fn with_client(client: FetchClient) -> Self {
        Self { client }
    }

    /// The service base URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url().unwrap_or(DEFAULT_BASE_URL)
    }
}

impl Default for HttpProductSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CommerceError> {
        let list: ProductList = self
            .client
            .get("/products")
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(list.products)
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Product, CommerceError> {
        let response = self
            .client
            .get(format!("/products/{}", id))
            .accept("application/json")
            .send()
            .await?;

        if response.status == 404 {
            return Err(CommerceError::ProductNotFound(id.to_string()));
        }

        let product: Option<Product> = response.error_for_status()?.json()?;
        product.ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    fn name(&self) -> &str {
        "http"
    }
}
