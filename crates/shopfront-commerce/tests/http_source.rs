//! HTTP product source against a mock product service.

use rust_decimal::Decimal;
use serde_json::json;
use shopfront_commerce::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_service() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [
                {
                    "id": 1,
                    "title": "Essence Mascara Lash Princess",
                    "price": 9.99,
                    "thumbnail": "https://cdn.example.com/1.webp",
                    "rating": 4.94
                },
                { "id": 2, "title": "Eyeshadow Palette with Mirror", "price": 19.99 }
            ],
            "total": 2,
            "skip": 0,
            "limit": 30
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "price": 9.99,
            "description": "Popular mascara."
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/404"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "Product with id '404' not found" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9,
            "title": "Broken Listing",
            "price": -3.5
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/500"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/8"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn fetches_product_list() {
    let server = mock_service().await;
    let source = HttpProductSource::new(server.uri());

    let products = source.fetch_products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId::from(1));
    assert_eq!(products[0].price, Decimal::new(999, 2));
    assert_eq!(products[0].thumbnail, "https://cdn.example.com/1.webp");
    assert!(products[1].thumbnail.is_empty());
}

#[tokio::test]
async fn fetches_single_product() {
    let server = mock_service().await;
    let source = HttpProductSource::new(server.uri());

    let product = source.fetch_product(&ProductId::from(1)).await.unwrap();
    assert_eq!(product.title, "Essence Mascara Lash Princess");
    assert_eq!(product.description, "Popular mascara.");
}

#[tokio::test]
async fn missing_product_is_not_found() {
    let server = mock_service().await;
    let source = HttpProductSource::new(server.uri());

    let err = source.fetch_product(&ProductId::from(404)).await.unwrap_err();
    assert_eq!(err, CommerceError::ProductNotFound("404".to_string()));

    let err = source.fetch_product(&ProductId::from(7)).await.unwrap_err();
    assert_eq!(err, CommerceError::ProductNotFound("7".to_string()));
}

#[tokio::test]
async fn server_failures_are_network_errors() {
    let server = mock_service().await;
    let source = HttpProductSource::new(server.uri());

    let err = source.fetch_product(&ProductId::from(500)).await.unwrap_err();
    assert!(err.is_network());

    let err = source.fetch_product(&ProductId::from(8)).await.unwrap_err();
    assert!(err.is_network());

    let err = source.fetch_product(&ProductId::from(9)).await.unwrap_err();
    assert!(err.is_network());
}

#[tokio::test]
async fn empty_service_gives_empty_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "products": [] })))
        .mount(&server)
        .await;

    let source = HttpProductSource::new(server.uri());
    let mut catalog = ProductCatalog::new();
    assert_eq!(catalog.load(&source).await, 0);
    assert!(catalog.is_empty());
    assert!(catalog.load_error().is_none());
}

#[tokio::test]
async fn detail_screen_over_http() {
    let server = mock_service().await;
    let source = HttpProductSource::new(server.uri());

    let mut detail = ProductDetail::new(404);
    let state = detail.load(&source).await;
    assert_eq!(state, &DetailState::Error("No product found".to_string()));

    let mut detail = ProductDetail::new(500);
    let state = detail.load(&source).await;
    assert_eq!(
        state,
        &DetailState::Error("Error fetching product details".to_string())
    );
}
