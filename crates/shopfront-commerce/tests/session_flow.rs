//! End-to-end storefront flows over an in-memory product source.

use rust_decimal::Decimal;
use shopfront_commerce::prelude::*;

fn catalog_source() -> InMemoryProductSource {
    InMemoryProductSource::new(vec![
        Product::new(1, "Essence Mascara Lash Princess", Decimal::new(1000, 2)),
        Product::new(2, "Eyeshadow Palette with Mirror", Decimal::new(550, 2)),
        Product::new(3, "Powder Canister", Decimal::new(1499, 2)),
    ])
}

fn money(cents: i64) -> Money {
    Money::from_cents(cents)
}

#[tokio::test]
async fn select_two_products_and_price_the_cart() {
    let source = catalog_source();
    let mut session = StoreSession::new();
    assert_eq!(session.mount_home(&source).await, 3);

    let catalog = session.catalog_mut();
    assert!(catalog.add_to_cart_by_id(&ProductId::from(1)).unwrap());
    assert!(catalog.add_to_cart_by_id(&ProductId::from(2)).unwrap());
    assert_eq!(catalog.selected_count(), 2);

    session.open_cart();
    let cart = session.cart_mut().unwrap();
    assert_eq!(cart.subtotal().unwrap(), money(1550));
    assert_eq!(cart.delivery_fee(), money(200));
    assert_eq!(cart.total().unwrap(), money(1750));

    for _ in 0..3 {
        cart.increment(&ProductId::from(1)).unwrap();
    }
    assert_eq!(cart.quantity(&ProductId::from(1)), Some(4));
    assert_eq!(cart.subtotal().unwrap(), money(4550));
    assert_eq!(cart.total().unwrap(), money(4750));
}

#[tokio::test]
async fn adding_the_same_product_twice_keeps_one_entry() {
    let source = catalog_source();
    let mut session = StoreSession::new();
    session.mount_home(&source).await;

    let catalog = session.catalog_mut();
    assert!(catalog.add_to_cart_by_id(&ProductId::from(3)).unwrap());
    assert!(!catalog.add_to_cart_by_id(&ProductId::from(3)).unwrap());
    assert_eq!(catalog.selected_count(), 1);

    session.open_cart();
    let cart = session.cart_mut().unwrap();
    assert_eq!(cart.quantity(&ProductId::from(3)), Some(1));
    assert_eq!(cart.subtotal().unwrap(), money(1499));
}

#[tokio::test]
async fn decrement_stops_at_one() {
    let source = catalog_source();
    let mut session = StoreSession::new();
    session.mount_home(&source).await;
    session
        .catalog_mut()
        .add_to_cart_by_id(&ProductId::from(2))
        .unwrap();

    session.open_cart();
    let cart = session.cart_mut().unwrap();
    assert_eq!(cart.decrement(&ProductId::from(2)).unwrap(), 1);
    assert_eq!(cart.decrement(&ProductId::from(2)).unwrap(), 1);
    assert_eq!(cart.total().unwrap(), money(750));
}

#[tokio::test]
async fn empty_cart_costs_only_delivery() {
    let source = catalog_source();
    let mut session = StoreSession::new();
    session.mount_home(&source).await;

    session.open_cart();
    let cart = session.cart_mut().unwrap();
    assert!(cart.is_empty());
    assert_eq!(cart.subtotal().unwrap(), Money::zero());
    assert_eq!(cart.total().unwrap(), money(200));
}

#[tokio::test]
async fn cart_quantities_do_not_flow_back_to_home() {
    let source = catalog_source();
    let mut session = StoreSession::new();
    session.mount_home(&source).await;
    session
        .catalog_mut()
        .add_to_cart_by_id(&ProductId::from(1))
        .unwrap();

    session.open_cart();
    session
        .cart_mut()
        .unwrap()
        .increment(&ProductId::from(1))
        .unwrap();
    session.go_home();

    assert_eq!(session.catalog().selected_count(), 1);
    session.open_cart();
    assert_eq!(
        session.cart_mut().unwrap().quantity(&ProductId::from(1)),
        Some(1)
    );
}

#[tokio::test]
async fn detail_screen_shows_product_or_message() {
    let source = catalog_source();
    let mut session = StoreSession::new();
    session.mount_home(&source).await;

    session.open_details(ProductId::from(3));
    let state = session.load_details(&source).await.unwrap();
    match state {
        DetailState::Loaded(product) => {
            assert_eq!(product.title, "Powder Canister");
            assert_eq!(product.price_display(), "$14.99");
        }
        other => panic!("unexpected state: {:?}", other),
    }

    session.back();
    session.open_details(ProductId::from(99));
    let state = session.load_details(&source).await.unwrap();
    assert_eq!(state, &DetailState::Error("No product found".to_string()));
}

#[tokio::test]
async fn unreachable_service_leaves_home_empty() {
    let source = InMemoryProductSource::failing("connection refused");
    let mut session = StoreSession::new();
    assert_eq!(session.mount_home(&source).await, 0);
    assert!(session.catalog().is_empty());
    assert!(session.catalog().load_error().is_some());

    session.open_details(ProductId::from(1));
    let state = session.load_details(&source).await.unwrap();
    assert_eq!(
        state,
        &DetailState::Error("Error fetching product details".to_string())
    );
}
