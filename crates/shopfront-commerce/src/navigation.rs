//! Navigation between Home, product details and the cart.
//!
//! Screens hand data forward as values. The Cart screen gets a snapshot of
//! the Home cart, so quantity changes there never reach the Home badge.

use tracing::debug;

use crate::cart::{CartModel, CartParams, DELIVERY_FEE};
use crate::catalog::ProductCatalog;
use crate::detail::{DetailState, ProductDetail};
use crate::ids::ProductId;
use crate::money::Money;
use crate::source::ProductSource;

/// A screen and the parameters it was opened with.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    ProductDetails { product_id: ProductId },
    Cart(CartParams),
}

impl Route {
    /// Screen name.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::ProductDetails { .. } => "ProductDetails",
            Route::Cart(_) => "Cart",
        }
    }
}

/// Route stack rooted at Home. Home can never be popped.
#[derive(Debug, Clone)]
pub struct Navigator {
    home: Route,
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            home: Route::Home,
            stack: Vec::new(),
        }
    }

    /// Push a route.
    pub fn navigate(&mut self, route: Route) {
        if route == Route::Home {
            self.reset_home();
            return;
        }
        debug!(route = route.name(), depth = self.stack.len() + 1, "navigate");
        self.stack.push(route);
    }

    /// Pop one route. Returns `false` when already at Home.
    pub fn back(&mut self) -> bool {
        self.stack.pop().is_some()
    }

    /// Drop everything above Home.
    pub fn reset_home(&mut self) {
        self.stack.clear();
    }

    /// The route on top.
    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&self.home)
    }

    /// Number of routes above Home.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// State of a screen pushed above Home.
#[derive(Debug, Clone)]
pub enum Screen {
    Details(ProductDetail),
    Cart(CartModel),
}

/// Session root: owns the catalog (Home) and every screen above it.
///
/// `screens` mirrors the navigator stack one to one, so going back returns
/// to the earlier screen with its state intact.
#[derive(Debug, Clone)]
pub struct StoreSession {
    catalog: ProductCatalog,
    navigator: Navigator,
    screens: Vec<Screen>,
    delivery_fee: Money,
}

impl Default for StoreSession {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreSession {
    /// A session at Home with an empty catalog and cart.
    pub fn new() -> Self {
        Self {
            catalog: ProductCatalog::new(),
            navigator: Navigator::new(),
            screens: Vec::new(),
            delivery_fee: DELIVERY_FEE,
        }
    }

    /// Delivery fee for carts opened from this session.
    pub fn with_delivery_fee(mut self, delivery_fee: Money) -> Self {
        self.delivery_fee = delivery_fee;
        self
    }

    /// Load the Home catalog. Returns the number of products.
    pub async fn mount_home(&mut self, source: &dyn ProductSource) -> usize {
        self.catalog.load(source).await
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut ProductCatalog {
        &mut self.catalog
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The screen on top, or `None` at Home.
    pub fn screen(&self) -> Option<&Screen> {
        self.screens.last()
    }

    /// Open the detail screen for a product. Call [`load_details`](Self::load_details) next.
    pub fn open_details(&mut self, product_id: ProductId) {
        self.navigator.navigate(Route::ProductDetails {
            product_id: product_id.clone(),
        });
        self.screens.push(Screen::Details(ProductDetail::new(product_id)));
    }

    /// The detail screen, if it is on top.
    pub fn details_mut(&mut self) -> Option<&mut ProductDetail> {
        match self.screens.last_mut() {
            Some(Screen::Details(detail)) => Some(detail),
            _ => None,
        }
    }

    /// Fetch the product for the detail screen on top, if any.
    pub async fn load_details(&mut self, source: &dyn ProductSource) -> Option<&DetailState> {
        match self.screens.last_mut() {
            Some(Screen::Details(detail)) => Some(detail.load(source).await),
            _ => None,
        }
    }

    /// Open the cart with a snapshot of the Home cart.
    pub fn open_cart(&mut self) {
        let params = self.catalog.cart_params();
        self.navigator.navigate(Route::Cart(params.clone()));
        self.screens
            .push(Screen::Cart(CartModel::new(params).with_delivery_fee(self.delivery_fee)));
    }

    /// The cart screen, if it is on top.
    pub fn cart_mut(&mut self) -> Option<&mut CartModel> {
        match self.screens.last_mut() {
            Some(Screen::Cart(cart)) => Some(cart),
            _ => None,
        }
    }

    /// Pop the top screen. Returns `false` at Home.
    pub fn back(&mut self) -> bool {
        if self.navigator.back() {
            self.screens.pop();
            true
        } else {
            false
        }
    }

    /// Return to Home, discarding every screen above it.
    pub fn go_home(&mut self) {
        self.navigator.reset_home();
        self.screens.clear();
    }
}
