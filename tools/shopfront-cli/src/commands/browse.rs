//! Interactive storefront session.

use std::sync::Arc;

use anyhow::{bail, Result};
use dialoguer::Select;
use shopfront_commerce::catalog::Product;
use shopfront_commerce::detail::DetailState;
use shopfront_commerce::navigation::{Screen, StoreSession};
use shopfront_commerce::source::HttpProductSource;
use tracing::info;

use super::cart::print_cart;
use super::BrowseArgs;
use crate::context::Context;
use crate::output::cart_badge;

#[derive(Clone, Copy)]
enum View {
    Home,
    Details,
    Cart,
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("browse is interactive and does not support --json");
    }

    let source = ctx.source();
    let mut session = ctx.session()?;
    ctx.load_catalog(&mut session).await;

    loop {
        let view = match session.screen() {
            None => View::Home,
            Some(Screen::Details(_)) => View::Details,
            Some(Screen::Cart(_)) => View::Cart,
        };

        let keep_going = match view {
            View::Home => home(&mut session, &source, args.page_size, ctx).await?,
            View::Details => details(&mut session, ctx)?,
            View::Cart => cart(&mut session, ctx)?,
        };

        if !keep_going {
            return Ok(());
        }
    }
}

async fn home(
    session: &mut StoreSession,
    source: &HttpProductSource,
    page_size: usize,
    ctx: &Context,
) -> Result<bool> {
    let store = &ctx.config.store;
    ctx.output.header(&format!("Hello, {}", store.customer_name));
    ctx.output.kv("Deliver to", &store.delivery_address);
    ctx.output.kv("Products", &session.catalog().products().len().to_string());

    let items = [
        "View product details".to_string(),
        "Add product to cart".to_string(),
        format!("Open {}", cart_badge(session.catalog().selected_count())),
        "Quit".to_string(),
    ];
    let choice = Select::new()
        .with_prompt("What next?")
        .items(&items)
        .default(0)
        .interact()?;

    match choice {
        0 => {
            if let Some(product) = pick_product(session, page_size, "View which product?", ctx)? {
                session.open_details(product.id.clone());
                let spinner = ctx.output.spinner("Fetching product...");
                session.load_details(source).await;
                spinner.finish_and_clear();
            }
        }
        1 => {
            if let Some(product) = pick_product(session, page_size, "Add which product?", ctx)? {
                if session.catalog_mut().add_to_cart(&product) {
                    ctx.output.success(&format!("Added {} to the cart", product.title));
                } else {
                    ctx.output.info(&format!("{} is already in the cart", product.title));
                }
            }
        }
        2 => session.open_cart(),
        _ => return Ok(false),
    }

    Ok(true)
}

fn pick_product(
    session: &StoreSession,
    page_size: usize,
    prompt: &str,
    ctx: &Context,
) -> Result<Option<Arc<Product>>> {
    let products = session.catalog().products();
    if products.is_empty() {
        ctx.output.info("No products available.");
        return Ok(None);
    }

    let shown = &products[..page_size.max(1).min(products.len())];
    let items: Vec<String> = shown
        .iter()
        .map(|p| format!("{}  {}", p.title, p.price_display()))
        .collect();
    let choice = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(choice.map(|i| Arc::clone(&shown[i])))
}

fn details(session: &mut StoreSession, ctx: &Context) -> Result<bool> {
    let Some(detail) = session.details_mut() else {
        return Ok(true);
    };

    match detail.state() {
        DetailState::Loading => ctx.output.info("Loading..."),
        DetailState::Error(message) => ctx.output.error(message),
        DetailState::Loaded(product) => {
            ctx.output.header(&product.title);
            ctx.output.kv("Price", &product.price_display());
            if !product.description.is_empty() {
                ctx.output.kv("Description", &product.description);
            }
        }
    }

    let items = ["Back to Home"];
    Select::new().items(&items).default(0).interact()?;
    session.go_home();
    Ok(true)
}

fn cart(session: &mut StoreSession, ctx: &Context) -> Result<bool> {
    let Some(cart) = session.cart_mut() else {
        return Ok(true);
    };

    print_cart(cart, ctx)?;

    let items = [
        "Increase quantity",
        "Decrease quantity",
        "Proceed to Checkout",
        "Back",
    ];
    let choice = Select::new()
        .with_prompt("Cart")
        .items(&items)
        .default(0)
        .interact()?;

    match choice {
        0 | 1 if cart.is_empty() => ctx.output.info("Your cart is empty."),
        0 | 1 => {
            let titles: Vec<String> = cart
                .entries()
                .iter()
                .map(|e| format!("{} (x{})", e.product.title, e.quantity))
                .collect();
            if let Some(i) = Select::new()
                .with_prompt("Which product?")
                .items(&titles)
                .default(0)
                .interact_opt()?
            {
                let id = cart.entries()[i].product_id().clone();
                if choice == 0 {
                    cart.increment(&id)?;
                } else {
                    cart.decrement(&id)?;
                }
            }
        }
        2 => {
            info!("checkout requested; no checkout backend is configured");
            ctx.output.warn("Checkout is not available yet.");
        }
        _ => {
            session.back();
        }
    }

    Ok(true)
}
