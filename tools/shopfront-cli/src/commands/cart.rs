//! Cart pricing from the command line.

use anyhow::{Context as _, Result};
use shopfront_commerce::cart::CartModel;
use shopfront_commerce::ids::ProductId;

use super::CartArgs;
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.session()?;
    ctx.load_catalog(&mut session).await;

    let catalog = session.catalog_mut();
    for id in args.ids {
        let id = ProductId::new(id);
        match catalog.add_to_cart_by_id(&id) {
            Ok(true) => ctx.output.debug(&format!("Added {}", id)),
            Ok(false) => ctx.output.debug(&format!("{} is already in the cart", id)),
            Err(e) => ctx.output.warn(&e.to_string()),
        }
    }

    session.open_cart();
    let cart = session.cart_mut().context("Cart screen did not open")?;

    for change in &args.changes {
        if let Err(e) = change.apply(cart) {
            ctx.output.warn(&e.to_string());
        }
    }

    print_cart(cart, ctx)
}

/// Print the cart lines and totals.
pub fn print_cart(cart: &CartModel, ctx: &Context) -> Result<()> {
    let pricing = cart.pricing()?;

    if ctx.output.is_json() {
        ctx.output.json(&pricing);
        return Ok(());
    }

    ctx.output.header(&format!("Shopping Cart ({})", cart.item_count()));

    if pricing.line_items.is_empty() {
        ctx.output.info("Your cart is empty.");
    } else {
        for line in &pricing.line_items {
            ctx.output.table_row(
                &[
                    line.product_id.as_str(),
                    &line.title,
                    &format!("{} x {}", line.unit_price, line.quantity),
                    &line.line_total.display(),
                ],
                &[6, 32, 14],
            );
        }
    }

    ctx.output.info("");
    ctx.output.kv("Subtotal", &pricing.subtotal.display());
    ctx.output.kv("Delivery", &pricing.delivery_fee.display());
    ctx.output.kv("Total", &pricing.total.display());

    Ok(())
}
