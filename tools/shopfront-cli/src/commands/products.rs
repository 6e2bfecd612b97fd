//! Catalog listing.

use anyhow::Result;
use shopfront_commerce::catalog::Product;

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.session()?;
    ctx.load_catalog(&mut session).await;

    let products = session.catalog().products();
    let shown = args.limit.unwrap_or(products.len()).min(products.len());
    let products = &products[..shown];

    if ctx.output.is_json() {
        let list: Vec<&Product> = products.iter().map(|p| p.as_ref()).collect();
        ctx.output.json(&list);
        return Ok(());
    }

    ctx.output.header("Products");

    if products.is_empty() {
        ctx.output.info("No products available.");
        return Ok(());
    }

    ctx.output.table_row(&["ID", "TITLE", "PRICE"], &[6, 40]);
    for product in products {
        ctx.output.table_row(
            &[product.id.as_str(), &product.title, &product.price_display()],
            &[6, 40],
        );
    }

    let total = session.catalog().products().len();
    if shown < total {
        ctx.output.info(&format!("Showing {} of {} products", shown, total));
    }

    Ok(())
}
