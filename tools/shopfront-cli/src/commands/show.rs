//! Product details.

use anyhow::{bail, Result};
use shopfront_commerce::detail::{DetailState, ProductDetail};
use shopfront_commerce::ids::ProductId;

use super::ShowArgs;
use crate::context::Context;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let source = ctx.source();
    let mut detail = ProductDetail::new(ProductId::new(args.id));

    let spinner = ctx.output.spinner("Fetching product...");
    let state = detail.load(&source).await;
    spinner.finish_and_clear();

    match state {
        DetailState::Loaded(product) => {
            if ctx.output.is_json() {
                ctx.output.json(product.as_ref());
                return Ok(());
            }

            ctx.output.header(&product.title);
            ctx.output.kv("id", product.id.as_str());
            ctx.output.kv("price", &product.price_display());
            if !product.thumbnail.is_empty() {
                ctx.output.kv("thumbnail", &product.thumbnail);
            }
            if !product.description.is_empty() {
                ctx.output.info("");
                println!("{}", product.description);
            }
            Ok(())
        }
        DetailState::Error(message) => bail!("{}", message),
        DetailState::Loading => bail!("Product is still loading"),
    }
}
