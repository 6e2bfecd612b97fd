//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod config;
pub mod products;
pub mod show;

use clap::{ArgMatches, Args, Subcommand};
use shopfront_commerce::cart::CartModel;
use shopfront_commerce::error::CommerceError;
use shopfront_commerce::ids::ProductId;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Show only the first N products.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Product IDs to add to the cart, in order.
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Increase the quantity of a product (repeatable).
    #[arg(short, long = "increment", value_name = "ID")]
    pub increment: Vec<String>,

    /// Decrease the quantity of a product, never below 1 (repeatable).
    #[arg(short, long = "decrement", value_name = "ID")]
    pub decrement: Vec<String>,

    /// `--increment` and `--decrement` merged in command line order.
    #[arg(skip)]
    pub changes: Vec<QuantityChange>,
}

impl CartArgs {
    /// Merge the quantity flags in the order they were typed.
    pub fn with_order(mut self, matches: &ArgMatches) -> Self {
        let increments = indexed(matches, "increment", &self.increment, QuantityChange::Increment);
        let decrements = indexed(matches, "decrement", &self.decrement, QuantityChange::Decrement);

        let mut changes: Vec<(usize, QuantityChange)> = increments.chain(decrements).collect();
        changes.sort_by_key(|(index, _)| *index);
        self.changes = changes.into_iter().map(|(_, change)| change).collect();
        self
    }
}

fn indexed<'a>(
    matches: &'a ArgMatches,
    arg: &str,
    ids: &'a [String],
    change: fn(ProductId) -> QuantityChange,
) -> impl Iterator<Item = (usize, QuantityChange)> + 'a {
    matches
        .indices_of(arg)
        .into_iter()
        .flatten()
        .zip(ids)
        .map(move |(index, id)| (index, change(ProductId::new(id.clone()))))
}

/// One quantity change on the cart screen.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityChange {
    Increment(ProductId),
    Decrement(ProductId),
}

impl QuantityChange {
    /// Apply to the cart, returning the new quantity.
    pub fn apply(&self, cart: &mut CartModel) -> Result<u32, CommerceError> {
        match self {
            QuantityChange::Increment(id) => cart.increment(id),
            QuantityChange::Decrement(id) => cart.decrement(id),
        }
    }
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Number of products offered per menu.
    #[arg(long, default_value = "20")]
    pub page_size: usize,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the path of the config file in use.
    Path,
}
