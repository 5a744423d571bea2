//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod list;
pub mod search;
pub mod show;
pub mod suggest;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use storefront_catalog::state::ProductListState;

use crate::context::Context;
use storefront_catalog::messages;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Show only the first N products.
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Only products in this category.
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the search and suggest commands.
#[derive(Args)]
pub struct QueryArgs {
    /// Search text, matched case-insensitively.
    pub query: String,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: String,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Start with this query already typed.
    #[arg(short, long)]
    pub query: Option<String>,
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
    /// Create a storefront.toml in the current directory.
    Init {
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate configuration.
    Validate,
}

/// Load the catalog behind a spinner, failing the command if it cannot be fetched.
pub(crate) async fn load_catalog(ctx: &Context) -> Result<ProductListState> {
    let repo = ctx.repository()?;
    let mut list = ProductListState::new();

    let spinner = ctx.output.spinner(messages::LOADING_PRODUCTS);
    list.load(&repo).await;
    spinner.finish_and_clear();

    if let Some(error) = list.error() {
        bail!("{}", error);
    }
    Ok(list)
}
