//! List the catalog.

use anyhow::Result;
use storefront_catalog::{messages, Product};

use super::{load_catalog, ListArgs};
use crate::context::Context;

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let list = load_catalog(ctx).await?;
    let products = select(list.products(), &args);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Productos");
    if products.is_empty() {
        ctx.output.info(messages::NO_RESULTS);
        return Ok(());
    }
    for product in &products {
        ctx.output.product_row(product);
    }

    if products.len() < list.products().len() {
        ctx.output.debug(&format!(
            "Showing {} of {} products",
            products.len(),
            list.products().len()
        ));
    }

    Ok(())
}

fn select<'a>(products: &'a [Product], args: &ListArgs) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| match &args.category {
            Some(category) => p.category.eq_ignore_ascii_case(category),
            None => true,
        })
        .take(args.limit.unwrap_or(usize::MAX))
        .collect()
}
