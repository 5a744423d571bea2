//! Filter the catalog by a query.

use anyhow::Result;
use storefront_catalog::messages;
use storefront_catalog::search::filter_products;

use super::{load_catalog, QueryArgs};
use crate::context::Context;

/// Run the search command.
pub async fn run(args: QueryArgs, ctx: &Context) -> Result<()> {
    let list = load_catalog(ctx).await?;
    let results = filter_products(list.products(), &args.query);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "query": args.query,
            "count": results.results_count(),
            "products": results.products,
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Resultados para \"{}\"", args.query));
    if !results.has_results() {
        ctx.output.info(messages::NO_RESULTS);
        return Ok(());
    }

    ctx.output.info(&results.count_label());
    for product in results.iter() {
        ctx.output.product_row(product);
    }

    Ok(())
}
