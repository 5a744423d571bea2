//! Type-ahead suggestions for a partial query.

use anyhow::Result;
use storefront_catalog::messages;
use storefront_catalog::search::Suggestions;

use super::{load_catalog, QueryArgs};
use crate::context::Context;
use crate::output::{product_line, Output};

/// Run the suggest command.
pub async fn run(args: QueryArgs, ctx: &Context) -> Result<()> {
    let engine = ctx.engine();
    if !engine.is_active(&args.query) {
        if ctx.output.is_json() {
            ctx.output.json(&Suggestions::default());
        } else {
            ctx.output.warn(&format!(
                "Type at least {} characters to get suggestions",
                engine.config().min_query_len
            ));
        }
        return Ok(());
    }

    let list = load_catalog(ctx).await?;
    let suggestions = engine.suggest(list.products(), &args.query);

    if ctx.output.is_json() {
        ctx.output.json(&suggestions);
        return Ok(());
    }

    render(&ctx.output, &suggestions);
    Ok(())
}

/// Titled sections of the suggestion panel, empty ones left out.
pub(crate) fn panel_sections(suggestions: &Suggestions) -> Vec<(&'static str, Vec<String>)> {
    let products: Vec<String> = suggestions.popular_products.iter().map(product_line).collect();
    [
        ("Categorías", suggestions.categories.clone()),
        ("Búsquedas relacionadas", suggestions.related_terms.clone()),
        ("Productos populares", products),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .collect()
}

/// Print the suggestion panel.
pub(crate) fn render(output: &Output, suggestions: &Suggestions) {
    if !suggestions.show_popular_terms {
        output.info(messages::NO_SUGGESTIONS);
        return;
    }

    for (title, items) in panel_sections(suggestions) {
        output.header(title);
        for item in &items {
            output.list_item(item);
        }
    }
}
