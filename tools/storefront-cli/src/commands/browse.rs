//! Interactive catalog browser.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use storefront_catalog::browse::{BrowseEvent, BrowseSession, Navigation};
use storefront_catalog::repository::HttpProductRepository;
use storefront_catalog::state::SingleProductState;
use storefront_catalog::{messages, ProductId};

use super::{show, suggest, BrowseArgs};
use crate::context::Context;
use crate::output::product_line;

/// One row of a picker menu.
enum Choice {
    Term(String),
    Product(ProductId),
    OpenSuggestions,
    CloseSuggestions,
    NewSearch,
    Quit,
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        anyhow::bail!("browse is interactive and does not support --json");
    }

    let repo = ctx.repository()?;
    let mut session = BrowseSession::new(ctx.engine());

    let spinner = ctx.output.spinner(messages::LOADING_PRODUCTS);
    session.load(&repo).await;
    spinner.finish_and_clear();

    if let Some(query) = args.query {
        session.handle(BrowseEvent::QueryChanged(query));
    }

    loop {
        if let Some(error) = session.list().error() {
            ctx.output.error(error);
            let retry = Confirm::new()
                .with_prompt("¿Reintentar?")
                .default(true)
                .interact()?;
            if !retry {
                return Ok(());
            }
            if let Some(Navigation::Reload) = session.handle(BrowseEvent::RetryRequested) {
                let spinner = ctx.output.spinner(messages::LOADING_PRODUCTS);
                session.reload(&repo).await;
                spinner.finish_and_clear();
            }
            continue;
        }

        let choice = if session.suggestions_visible() {
            pick_suggestion(&session, ctx)?
        } else {
            pick_result(&session, ctx)?
        };

        match choice {
            Choice::Term(term) => {
                session.handle(BrowseEvent::SuggestionPicked(term));
            }
            Choice::Product(id) => {
                if let Some(Navigation::ProductDetail(id)) =
                    session.handle(BrowseEvent::ProductPicked(id))
                {
                    open_detail(&repo, id, ctx).await?;
                }
            }
            Choice::OpenSuggestions => {
                session.handle(BrowseEvent::InputFocused);
            }
            Choice::CloseSuggestions => {
                session.handle(BrowseEvent::Dismissed);
            }
            Choice::NewSearch => {
                let query: String = Input::new()
                    .with_prompt("Buscar")
                    .with_initial_text(session.query())
                    .allow_empty(true)
                    .interact_text()?;
                session.handle(BrowseEvent::QueryChanged(query));
            }
            Choice::Quit => return Ok(()),
        }
    }
}

fn pick_suggestion(session: &BrowseSession, ctx: &Context) -> Result<Choice> {
    let suggestions = session.suggestions();
    suggest::render(&ctx.output, &suggestions);

    let mut items = Vec::new();
    let mut choices = Vec::new();
    for term in suggestions.categories.iter().chain(suggestions.related_terms.iter()) {
        items.push(format!("Buscar \"{}\"", term));
        choices.push(Choice::Term(term.clone()));
    }
    for product in &suggestions.popular_products {
        items.push(product_line(product));
        choices.push(Choice::Product(product.id));
    }
    items.push("Ver resultados".to_string());
    choices.push(Choice::CloseSuggestions);
    items.push("Nueva búsqueda".to_string());
    choices.push(Choice::NewSearch);
    items.push("Salir".to_string());
    choices.push(Choice::Quit);

    let selection = Select::new()
        .with_prompt("Sugerencias")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(choices.swap_remove(selection))
}

fn pick_result(session: &BrowseSession, ctx: &Context) -> Result<Choice> {
    let results = session.results();

    ctx.output.header("Productos");
    if let Some(caption) = session.results_caption() {
        ctx.output.info(&caption);
    }
    if !results.has_results() {
        ctx.output.info(messages::NO_RESULTS);
    }

    let mut items = Vec::new();
    let mut choices = Vec::new();
    items.push("Nueva búsqueda".to_string());
    choices.push(Choice::NewSearch);
    if ctx.engine().is_active(session.query()) {
        items.push("Ver sugerencias".to_string());
        choices.push(Choice::OpenSuggestions);
    }
    for product in results.iter() {
        items.push(product_line(product));
        choices.push(Choice::Product(product.id));
    }
    items.push("Salir".to_string());
    choices.push(Choice::Quit);

    let selection = Select::new()
        .with_prompt("Elige un producto")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(choices.swap_remove(selection))
}

async fn open_detail(repo: &HttpProductRepository, id: ProductId, ctx: &Context) -> Result<()> {
    let mut detail = SingleProductState::new();
    let raw_id = id.to_string();

    let spinner = ctx.output.spinner(messages::LOADING_PRODUCT);
    detail.load(repo, Some(&raw_id)).await;
    spinner.finish_and_clear();

    loop {
        let failed = show::render(&detail, ctx).is_err();
        // not-found is final; transport errors can be retried
        if !failed || detail.is_not_found() {
            if failed {
                ctx.output.error(detail.error().unwrap_or(messages::PRODUCT_NOT_FOUND));
            }
            break;
        }

        if let Some(error) = detail.error() {
            ctx.output.error(error);
        }
        let retry = Confirm::new()
            .with_prompt("¿Reintentar?")
            .default(true)
            .interact()?;
        if !retry {
            break;
        }

        let spinner = ctx.output.spinner(messages::LOADING_PRODUCT);
        detail.refetch(repo).await;
        spinner.finish_and_clear();
    }

    Ok(())
}
