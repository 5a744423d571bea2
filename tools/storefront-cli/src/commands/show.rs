//! Product detail page.

use anyhow::{bail, Result};
use storefront_catalog::messages;
use storefront_catalog::state::SingleProductState;

use super::ShowArgs;
use crate::context::Context;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let repo = ctx.repository()?;
    let mut detail = SingleProductState::new();

    let spinner = ctx.output.spinner(messages::LOADING_PRODUCT);
    detail.load(&repo, Some(&args.id)).await;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&detail.view());
        if let Some(error) = detail.error() {
            bail!("{}", error);
        }
        return Ok(());
    }

    render(&detail, ctx)
}

/// Print the detail page, or the matching error screen.
pub(crate) fn render(detail: &SingleProductState, ctx: &Context) -> Result<()> {
    if let Some(product) = detail.product() {
        ctx.output.product_detail(product);
        return Ok(());
    }

    // invalid ids share the not-found screen
    if detail.is_not_found() {
        let title = detail.error().unwrap_or(messages::PRODUCT_NOT_FOUND);
        ctx.output.header(title);
        ctx.output.info(messages::NOT_FOUND_DESCRIPTION);
        bail!("{}", title);
    }

    match detail.error() {
        Some(error) => bail!("{}", error),
        None => Ok(()),
    }
}
