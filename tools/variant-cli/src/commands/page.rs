//! Page command - show a product page for a selection.

use anyhow::{bail, Result};
use turbo_variants::selection::DetailSelection;
use turbo_variants::view::ProductPage;

use super::PageArgs;
use crate::context::{load_products, Context};
use crate::output::status_badge;

/// Run the page command.
///
/// Selection steps are applied in the order a shopper would make them:
/// color, then variant, then size.
pub fn run(args: PageArgs, ctx: &Context) -> Result<()> {
    let products = load_products(&args.file)?;
    let Some(product) = products.get(args.index) else {
        bail!(
            "No product at index {} ({} product(s) in {})",
            args.index,
            products.len(),
            args.file
        );
    };

    let mut selection = DetailSelection::new(product);
    if let Some(color) = &args.color {
        selection.toggle_color(product, color);
    }
    if let Some(index) = args.variant {
        if index >= product.variants().len() {
            ctx.output.warn(&format!(
                "Variant #{} does not exist; showing listing values",
                index
            ));
        }
        selection.select_variant(product, index);
    }
    if let Some(size) = &args.size {
        selection.select_size(size);
    }

    tracing::debug!(
        variant = selection.variant_index(),
        size = ?selection.selected_size(),
        color = ?selection.selected_color(),
        "page selection"
    );

    let page = ProductPage::build(product, &selection, &ctx.config.display);

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    ctx.output.header(&page.title);
    ctx.output.kv("Image", &page.thumbnail);
    ctx.output.kv("Price", &page.price_text);
    ctx.output
        .kv("Stock", &format!("{} ({})", page.stock, status_badge(page.status)));
    ctx.output.kv("Variant", &page.variant_index.to_string());
    if let Some(color) = &page.selected_color {
        ctx.output.kv("Color", color);
    }

    if !page.sizes.is_empty() {
        ctx.output.kv("Sizes", "");
        for size in &page.sizes {
            let marker = if size.selected { "*" } else { " " };
            let availability = if size.is_available() {
                format!("{} left", size.stock)
            } else {
                "sold out".to_string()
            };
            ctx.output.list_item(&format!(
                "{} {} {} ({})",
                marker,
                size.label,
                ctx.config.display.format_price(size.price),
                availability
            ));
        }
    }

    if page.can_add_to_cart {
        ctx.output.success("Available to add to cart");
    } else {
        ctx.output.warn("Unavailable");
    }

    Ok(())
}
