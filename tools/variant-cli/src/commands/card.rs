//! Card command - show products as customer grid cards.

use anyhow::Result;
use turbo_variants::selection::CardSelection;
use turbo_variants::view::ProductCard;

use super::CardArgs;
use crate::context::{load_products, Context};
use crate::output::{status_badge, truncate};

/// Run the card command.
pub fn run(args: CardArgs, ctx: &Context) -> Result<()> {
    let products = load_products(&args.file)?;
    let display = &ctx.config.display;

    let cards: Vec<ProductCard> = products
        .iter()
        .map(|product| {
            let mut selection = CardSelection::new();
            if let Some(color) = &args.color {
                selection.toggle_color(color);
            }
            ProductCard::build(product, &selection, display)
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&cards);
        return Ok(());
    }

    ctx.output.header(&format!("Cards ({})", cards.len()));
    for card in &cards {
        println!();
        ctx.output.kv("Title", &truncate(&card.title, 40));
        ctx.output.kv("Link", &card.href);
        ctx.output.kv("Image", &card.thumbnail);
        ctx.output.kv("Price", &card.price_text);
        ctx.output
            .kv("Stock", &format!("{} ({})", card.stock, status_badge(card.status)));

        if !card.swatches.is_empty() {
            ctx.output.kv("Colors", "");
            for swatch in &card.swatches {
                let mut line = swatch.color.clone();
                if card.selected_color.as_deref() == Some(swatch.color.as_str()) {
                    line.push_str(" [selected]");
                }
                if swatch.disabled {
                    line.push_str(" (sold out)");
                }
                ctx.output.list_item(&line);
            }
        }
    }

    Ok(())
}
