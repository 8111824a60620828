//! Admin command - show products as admin console rows.

use anyhow::Result;
use turbo_variants::view::AdminRow;

use super::AdminArgs;
use crate::context::{load_products, Context};
use crate::output::truncate;

const WIDTHS: [usize; 6] = [26, 28, 12, 6, 24, 6];

/// Run the admin command.
pub fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    let products = load_products(&args.file)?;
    let rows: Vec<AdminRow> = products
        .iter()
        .map(|product| AdminRow::build(product, &ctx.config.display))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", rows.len()));
    ctx.output.table_row(
        &["TITLE", "IMAGE", "PRICE", "STOCK", "COLORS", "ISSUES"],
        &WIDTHS,
    );

    for row in &rows {
        let title = truncate(&row.title, WIDTHS[0]);
        let image = truncate(&row.thumbnail, WIDTHS[1]);
        let stock = row.stock.to_string();
        let colors = if row.colors.is_empty() {
            "-".to_string()
        } else {
            truncate(&row.colors, WIDTHS[4])
        };
        let issues = row.issue_count.to_string();

        ctx.output.table_row(
            &[
                title.as_str(),
                image.as_str(),
                row.price_text.as_str(),
                stock.as_str(),
                colors.as_str(),
                issues.as_str(),
            ],
            &WIDTHS,
        );
    }

    let flagged = rows.iter().filter(|r| r.issue_count > 0).count();
    if flagged > 0 {
        println!();
        ctx.output.warn(&format!(
            "{} product(s) have data issues; run `variants audit` for details",
            flagged
        ));
    }

    Ok(())
}
