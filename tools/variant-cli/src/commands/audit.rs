//! Audit command - report data-shape issues per product.

use anyhow::{bail, Result};
use serde::Serialize;
use turbo_variants::audit::{audit, DataIssue};

use super::AuditArgs;
use crate::context::{load_products, Context};

#[derive(Serialize)]
struct ProductReport {
    index: usize,
    id: Option<String>,
    title: String,
    issues: Vec<DataIssue>,
}

/// Run the audit command.
pub fn run(args: AuditArgs, ctx: &Context) -> Result<()> {
    let products = load_products(&args.file)?;

    let reports: Vec<ProductReport> = products
        .iter()
        .enumerate()
        .map(|(index, product)| ProductReport {
            index,
            id: product.id.as_ref().map(ToString::to_string),
            title: product.display_title().to_string(),
            issues: audit(product),
        })
        .collect();

    let total: usize = reports.iter().map(|r| r.issues.len()).sum();

    if ctx.output.is_json() {
        ctx.output.json(&reports);
    } else {
        ctx.output.header("Audit");
        for report in reports.iter().filter(|r| !r.issues.is_empty()) {
            let label = match &report.id {
                Some(id) => format!("#{} {} ({})", report.index, report.title, id),
                None => format!("#{} {}", report.index, report.title),
            };
            println!();
            ctx.output.warn(&label);
            for issue in &report.issues {
                ctx.output.list_item(&issue.to_string());
            }
        }

        println!();
        if total == 0 {
            ctx.output
                .success(&format!("{} product(s) checked, no issues", reports.len()));
        } else {
            ctx.output.warn(&format!(
                "{} issue(s) across {} product(s)",
                total,
                reports.iter().filter(|r| !r.issues.is_empty()).count()
            ));
        }
    }

    if args.strict && total > 0 {
        bail!("{} data issue(s) found", total);
    }

    Ok(())
}
