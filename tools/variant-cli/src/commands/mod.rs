//! CLI command implementations.

pub mod admin;
pub mod audit;
pub mod card;
pub mod page;

use clap::Args;

/// Arguments for the card command.
#[derive(Args)]
pub struct CardArgs {
    /// Product payload (object, array or `products` envelope).
    pub file: String,

    /// Swatch to toggle on every card.
    #[arg(long)]
    pub color: Option<String>,
}

/// Arguments for the page command.
#[derive(Args)]
pub struct PageArgs {
    /// Product payload (object, array or `products` envelope).
    pub file: String,

    /// Which product in the payload to show.
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,

    /// Variant index to select.
    #[arg(long)]
    pub variant: Option<usize>,

    /// Size label to select.
    #[arg(short, long)]
    pub size: Option<String>,

    /// Color swatch to toggle.
    #[arg(long)]
    pub color: Option<String>,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    /// Product payload (object, array or `products` envelope).
    pub file: String,
}

/// Arguments for the audit command.
#[derive(Args)]
pub struct AuditArgs {
    /// Product payload (object, array or `products` envelope).
    pub file: String,

    /// Exit with an error when any issue is found.
    #[arg(long)]
    pub strict: bool,
}
