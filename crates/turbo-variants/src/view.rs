//! View models for the storefront surfaces.
//!
//! Cards, product pages and admin rows are built only through the derivation
//! engine, so all three show the same values for the same product.

use serde::Serialize;

use crate::audit::audit;
use crate::catalog::Product;
use crate::config::DisplayConfig;
use crate::derive::{
    color_swatches, resolve_available_colors, resolve_price, resolve_stock, resolve_thumbnail_or,
    Context, Swatch,
};
use crate::selection::{CardSelection, DetailSelection};

/// Stock classification for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    Low,
    InStock,
}

impl StockStatus {
    /// Classify a stock count against the low-stock threshold.
    pub fn classify(stock: u64, low_stock_threshold: u64) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock <= low_stock_threshold {
            StockStatus::Low
        } else {
            StockStatus::InStock
        }
    }

    /// Get stock status message.
    pub fn message(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::Low => "Low Stock - Order Soon!",
            StockStatus::InStock => "In Stock",
        }
    }

    /// Get status CSS class.
    pub fn css_class(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "stock-out",
            StockStatus::Low => "stock-low",
            StockStatus::InStock => "stock-available",
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }
}

/// A product in a customer grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: Option<String>,
    pub title: String,
    pub href: String,
    pub thumbnail: String,
    pub price: f64,
    pub price_text: String,
    pub stock: u64,
    pub status: StockStatus,
    pub swatches: Vec<Swatch>,
    pub selected_color: Option<String>,
}

impl ProductCard {
    /// Build a card. Only the thumbnail follows the swatch; price and stock
    /// are the context-free values.
    pub fn build(product: &Product, selection: &CardSelection, config: &DisplayConfig) -> Self {
        let context = selection.context();
        let price = resolve_price(product, Context::Listing(None));
        let stock = resolve_stock(product, Context::Listing(None));

        Self {
            id: product.id.as_ref().map(ToString::to_string),
            title: product.display_title().to_string(),
            href: product_href(product),
            thumbnail: resolve_thumbnail_or(product, Some(&context), &config.placeholder_image)
                .to_string(),
            price,
            price_text: config.format_price(price),
            stock,
            status: StockStatus::classify(stock, config.low_stock_threshold),
            swatches: color_swatches(product),
            selected_color: context.color,
        }
    }
}

/// One size button on a product page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeOption {
    pub label: String,
    pub price: f64,
    pub stock: u64,
    pub selected: bool,
}

impl SizeOption {
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}

/// A product detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPage {
    pub id: Option<String>,
    pub title: String,
    pub thumbnail: String,
    pub price: f64,
    pub price_text: String,
    pub stock: u64,
    pub status: StockStatus,
    pub swatches: Vec<Swatch>,
    pub selected_color: Option<String>,
    pub variant_index: usize,
    pub sizes: Vec<SizeOption>,
    pub selected_size: Option<String>,
    pub can_add_to_cart: bool,
}

impl ProductPage {
    /// Build a page for the current selection, recomputing price and stock
    /// against the targeted variant and size.
    pub fn build(product: &Product, selection: &DetailSelection, config: &DisplayConfig) -> Self {
        let context = selection.context_for(product);
        let ctx = Context::Detail(&context);
        let price = resolve_price(product, ctx);
        let stock = resolve_stock(product, ctx);
        let status = StockStatus::classify(stock, config.low_stock_threshold);

        let variant = product.variants().get(context.variant_index);
        let picked = variant.and_then(|v| v.pick_size_index(context.size.as_deref()));

        let sizes: Vec<SizeOption> = variant
            .map(|variant| {
                variant
                    .sizes()
                    .iter()
                    .enumerate()
                    .map(|(position, size)| SizeOption {
                        label: size.label().to_string(),
                        price: size.price_amount(),
                        stock: size.stock_count(),
                        selected: picked == Some(position),
                    })
                    .collect()
            })
            .unwrap_or_default();
        let active_size = picked.map(|position| sizes[position].label.clone());

        Self {
            id: product.id.as_ref().map(ToString::to_string),
            title: product.display_title().to_string(),
            thumbnail: resolve_thumbnail_or(product, Some(&context), &config.placeholder_image)
                .to_string(),
            price,
            price_text: config.format_price(price),
            stock,
            status,
            swatches: color_swatches(product),
            selected_color: selection.selected_color().map(str::to_string),
            variant_index: context.variant_index,
            sizes,
            selected_size: active_size,
            can_add_to_cart: status.is_available(),
        }
    }
}

/// A product row in the admin console.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminRow {
    pub id: Option<String>,
    pub title: String,
    pub thumbnail: String,
    pub price_text: String,
    pub stock: u64,
    pub status: StockStatus,
    pub colors: String,
    pub issue_count: usize,
}

impl AdminRow {
    pub fn build(product: &Product, config: &DisplayConfig) -> Self {
        let price = resolve_price(product, Context::Listing(None));
        let stock = resolve_stock(product, Context::Listing(None));

        Self {
            id: product.id.as_ref().map(ToString::to_string),
            title: product.display_title().to_string(),
            thumbnail: resolve_thumbnail_or(product, None, &config.placeholder_image).to_string(),
            price_text: config.format_price(price),
            stock,
            status: StockStatus::classify(stock, config.low_stock_threshold),
            colors: resolve_available_colors(product).join(", "),
            issue_count: audit(product).len(),
        }
    }
}

/// Link to a product page: by slug when present, else by id.
fn product_href(product: &Product) -> String {
    let key = product
        .slug
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| product.id.as_ref().map(|id| id.as_str()));
    match key {
        Some(key) => format!("/product/{}", key),
        None => "/products".to_string(),
    }
}
