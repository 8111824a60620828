//! Derivation engine.
//!
//! Pure functions mapping a [`Product`] and an optional [`Selection`] to the
//! values every surface displays: thumbnail, price, stock and colors. The
//! fallback order lives here and nowhere else; cards, product pages and admin
//! rows all call into this module.
//!
//! None of these functions fail. Missing or malformed data resolves to the
//! documented defaults: [`PLACEHOLDER_IMAGE`], a price of 0, a stock of 0 and
//! an empty color list.

use std::collections::HashSet;

use crate::catalog::{price_amount, stock_count, Product, Variant};
use crate::selection::Selection;
use serde::Serialize;

/// Image reference shown when a product has no usable image anywhere.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.png";

/// Which mode of the engine to resolve price and stock in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context<'a> {
    /// Context-free mode for grid cards and admin rows.
    ///
    /// Price comes from the first variant that has sizes; stock is the total
    /// over every variant and size. An attached selection only contributes
    /// its size label to the price lookup.
    Listing(Option<&'a Selection>),
    /// Context-aware mode for the product page.
    ///
    /// Price and stock come from `variants[selection.variant_index]` and the
    /// selected size. An index outside the variant list resolves as
    /// [`Context::Listing`] with the same selection.
    Detail(&'a Selection),
}

impl<'a> Context<'a> {
    /// The selection attached to this context, if any.
    pub fn selection(&self) -> Option<&'a Selection> {
        match *self {
            Context::Listing(selection) => selection,
            Context::Detail(selection) => Some(selection),
        }
    }
}

impl Default for Context<'_> {
    fn default() -> Self {
        Context::Listing(None)
    }
}

/// The four derived display values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayValues {
    pub thumbnail: String,
    pub price: f64,
    pub stock: u64,
    pub colors: Vec<String>,
}

/// Resolve every display value in one call.
pub fn derive(product: &Product, ctx: Context<'_>) -> DisplayValues {
    DisplayValues {
        thumbnail: resolve_thumbnail(product, ctx.selection()).to_string(),
        price: resolve_price(product, ctx),
        stock: resolve_stock(product, ctx),
        colors: resolve_available_colors(product)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

/// Resolve the image to show for a product.
///
/// First non-blank value wins:
/// 1. the selected color's variant: `images[0]`, then `image`, then `img`
/// 2. `images[0]` of the first variant that has images
/// 3. the product's `images[0]`
/// 4. the product's legacy `image`
/// 5. [`PLACEHOLDER_IMAGE`]
pub fn resolve_thumbnail<'a>(product: &'a Product, selection: Option<&Selection>) -> &'a str {
    resolve_thumbnail_or(product, selection, PLACEHOLDER_IMAGE)
}

/// [`resolve_thumbnail`] with a caller-supplied placeholder.
///
/// A blank placeholder is replaced by [`PLACEHOLDER_IMAGE`].
pub fn resolve_thumbnail_or<'a>(
    product: &'a Product,
    selection: Option<&Selection>,
    placeholder: &'a str,
) -> &'a str {
    selected_color_image(product, selection)
        .or_else(|| product.variants().iter().find_map(Variant::first_image))
        .or_else(|| product.first_image())
        .or_else(|| product.legacy_image())
        .unwrap_or_else(|| {
            if placeholder.trim().is_empty() {
                PLACEHOLDER_IMAGE
            } else {
                placeholder
            }
        })
}

fn selected_color_image<'a>(product: &'a Product, selection: Option<&Selection>) -> Option<&'a str> {
    let color = selection?.color.as_deref().filter(|c| !c.trim().is_empty())?;
    let variant = product.find_variant(color)?;
    variant.first_image().or_else(|| variant.fallback_image())
}

/// Resolve the price to show, always finite and `>= 0`.
pub fn resolve_price(product: &Product, ctx: Context<'_>) -> f64 {
    if let Some(variant) = targeted_variant(product, ctx) {
        return match variant.pick_size(size_of(ctx)) {
            Some(size) => size.price_amount(),
            None => price_amount(product.price),
        };
    }

    product
        .variants()
        .iter()
        .find(|v| v.has_sizes())
        .and_then(|v| v.pick_size(size_of(ctx)))
        .map_or_else(|| price_amount(product.price), |size| size.price_amount())
}

/// Resolve the stock to show.
///
/// In listing mode this is the total over every variant ("any size or color
/// in stock"); in detail mode it is the targeted size, or the targeted
/// variant's own count when it has no sizes.
pub fn resolve_stock(product: &Product, ctx: Context<'_>) -> u64 {
    if let Some(variant) = targeted_variant(product, ctx) {
        return match variant.pick_size(size_of(ctx)) {
            Some(size) => size.stock_count(),
            None => variant.own_stock(),
        };
    }

    if product.has_variants() {
        product
            .variants()
            .iter()
            .fold(0u64, |acc, v| acc.saturating_add(v.total_stock()))
    } else {
        stock_count(product.count_in_stock)
    }
}

/// Distinct color labels, flat `colors` first and then variant colors.
///
/// First occurrence wins; blank labels are dropped.
pub fn resolve_available_colors(product: &Product) -> Vec<&str> {
    let mut seen = HashSet::new();
    product
        .colors()
        .iter()
        .map(String::as_str)
        .chain(product.variants().iter().filter_map(|v| v.color.as_deref()))
        .filter(|color| !color.trim().is_empty())
        .filter(|color| seen.insert(*color))
        .collect()
}

/// Stock of the first variant with the given color, 0 if there is none.
///
/// A swatch whose color resolves to 0 is shown disabled.
pub fn resolve_variant_stock(product: &Product, color: &str) -> u64 {
    product.find_variant(color).map_or(0, Variant::total_stock)
}

/// A color swatch with its availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub color: String,
    /// Per-color stock; `None` when the color has no backing variant.
    pub stock: Option<u64>,
    pub disabled: bool,
}

/// One swatch per available color.
///
/// Colors backed by a variant are disabled when that variant is out of
/// stock. Flat colors carry no per-color stock and are never disabled.
pub fn color_swatches(product: &Product) -> Vec<Swatch> {
    resolve_available_colors(product)
        .into_iter()
        .map(|color| {
            let stock = product
                .find_variant(color)
                .map(|_| resolve_variant_stock(product, color));
            Swatch {
                color: color.to_string(),
                stock,
                disabled: stock == Some(0),
            }
        })
        .collect()
}

fn targeted_variant<'a>(product: &'a Product, ctx: Context<'_>) -> Option<&'a Variant> {
    match ctx {
        Context::Detail(selection) => product.variants().get(selection.variant_index),
        Context::Listing(_) => None,
    }
}

fn size_of<'a>(ctx: Context<'a>) -> Option<&'a str> {
    ctx.selection().and_then(|s| s.size.as_deref())
}
