//! Per-view selection state.
//!
//! Each product card or product page owns one of these for as long as it is
//! on screen. The product record itself is never mutated.

use crate::catalog::{Product, Variant};
use crate::derive::{self, Context};
use serde::{Deserialize, Serialize};

/// The viewer's current color/variant/size choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Color being inspected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Index into the product's variants.
    #[serde(default)]
    pub variant_index: usize,
    /// Active size label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl Selection {
    /// An empty selection: no color, variant 0, no size.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_variant(mut self, index: usize) -> Self {
        self.variant_index = index;
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

/// Color swatch toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwatchState {
    /// No color picked.
    #[default]
    NoSelection,
    /// A color swatch is active.
    ColorSelected(String),
}

impl SwatchState {
    /// Toggle a swatch.
    ///
    /// Picking the active color again deselects it; picking another color
    /// replaces it. A blank label clears the selection.
    pub fn toggle(&mut self, color: &str) {
        let next = match &*self {
            _ if color.trim().is_empty() => SwatchState::NoSelection,
            SwatchState::ColorSelected(current) if current == color => SwatchState::NoSelection,
            _ => SwatchState::ColorSelected(color.to_string()),
        };
        *self = next;
    }

    /// The active color, if any.
    pub fn color(&self) -> Option<&str> {
        match self {
            SwatchState::NoSelection => None,
            SwatchState::ColorSelected(color) => Some(color),
        }
    }

    /// Check if the given color is the active one.
    pub fn is_selected(&self, color: &str) -> bool {
        self.color() == Some(color)
    }
}

/// Selection state of a compact product card.
///
/// Only the thumbnail reacts to the swatch; cards keep showing the default
/// price and total stock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSelection {
    swatch: SwatchState,
}

impl CardSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a color swatch.
    pub fn toggle_color(&mut self, color: &str) {
        self.swatch.toggle(color);
        tracing::debug!(color, selected = ?self.swatch.color(), "card swatch toggled");
    }

    pub fn swatch(&self) -> &SwatchState {
        &self.swatch
    }

    pub fn selected_color(&self) -> Option<&str> {
        self.swatch.color()
    }

    /// Selection context for the engine.
    pub fn context(&self) -> Selection {
        Selection {
            color: self.swatch.color().map(str::to_string),
            ..Selection::default()
        }
    }

    /// Current thumbnail for this card.
    pub fn thumbnail<'a>(&self, product: &'a Product) -> &'a str {
        derive::resolve_thumbnail(product, Some(&self.context()))
    }
}

/// Selection state of a product page.
///
/// Tracks the swatch, the targeted variant and the active size. Price and
/// stock are recomputed against the targeted variant on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailSelection {
    swatch: SwatchState,
    variant_index: usize,
    size: Option<String>,
}

impl DetailSelection {
    /// Initial state: variant 0 and its first size, if any.
    pub fn new(product: &Product) -> Self {
        let size = product
            .variants()
            .first()
            .and_then(default_size);
        Self {
            swatch: SwatchState::NoSelection,
            variant_index: 0,
            size,
        }
    }

    /// Target a variant by index.
    ///
    /// The active size is kept when the new variant offers it; otherwise it
    /// moves to the new variant's first size. Out-of-range indexes are
    /// accepted and resolve as if no variant were targeted.
    pub fn select_variant(&mut self, product: &Product, index: usize) {
        self.variant_index = index;
        if let Some(variant) = product.variants().get(index) {
            let offered = self.size.as_deref().is_some_and(|label| {
                variant.sizes().iter().any(|s| s.size.as_deref() == Some(label))
            });
            if !offered {
                self.size = default_size(variant);
            }
        }
        tracing::debug!(index, size = ?self.size, "page variant selected");
    }

    /// Set the active size. A blank label clears it.
    pub fn select_size(&mut self, size: &str) {
        self.size = (!size.trim().is_empty()).then(|| size.to_string());
        tracing::debug!(size = ?self.size, "page size selected");
    }

    /// Toggle a color swatch.
    ///
    /// Selecting a color that has a variant also targets that variant.
    /// Deselecting leaves the targeted variant unchanged.
    pub fn toggle_color(&mut self, product: &Product, color: &str) {
        self.swatch.toggle(color);
        tracing::debug!(color, selected = ?self.swatch.color(), "page swatch toggled");
        let target = self
            .swatch
            .color()
            .and_then(|selected| product.variant_index(selected));
        if let Some(index) = target {
            self.select_variant(product, index);
        }
    }

    pub fn swatch(&self) -> &SwatchState {
        &self.swatch
    }

    pub fn selected_color(&self) -> Option<&str> {
        self.swatch.color()
    }

    pub fn variant_index(&self) -> usize {
        self.variant_index
    }

    pub fn selected_size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Selection context as picked, without product fallbacks.
    pub fn context(&self) -> Selection {
        Selection {
            color: self.swatch.color().map(str::to_string),
            variant_index: self.variant_index,
            size: self.size.clone(),
        }
    }

    /// Selection context for the engine.
    ///
    /// Without an active swatch the color is the targeted variant's, so the
    /// image follows the same variant as price and stock.
    pub fn context_for(&self, product: &Product) -> Selection {
        let mut context = self.context();
        if context.color.is_none() {
            context.color = product
                .variants()
                .get(self.variant_index)
                .and_then(Variant::color_label)
                .map(str::to_string);
        }
        context
    }

    /// Current thumbnail, price and stock for the page.
    pub fn display(&self, product: &Product) -> derive::DisplayValues {
        derive::derive(product, Context::Detail(&self.context_for(product)))
    }
}

fn default_size(variant: &Variant) -> Option<String> {
    variant.sizes().first().and_then(|s| s.size.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Size;

    fn two_color_tee() -> Product {
        Product::new("Tee")
            .with_variant(
                Variant::new("Red")
                    .with_images(["red.jpg"])
                    .with_size(Size::new("S", 400.0, 2))
                    .with_size(Size::new("M", 500.0, 3)),
            )
            .with_variant(
                Variant::new("Blue")
                    .with_images(["blue.jpg"])
                    .with_size(Size::new("M", 550.0, 0))
                    .with_size(Size::new("L", 600.0, 4)),
            )
    }

    #[test]
    fn test_swatch_toggle_transitions() {
        let mut swatch = SwatchState::default();
        assert_eq!(swatch, SwatchState::NoSelection);

        swatch.toggle("Red");
        assert_eq!(swatch, SwatchState::ColorSelected("Red".to_string()));

        swatch.toggle("Blue");
        assert!(swatch.is_selected("Blue"));

        swatch.toggle("Blue");
        assert_eq!(swatch, SwatchState::NoSelection);

        swatch.toggle("Red");
        swatch.toggle("");
        assert_eq!(swatch.color(), None);
    }

    #[test]
    fn test_card_thumbnail_follows_swatch() {
        let product = two_color_tee();
        let mut card = CardSelection::new();
        assert_eq!(card.thumbnail(&product), "red.jpg");

        card.toggle_color("Blue");
        assert_eq!(card.thumbnail(&product), "blue.jpg");

        card.toggle_color("Blue");
        assert_eq!(card.thumbnail(&product), "red.jpg");
    }

    #[test]
    fn test_card_context_carries_color_only() {
        let mut card = CardSelection::new();
        card.toggle_color("Blue");
        assert_eq!(card.context(), Selection::new().with_color("Blue"));
    }

    #[test]
    fn test_detail_defaults() {
        let product = two_color_tee();
        let page = DetailSelection::new(&product);
        assert_eq!(page.variant_index(), 0);
        assert_eq!(page.selected_size(), Some("S"));
        assert_eq!(page.selected_color(), None);

        let flat = Product::new("Mug");
        assert_eq!(DetailSelection::new(&flat).selected_size(), None);
    }

    #[test]
    fn test_detail_recomputes_on_each_change() {
        let product = two_color_tee();
        let mut page = DetailSelection::new(&product);
        let values = page.display(&product);
        assert_eq!(values.price, 400.0);
        assert_eq!(values.stock, 2);

        page.select_size("M");
        let values = page.display(&product);
        assert_eq!(values.price, 500.0);
        assert_eq!(values.stock, 3);

        page.select_variant(&product, 1);
        assert_eq!(page.selected_size(), Some("M"));
        let values = page.display(&product);
        assert_eq!(values.price, 550.0);
        assert_eq!(values.stock, 0);
    }

    #[test]
    fn test_select_variant_resets_unoffered_size() {
        let product = two_color_tee();
        let mut page = DetailSelection::new(&product);
        assert_eq!(page.selected_size(), Some("S"));

        page.select_variant(&product, 1);
        assert_eq!(page.selected_size(), Some("M"));
    }

    #[test]
    fn test_toggle_color_targets_variant() {
        let product = two_color_tee();
        let mut page = DetailSelection::new(&product);

        page.toggle_color(&product, "Blue");
        assert_eq!(page.variant_index(), 1);
        assert_eq!(page.display(&product).thumbnail, "blue.jpg");

        page.toggle_color(&product, "Blue");
        assert_eq!(page.selected_color(), None);
        assert_eq!(page.variant_index(), 1);
    }

    #[test]
    fn test_image_follows_targeted_variant() {
        let product = two_color_tee();
        let mut page = DetailSelection::new(&product);

        page.select_variant(&product, 1);
        assert_eq!(page.selected_color(), None);
        assert_eq!(page.context_for(&product).color.as_deref(), Some("Blue"));
        let values = page.display(&product);
        assert_eq!(values.thumbnail, "blue.jpg");
        assert_eq!(values.price, 550.0);

        let mut page = DetailSelection::new(&product);
        page.toggle_color(&product, "Blue");
        page.toggle_color(&product, "Blue");
        let values = page.display(&product);
        assert_eq!(page.variant_index(), 1);
        assert_eq!(values.thumbnail, "blue.jpg");
        assert_eq!(values.price, 550.0);
    }

    #[test]
    fn test_out_of_range_variant_is_accepted() {
        let product = two_color_tee();
        let mut page = DetailSelection::new(&product);
        page.select_variant(&product, 9);
        assert_eq!(page.variant_index(), 9);

        let values = page.display(&product);
        assert_eq!(values.price, 400.0);
        assert_eq!(values.stock, 9);
    }

    #[test]
    fn test_blank_size_clears() {
        let product = two_color_tee();
        let mut page = DetailSelection::new(&product);
        page.select_size("  ");
        assert_eq!(page.selected_size(), None);
    }
}
