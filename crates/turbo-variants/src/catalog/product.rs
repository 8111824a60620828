//! Product, variant and size records.
//!
//! Every field the commerce API may omit is an `Option`. Accessors on these
//! types fold the "blank means absent" rule in one place so the derivation
//! engine never has to truthy-check raw fields.

use crate::catalog::wire;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A catalog item, optionally split into color/size variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque identifier.
    #[serde(
        alias = "_id",
        default,
        deserialize_with = "wire::id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ProductId>,
    /// Display title.
    #[serde(default, deserialize_with = "wire::string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// URL-friendly slug.
    #[serde(default, deserialize_with = "wire::string", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Base price, used only when no variant pricing exists.
    #[serde(default, deserialize_with = "wire::number", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Base stock, used only when no variant stock exists.
    #[serde(default, deserialize_with = "wire::integer", skip_serializing_if = "Option::is_none")]
    pub count_in_stock: Option<i64>,
    /// Ordered image references.
    #[serde(default, deserialize_with = "wire::strings")]
    pub images: Vec<String>,
    /// Legacy single image reference.
    #[serde(default, deserialize_with = "wire::string", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Color labels of flat, variant-less products.
    #[serde(
        default,
        deserialize_with = "wire::optional_strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub colors: Option<Vec<String>>,
    /// Color variants.
    #[serde(default, deserialize_with = "wire::records", skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,
}

impl Product {
    /// Create an empty product with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Variants in API order; empty when absent.
    pub fn variants(&self) -> &[Variant] {
        self.variants.as_deref().unwrap_or_default()
    }

    /// Flat color labels; empty when absent.
    pub fn colors(&self) -> &[String] {
        self.colors.as_deref().unwrap_or_default()
    }

    /// Check if this product is split into variants.
    pub fn has_variants(&self) -> bool {
        !self.variants().is_empty()
    }

    /// First variant carrying the given color label.
    ///
    /// A blank label matches nothing.
    pub fn find_variant(&self, color: &str) -> Option<&Variant> {
        self.variant_index(color).map(|index| &self.variants()[index])
    }

    /// Position of the first variant carrying the given color label.
    pub fn variant_index(&self, color: &str) -> Option<usize> {
        let color = present(Some(color))?;
        self.variants()
            .iter()
            .position(|v| v.color.as_deref() == Some(color))
    }

    /// First non-blank image of the product itself.
    pub fn first_image(&self) -> Option<&str> {
        first_present(&self.images)
    }

    /// Legacy single image, if not blank.
    pub fn legacy_image(&self) -> Option<&str> {
        present(self.image.as_deref())
    }

    /// Title for display; empty when absent.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Add a variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.get_or_insert_with(Vec::new).push(variant);
        self
    }
}

/// A color-specific sub-record of a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Color label; not guaranteed unique across a product's variants.
    #[serde(default, deserialize_with = "wire::string", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Images specific to this variant.
    #[serde(default, deserialize_with = "wire::strings")]
    pub images: Vec<String>,
    /// Single fallback image.
    #[serde(default, deserialize_with = "wire::string", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Alternate key for the single fallback image.
    #[serde(default, deserialize_with = "wire::string", skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    /// Sizes offered in this color.
    #[serde(default, deserialize_with = "wire::records", skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<Size>>,
    /// Stock when the variant has no sizes.
    #[serde(default, deserialize_with = "wire::integer", skip_serializing_if = "Option::is_none")]
    pub count_in_stock: Option<i64>,
}

impl Variant {
    /// Create a variant for a color.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }

    /// Set the variant's images.
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Add a size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.sizes.get_or_insert_with(Vec::new).push(size);
        self
    }

    /// Set the stock used when there are no sizes.
    pub fn with_stock(mut self, count: i64) -> Self {
        self.count_in_stock = Some(count);
        self
    }

    /// Sizes in API order; empty when absent.
    pub fn sizes(&self) -> &[Size] {
        self.sizes.as_deref().unwrap_or_default()
    }

    /// Check if this variant is split into sizes.
    ///
    /// An empty size list counts as no sizes.
    pub fn has_sizes(&self) -> bool {
        !self.sizes().is_empty()
    }

    /// Color label, if not blank.
    pub fn color_label(&self) -> Option<&str> {
        present(self.color.as_deref())
    }

    /// First non-blank entry of `images`.
    pub fn first_image(&self) -> Option<&str> {
        first_present(&self.images)
    }

    /// The single fallback image: `image`, then `img`.
    pub fn fallback_image(&self) -> Option<&str> {
        present(self.image.as_deref()).or_else(|| present(self.img.as_deref()))
    }

    /// Size with the given label, else the first size.
    pub fn pick_size(&self, wanted: Option<&str>) -> Option<&Size> {
        self.pick_size_index(wanted).map(|index| &self.sizes()[index])
    }

    /// Position of the size [`Variant::pick_size`] resolves to.
    pub fn pick_size_index(&self, wanted: Option<&str>) -> Option<usize> {
        let sizes = self.sizes();
        present(wanted)
            .and_then(|label| sizes.iter().position(|s| s.size.as_deref() == Some(label)))
            .or_else(|| (!sizes.is_empty()).then_some(0))
    }

    /// Total stock of this color across its sizes.
    ///
    /// Falls back to `count_in_stock` when there are no sizes.
    pub fn total_stock(&self) -> u64 {
        if self.has_sizes() {
            self.sizes()
                .iter()
                .fold(0u64, |acc, s| acc.saturating_add(s.stock_count()))
        } else {
            stock_count(self.count_in_stock)
        }
    }

    /// Stock of this variant's own `count_in_stock`, coerced.
    pub fn own_stock(&self) -> u64 {
        stock_count(self.count_in_stock)
    }
}

/// A size-specific sub-record of a variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Size label (e.g. "M").
    #[serde(default, deserialize_with = "wire::string", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Price of this size.
    #[serde(default, deserialize_with = "wire::number", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Units in stock.
    #[serde(default, deserialize_with = "wire::integer", skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl Size {
    /// Create a size.
    pub fn new(size: impl Into<String>, price: f64, stock: i64) -> Self {
        Self {
            size: Some(size.into()),
            price: Some(price),
            stock: Some(stock),
        }
    }

    /// Size label; empty when absent.
    pub fn label(&self) -> &str {
        self.size.as_deref().unwrap_or_default()
    }

    /// Price coerced to a non-negative number.
    pub fn price_amount(&self) -> f64 {
        price_amount(self.price)
    }

    /// Stock coerced to a non-negative count.
    pub fn stock_count(&self) -> u64 {
        stock_count(self.stock)
    }
}

/// Coerce an optional price to a finite, non-negative amount.
pub(crate) fn price_amount(price: Option<f64>) -> f64 {
    price
        .filter(|p| p.is_finite() && *p > 0.0)
        .unwrap_or(0.0)
}

/// Coerce an optional stock count to a non-negative count.
pub(crate) fn stock_count(stock: Option<i64>) -> u64 {
    stock.and_then(|s| u64::try_from(s).ok()).unwrap_or(0)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn first_present(values: &[String]) -> Option<&str> {
    present(values.first().map(String::as_str))
}
