//! Data-shape checks for the admin console.
//!
//! The engine silently substitutes defaults for missing data. `audit` reports
//! where that happens so catalog editors can fix the record. It never changes
//! what the engine resolves.

use std::collections::HashMap;

use crate::catalog::Product;
use serde::Serialize;
use thiserror::Error;

/// A problem in a product record that the engine defaults over.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataIssue {
    /// Several variants share a color; only the first is reachable by color.
    #[error("color {color:?} is used by {count} variants; only the first is reachable")]
    DuplicateVariantColor { color: String, count: usize },

    #[error("variant #{index} has no color label")]
    UnlabeledVariant { index: usize },

    #[error("variant #{index} has no images")]
    VariantWithoutImages { index: usize },

    /// An empty size list is treated as no sizes at all.
    #[error("variant #{index} has an empty size list")]
    EmptySizeList { index: usize },

    #[error("size {size:?} of variant #{index} has no price")]
    SizeWithoutPrice { index: usize, size: String },

    #[error("{field} is negative and resolves to 0")]
    NegativeValue { field: String },

    #[error("product has no base price and no sized variants")]
    MissingPrice,

    #[error("product has no images; the placeholder is shown")]
    NoImages,
}

/// Check a product record for data-shape problems.
///
/// Issues are reported in record order: base fields first, then variants.
pub fn audit(product: &Product) -> Vec<DataIssue> {
    let mut issues = Vec::new();

    if product.price.is_some_and(|p| p < 0.0) {
        issues.push(DataIssue::NegativeValue {
            field: "price".to_string(),
        });
    }
    if product.count_in_stock.is_some_and(|n| n < 0) {
        issues.push(DataIssue::NegativeValue {
            field: "countInStock".to_string(),
        });
    }

    let sized = product.variants().iter().any(|v| v.has_sizes());
    if product.price.is_none() && !sized {
        issues.push(DataIssue::MissingPrice);
    }

    let any_image = product.first_image().is_some()
        || product.legacy_image().is_some()
        || product
            .variants()
            .iter()
            .any(|v| v.first_image().is_some() || v.fallback_image().is_some());
    if !any_image {
        issues.push(DataIssue::NoImages);
    }

    let mut color_counts: HashMap<&str, usize> = HashMap::new();
    let mut color_order = Vec::new();

    for (index, variant) in product.variants().iter().enumerate() {
        match variant.color_label() {
            Some(color) => {
                let count = color_counts.entry(color).or_insert(0);
                if *count == 0 {
                    color_order.push(color);
                }
                *count += 1;
            }
            None => issues.push(DataIssue::UnlabeledVariant { index }),
        }

        if variant.first_image().is_none() && variant.fallback_image().is_none() {
            issues.push(DataIssue::VariantWithoutImages { index });
        }

        if variant.sizes.as_ref().is_some_and(Vec::is_empty) {
            issues.push(DataIssue::EmptySizeList { index });
        }

        if variant.count_in_stock.is_some_and(|n| n < 0) {
            issues.push(DataIssue::NegativeValue {
                field: format!("variants[{index}].countInStock"),
            });
        }

        for (position, size) in variant.sizes().iter().enumerate() {
            if size.price.is_none() {
                issues.push(DataIssue::SizeWithoutPrice {
                    index,
                    size: size.label().to_string(),
                });
            }
            if size.price.is_some_and(|p| p < 0.0) {
                issues.push(DataIssue::NegativeValue {
                    field: format!("variants[{index}].sizes[{position}].price"),
                });
            }
            if size.stock.is_some_and(|n| n < 0) {
                issues.push(DataIssue::NegativeValue {
                    field: format!("variants[{index}].sizes[{position}].stock"),
                });
            }
        }
    }

    for color in color_order {
        let count = color_counts[color];
        if count > 1 {
            issues.push(DataIssue::DuplicateVariantColor {
                color: color.to_string(),
                count,
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Size, Variant};

    #[test]
    fn test_clean_flat_product() {
        let mut product = Product::new("Mug");
        product.price = Some(12.0);
        product.images = vec!["mug.jpg".to_string()];
        assert!(audit(&product).is_empty());
    }

    #[test]
    fn test_empty_product() {
        let issues = audit(&Product::default());
        assert_eq!(issues, vec![DataIssue::MissingPrice, DataIssue::NoImages]);
    }

    #[test]
    fn test_variant_issues() {
        let product = Product::new("Tee")
            .with_variant(
                Variant::new("Red")
                    .with_images(["red.jpg"])
                    .with_size(Size {
                        size: Some("M".to_string()),
                        stock: Some(-1),
                        price: None,
                    }),
            )
            .with_variant(Variant {
                sizes: Some(Vec::new()),
                ..Variant::default()
            })
            .with_variant(Variant::new("Red").with_images(["red-2.jpg"]));

        let issues = audit(&product);
        assert_eq!(
            issues,
            vec![
                DataIssue::SizeWithoutPrice {
                    index: 0,
                    size: "M".to_string()
                },
                DataIssue::NegativeValue {
                    field: "variants[0].sizes[0].stock".to_string()
                },
                DataIssue::UnlabeledVariant { index: 1 },
                DataIssue::VariantWithoutImages { index: 1 },
                DataIssue::EmptySizeList { index: 1 },
                DataIssue::DuplicateVariantColor {
                    color: "Red".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_issue_messages() {
        let issue = DataIssue::DuplicateVariantColor {
            color: "Red".to_string(),
            count: 2,
        };
        assert_eq!(
            issue.to_string(),
            "color \"Red\" is used by 2 variants; only the first is reachable"
        );
        assert_eq!(
            DataIssue::NegativeValue { field: "price".to_string() }.to_string(),
            "price is negative and resolves to 0"
        );
    }
}
