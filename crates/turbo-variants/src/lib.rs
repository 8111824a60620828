//! Product variant resolution for TurboCommerce storefronts.
//!
//! Products arrive from the commerce API with or without color/size variants,
//! and often only partially populated. This crate computes the values every
//! surface displays from them, using one fallback order:
//!
//! - **Catalog**: lenient `Product` / `Variant` / `Size` records
//! - **Derive**: thumbnail, price, stock and color resolution
//! - **Selection**: per-card and per-page swatch/variant/size state
//! - **Audit**: data-shape checks for the admin console
//! - **View**: card, product page and admin row view models
//!
//! # Example
//!
//! ```rust
//! use turbo_variants::prelude::*;
//!
//! let product = Product::from_json(
//!     r#"{"title": "Mug", "price": 999, "countInStock": 5, "images": ["a.jpg"]}"#,
//! )
//! .unwrap();
//!
//! let values = derive(&product, Context::default());
//! assert_eq!(values.thumbnail, "a.jpg");
//! assert_eq!(values.price, 999.0);
//! assert_eq!(values.stock, 5);
//! assert!(values.colors.is_empty());
//! ```

pub mod audit;
pub mod catalog;
pub mod config;
pub mod derive;
pub mod error;
pub mod ids;
pub mod selection;
pub mod view;

pub use error::CatalogError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{parse_catalog, CatalogPage, Product, Size, Variant};

    // Engine
    pub use crate::derive::{
        color_swatches, derive, resolve_available_colors, resolve_price, resolve_stock,
        resolve_thumbnail, resolve_thumbnail_or, resolve_variant_stock, Context, DisplayValues,
        Swatch, PLACEHOLDER_IMAGE,
    };

    // Selection
    pub use crate::selection::{CardSelection, DetailSelection, Selection, SwatchState};

    // Admin
    pub use crate::audit::{audit, DataIssue};

    // Surfaces
    pub use crate::config::DisplayConfig;
    pub use crate::view::{AdminRow, ProductCard, ProductPage, SizeOption, StockStatus};
}
