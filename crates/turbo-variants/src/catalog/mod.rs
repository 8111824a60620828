//! Product catalog module.
//!
//! Contains the product/variant/size records and their lenient wire decoding.

mod product;
pub(crate) mod wire;

pub use product::{Product, Size, Variant};
pub(crate) use product::{price_amount, stock_count};
pub use wire::{parse_catalog, CatalogPage};
