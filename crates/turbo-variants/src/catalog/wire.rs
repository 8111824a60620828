//! Lenient decoding of commerce API payloads.
//!
//! The API hands back partially populated and legacy product shapes. These
//! decoders never reject a field: a value of the wrong type decodes as absent,
//! numeric strings are coerced, and malformed sequence entries are dropped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::catalog::Product;
use crate::error::{kind_of, CatalogError};
use crate::ids::ProductId;

/// Coerce a JSON value to a finite number.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

/// Integers are truncated toward zero; the cast saturates at the i64 bounds.
pub(crate) fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value).map(|n| n.trunc() as i64))
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

pub(crate) fn id<'de, D>(deserializer: D) -> Result<Option<ProductId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Ok(Some(ProductId::new(s))),
        Value::Number(n) => Ok(Some(ProductId::new(n.to_string()))),
        _ => Ok(None),
    }
}

/// String entries of an array; anything else in the array is skipped.
pub(crate) fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_strings(deserializer)?.unwrap_or_default())
}

pub(crate) fn optional_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// A sequence of records, dropping entries that are not decodable as `T`.
pub(crate) fn records<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .enumerate()
                .filter_map(|(position, item)| {
                    let kind = kind_of(&item);
                    match serde_json::from_value(item) {
                        Ok(record) => Some(record),
                        Err(error) => {
                            tracing::debug!(position, kind, %error, "skipping malformed record");
                            None
                        }
                    }
                })
                .collect(),
        )),
        _ => Ok(None),
    }
}

impl Product {
    /// Decode a single product document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Decode a product from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let mut map = match value {
            Value::Object(map) => map,
            other => return Err(CatalogError::NotAnObject(kind_of(&other))),
        };
        // `_id` is an alias of `id`; keeping both would be a duplicate field.
        if map.contains_key("id") {
            map.remove("_id");
        }
        Ok(serde_json::from_value(Value::Object(map))?)
    }
}

/// One page of products as served by the listing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogPage {
    /// Products on this page, in API order.
    pub products: Vec<Product>,
    /// Current page (1-indexed).
    pub page: u64,
    /// Total number of pages.
    pub pages: u64,
}

/// Decode a listing payload.
///
/// Accepts either a bare array of products or the paginated envelope
/// `{ "products": [...], "page": n, "pages": m }`. Entries that are not
/// product objects are skipped.
pub fn parse_catalog(json: &str) -> Result<CatalogPage, CatalogError> {
    let value: Value = serde_json::from_str(json)?;

    let (items, page, pages) = match value {
        Value::Array(items) => (items, None, None),
        Value::Object(mut envelope) => {
            let items = match envelope.remove("products") {
                Some(Value::Array(items)) => items,
                Some(other) => return Err(CatalogError::InvalidCatalog(kind_of(&other))),
                None => return Err(CatalogError::InvalidCatalog("object without products")),
            };
            let page = envelope.get("page").and_then(coerce_number);
            let pages = envelope.get("pages").and_then(coerce_number);
            (items, page, pages)
        }
        other => return Err(CatalogError::InvalidCatalog(kind_of(&other))),
    };

    let total = items.len();
    let products: Vec<Product> = items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| match Product::from_value(item) {
            Ok(product) => Some(product),
            Err(error) => {
                tracing::debug!(position, %error, "skipping malformed product");
                None
            }
        })
        .collect();

    tracing::debug!(total, decoded = products.len(), "decoded catalog page");

    let page = page.map_or(1, |p| p.max(1.0) as u64);
    let pages = pages.map_or(page, |p| (p as u64).max(page));

    Ok(CatalogPage {
        products,
        page,
        pages,
    })
}
