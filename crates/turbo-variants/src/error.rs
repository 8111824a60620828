//! Catalog error types.

use thiserror::Error;

/// Errors raised while decoding commerce API payloads.
///
/// Only the document envelope can fail. Individual fields that are missing or
/// have the wrong type decode as absent instead.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The payload is not valid JSON.
    #[error("Invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A product document was not a JSON object.
    #[error("Expected a product object, got {0}")]
    NotAnObject(&'static str),

    /// A catalog payload was neither an array nor a `products` envelope.
    #[error("Expected a product array or a products envelope, got {0}")]
    InvalidCatalog(&'static str),
}

/// Name of a JSON value's kind, for error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
