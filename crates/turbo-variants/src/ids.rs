//! Product identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque product identifier assigned by the commerce API.
///
/// Document-store backends send it as `_id`, others as a string or numeric
/// `id`; both decode to the same string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "64f1c2".into();
        assert_eq!(id.as_str(), "64f1c2");
        assert_eq!(format!("{}", id), "64f1c2");
        assert_eq!(id.into_inner(), "64f1c2");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::from("17".to_string());
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""17""#);
        assert_ne!(id, ProductId::new("18"));
    }
}
