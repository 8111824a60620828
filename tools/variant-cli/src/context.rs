//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde_json::Value;
use turbo_variants::catalog::{parse_catalog, Product};

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            Self::find_config(&cwd).unwrap_or_default()
        };

        output.debug(&format!(
            "placeholder={} currency={} low_stock<={}",
            config.display.placeholder_image,
            config.display.currency_symbol,
            config.display.low_stock_threshold
        ));

        Ok(Self { config, output })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let config_names = ["variants.toml", ".variants.toml", "variants.json"];

        let mut current = PathBuf::from(start);
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }
}

/// Load products from a payload file.
///
/// Accepts a single product object, a bare array, or a `products` envelope.
pub fn load_products(path: &str) -> Result<Vec<Product>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read product file: {}", path))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON: {}", path))?;

    let single = matches!(&value, Value::Object(map) if !map.contains_key("products"));
    let products = if single {
        vec![Product::from_value(value).with_context(|| format!("Invalid product: {}", path))?]
    } else {
        parse_catalog(&content)
            .with_context(|| format!("Invalid product listing: {}", path))?
            .products
    };

    tracing::debug!(path, count = products.len(), "loaded products");
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_payload(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        file
    }

    #[test]
    fn test_load_single_product() {
        let file = write_payload(r#"{"title": "Mug", "price": 12}"#);
        let products = load_products(file.path().to_str().unwrap()).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price, Some(12.0));
    }

    #[test]
    fn test_load_envelope_and_array() {
        let file = write_payload(r#"{"products": [{"title": "A"}, {"title": "B"}], "page": 1, "pages": 1}"#);
        assert_eq!(load_products(file.path().to_str().unwrap()).unwrap().len(), 2);

        let file = write_payload(r#"[{"title": "A"}]"#);
        assert_eq!(load_products(file.path().to_str().unwrap()).unwrap().len(), 1);
    }

    #[test]
    fn test_load_rejects_scalars() {
        let file = write_payload("42");
        assert!(load_products(file.path().to_str().unwrap()).is_err());
    }
}
