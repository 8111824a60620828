//! Display configuration shared by every surface.

use serde::{Deserialize, Serialize};

use crate::derive::PLACEHOLDER_IMAGE;

/// Settings for turning derived values into display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Image shown when a product has none.
    #[serde(default = "default_placeholder")]
    pub placeholder_image: String,

    /// Symbol prefixed to prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Stock at or below this count is shown as low.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u64,
}

fn default_placeholder() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_low_stock_threshold() -> u64 {
    5
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder(),
            currency_symbol: default_currency_symbol(),
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

impl DisplayConfig {
    /// Format a price with the configured currency symbol.
    pub fn format_price(&self, price: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config: DisplayConfig = serde_json::from_str(r#"{"currency_symbol": "₹"}"#).unwrap();
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.placeholder_image, PLACEHOLDER_IMAGE);
        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn test_format_price() {
        let config = DisplayConfig::default();
        assert_eq!(config.format_price(999.0), "$999.00");
        assert_eq!(config.format_price(12.5), "$12.50");
    }
}
