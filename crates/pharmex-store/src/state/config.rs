//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PHARMEX_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

use pharmex_core::DEFAULT_LOW_STOCK_THRESHOLD;

/// Application configuration.
///
/// Most fields have sensible defaults for development.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Pharmacy name (displayed in the header and on order summaries)
    pub pharmacy_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Stock level at or below which a product is flagged as low stock
    pub low_stock_threshold: i64,
}

impl Default for StoreConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Pharmacy: "Pharmex Pharmacy"
    /// - Currency: USD ($), two decimals
    /// - Low stock threshold: 50
    fn default() -> Self {
        StoreConfig {
            pharmacy_name: "Pharmex Pharmacy".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl StoreConfig {
    /// Creates a new StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PHARMEX_PHARMACY_NAME`: Override pharmacy name
    /// - `PHARMEX_CURRENCY_SYMBOL`: Override currency symbol
    /// - `PHARMEX_LOW_STOCK_THRESHOLD`: Override low stock threshold
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(name) = std::env::var("PHARMEX_PHARMACY_NAME") {
            config.pharmacy_name = name;
        }

        if let Ok(symbol) = std::env::var("PHARMEX_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(threshold_str) = std::env::var("PHARMEX_LOW_STOCK_THRESHOLD") {
            if let Ok(threshold) = threshold_str.parse::<i64>() {
                config.low_stock_threshold = threshold;
            }
        }

        config
    }

    /// Formats a cent amount as a currency string with the configured
    /// number of decimals.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(2797), "$27.97");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_positive() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(2797), "$27.97");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
    }
}
