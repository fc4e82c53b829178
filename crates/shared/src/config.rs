//! Engine configuration management.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Reporting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Tolerance for balance invariant checks, in reporting currency units.
    ///
    /// Per-batch and cross-statement checks compare against this epsilon
    /// instead of exact equality.
    #[serde(default = "default_epsilon")]
    pub epsilon: Decimal,
    /// Reporting (functional) currency code.
    #[serde(default = "default_functional_currency")]
    pub functional_currency: String,
}

fn default_epsilon() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

fn default_functional_currency() -> String {
    "IDR".to_string()
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
            functional_currency: default_functional_currency(),
        }
    }
}

impl ReportingConfig {
    /// Parses the configured functional currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured code is not a supported currency.
    pub fn functional_currency(&self) -> Result<Currency, String> {
        Currency::from_str(&self.functional_currency)
    }
}

impl EngineConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Missing files are fine; defaults apply to anything not overridden.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LADING").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reporting: ReportingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_epsilon_is_one_cent() {
        let config = EngineConfig::default();
        assert_eq!(config.reporting.epsilon, dec!(0.01));
    }

    #[test]
    fn test_default_functional_currency_parses() {
        let config = EngineConfig::default();
        assert_eq!(
            config.reporting.functional_currency().unwrap(),
            Currency::Idr
        );
    }

    #[test]
    fn test_invalid_functional_currency_rejected() {
        let reporting = ReportingConfig {
            epsilon: dec!(0.01),
            functional_currency: "DOUBLOONS".to_string(),
        };
        assert!(reporting.functional_currency().is_err());
    }
}
