//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use ayur_store::StoreConfig;
use serde::{Deserialize, Serialize};

/// Configuration file, `ayur.toml` or `ayur.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AyurConfig {
    /// Hosted store connection.
    #[serde(default)]
    pub store: StoreConfig,

    /// Checkout simulation.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AyurConfig {
    /// Load config from a file, choosing the format by extension.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply `AYUR_STORE_URL` and `AYUR_STORE_ANON_KEY` on top of the file.
    pub fn with_env(mut self) -> Self {
        self.store = self.store.merge_env();
        self
    }

    /// Store settings, checked for use.
    pub fn store_config(&self) -> Result<StoreConfig> {
        self.store
            .validate()
            .context("Store is not configured; set store.url and store.anon_key or the AYUR_STORE_* variables")?;
        Ok(self.store.clone())
    }
}

/// Checkout simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Simulated processing time in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Tax rate in percent.
    #[serde(default = "default_tax_percent")]
    pub tax_percent: i64,
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_tax_percent() -> i64 {
    ayur_commerce::checkout::DEFAULT_TAX_PERCENT
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            tax_percent: default_tax_percent(),
        }
    }
}

impl CheckoutConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `ayur_store=debug`.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Contents of a fresh `ayur.toml`.
pub fn generate_default_config() -> String {
    r#"# AyurCare configuration

[store]
# url = "https://your-project.example.co"
# anon_key = "public-anon-key"
schema = "public"

[checkout]
delay_ms = 2000
tax_percent = 18

[logging]
level = "warn"
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AyurConfig::default();
        assert_eq!(config.checkout.delay(), Duration::from_secs(2));
        assert_eq!(config.checkout.tax_percent, 18);
        assert_eq!(config.store.schema, "public");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_generated_config_parses() {
        let config = AyurConfig::parse("ayur.toml", &generate_default_config()).unwrap();
        assert_eq!(config, AyurConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = AyurConfig::parse(
            "ayur.toml",
            "[checkout]\ndelay_ms = 10\n\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();
        assert_eq!(config.checkout.delay_ms, 10);
        assert_eq!(config.checkout.tax_percent, 18);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_json_config() {
        let config = AyurConfig::parse(
            "ayur.json",
            r#"{ "store": { "url": "https://p.example.co", "anon_key": "k" } }"#,
        )
        .unwrap();
        assert_eq!(config.store_config().unwrap().base_url(), "https://p.example.co");
    }

    #[test]
    fn test_unconfigured_store_is_error() {
        assert!(AyurConfig::default().store_config().is_err());
    }
}
