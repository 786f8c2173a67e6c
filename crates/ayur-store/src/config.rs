//! Store connection settings.

use crate::StoreError;
use serde::{Deserialize, Serialize};

/// Environment variable holding the store base URL.
pub const ENV_URL: &str = "AYUR_STORE_URL";
/// Environment variable holding the public API key.
pub const ENV_ANON_KEY: &str = "AYUR_STORE_ANON_KEY";

/// Connection settings for the hosted store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL, e.g. `https://project.example.co`.
    pub url: String,
    /// Public API key sent with every request.
    pub anon_key: String,
    /// Schema used for function calls.
    pub schema: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            schema: "public".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            ..Self::default()
        }
    }

    /// Read the URL and key from the environment.
    pub fn from_env() -> Result<Self, StoreError> {
        let url = std::env::var(ENV_URL)
            .map_err(|_| StoreError::Config(format!("{} is not set", ENV_URL)))?;
        let anon_key = std::env::var(ENV_ANON_KEY)
            .map_err(|_| StoreError::Config(format!("{} is not set", ENV_ANON_KEY)))?;
        let config = Self::new(url, anon_key);
        config.validate()?;
        Ok(config)
    }

    /// Override fields that are set in the environment.
    pub fn merge_env(mut self) -> Self {
        if let Ok(url) = std::env::var(ENV_URL) {
            self.url = url;
        }
        if let Ok(key) = std::env::var(ENV_ANON_KEY) {
            self.anon_key = key;
        }
        self
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            return Err(StoreError::InvalidUrl(self.url.clone()));
        }
        if self.anon_key.is_empty() {
            return Err(StoreError::Config("anon key is empty".to_string()));
        }
        if self.schema.is_empty() {
            return Err(StoreError::Config("schema is empty".to_string()));
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_is_public() {
        assert_eq!(StoreConfig::default().schema, "public");
    }

    #[test]
    fn test_validate() {
        assert!(StoreConfig::new("https://x.test", "key").validate().is_ok());
        assert!(matches!(
            StoreConfig::new("x.test", "key").validate(),
            Err(StoreError::InvalidUrl(_))
        ));
        assert!(matches!(
            StoreConfig::new("https://x.test", "").validate(),
            Err(StoreError::Config(_))
        ));
    }

    #[test]
    fn test_base_url_trims_slash() {
        assert_eq!(
            StoreConfig::new("https://x.test/", "k").base_url(),
            "https://x.test"
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"url": "https://x.test"}"#).unwrap();
        assert_eq!(config.schema, "public");
        assert!(config.anon_key.is_empty());
    }
}
