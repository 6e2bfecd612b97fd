//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopfront_commerce::money::Money;
use shopfront_commerce::source::DEFAULT_BASE_URL;

/// File names searched for, in order, from the working directory upwards.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shopfront.toml", ".shopfront.toml", "shopfront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Product service settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Storefront presentation.
    #[serde(default)]
    pub store: StoreConfig,

    /// Cart pricing.
    #[serde(default)]
    pub cart: CartConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text, choosing the format from the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Delivery fee charged on every cart.
    pub fn delivery_fee(&self) -> Result<Money> {
        self.cart
            .delivery_fee
            .parse()
            .with_context(|| format!("Invalid cart.delivery_fee: {}", self.cart.delivery_fee))
    }

    /// Request timeout for the product service.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }
}

/// Product service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the product service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Text shown in the home header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_customer_name")]
    pub customer_name: String,

    #[serde(default = "default_delivery_address")]
    pub delivery_address: String,
}

fn default_customer_name() -> String {
    "Rahul".to_string()
}

fn default_delivery_address() -> String {
    "Green Way 3000, Sylhet".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            customer_name: default_customer_name(),
            delivery_address: default_delivery_address(),
        }
    }
}

/// Cart pricing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Flat delivery fee as a decimal string, e.g. `"2.00"`.
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: String,
}

fn default_delivery_fee() -> String {
    "2.00".to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            delivery_fee: default_delivery_fee(),
        }
    }
}

/// Generate a default shopfront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Shopfront configuration

[api]
base_url = "{base_url}"
timeout_secs = 10

[store]
customer_name = "Rahul"
delivery_address = "Green Way 3000, Sylhet"

[cart]
# Flat fee added to every cart total
delivery_fee = "2.00"
"#,
        base_url = DEFAULT_BASE_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_matches_defaults() {
        let parsed = CliConfig::parse("shopfront.toml", &generate_default_config()).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = CliConfig::parse(
            "shopfront.toml",
            "[api]\nbase_url = \"http://localhost:8080\"\n",
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.store.customer_name, "Rahul");
        assert_eq!(config.delivery_fee().unwrap(), Money::from_cents(200));
    }

    #[test]
    fn test_json_config() {
        let config =
            CliConfig::parse("shopfront.json", r#"{"cart": {"delivery_fee": "3.5"}}"#).unwrap();
        assert_eq!(config.delivery_fee().unwrap(), Money::from_cents(350));
    }

    #[test]
    fn test_invalid_delivery_fee() {
        let mut config = CliConfig::default();
        config.cart.delivery_fee = "-1".to_string();
        assert!(config.delivery_fee().is_err());

        config.cart.delivery_fee = "free".to_string();
        assert!(config.delivery_fee().is_err());
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(CliConfig::parse("shopfront.toml", "[api\n").is_err());
    }
}
