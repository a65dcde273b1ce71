//! Store configuration.

use std::path::{Path, PathBuf};

use bakery_commerce::cart::{DeliveryTiers, DEFAULT_DISTANCE_KM};
use bakery_commerce::CommerceError;
use bakery_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading or validating a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Delivery(#[from] CommerceError),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store settings.
    #[serde(default)]
    pub store: StoreSettings,

    /// Delivery fee brackets.
    #[serde(default)]
    pub delivery: DeliveryTiers,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StoreConfig {
    /// Load and validate config from a file. JSON if the path ends in `.json`, TOML otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: StoreConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse and validate TOML config text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check delivery tiers and the default distance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.delivery.validate()?;

        let km = self.store.default_distance_km;
        if !km.is_finite() || km < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "store.default_distance_km must be a non-negative number, got {}",
                km
            )));
        }

        if self.store.name.trim().is_empty() {
            return Err(ConfigError::Invalid("store.name must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Store metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Store name shown in the header and footer.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Distance pre-filled in the delivery field, in kilometers.
    #[serde(default = "default_distance_km")]
    pub default_distance_km: f64,
}

fn default_store_name() -> String {
    "Сладкий Дворик".to_string()
}

fn default_distance_km() -> f64 {
    DEFAULT_DISTANCE_KM
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            default_distance_km: default_distance_km(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

/// Generate a default bakery.toml config file.
pub fn default_toml() -> String {
    r#"# Bakery storefront configuration

[store]
name = "Сладкий Дворик"
default_distance_km = 5.0

# Brackets are checked in order; a distance equal to `up_to_km`
# pays that bracket's fee.
[delivery]
beyond_fee = 500

[[delivery.tiers]]
up_to_km = 3.0
fee = 0

[[delivery.tiers]]
up_to_km = 5.0
fee = 150

[[delivery.tiers]]
up_to_km = 10.0
fee = 300

[logging]
level = "info"
format = "json"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakery_commerce::cart::{DeliveryDistance, DeliveryTier};

    #[test]
    fn test_default_toml_matches_defaults() {
        let config = StoreConfig::from_toml_str(&default_toml()).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config.store.name, "Сладкий Дворик");
        assert_eq!(config.store.default_distance_km, 5.0);
        assert_eq!(config.delivery, DeliveryTiers::default());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_custom_tiers() {
        let config = StoreConfig::from_toml_str(
            r#"
[delivery]
beyond_fee = 400

[[delivery.tiers]]
up_to_km = 2.0
fee = 0

[logging]
level = "debug"
format = "human"
"#,
        )
        .unwrap();

        assert_eq!(config.delivery.tiers, vec![DeliveryTier::new(2.0, 0)]);
        assert_eq!(config.delivery.fee_for(DeliveryDistance::new(2.5)), 400);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_tiers_without_beyond_fee() {
        let config = StoreConfig::from_toml_str(
            r#"
[[delivery.tiers]]
up_to_km = 3.0
fee = 0

[[delivery.tiers]]
up_to_km = 8.0
fee = 250
"#,
        )
        .unwrap();

        assert_eq!(config.delivery.tiers.len(), 2);
        assert_eq!(config.delivery.fee_for(DeliveryDistance::new(6.0)), 250);
        assert_eq!(config.delivery.fee_for(DeliveryDistance::new(12.0)), 500);
    }

    #[test]
    fn test_delivery_section_with_only_beyond_fee() {
        let config = StoreConfig::from_toml_str("[delivery]\nbeyond_fee = 700\n").unwrap();
        assert_eq!(config.delivery.tiers, DeliveryTiers::default().tiers);
        assert_eq!(config.delivery.fee_for(DeliveryDistance::new(11.0)), 700);
    }

    #[test]
    fn test_logging_aliases() {
        let config =
            StoreConfig::from_toml_str("[logging]\nlevel = \"warning\"\nformat = \"text\"\n")
                .unwrap();
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_invalid_tiers_rejected() {
        let err = StoreConfig::from_toml_str(
            r#"
[delivery]
beyond_fee = 100

[[delivery.tiers]]
up_to_km = 3.0
fee = 200
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Delivery(_)));
    }

    #[test]
    fn test_negative_default_distance_rejected() {
        let err = StoreConfig::from_toml_str("[store]\ndefault_distance_km = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_log_level_is_parse_error() {
        let err = StoreConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_json() {
        let dir = std::env::temp_dir().join(format!("bakery-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bakery.json");
        std::fs::write(&path, r#"{"store": {"name": "Пекарня"}}"#).unwrap();

        let config = StoreConfig::load(&path).unwrap();
        assert_eq!(config.store.name, "Пекарня");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = StoreConfig::load("/nonexistent/bakery.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
