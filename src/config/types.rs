//! Configuration data types.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::validation;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,

    /// Payment providers offered by the dispatcher
    pub providers: ProviderToggles,

    /// File formats offered by the dispatcher
    pub formats: FormatToggles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            log_path: default_log_path(),
            providers: ProviderToggles::default(),
            formats: FormatToggles::default(),
        }
    }
}

impl Config {
    /// Validate configuration and return errors if invalid.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}

/// Which payment providers get registered at startup.
///
/// All providers default to enabled; disabling one removes its key from
/// the payment registry and from the interactive prompt.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderToggles {
    pub stripe: bool,
    pub adyen: bool,
}

impl Default for ProviderToggles {
    fn default() -> Self {
        Self {
            stripe: true,
            adyen: true,
        }
    }
}

/// Which file formats get registered at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatToggles {
    pub csv: bool,
    pub xml: bool,
}

impl Default for FormatToggles {
    fn default() -> Self {
        Self {
            csv: true,
            xml: true,
        }
    }
}

/// Get default log path (relative to config directory).
/// This returns a placeholder; the actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("switchboard")
        })
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_enables_everything() {
        let config = Config::default();
        assert!(config.providers.stripe);
        assert!(config.providers.adyen);
        assert!(config.formats.csv);
        assert!(config.formats.xml);
        assert!(!config.debug);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [providers]
            adyen = false
            "#,
        )
        .unwrap();
        assert!(config.providers.stripe);
        assert!(!config.providers.adyen);
        assert!(config.formats.csv);
    }
}
