//! Configuration for Linker runs

use crate::LinkerError;
use serde::{Deserialize, Serialize};

/// Configuration for the Linker batch
///
/// # Examples
///
/// ```
/// use wordbank_linker::LinkerConfig;
///
/// let config = LinkerConfig::default();
/// assert!(!config.dry_run);
/// assert_eq!(config.progress_interval, 100);
///
/// let preview = LinkerConfig::dry_run();
/// assert!(preview.dry_run);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkerConfig {
    /// Dry-run mode: report what would be created without writing
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,

    /// Log a progress line every this many words
    /// Default: 100
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

fn default_progress_interval() -> usize {
    100
}

impl Default for LinkerConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            progress_interval: default_progress_interval(),
        }
    }
}

impl LinkerConfig {
    /// Default configuration with dry-run enabled
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LinkerError> {
        if self.progress_interval == 0 {
            return Err(LinkerError::Config(
                "progress_interval must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, LinkerError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| LinkerError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, LinkerError> {
        toml::to_string_pretty(self)
            .map_err(|e| LinkerError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LinkerConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.dry_run);
    }

    #[test]
    fn test_zero_progress_interval_rejected() {
        let config = LinkerConfig {
            progress_interval: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(LinkerError::Config(_))));
    }

    #[test]
    fn test_toml_defaults_for_missing_fields() {
        let config = LinkerConfig::from_toml("dry_run = true").unwrap();
        assert!(config.dry_run);
        assert_eq!(config.progress_interval, 100);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = LinkerConfig {
            dry_run: true,
            progress_interval: 25,
        };
        let toml_str = config.to_toml().unwrap();
        assert_eq!(LinkerConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(LinkerConfig::from_toml("progress_interval = 0").is_err());
        assert!(LinkerConfig::from_toml("dry_run = \"maybe\"").is_err());
    }
}
