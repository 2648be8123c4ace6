//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use wordbank_linker::LinkerConfig;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name
    #[serde(default = "default_profile")]
    pub active_profile: String,

    /// Available profiles
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Linker batch settings
    #[serde(default)]
    pub linker: LinkerConfig,

    /// File this configuration was loaded from; saves go back there
    #[serde(skip)]
    location: Option<PathBuf>,
}

/// Database profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Path of the SQLite database
    pub database: PathBuf,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".wordbank").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::path()?)
    }

    /// Load configuration from `path`, or defaults if the file is absent.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            config
                .linker
                .validate()
                .map_err(|e| CliError::Config(e.to_string()))?;
            config
        } else {
            Self::default()
        };

        config.location = Some(path.to_path_buf());
        Ok(config)
    }

    /// Save configuration to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        let path = match &self.location {
            Some(path) => path.clone(),
            None => Self::path()?,
        };

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Get the active profile.
    pub fn get_active_profile(&self) -> Result<&Profile> {
        self.profiles
            .get(&self.active_profile)
            .ok_or_else(|| CliError::Config(format!("Profile '{}' not found", self.active_profile)))
    }

    /// Add or update a profile.
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Switch to a different profile.
    pub fn switch_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            return Err(CliError::Config(format!("Profile '{}' does not exist", name)));
        }
        self.active_profile = name;
        Ok(())
    }

    /// Database path: an explicit override wins over the active profile.
    pub fn database_path(&self, database_override: Option<&Path>) -> Result<PathBuf> {
        match database_override {
            Some(path) => Ok(path.to_path_buf()),
            None => Ok(self.get_active_profile()?.database.clone()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(
            "default".to_string(),
            Profile {
                database: default_database(),
            },
        );

        Self {
            active_profile: "default".to_string(),
            profiles,
            settings: Settings::default(),
            linker: LinkerConfig::default(),
            location: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_database() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".wordbank").join("wordbank.db"),
        None => PathBuf::from("wordbank.db"),
    }
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.active_profile, "default");
        assert!(config.profiles.contains_key("default"));
        assert!(config.settings.color);
        assert!(!config.linker.dry_run);
    }

    #[test]
    fn test_profile_management() {
        let mut config = Config::default();

        let profile = Profile {
            database: PathBuf::from("/tmp/test.db"),
        };

        config.set_profile("test".to_string(), profile);
        assert!(config.profiles.contains_key("test"));

        config.switch_profile("test".to_string()).unwrap();
        assert_eq!(config.active_profile, "test");
        assert_eq!(config.database_path(None).unwrap(), PathBuf::from("/tmp/test.db"));
    }

    #[test]
    fn test_switch_to_nonexistent_profile() {
        let mut config = Config::default();
        let result = config.switch_profile("nonexistent".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_database_override_wins() {
        let config = Config::default();
        let path = config.database_path(Some(Path::new("other.db"))).unwrap();
        assert_eq!(path, PathBuf::from("other.db"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(dir.path().join("config.toml")).unwrap();
        assert_eq!(config.active_profile, "default");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::load_from(&path).unwrap();
        config.set_profile(
            "school".to_string(),
            Profile {
                database: PathBuf::from("school.db"),
            },
        );
        config.linker.progress_interval = 25;
        config.settings.format = OutputFormat::Json;
        config.save().unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.profiles["school"].database, PathBuf::from("school.db"));
        assert_eq!(reloaded.linker.progress_interval, 25);
        assert_eq!(reloaded.settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_linker_section_parsed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
active_profile = "default"

[profiles.default]
database = "words.db"

[linker]
dry_run = true
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.linker.dry_run);
        assert_eq!(config.linker.progress_interval, 100);
        assert_eq!(config.database_path(None).unwrap(), PathBuf::from("words.db"));
    }

    #[test]
    fn test_invalid_linker_section_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[linker]\nprogress_interval = 0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CliError::Config(_))));
    }
}
