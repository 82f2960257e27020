use crate::security::{set_config_permissions, validate_settings, SecurityError};
use crate::types::DepsinfoConfig;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Errors that can occur during config management
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Security error: {0}")]
    Security(#[from] SecurityError),

    #[error("Config file not found at {0}")]
    ConfigNotFound(PathBuf),

    #[error("Config file already exists at {0}")]
    ConfigExists(PathBuf),

    #[error("Home directory not found")]
    HomeNotFound,
}

/// Manager for depsinfo configuration
///
/// Manages the user configuration stored in ~/.depsinfo/config.toml.
pub struct ConfigManager {
    config_path: PathBuf,
    config: DepsinfoConfig,
}

impl ConfigManager {
    /// Get the default config path (~/.depsinfo/config.toml)
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(home.join(".depsinfo").join("config.toml"))
    }

    /// Load config from default location
    pub async fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path).await
    }

    /// Load config from specific path (useful for testing)
    pub async fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !fs::try_exists(path).await? {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path).await?;
        let config: DepsinfoConfig = toml::from_str(&contents)?;
        validate_settings(&config.settings)?;

        Ok(Self {
            config_path: path.to_path_buf(),
            config,
        })
    }

    /// Load config from `path`, or defaults when no file exists there
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub async fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load_from(path).await {
            Err(ConfigError::ConfigNotFound(_)) => Ok(Self {
                config_path: path.to_path_buf(),
                config: DepsinfoConfig::default(),
            }),
            other => other,
        }
    }

    /// Initialize a new config file at the default location
    pub async fn init() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::init_at(&config_path).await
    }

    /// Initialize config at specific path
    pub async fn init_at(path: &Path) -> Result<Self, ConfigError> {
        if fs::try_exists(path).await? {
            return Err(ConfigError::ConfigExists(path.to_path_buf()));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let manager = Self {
            config_path: path.to_path_buf(),
            config: DepsinfoConfig::default(),
        };
        manager.save().await?;

        Ok(manager)
    }

    /// Save config to disk atomically
    ///
    /// Uses a temporary file and atomic rename to prevent corruption
    pub async fn save(&self) -> Result<(), ConfigError> {
        validate_settings(&self.config.settings)?;
        let toml_str = toml::to_string_pretty(&self.config)?;

        let temp_path = self.config_path.with_extension("toml.tmp");
        fs::write(&temp_path, &toml_str).await?;

        // Permissions are set on the temp file so the final file is never world-readable
        set_config_permissions(&temp_path)?;

        fs::rename(&temp_path, &self.config_path).await?;

        Ok(())
    }

    /// Path this manager loads from and saves to
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get reference to config
    pub fn config(&self) -> &DepsinfoConfig {
        &self.config
    }

    /// Get mutable reference to config (caller must call save())
    pub fn config_mut(&mut self) -> &mut DepsinfoConfig {
        &mut self.config
    }
}
