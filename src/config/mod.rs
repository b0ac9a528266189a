use crate::errors::{AppError, AppResult};
use crate::models::Theme;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub history_file: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_file: Self::history_file_default().to_string_lossy().to_string(),
            theme: Theme::default(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("craftlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".craftlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("craftlog.conf")
    }

    /// Return the default path of the history CSV
    pub fn history_file_default() -> PathBuf {
        Self::config_dir().join("history.csv")
    }

    /// History path with `~/` expanded.
    pub fn history_path(&self) -> PathBuf {
        expand_tilde(&self.history_file)
    }

    /// Load configuration from file, or return defaults if not found.
    /// Fields missing from an older file take their default value.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the configuration file, creating its folder if needed.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Build the configuration for `init`.
    ///
    /// A relative `custom_file` is placed inside the config directory. In
    /// test mode the config file is not written.
    pub fn init_all(custom_file: Option<&str>, is_test: bool) -> AppResult<Self> {
        let history_file = match custom_file {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() || is_test {
                    p
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => Self::history_file_default(),
        };

        let config = Config {
            history_file: history_file.to_string_lossy().to_string(),
            ..Self::load().unwrap_or_default()
        };

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }
}
