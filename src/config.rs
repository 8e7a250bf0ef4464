// Application configuration and on-disk locations

use crate::error::{Result, ShellError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = "taskshell";
const CONFIG_FILE_NAME: &str = "config.json";
const PREFERENCES_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub min_window_width: f32,
    pub min_window_height: f32,
    /// Overrides the default preferences location when set.
    pub preferences_file: Option<PathBuf>,
    pub log_filter: String,
    pub log_to_file: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 900.0,
            window_height: 700.0,
            min_window_width: 360.0,
            min_window_height: 400.0,
            preferences_file: None,
            log_filter: "info".to_string(),
            log_to_file: false,
        }
    }
}

impl AppConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ShellError::io(path, e))?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(|e| ShellError::json(path, e))?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ShellError::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|e| ShellError::json(path, e))?;
        fs::write(path, content).map_err(|e| ShellError::io(path, e))?;
        Ok(())
    }

    /// Loads the config from the default location, falling back to defaults
    /// when the platform has no config directory.
    pub fn load() -> Result<Self> {
        match config_file() {
            Ok(path) => Self::load_from_file(path),
            Err(ShellError::ConfigDirUnavailable) => {
                tracing::warn!("No config directory, using default configuration");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn preferences_path(&self) -> Result<PathBuf> {
        match &self.preferences_file {
            Some(path) => Ok(path.clone()),
            None => Ok(config_dir()?.join(PREFERENCES_FILE_NAME)),
        }
    }
}

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(ShellError::ConfigDirUnavailable)
}

pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Directory for rolling log files. Falls back to the config directory on
/// platforms without a separate data directory.
pub fn log_dir() -> Result<PathBuf> {
    match dirs::data_local_dir() {
        Some(dir) => Ok(dir.join(APP_DIR_NAME).join("logs")),
        None => Ok(config_dir()?.join("logs")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from_file(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            window_width: 640.0,
            preferences_file: Some(dir.path().join("prefs.json")),
            log_filter: "taskshell=debug".to_string(),
            log_to_file: true,
            ..AppConfig::default()
        };

        config.save_to_file(&path).unwrap();
        let loaded = AppConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.preferences_path().unwrap(), dir.path().join("prefs.json"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "log_filter": "warn" }"#).unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();

        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.window_width, AppConfig::default().window_width);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ShellError::Json { .. }));
    }
}
