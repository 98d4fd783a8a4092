use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Where leave records are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Json,
    Sqlite,
}

/// Language of month names and weekday headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Cs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_source")]
    pub source: SourceKind,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_leaves_file")]
    pub leaves_file: String,
    #[serde(default = "default_locale")]
    pub locale: Locale,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_source() -> SourceKind {
    SourceKind::Json
}
fn default_database() -> String {
    "db.sqlite3".to_string()
}
fn default_leaves_file() -> String {
    Config::config_dir()
        .join("leaves.json")
        .to_string_lossy()
        .to_string()
}
fn default_locale() -> Locale {
    Locale::En
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            database: default_database(),
            leaves_file: default_leaves_file(),
            locale: default_locale(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hrcal")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".hrcal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hrcal.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        Ok(cfg)
    }

    /// Create the config directory and write the default configuration.
    /// An existing config file is left untouched.
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if is_test || path.exists() {
            return Ok(path);
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }
}
