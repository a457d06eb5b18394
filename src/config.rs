use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::model::{YearRule, DEFAULT_DEPARTMENTS};

const APP_DIR: &str = "timetable-tool";
const CONFIG_FILE_NAME: &str = "config.toml";

/// User-tunable settings, read from `<config_dir>/timetable-tool/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the selected courses are written on save.
    pub output_file: PathBuf,

    /// Largest selection that may be saved.
    pub max_selection: usize,

    /// Entries of the department combo box.
    pub departments: Vec<String>,

    /// How the year digit is located in a row.
    pub year_rule: YearRule,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from("timetable.csv"),
            max_selection: 6,
            departments: DEFAULT_DEPARTMENTS.iter().map(|d| d.to_string()).collect(),
            year_rule: YearRule::default(),
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE_NAME))
    }

    /// Load config from the user's config directory, falling back to defaults.
    pub fn load() -> Self {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("{e:#}; using default settings");
                return Self::default();
            }
        };

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Loaded settings from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to load config: {e:#}; using defaults");
                Self::default()
            }
        }
    }

    /// Parse a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mut config: AppConfig =
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;

        if config.departments.is_empty() {
            log::warn!("Config lists no departments, keeping the defaults");
            config.departments = Self::default().departments;
        }
        Ok(config)
    }
}
