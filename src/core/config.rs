//! Configuration with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// Default data file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "supplier_data.csv";

/// SERT configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the supplier data file
    pub data_file: Option<PathBuf>,

    /// Default output format for list commands
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/sert/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(path) = std::env::var("SERT_DATA_FILE") {
            config.data_file = Some(PathBuf::from(path));
        }
        if let Ok(format) = std::env::var("SERT_FORMAT") {
            config.default_format = Some(format);
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "sert")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.data_file.is_some() {
            self.data_file = other.data_file;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Resolve the data file path: CLI flag, then config/env, then default
    pub fn data_file(&self, override_path: Option<&PathBuf>) -> PathBuf {
        if let Some(path) = override_path {
            return path.clone();
        }
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}
