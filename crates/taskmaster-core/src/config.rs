use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_UPCOMING_DAYS: u32 = 7;
const DEFAULT_HIGH_PRIORITY_LIMIT: usize = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding `storage.json`
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Window for the dashboard's upcoming list
    #[serde(default)]
    pub upcoming_days: Option<u32>,
    #[serde(default)]
    pub high_priority_limit: Option<usize>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskmaster/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskmaster/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskmaster\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("taskmaster")))
            .unwrap_or_else(|| PathBuf::from(".taskmaster"))
    }

    pub fn effective_upcoming_days(&self) -> u32 {
        self.upcoming_days.unwrap_or(DEFAULT_UPCOMING_DAYS)
    }

    pub fn effective_high_priority_limit(&self) -> usize {
        self.high_priority_limit.unwrap_or(DEFAULT_HIGH_PRIORITY_LIMIT)
    }
}
