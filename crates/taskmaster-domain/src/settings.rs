use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use taskmaster_core::TaskError;

use crate::task::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(TaskError::Validation(format!(
                "Invalid theme '{}': expected light or dark",
                other
            ))),
        }
    }
}

/// User preferences. The theme is stored for the presentation layer and has
/// no effect on task handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub show_completed_tasks: bool,
    pub auto_archive_completed: bool,
    pub default_priority: Priority,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_completed_tasks: true,
            auto_archive_completed: false,
            default_priority: Priority::Medium,
            theme: Theme::Light,
        }
    }
}

impl Settings {
    /// Restore the task-handling preferences. The theme is kept.
    pub fn reset_task_preferences(&mut self) {
        let defaults = Settings::default();
        self.show_completed_tasks = defaults.show_completed_tasks;
        self.auto_archive_completed = defaults.auto_archive_completed;
        self.default_priority = defaults.default_priority;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.show_completed_tasks);
        assert!(!settings.auto_archive_completed);
        assert_eq!(settings.default_priority, Priority::Medium);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_reset_keeps_theme() {
        let mut settings = Settings {
            show_completed_tasks: false,
            auto_archive_completed: true,
            default_priority: Priority::High,
            theme: Theme::Dark,
        };
        settings.reset_task_preferences();
        assert!(settings.show_completed_tasks);
        assert!(!settings.auto_archive_completed);
        assert_eq!(settings.default_priority, Priority::Medium);
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("system".parse::<Theme>().is_err());
    }
}
