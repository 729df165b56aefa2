use taskmaster_core::TaskResult;
use taskmaster_domain::{Priority, Settings, Theme};
use taskmaster_persistence::{keys, Storage};

use crate::events::{ChangeListener, Notifier, StoreEvent};

/// Returned by [`SettingsStore::clear_all_data`]: task and category stores
/// loaded before the clear hold stale data and must be reloaded.
#[must_use = "stores loaded before the clear must be reloaded"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadRequired;

/// Owns the user preferences. Each field lives under its own key.
#[derive(Debug)]
pub struct SettingsStore {
    storage: Storage,
    settings: Settings,
    notifier: Notifier,
}

impl SettingsStore {
    /// Load each field independently; a missing or malformed field takes its
    /// default without affecting the others.
    pub fn load(storage: Storage) -> Self {
        let defaults = Settings::default();
        let settings = Settings {
            show_completed_tasks: storage
                .load_json(keys::SHOW_COMPLETED_TASKS)
                .unwrap_or(defaults.show_completed_tasks),
            auto_archive_completed: storage
                .load_json(keys::AUTO_ARCHIVE_COMPLETED)
                .unwrap_or(defaults.auto_archive_completed),
            default_priority: storage
                .load_parsed(keys::DEFAULT_PRIORITY)
                .unwrap_or(defaults.default_priority),
            theme: storage.load_parsed(keys::THEME).unwrap_or(defaults.theme),
        };
        tracing::debug!("Loaded settings {:?}", settings);
        Self {
            storage,
            settings,
            notifier: Notifier::new(),
        }
    }

    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.notifier.subscribe(listener);
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn show_completed_tasks(&self) -> bool {
        self.settings.show_completed_tasks
    }

    pub fn set_show_completed_tasks(&mut self, show: bool) -> TaskResult<()> {
        self.storage.save_json(keys::SHOW_COMPLETED_TASKS, &show)?;
        self.settings.show_completed_tasks = show;
        self.changed();
        Ok(())
    }

    pub fn auto_archive_completed(&self) -> bool {
        self.settings.auto_archive_completed
    }

    pub fn set_auto_archive_completed(&mut self, enabled: bool) -> TaskResult<()> {
        self.storage.save_json(keys::AUTO_ARCHIVE_COMPLETED, &enabled)?;
        self.settings.auto_archive_completed = enabled;
        self.changed();
        Ok(())
    }

    pub fn default_priority(&self) -> Priority {
        self.settings.default_priority
    }

    pub fn set_default_priority(&mut self, priority: Priority) -> TaskResult<()> {
        self.storage.save_raw(keys::DEFAULT_PRIORITY, priority.as_str())?;
        self.settings.default_priority = priority;
        self.changed();
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> TaskResult<()> {
        self.storage.save_raw(keys::THEME, theme.as_str())?;
        self.settings.theme = theme;
        self.changed();
        Ok(())
    }

    /// Restore the task preferences to their defaults in a single write.
    /// The theme is left alone.
    pub fn reset_to_defaults(&mut self) -> TaskResult<Settings> {
        let mut next = self.settings;
        next.reset_task_preferences();

        let entries = vec![
            (
                keys::SHOW_COMPLETED_TASKS.to_string(),
                self.storage.encode(&next.show_completed_tasks)?,
            ),
            (
                keys::AUTO_ARCHIVE_COMPLETED.to_string(),
                self.storage.encode(&next.auto_archive_completed)?,
            ),
            (
                keys::DEFAULT_PRIORITY.to_string(),
                next.default_priority.as_str().to_string(),
            ),
        ];
        self.storage.save_many(entries)?;
        self.settings = next;
        self.changed();

        tracing::info!("Settings reset to defaults");
        Ok(next)
    }

    /// Remove every task, archived task and category. Settings are kept.
    pub fn clear_all_data(&mut self) -> TaskResult<ReloadRequired> {
        self.storage.remove_many(&keys::USER_DATA)?;
        tracing::info!("Cleared all task and category data");
        self.notifier.notify(StoreEvent::DataCleared);
        Ok(ReloadRequired)
    }

    fn changed(&self) {
        self.notifier.notify(StoreEvent::SettingsChanged);
    }
}
