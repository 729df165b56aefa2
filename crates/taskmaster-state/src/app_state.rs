use taskmaster_core::TaskResult;
use taskmaster_domain::{Priority, Settings, Task, TaskFilters};
use taskmaster_persistence::Storage;

use crate::category_store::CategoryStore;
use crate::settings_store::{ReloadRequired, SettingsStore};
use crate::task_store::TaskStore;

/// The three stores wired to one storage backend.
///
/// Settings that change task behaviour (default priority, auto-archive) are
/// pushed into the task store whenever they change through this type.
#[derive(Debug)]
pub struct AppState {
    pub tasks: TaskStore,
    pub categories: CategoryStore,
    pub settings: SettingsStore,
}

impl AppState {
    pub fn open(storage: Storage) -> Self {
        let mut state = Self {
            tasks: TaskStore::load(storage.clone()),
            categories: CategoryStore::load(storage.clone()),
            settings: SettingsStore::load(storage),
        };
        state.apply_settings();
        state
    }

    pub fn apply_settings(&mut self) {
        self.tasks
            .set_default_priority(self.settings.default_priority());
        self.tasks
            .set_auto_archive(self.settings.auto_archive_completed());
    }

    pub fn set_default_priority(&mut self, priority: Priority) -> TaskResult<()> {
        self.settings.set_default_priority(priority)?;
        self.apply_settings();
        Ok(())
    }

    pub fn set_auto_archive_completed(&mut self, enabled: bool) -> TaskResult<()> {
        self.settings.set_auto_archive_completed(enabled)?;
        self.apply_settings();
        Ok(())
    }

    pub fn reset_settings(&mut self) -> TaskResult<Settings> {
        let settings = self.settings.reset_to_defaults()?;
        self.apply_settings();
        Ok(settings)
    }

    /// Tasks for the main list: `filters` narrowed by the show-completed
    /// preference.
    pub fn visible_tasks(&self, filters: &TaskFilters) -> Vec<Task> {
        let filters = filters
            .clone()
            .with_visibility(self.settings.show_completed_tasks());
        self.tasks.filter(&filters)
    }

    /// Wipe tasks, archive and categories, then reload both stores so the
    /// category seed comes back.
    pub fn clear_all_data(&mut self) -> TaskResult<()> {
        let ReloadRequired = self.settings.clear_all_data()?;
        self.tasks.reload();
        self.categories.reload();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskmaster_domain::{NewTask, StatusFilter};

    #[test]
    fn test_open_applies_settings() {
        let storage = Storage::in_memory();
        {
            let mut settings = SettingsStore::load(storage.clone());
            settings.set_default_priority(Priority::High).unwrap();
            settings.set_auto_archive_completed(true).unwrap();
        }

        let state = AppState::open(storage);
        assert_eq!(state.tasks.default_priority(), Priority::High);
        assert!(state.tasks.auto_archive());
    }

    #[test]
    fn test_setting_changes_reach_task_store() {
        let mut state = AppState::open(Storage::in_memory());
        state.set_default_priority(Priority::Low).unwrap();

        let task = state.tasks.add(NewTask::titled("Water plants")).unwrap();
        assert_eq!(task.priority, Priority::Low);

        state.reset_settings().unwrap();
        assert_eq!(state.tasks.default_priority(), Priority::Medium);
    }

    #[test]
    fn test_visible_tasks_hides_completed_when_preferred() {
        let mut state = AppState::open(Storage::in_memory());
        let done = state.tasks.add(NewTask::titled("Done")).unwrap();
        state.tasks.add(NewTask::titled("Open")).unwrap();
        state.tasks.toggle_complete(done.id).unwrap();

        assert_eq!(state.visible_tasks(&TaskFilters::new()).len(), 2);

        state.settings.set_show_completed_tasks(false).unwrap();
        let visible = state.visible_tasks(&TaskFilters::new());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Open");

        let completed = TaskFilters::new().with_status(StatusFilter::Completed);
        assert_eq!(state.visible_tasks(&completed).len(), 1);
    }

    #[test]
    fn test_clear_all_data_reloads_stores() {
        let mut state = AppState::open(Storage::in_memory());
        state.tasks.add(NewTask::titled("Gone soon")).unwrap();
        state.categories.add("Health", "#00AA88").unwrap();

        state.clear_all_data().unwrap();
        assert!(state.tasks.is_empty());
        assert_eq!(state.categories.names(), vec!["Work", "Personal", "Shopping"]);
    }
}
