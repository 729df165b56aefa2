use chrono::{Duration, TimeZone, Utc};
use std::sync::{Arc, Mutex};
use taskmaster_domain::*;
use taskmaster_persistence::{keys, JsonFileStore, Storage};
use taskmaster_state::*;
use tempfile::tempdir;

fn file_storage(dir: &std::path::Path) -> Storage {
    Storage::new(Arc::new(JsonFileStore::in_dir(dir)))
}

mod tasks {
    use super::*;

    #[test]
    fn test_add_buy_milk() {
        let mut state = AppState::open(Storage::in_memory());
        let task = state
            .tasks
            .add(NewTask::titled("Buy milk").with_category("Shopping"))
            .unwrap();

        assert_eq!(state.tasks.list()[0].id, task.id);
        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.category.as_deref(), Some("Shopping"));
    }

    #[test]
    fn test_blank_title_rejected_without_change() {
        let mut store = TaskStore::load(Storage::in_memory());
        assert!(store.add(NewTask::titled("   ")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_flag() {
        let mut store = TaskStore::load(Storage::in_memory());
        let task = store.add(NewTask::titled("Call mom")).unwrap();

        store.toggle_complete(task.id).unwrap();
        assert!(store.get(task.id).unwrap().completed);
        store.toggle_complete(task.id).unwrap();
        assert!(!store.get(task.id).unwrap().completed);
    }

    #[test]
    fn test_completion_rate() {
        let mut store = TaskStore::load(Storage::in_memory());
        assert_eq!(store.stats().completion_rate, 0);

        let a = store.add(NewTask::titled("a")).unwrap();
        store.add(NewTask::titled("b")).unwrap();
        store.toggle_complete(a.id).unwrap();
        assert_eq!(store.stats().completion_rate, 50);
    }

    #[test]
    fn test_active_and_completed_partition() {
        let mut store = TaskStore::load(Storage::in_memory());
        for title in ["one", "two", "three", "four"] {
            store.add(NewTask::titled(title)).unwrap();
        }
        let ids: Vec<TaskId> = store.list().iter().map(|t| t.id).collect();
        store.toggle_complete(ids[1]).unwrap();
        store.toggle_complete(ids[3]).unwrap();

        let active = store.filter(&TaskFilters::new().with_status(StatusFilter::Active));
        let completed = store.filter(&TaskFilters::new().with_status(StatusFilter::Completed));
        assert_eq!(active.len() + completed.len(), store.len());
        assert!(active.iter().all(|t| !completed.iter().any(|c| c.id == t.id)));
    }

    #[test]
    fn test_upcoming_seven_days() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let mut store = TaskStore::load(Storage::in_memory());
        store
            .add(NewTask::titled("later").with_due_date(now + Duration::days(10)))
            .unwrap();
        store
            .add(NewTask::titled("soon").with_due_date(now + Duration::days(3)))
            .unwrap();
        store
            .add(NewTask::titled("sooner").with_due_date(now + Duration::days(1)))
            .unwrap();

        let titles: Vec<_> = store
            .upcoming_at(now, 7)
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["sooner", "soon"]);
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let mut store = TaskStore::load(Storage::in_memory());
        store.add(NewTask::titled("keep")).unwrap();
        let ghost = uuid::Uuid::new_v4();

        assert!(store.toggle_complete(ghost).unwrap().is_none());
        assert!(store.edit(ghost, TaskUpdate::title("x")).unwrap().is_none());
        assert!(!store.delete(ghost).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_subscribers_see_every_mutation() {
        let mut store = TaskStore::load(Storage::in_memory());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(Box::new(move |event| sink.lock().unwrap().push(*event)));

        let task = store.add(NewTask::titled("watched")).unwrap();
        store.toggle_complete(task.id).unwrap();
        store.delete(task.id).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![StoreEvent::TasksChanged; 3]
        );
    }

    #[test]
    fn test_auto_archive_through_settings() {
        let mut state = AppState::open(Storage::in_memory());
        state.set_auto_archive_completed(true).unwrap();

        let task = state.tasks.add(NewTask::titled("File taxes")).unwrap();
        state.tasks.toggle_complete(task.id).unwrap();

        assert!(state.tasks.is_empty());
        assert_eq!(state.tasks.archived()[0].task.id, task.id);

        let restored = state.tasks.restore(task.id).unwrap().unwrap();
        assert!(restored.completed);
        assert_eq!(state.tasks.list()[0].id, task.id);
        assert!(state.tasks.archived().is_empty());
    }
}

mod categories {
    use super::*;

    #[test]
    fn test_delete_category_leaves_task_reference() {
        let mut state = AppState::open(Storage::in_memory());
        let work = state.categories.list()[0].clone();
        let task = state
            .tasks
            .add(NewTask::titled("Quarterly report").with_category(work.name.clone()))
            .unwrap();

        assert!(state.categories.delete(&work.id).unwrap());
        assert!(!state.categories.names().contains(&work.name));

        let kept = state.tasks.get(task.id).unwrap();
        assert_eq!(kept.category.as_deref(), Some("Work"));

        let by_name = TaskFilters::new().with_category(CategoryFilter::Named("Work".into()));
        assert_eq!(state.tasks.filter(&by_name).len(), 1);
    }
}

mod settings {
    use super::*;

    #[test]
    fn test_reset_to_defaults() {
        let mut state = AppState::open(Storage::in_memory());
        state.settings.set_show_completed_tasks(false).unwrap();
        state.set_auto_archive_completed(true).unwrap();
        state.set_default_priority(Priority::High).unwrap();

        let settings = state.reset_settings().unwrap();
        assert!(settings.show_completed_tasks);
        assert!(!settings.auto_archive_completed);
        assert_eq!(settings.default_priority, Priority::Medium);
        assert!(!state.tasks.auto_archive());
    }

    #[test]
    fn test_clear_all_data_reseeds_categories() {
        let dir = tempdir().unwrap();
        let mut state = AppState::open(file_storage(dir.path()));
        state.tasks.add(NewTask::titled("scratch")).unwrap();
        state.categories.add("Health", "#00AA88").unwrap();
        state.settings.set_theme(Theme::Dark).unwrap();

        state.clear_all_data().unwrap();
        assert!(state.tasks.is_empty());
        assert!(state.tasks.archived().is_empty());
        assert_eq!(state.categories.names(), vec!["Work", "Personal", "Shopping"]);
        let ids: Vec<_> = state.categories.list().iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(state.settings.theme(), Theme::Dark);
    }
}

mod persistence {
    use super::*;

    #[test]
    fn test_round_trip_through_file_preserves_order() {
        let dir = tempdir().unwrap();
        let due = Utc.with_ymd_and_hms(2026, 5, 4, 0, 0, 0).unwrap();

        let written: Vec<Task> = {
            let mut state = AppState::open(file_storage(dir.path()));
            state.tasks.add(NewTask::titled("first")).unwrap();
            state
                .tasks
                .add(
                    NewTask::titled("second")
                        .with_due_date(due)
                        .with_priority(Priority::High),
                )
                .unwrap();
            let third = state.tasks.add(NewTask::titled("third")).unwrap();
            state.tasks.toggle_complete(third.id).unwrap();
            state.settings.set_theme(Theme::Dark).unwrap();
            state.tasks.list().to_vec()
        };

        let reopened = AppState::open(file_storage(dir.path()));
        assert_eq!(reopened.tasks.list(), written.as_slice());
        assert_eq!(reopened.tasks.list()[1].due_date, Some(due));
        assert_eq!(reopened.settings.theme(), Theme::Dark);
        assert!(dir.path().join("storage.json").exists());
    }

    #[test]
    fn test_malformed_tasks_fall_back_to_empty() {
        let storage = Storage::in_memory();
        storage.save_raw(keys::TASKS, "{not json").unwrap();
        storage.save_raw(keys::SHOW_COMPLETED_TASKS, "false").unwrap();

        let state = AppState::open(storage);
        assert!(state.tasks.is_empty());
        assert!(!state.settings.show_completed_tasks());
        assert_eq!(state.categories.list().len(), 3);
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("storage.json"), "garbage").unwrap();

        let mut state = AppState::open(file_storage(dir.path()));
        assert!(state.tasks.is_empty());
        state.tasks.add(NewTask::titled("fresh start")).unwrap();

        let reopened = AppState::open(file_storage(dir.path()));
        assert_eq!(reopened.tasks.len(), 1);
    }
}
