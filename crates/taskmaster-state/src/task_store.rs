use chrono::{DateTime, Utc};
use taskmaster_core::TaskResult;
use taskmaster_domain::query::{self, Dashboard, TaskStats};
use taskmaster_domain::{ArchivedTask, NewTask, Priority, Task, TaskFilters, TaskId, TaskUpdate};
use taskmaster_persistence::{keys, Storage};

use crate::events::{ChangeListener, Notifier, StoreEvent};

/// Owns the task list (most recent first) and the archive.
#[derive(Debug)]
pub struct TaskStore {
    storage: Storage,
    tasks: Vec<Task>,
    archived: Vec<ArchivedTask>,
    default_priority: Priority,
    auto_archive: bool,
    notifier: Notifier,
}

impl TaskStore {
    /// Load tasks from `storage`. Missing or malformed data yields an empty list.
    pub fn load(storage: Storage) -> Self {
        let tasks: Vec<Task> = storage.load_json(keys::TASKS).unwrap_or_default();
        let archived: Vec<ArchivedTask> =
            storage.load_json(keys::ARCHIVED_TASKS).unwrap_or_default();
        tracing::debug!(
            "Loaded {} tasks ({} archived)",
            tasks.len(),
            archived.len()
        );
        Self {
            storage,
            tasks,
            archived,
            default_priority: Priority::default(),
            auto_archive: false,
            notifier: Notifier::new(),
        }
    }

    /// Re-read everything from storage, keeping configuration and subscribers.
    pub fn reload(&mut self) {
        self.tasks = self.storage.load_json(keys::TASKS).unwrap_or_default();
        self.archived = self
            .storage
            .load_json(keys::ARCHIVED_TASKS)
            .unwrap_or_default();
        self.notifier.notify(StoreEvent::TasksChanged);
    }

    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.notifier.subscribe(listener);
    }

    pub fn default_priority(&self) -> Priority {
        self.default_priority
    }

    pub fn set_default_priority(&mut self, priority: Priority) {
        self.default_priority = priority;
    }

    pub fn auto_archive(&self) -> bool {
        self.auto_archive
    }

    pub fn set_auto_archive(&mut self, enabled: bool) {
        self.auto_archive = enabled;
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn archived(&self) -> &[ArchivedTask] {
        &self.archived
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn add(&mut self, input: NewTask) -> TaskResult<Task> {
        let task = Task::new(input, self.default_priority)?;

        let mut next = Vec::with_capacity(self.tasks.len() + 1);
        next.push(task.clone());
        next.extend(self.tasks.iter().cloned());
        self.commit_tasks(next)?;

        tracing::debug!("Added task {} '{}'", task.id, task.title);
        Ok(task)
    }

    /// Flip the completed flag. With auto-archive on, a task that becomes
    /// completed moves to the archive.
    pub fn toggle_complete(&mut self, id: TaskId) -> TaskResult<Option<Task>> {
        let Some(index) = self.position(id) else {
            tracing::debug!("Toggle skipped, task {} not found", id);
            return Ok(None);
        };

        let mut next = self.tasks.clone();
        next[index].toggle_completed();
        let task = next[index].clone();

        if task.completed && self.auto_archive {
            let done = next.remove(index);
            let archived = self.archived_with(ArchivedTask::new(done));
            self.commit_all(next, archived)?;
            tracing::debug!("Completed and archived task {}", id);
        } else {
            self.commit_tasks(next)?;
            tracing::debug!("Task {} completed = {}", id, task.completed);
        }
        Ok(Some(task))
    }

    pub fn edit(&mut self, id: TaskId, update: TaskUpdate) -> TaskResult<Option<Task>> {
        let Some(index) = self.position(id) else {
            tracing::debug!("Edit skipped, task {} not found", id);
            return Ok(None);
        };

        let mut next = self.tasks.clone();
        next[index].apply(update)?;
        let task = next[index].clone();
        self.commit_tasks(next)?;

        tracing::debug!("Edited task {}", id);
        Ok(Some(task))
    }

    pub fn delete(&mut self, id: TaskId) -> TaskResult<bool> {
        if self.position(id).is_none() {
            tracing::debug!("Delete skipped, task {} not found", id);
            return Ok(false);
        }

        let next = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.commit_tasks(next)?;

        tracing::debug!("Deleted task {}", id);
        Ok(true)
    }

    pub fn archive(&mut self, id: TaskId) -> TaskResult<Option<ArchivedTask>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let mut next = self.tasks.clone();
        let entry = ArchivedTask::new(next.remove(index));
        let archived = self.archived_with(entry.clone());
        self.commit_all(next, archived)?;

        tracing::debug!("Archived task {}", id);
        Ok(Some(entry))
    }

    /// Move an archived task back to the front of the list.
    pub fn restore(&mut self, id: TaskId) -> TaskResult<Option<Task>> {
        let Some(index) = self.archived.iter().position(|a| a.task.id == id) else {
            return Ok(None);
        };

        let mut archived = self.archived.clone();
        let task = archived.remove(index).into_task();
        let mut next = Vec::with_capacity(self.tasks.len() + 1);
        next.push(task.clone());
        next.extend(self.tasks.iter().cloned());
        self.commit_all(next, archived)?;

        tracing::debug!("Restored task {}", id);
        Ok(Some(task))
    }

    pub fn filter(&self, filters: &TaskFilters) -> Vec<Task> {
        query::filter_tasks(&self.tasks, filters)
    }

    pub fn upcoming(&self, within_days: u32) -> Vec<Task> {
        self.upcoming_at(Utc::now(), within_days)
    }

    pub fn upcoming_at(&self, now: DateTime<Utc>, within_days: u32) -> Vec<Task> {
        query::upcoming(&self.tasks, now, within_days)
    }

    pub fn high_priority(&self, limit: usize) -> Vec<Task> {
        query::high_priority(&self.tasks, limit)
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    pub fn dashboard(&self, within_days: u32, limit: usize) -> Dashboard {
        Dashboard::build(&self.tasks, Utc::now(), within_days, limit)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn archived_with(&self, entry: ArchivedTask) -> Vec<ArchivedTask> {
        let mut archived = Vec::with_capacity(self.archived.len() + 1);
        archived.push(entry);
        archived.extend(self.archived.iter().cloned());
        archived
    }

    fn commit_tasks(&mut self, next: Vec<Task>) -> TaskResult<()> {
        self.storage.save_json(keys::TASKS, &next)?;
        self.tasks = next;
        self.notifier.notify(StoreEvent::TasksChanged);
        Ok(())
    }

    // Both collections change together, so they go out in one write.
    fn commit_all(&mut self, next: Vec<Task>, archived: Vec<ArchivedTask>) -> TaskResult<()> {
        let entries = vec![
            (keys::TASKS.to_string(), self.storage.encode(&next)?),
            (
                keys::ARCHIVED_TASKS.to_string(),
                self.storage.encode(&archived)?,
            ),
        ];
        self.storage.save_many(entries)?;
        self.tasks = next;
        self.archived = archived;
        self.notifier.notify(StoreEvent::TasksChanged);
        Ok(())
    }
}
