use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use taskmaster_core::{TaskError, TaskResult};
use uuid::Uuid;

use crate::field_update::FieldUpdate;

pub type TaskId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(TaskError::Validation(format!(
                "Invalid priority '{}': expected low, medium or high",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::due_date::optional"
    )]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
    /// Name of the category this task is filed under. Not checked against the
    /// category list, so it may outlive the category it names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Input for creating a task. Unset priority falls back to the store default.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Partial update for a task. `id` and `created_at` have no slot here.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: FieldUpdate<String>,
    pub due_date: FieldUpdate<DateTime<Utc>>,
    pub priority: Option<Priority>,
    pub category: FieldUpdate<String>,
}

impl TaskUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && !self.description.is_change()
            && !self.due_date.is_change()
            && self.priority.is_none()
            && !self.category.is_change()
    }
}

impl Task {
    pub fn new(input: NewTask, default_priority: Priority) -> TaskResult<Self> {
        let title = validate_title(&input.title)?;
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description: non_blank(input.description),
            completed: false,
            created_at: Utc::now(),
            due_date: input.due_date,
            priority: input.priority.unwrap_or(default_priority),
            category: non_blank(input.category),
        })
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Merge `update` into this task. The title is validated before any field
    /// changes, so a rejected update leaves the task untouched.
    pub fn apply(&mut self, update: TaskUpdate) -> TaskResult<()> {
        let title = match update.title {
            Some(ref title) => Some(validate_title(title)?),
            None => None,
        };

        if let Some(title) = title {
            self.title = title;
        }
        normalize(update.description).apply_to(&mut self.description);
        update.due_date.apply_to(&mut self.due_date);
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        normalize(update.category).apply_to(&mut self.category);
        Ok(())
    }

    pub fn is_in_category(&self, name: &str) -> bool {
        self.category.as_deref() == Some(name)
    }
}

pub fn validate_title(title: &str) -> TaskResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskError::Validation("Task title must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// Setting a text field to blank is the same as clearing it.
fn normalize(update: FieldUpdate<String>) -> FieldUpdate<String> {
    match update {
        FieldUpdate::Set(value) if value.trim().is_empty() => FieldUpdate::Clear,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(NewTask::titled("Buy milk"), Priority::Medium).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.description.is_none());
        assert!(task.category.is_none());
    }

    #[test]
    fn test_new_task_uses_supplied_priority() {
        let input = NewTask::titled("Ship release").with_priority(Priority::High);
        let task = Task::new(input, Priority::Low).unwrap();
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn test_new_task_trims_title() {
        let task = Task::new(NewTask::titled("  Call mum  "), Priority::Medium).unwrap();
        assert_eq!(task.title, "Call mum");
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = Task::new(NewTask::titled("   "), Priority::Medium).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
    }

    #[test]
    fn test_apply_keeps_identity_fields() {
        let mut task = Task::new(NewTask::titled("Draft"), Priority::Medium).unwrap();
        let id = task.id;
        let created_at = task.created_at;

        let due = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
        task.apply(TaskUpdate {
            title: Some("Final".to_string()),
            description: FieldUpdate::Set("notes".to_string()),
            due_date: FieldUpdate::Set(due),
            priority: Some(Priority::High),
            category: FieldUpdate::Set("Work".to_string()),
        })
        .unwrap();

        assert_eq!(task.id, id);
        assert_eq!(task.created_at, created_at);
        assert_eq!(task.title, "Final");
        assert_eq!(task.description.as_deref(), Some("notes"));
        assert_eq!(task.due_date, Some(due));
        assert_eq!(task.priority, Priority::High);
        assert!(task.is_in_category("Work"));
    }

    #[test]
    fn test_apply_with_blank_title_changes_nothing() {
        let mut task = Task::new(NewTask::titled("Keep me"), Priority::Medium).unwrap();
        let before = task.clone();

        let result = task.apply(TaskUpdate {
            title: Some(" ".to_string()),
            priority: Some(Priority::High),
            ..TaskUpdate::default()
        });

        assert!(result.is_err());
        assert_eq!(task, before);
    }

    #[test]
    fn test_apply_blank_description_clears() {
        let mut task = Task::new(NewTask::titled("Task"), Priority::Medium).unwrap();
        task.description = Some("old".to_string());
        task.apply(TaskUpdate {
            description: FieldUpdate::Set("".to_string()),
            ..TaskUpdate::default()
        })
        .unwrap();
        assert!(task.description.is_none());
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" low ".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_serialized_layout_is_camel_case() {
        let due = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
        let input = NewTask::titled("Task")
            .with_due_date(due)
            .with_priority(Priority::High);
        let task = Task::new(input, Priority::Medium).unwrap();

        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["dueDate"], "2026-05-01T00:00:00Z");
        assert_eq!(value["priority"], "high");
        assert!(value.get("category").is_none());
    }

    #[test]
    fn test_deserialize_plain_due_date() {
        let json = r#"{
            "id": "6f1c1f5e-4a8b-4c55-9a3c-2f0c7c1d2e3f",
            "title": "Pay rent",
            "completed": false,
            "createdAt": "2026-01-01T09:30:00.000Z",
            "dueDate": "2026-02-01",
            "priority": "high",
            "category": "Personal"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(
            task.due_date,
            Some(Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap())
        );
        assert!(task.is_in_category("Personal"));
    }
}
