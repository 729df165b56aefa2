//! Task filter implementations.

use crate::Task;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use taskmaster_core::TaskError;

/// Trait for filtering tasks by some criterion.
pub trait TaskFilter {
    /// Returns true if the task passes the filter.
    fn matches(&self, task: &Task) -> bool;
}

/// Filter by completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter for StatusFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" => Ok(StatusFilter::Completed),
            other => Err(TaskError::Validation(format!(
                "Invalid status filter '{}': expected all, active or completed",
                other
            ))),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// Filter by category name. Exact, case-sensitive match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// `"all"` selects every task, anything else is a category name.
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => CategoryFilter::All,
            name => CategoryFilter::Named(name.to_string()),
        }
    }
}

impl TaskFilter for CategoryFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => task.is_in_category(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NewTask, Priority};

    fn task(title: &str, completed: bool, category: Option<&str>) -> Task {
        let mut input = NewTask::titled(title);
        input.category = category.map(str::to_string);
        let mut task = Task::new(input, Priority::Medium).unwrap();
        task.completed = completed;
        task
    }

    #[test]
    fn test_status_filter() {
        let open = task("open", false, None);
        let done = task("done", true, None);

        assert!(StatusFilter::All.matches(&open));
        assert!(StatusFilter::All.matches(&done));
        assert!(StatusFilter::Active.matches(&open));
        assert!(!StatusFilter::Active.matches(&done));
        assert!(StatusFilter::Completed.matches(&done));
        assert!(!StatusFilter::Completed.matches(&open));
    }

    #[test]
    fn test_category_filter() {
        let work = task("report", false, Some("Work"));
        let loose = task("nap", false, None);

        let filter = CategoryFilter::parse("Work");
        assert!(filter.matches(&work));
        assert!(!filter.matches(&loose));
        assert!(!CategoryFilter::parse("work").matches(&work));
        assert!(CategoryFilter::parse("all").matches(&loose));
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("Active".parse::<StatusFilter>().unwrap(), StatusFilter::Active);
        assert!("pending".parse::<StatusFilter>().is_err());
    }
}
