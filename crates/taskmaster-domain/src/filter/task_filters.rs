//! List filter configuration.

use super::task_filter::{CategoryFilter, StatusFilter, TaskFilter};
use crate::Task;

/// The filters a task list view holds. Both apply (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilters {
    pub status: StatusFilter,
    pub category: CategoryFilter,
}

impl TaskFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Hide completed tasks from the unfiltered view when the user has turned
    /// off "show completed tasks". An explicit status choice is kept.
    pub fn with_visibility(mut self, show_completed: bool) -> Self {
        if !show_completed && self.status == StatusFilter::All {
            self.status = StatusFilter::Active;
        }
        self
    }
}

impl TaskFilter for TaskFilters {
    fn matches(&self, task: &Task) -> bool {
        self.status.matches(task) && self.category.matches(task)
    }
}
