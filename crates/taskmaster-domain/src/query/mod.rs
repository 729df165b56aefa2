//! Derived task views for list and dashboard pages.
//!
//! Every function here reads a slice and returns owned copies in a new
//! `Vec`; the input collection is never reordered or modified.

use crate::filter::TaskFilter;
use crate::{Priority, Task};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Aggregate counts for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    /// Whole percent, 0 when there are no tasks.
    pub completion_rate: u32,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let completion_rate = if total == 0 {
            0
        } else {
            (completed as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            total,
            completed,
            remaining: total - completed,
            completion_rate,
        }
    }
}

/// Everything the dashboard page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub stats: TaskStats,
    pub upcoming: Vec<Task>,
    pub high_priority: Vec<Task>,
}

impl Dashboard {
    pub fn build(tasks: &[Task], now: DateTime<Utc>, within_days: u32, limit: usize) -> Self {
        Self {
            stats: TaskStats::from_tasks(tasks),
            upcoming: upcoming(tasks, now, within_days),
            high_priority: high_priority(tasks, limit),
        }
    }
}

/// Tasks passing `filter`, in collection order.
pub fn filter_tasks(tasks: &[Task], filter: &dyn TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Open tasks due between `now` and `now + within_days`, both ends inclusive,
/// earliest first. Tasks without a due date never qualify.
pub fn upcoming(tasks: &[Task], now: DateTime<Utc>, within_days: u32) -> Vec<Task> {
    let horizon = now
        .checked_add_signed(Duration::days(i64::from(within_days)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    let mut due: Vec<Task> = tasks
        .iter()
        .filter(|t| !t.completed)
        .filter(|t| t.due_date.is_some_and(|d| d >= now && d <= horizon))
        .cloned()
        .collect();
    // stable, so equal due dates keep collection order
    due.sort_by_key(|t| t.due_date);
    due
}

/// Open high-priority tasks in collection order, at most `limit` of them.
pub fn high_priority(tasks: &[Task], limit: usize) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| !t.completed && t.priority == Priority::High)
        .take(limit)
        .cloned()
        .collect()
}
