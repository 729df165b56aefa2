//! Task filtering.
//!
//! `TaskFilter` is the predicate trait; `TaskFilters` is the pair of list
//! filters (status and category) a task list view holds.

pub mod task_filter;
pub mod task_filters;

pub use task_filter::{CategoryFilter, StatusFilter, TaskFilter};
pub use task_filters::TaskFilters;
