//! Storage keys. Each store owns its keys; nothing writes across them.

pub const TASKS: &str = "tasks";
pub const ARCHIVED_TASKS: &str = "archivedTasks";
pub const CATEGORIES: &str = "categories";
pub const SHOW_COMPLETED_TASKS: &str = "showCompletedTasks";
pub const AUTO_ARCHIVE_COMPLETED: &str = "autoArchiveCompleted";
pub const DEFAULT_PRIORITY: &str = "defaultPriority";
pub const THEME: &str = "theme";

/// Keys removed by a full data clear. Settings survive it.
pub const USER_DATA: [&str; 3] = [TASKS, ARCHIVED_TASKS, CATEGORIES];
