pub mod archived_task;
pub mod category;
pub mod due_date;
pub mod field_update;
pub mod filter;
pub mod query;
pub mod settings;
pub mod task;

pub use archived_task::ArchivedTask;
pub use category::{Category, CategoryId};
pub use field_update::FieldUpdate;
pub use filter::{CategoryFilter, StatusFilter, TaskFilter, TaskFilters};
pub use query::{Dashboard, TaskStats};
pub use settings::{Settings, Theme};
pub use task::{NewTask, Priority, Task, TaskId, TaskUpdate};
