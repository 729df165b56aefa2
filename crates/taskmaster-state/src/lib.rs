//! Stateful services over the persisted task data.
//!
//! Each store loads its collection once, mutates by building a replacement
//! collection, persists it, swaps it in and then notifies subscribers. A
//! failed write leaves the in-memory state as it was.

pub mod app_state;
pub mod category_store;
pub mod events;
pub mod settings_store;
pub mod task_store;

pub use app_state::AppState;
pub use category_store::CategoryStore;
pub use events::{ChangeListener, Notifier, StoreEvent};
pub use settings_store::{ReloadRequired, SettingsStore};
pub use task_store::TaskStore;
