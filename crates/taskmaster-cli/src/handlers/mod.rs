use std::fmt::Display;
use taskmaster_core::TaskError;

pub mod category;
pub mod dashboard;
pub mod settings;
pub mod task;

fn not_found(what: &str, id: impl Display) -> anyhow::Error {
    TaskError::NotFound(format!("{} {}", what, id)).into()
}
