use serde::{Deserialize, Serialize};
use taskmaster_core::{TaskError, TaskResult};
use uuid::Uuid;

/// Opaque id. New categories get a UUID; the seed keeps the short ids
/// ("1", "2", "3") that existing stored data already uses.
pub type CategoryId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
}

impl Category {
    pub fn new(name: &str, color: &str) -> TaskResult<Self> {
        let (name, color) = validate(name, color)?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            color,
        })
    }

    pub fn rename(&mut self, name: &str, color: &str) -> TaskResult<()> {
        let (name, color) = validate(name, color)?;
        self.name = name;
        self.color = color;
        Ok(())
    }

    /// Categories a fresh install starts with.
    pub fn defaults() -> Vec<Category> {
        [
            ("1", "Work", "#4A6FA5"),
            ("2", "Personal", "#47B881"),
            ("3", "Shopping", "#E74C3C"),
        ]
        .into_iter()
        .map(|(id, name, color)| Category {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        })
        .collect()
    }
}

fn validate(name: &str, color: &str) -> TaskResult<(String, String)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TaskError::Validation("Category name must not be empty".to_string()));
    }
    let color = color.trim();
    if !is_hex_color(color) {
        return Err(TaskError::Validation(format!(
            "Invalid color '{}': expected #RGB or #RRGGBB",
            color
        )));
    }
    Ok((name.to_string(), color.to_string()))
}

pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
