use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Task;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedTask {
    pub task: Task,
    pub archived_at: DateTime<Utc>,
}

impl ArchivedTask {
    pub fn new(task: Task) -> Self {
        Self {
            task,
            archived_at: Utc::now(),
        }
    }

    pub fn into_task(self) -> Task {
        self.task
    }
}
