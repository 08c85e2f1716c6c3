use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a todo record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted todo, scoped to one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: TodoId,
    /// Todo text (never empty)
    pub content: String,
    pub completed: bool,
    /// Day this todo belongs to
    pub date: NaiveDate,
    /// Sort key within `date`. Not contiguous, not necessarily unique.
    pub position: i64,
}

impl TodoRecord {
    /// Which partition of the day this record belongs to
    pub fn partition(&self) -> Partition {
        if self.completed {
            Partition::Completed
        } else {
            Partition::Active
        }
    }
}

/// The two groups a day's todos are split into for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Active,
    Completed,
}
