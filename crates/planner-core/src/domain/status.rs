//! Task status: the closed set of lifecycle values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ParseError;

/// Task status.
///
/// Quick-action cycle (policy only, the store accepts any target):
/// - Pending -> InProgress -> Completed -> Pending -> ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    /// Not started yet. Every new task begins here.
    #[default]
    Pending,

    /// Being worked on.
    InProgress,

    /// Done.
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Next status in the quick-action cycle.
    pub fn next(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }

    /// Wire/filter token (`pending`, `inProgress`, `completed`).
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "inProgress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Human-readable label for a task card.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Display colour token for a task card.
    pub fn color(self) -> &'static str {
        match self {
            TaskStatus::Pending => "#f59e0b",
            TaskStatus::InProgress => "#3b82f6",
            TaskStatus::Completed => "#22c55e",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseError::UnknownStatus(s.to_string()))
    }
}
