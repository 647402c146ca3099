//! Seed data for bulk replace.
//!
//! JSON shape:
//! ```json
//! { "subjects": [{ "id": "s1", "name": "Math", "color": "#000" }],
//!   "tasks": [{ "id": "t1", "subjectId": "s1", "title": "HW",
//!               "dueDate": "2025-01-10", "status": "pending" }] }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Subject, Task, TaskStatus};
use crate::store::Action;

/// Colour tokens offered when creating a subject.
pub const SUBJECT_COLORS: [&str; 8] = [
    "#4f46e5", // indigo
    "#22c55e", // green
    "#f97316", // orange
    "#ef4444", // red
    "#8b5cf6", // purple
    "#06b6d4", // cyan
    "#ec4899", // pink
    "#f59e0b", // amber
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The two bulk-replace actions that load this seed.
    pub fn into_actions(self) -> [Action; 2] {
        [
            Action::ReplaceSubjects(self.subjects),
            Action::ReplaceTasks(self.tasks),
        ]
    }

    /// Three subjects and five tasks for a first run.
    pub fn demo() -> Self {
        let subjects = vec![
            Subject::new("subj-1", "Mathematics", SUBJECT_COLORS[0]),
            Subject::new("subj-2", "Programming", SUBJECT_COLORS[1]),
            Subject::new("subj-3", "History", SUBJECT_COLORS[2]),
        ];
        let tasks = vec![
            Task::new("task-1", "subj-1", "Limits homework", "2025-12-15")
                .with_description("Solve exercises 1-10 from chapter 3"),
            Task::new("task-2", "subj-2", "React project", "2025-12-18")
                .with_description("Design reusable components")
                .with_status(TaskStatus::InProgress),
            Task::new("task-3", "subj-3", "Industrial Revolution essay", "2025-12-20")
                .with_description("Write 5 pages on the social impact"),
            Task::new("task-4", "subj-1", "Derivatives exam", "2025-12-22")
                .with_description("Study chapters 4 and 5"),
            Task::new("task-5", "subj-2", "TypeScript practice", "2025-12-14")
                .with_description("Finish the advanced typing exercises")
                .with_status(TaskStatus::Completed),
        ];
        Self { subjects, tasks }
    }
}
