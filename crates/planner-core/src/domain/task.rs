//! Task entity.

use serde::{Deserialize, Serialize};

use super::{DueDate, SubjectId, TaskId, TaskStatus};

/// A titled unit of work owned by a subject.
///
/// `subject_id` is a plain reference: it may point at a subject that does not
/// exist, and readers treat that subject as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub subject_id: SubjectId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: DueDate,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    /// A new pending task without description.
    pub fn new(
        id: impl Into<TaskId>,
        subject_id: impl Into<SubjectId>,
        title: impl Into<String>,
        due_date: impl Into<DueDate>,
    ) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            title: title.into(),
            description: None,
            due_date: due_date.into(),
            status: TaskStatus::Pending,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_seed_shape() {
        let json = r#"{
            "id": "task-1",
            "subjectId": "subj-1",
            "title": "Limits homework",
            "dueDate": "2025-12-15",
            "status": "inProgress"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id.as_str(), "task-1");
        assert_eq!(task.subject_id.as_str(), "subj-1");
        assert_eq!(task.description, None);
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn missing_status_defaults_to_pending() {
        let json = r#"{"id":"t","subjectId":"s","title":"x","dueDate":"2025-01-01"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let json = r#"{"id":"t","subjectId":"s","title":"x","dueDate":"2025-01-01","status":"archived"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }
}
