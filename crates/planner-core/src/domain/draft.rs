//! Draft - フォーム入力から新規エンティティを作る
//!
//! UI のフォームは未検証の文字列をそのまま渡してきます。
//! ドラフトは trim と検証を行い、ID を付けてエンティティに変換します。
//! ID の生成は呼び出し側（`Store` + `IdGenerator`）の責務です。

use serde::{Deserialize, Serialize};

use super::errors::StoreError;
use super::{DueDate, Subject, SubjectId, Task, TaskId, TaskStatus};

/// Unvalidated "new subject" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubject {
    pub name: String,
    pub color: String,
}

impl NewSubject {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Trim and validate, then attach `id`.
    pub fn into_subject(self, id: SubjectId) -> Result<Subject, StoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptySubjectName);
        }
        Ok(Subject {
            id,
            name: name.to_string(),
            color: self.color,
        })
    }
}

/// Unvalidated "new task" form.
///
/// `subject_id` is `None` until the user picks a subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub subject_id: Option<SubjectId>,
    pub title: String,
    pub description: String,
    pub due_date: String,
}

impl NewTask {
    pub fn new(
        subject_id: impl Into<SubjectId>,
        title: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: Some(subject_id.into()),
            title: title.into(),
            description: String::new(),
            due_date: due_date.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Trim and validate, then attach `id`. The task always starts pending.
    ///
    /// A blank description becomes `None`.
    pub fn into_task(self, id: TaskId) -> Result<Task, StoreError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTaskTitle);
        }
        let subject_id = match self.subject_id {
            Some(subject_id) if !subject_id.is_blank() => subject_id,
            _ => return Err(StoreError::MissingSubject),
        };
        let due_date = self.due_date.trim();
        if due_date.is_empty() {
            return Err(StoreError::EmptyDueDate);
        }
        let description = self.description.trim();

        Ok(Task {
            id,
            subject_id,
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            due_date: DueDate::new(due_date),
            status: TaskStatus::Pending,
        })
    }
}
