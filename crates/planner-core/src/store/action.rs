//! Action - ストアに対する intent の閉じた集合

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{StatusFilter, Subject, SubjectFilter, Task, TaskId, TaskStatus};

/// Every write the UI can make.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    AddSubject(Subject),
    ReplaceSubjects(Vec<Subject>),
    AddTask(Task),
    ReplaceTasks(Vec<Task>),
    UpdateTaskStatus { id: TaskId, status: TaskStatus },
    SetStatusFilter(StatusFilter),
    SetSubjectFilter(SubjectFilter),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::AddSubject(_) => ActionKind::AddSubject,
            Action::ReplaceSubjects(_) => ActionKind::ReplaceSubjects,
            Action::AddTask(_) => ActionKind::AddTask,
            Action::ReplaceTasks(_) => ActionKind::ReplaceTasks,
            Action::UpdateTaskStatus { .. } => ActionKind::UpdateTaskStatus,
            Action::SetStatusFilter(_) => ActionKind::SetStatusFilter,
            Action::SetSubjectFilter(_) => ActionKind::SetSubjectFilter,
        }
    }
}

/// Payload-free tag of an `Action`, carried by transitions and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    AddSubject,
    ReplaceSubjects,
    AddTask,
    ReplaceTasks,
    UpdateTaskStatus,
    SetStatusFilter,
    SetSubjectFilter,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::AddSubject => "addSubject",
            ActionKind::ReplaceSubjects => "replaceSubjects",
            ActionKind::AddTask => "addTask",
            ActionKind::ReplaceTasks => "replaceTasks",
            ActionKind::UpdateTaskStatus => "updateTaskStatus",
            ActionKind::SetStatusFilter => "setStatusFilter",
            ActionKind::SetSubjectFilter => "setSubjectFilter",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
