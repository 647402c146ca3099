//! Errors - エラー型と分類
//!
//! ストアはコアに I/O を持たないので、分類は薄く保ちます。
//! - StoreError: 入力検証の拒否（呼び出し側に型付きで返す）
//! - ParseError: ステータス / フィルタ文字列の解釈失敗
//!
//! 参照ミス（未知の id への更新、存在しない subject の参照）はエラーではなく
//! no-op / None として扱います。

use thiserror::Error;

use super::{SubjectId, TaskId};

/// StoreError はストアが受け付けなかった intent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("subject name must not be empty")]
    EmptySubjectName,

    #[error("task title must not be empty")]
    EmptyTaskTitle,

    #[error("task must reference a subject")]
    MissingSubject,

    #[error("task due date must not be empty")]
    EmptyDueDate,

    #[error("subject id must not be empty")]
    EmptySubjectId,

    #[error("task id must not be empty")]
    EmptyTaskId,

    #[error("subject id already exists: {0}")]
    DuplicateSubjectId(SubjectId),

    #[error("task id already exists: {0}")]
    DuplicateTaskId(TaskId),
}

/// ParseError は文字列トークンの解釈エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown task status '{0}'")]
    UnknownStatus(String),

    #[error("unknown status filter '{0}'")]
    UnknownStatusFilter(String),

    #[error("subject filter must not be empty")]
    EmptySubjectFilter,

    #[error("unknown start screen '{0}'")]
    UnknownDefaultView(String),

    #[error("unknown task view mode '{0}'")]
    UnknownTaskViewMode(String),
}
