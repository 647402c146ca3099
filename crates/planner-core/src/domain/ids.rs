//! Domain identifiers (strongly-typed IDs).
//!
//! # 文字列ベースの ID + Phantom Type
//! Subject / Task の ID は UI やシードデータから渡される任意の文字列です
//! （例: `"s1"`, `"subj-1"`, `"task-01J..."`）。
//! 中身は `String` のまま保持し、マーカー型で種類を区別します。
//!
//! ## Phantom Type パターン
//! `Id<T>` は共通実装を提供し、`T` はコンパイル時のみ使うマーカー型です。
//! SubjectId と TaskId は混同できません。
//!
//! 新規 ID の生成は `ports::IdGenerator` が担当します（ULID + prefix）。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// IdMarker は各 ID 型のマーカー trait
///
/// 生成時に使うプレフィックス（"subj-", "task-"）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    /// 生成 ID のプレフィックス（例: "subj-"）
    fn prefix() -> &'static str;
}

/// ジェネリック ID 型
///
/// ```ignore
/// let subject_id = SubjectId::new("s1");
/// let task_id = TaskId::new("s1");
/// // 同じ文字列でも型が異なるので比較できない
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Id<T: IdMarker> {
    value: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    /// 既存の文字列から Id を作成（検証なし）
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    /// ULID から `{prefix}{ulid}` 形式の Id を作成
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self::new(format!("{}{}", T::prefix(), ulid))
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// 空文字列（またはスペースのみ）か？
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

impl<T: IdMarker> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Subject のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subject {}

impl IdMarker for Subject {
    fn prefix() -> &'static str {
        "subj-"
    }
}

/// Task のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Task {}

impl IdMarker for Task {
    fn prefix() -> &'static str {
        "task-"
    }
}

/// Identifier of a Subject.
pub type SubjectId = Id<Subject>;

/// Identifier of a Task.
pub type TaskId = Id<Task>;
