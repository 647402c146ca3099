//! IdGenerator port - ID 生成の抽象化
//!
//! 書き込み元は UI スレッドひとつだけなので、時刻ベースの ID で十分です。
//! ULID は先頭が timestamp なので生成順にソートでき、
//! 同じミリ秒内でもランダム部で衝突しません。
//!
//! # 実装
//! - **UlidGenerator**: `subj-{ULID}` / `task-{ULID}` を生成

use crate::domain::ids::{Id, IdMarker};
use crate::domain::{SubjectId, TaskId};
use crate::ports::Clock;
use ulid::Ulid;

/// IdGenerator は新規エンティティの ID を生成
pub trait IdGenerator: Send + Sync {
    /// Subject ID を生成
    fn generate_subject_id(&self) -> SubjectId;

    /// Task ID を生成
    fn generate_task_id(&self) -> TaskId;
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// Clock を使って現在時刻ベースの ULID を生成します。
/// FixedClock を使えば timestamp 部分が決定的になります。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    fn generate<T: IdMarker>(&self) -> Id<T> {
        let timestamp_ms = self.clock.now().timestamp_millis().max(0) as u64;
        Id::from_ulid(Ulid::from_parts(timestamp_ms, rand::random()))
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_subject_id(&self) -> SubjectId {
        self.generate()
    }

    fn generate_task_id(&self) -> TaskId {
        self.generate()
    }
}
