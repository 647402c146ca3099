//! Domain model (IDs, entities, status, filters, drafts, errors).
//!
//! 振る舞いを持たない共有語彙です。状態の変更は `store` が、
//! 派生ビューの計算は `views` が担当します。

pub mod draft;
pub mod due_date;
pub mod errors;
pub mod filter;
pub mod ids;
pub mod status;
pub mod subject;
pub mod task;

pub use draft::{NewSubject, NewTask};
pub use due_date::DueDate;
pub use errors::{ParseError, StoreError};
pub use filter::{StatusFilter, SubjectFilter};
pub use ids::{IdMarker, SubjectId, TaskId};
pub use status::TaskStatus;
pub use subject::Subject;
pub use task::Task;
