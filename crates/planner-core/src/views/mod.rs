//! Views - 派生ビューの計算
//!
//! すべて純粋関数です。スナップショットを読むだけで、ストアを変更しません。
//! 結果はキャッシュせず、遷移のたびに作り直します。
//!
//! - **stats**: ステータス別の件数
//! - **tasks**: フィルタ → 期限日ソート →（upcoming のみ）切り詰め
//! - **subjects**: 科目の参照（存在しなければ None）と科目別タスク数
//! - **screens**: 各画面の表示用ビュー

pub mod screens;
pub mod stats;
pub mod subjects;
pub mod tasks;

pub use self::screens::{
    DashboardView, FilterChip, PreferenceOption, SettingsView, SubjectsView, TaskCard, TasksView,
    filter_chips,
};
pub use self::stats::{TaskStats, task_stats};
pub use self::subjects::{SubjectSummary, subject_for_task, subject_summaries, task_count_for_subject};
pub use self::tasks::{filter_tasks, filtered_sorted_tasks, sort_by_due_date, upcoming_tasks};
