//! planner-core
//!
//! In-memory state store for the study planner: subjects, tasks and the
//! active filters, plus the pure views the screens render.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, status, due_date, subject, task, filter, draft, errors）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator）
//! - **store**: スライス（subjects / tasks / filters）、reducer、dispatch、購読
//! - **views**: 派生ビュー（stats, 絞り込み・ソート, 科目別件数, 画面ビュー）
//! - **config**: 実行時設定（環境変数）
//! - **session**: ログイン時の表示名
//! - **preferences**: 設定画面の選択（起動画面・タスク表示モード、保存しない）
//! - **seed**: デモデータと JSON シード

pub mod config;
pub mod domain;
pub mod ports;
pub mod preferences;
pub mod seed;
pub mod session;
pub mod store;
pub mod views;

pub use config::{ConfigError, PlannerConfig};
pub use preferences::{DefaultView, SettingsPreferences, TaskViewMode};
pub use session::Session;
pub use store::{Action, AppState, Dispatch, Store, StoreBuilder, Subscription, Transition};
