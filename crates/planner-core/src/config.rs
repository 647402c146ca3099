//! Config - 実行時設定
//!
//! 既定値は `Default`、上書きは環境変数から読みます。
//! - `PLANNER_UPCOMING_LIMIT`: ダッシュボードの「近日のタスク」件数（既定 3）
//! - `PLANNER_SEED_DEMO`: デモ用の科目・タスクを読み込むか（既定 true）

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const UPCOMING_LIMIT_VAR: &str = "PLANNER_UPCOMING_LIMIT";
pub const SEED_DEMO_VAR: &str = "PLANNER_SEED_DEMO";

const DEFAULT_UPCOMING_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerConfig {
    /// How many tasks the dashboard "upcoming" list shows.
    pub upcoming_limit: usize,

    /// Seed the store with the demo subjects and tasks at startup.
    pub seed_demo_data: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            seed_demo_data: true,
        }
    }
}

impl PlannerConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(UPCOMING_LIMIT_VAR) {
            config.upcoming_limit = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: UPCOMING_LIMIT_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(SEED_DEMO_VAR) {
            config.seed_demo_data = parse_bool(&value).ok_or(ConfigError::InvalidValue {
                key: SEED_DEMO_VAR,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
