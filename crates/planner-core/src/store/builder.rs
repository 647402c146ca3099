//! StoreBuilder - ストアの構築とワイヤリング
//!
//! # Fail-fast 設計
//! - build() 時に設定を検証し、不正なら BuildError を返す
//! - シードは初期スナップショットとして読み込む（遷移は発生しない）

use super::{AppState, Store};
use crate::config::PlannerConfig;
use crate::ports::{IdGenerator, SystemClock, UlidGenerator};
use crate::seed::SeedData;

/// StoreBuilder はストアを構築
///
/// # 使用例
/// ```ignore
/// let store = Store::builder()
///     .config(PlannerConfig::from_env()?)
///     .seed(SeedData::demo())
///     .build()?;
/// ```
pub struct StoreBuilder {
    config: PlannerConfig,
    seed: Option<SeedData>,
    id_gen: Option<Box<dyn IdGenerator>>,
}

/// BuildError はストア構築時のエラー
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("upcoming_limit must be at least 1")]
    ZeroUpcomingLimit,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
            seed: None,
            id_gen: None,
        }
    }

    pub fn config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Initial subjects and tasks.
    pub fn seed(mut self, seed: SeedData) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed with the demo data when the config asks for it.
    pub fn seed_demo_if_configured(self) -> Self {
        if self.config.seed_demo_data {
            self.seed(SeedData::demo())
        } else {
            self
        }
    }

    /// Replace the default ULID generator on the system clock.
    pub fn id_generator(mut self, id_gen: impl IdGenerator + 'static) -> Self {
        self.id_gen = Some(Box::new(id_gen));
        self
    }

    pub fn build(self) -> Result<Store, BuildError> {
        if self.config.upcoming_limit == 0 {
            return Err(BuildError::ZeroUpcomingLimit);
        }
        let state = match self.seed {
            Some(seed) => AppState::new(seed.subjects, seed.tasks),
            None => AppState::default(),
        };
        let id_gen = self
            .id_gen
            .unwrap_or_else(|| Box::new(UlidGenerator::new(SystemClock)));
        Ok(Store::with_parts(state, id_gen, self.config))
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
