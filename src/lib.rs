//! Oche - achievement engine for darts scoring apps.
//!
//! Gameplay code reports metrics to an [`AchievementEngine`]; unlocks are
//! committed locally first and synchronized to a remote store afterwards.

pub mod achievements;
pub mod build_info;
pub mod config;
pub mod engine;
pub mod error;
pub mod sync;

pub use achievements::{AchievementCategory, AchievementDef, Catalog, EvalMode, Tier};
pub use config::{EngineConfig, SyncDispatch};
pub use engine::{AchievementEngine, LoadOutcome, SessionReport};
pub use error::{CacheError, CatalogError, ConfigError, SyncError};
