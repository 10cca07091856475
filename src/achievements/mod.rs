//! Achievement catalog, per-player progress and notification queue.
//!
//! The catalog is static data; everything per player lives in
//! [`store::ProgressStore`] and is persisted through [`crate::sync`].

pub mod catalog;
pub mod data;
pub mod metrics;
pub mod notifications;
pub mod store;
pub mod types;
pub mod view;

pub use catalog::{get_achievement_def, get_achievements_by_category, Catalog};
pub use metrics::EvalMode;
pub use notifications::{NotificationItem, NotificationQueue};
pub use store::ProgressStore;
pub use types::{
    AchievementCategory, AchievementDef, PlayerProgress, PlayerSnapshot, ProgressEntry, Rarity,
    Requirement, RequirementKind, Tier, UnlockedRecord,
};
pub use view::AchievementView;
