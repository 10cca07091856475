//! Read-only views for the UI, with hidden achievements masked until unlocked.

use serde::Serialize;

use super::catalog::Catalog;
use super::types::{
    AchievementCategory, AchievementDef, PlayerProgress, ProgressEntry, Rarity, Tier,
};

pub const HIDDEN_NAME: &str = "???";
pub const HIDDEN_DESCRIPTION: &str = "Hidden achievement. Keep playing to discover it.";
pub const HIDDEN_ICON: &str = "❓";

/// One achievement as the UI should render it for a given player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementView {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    pub tier: Tier,
    pub points: u32,
    pub rarity: Option<Rarity>,
    pub unlocked: bool,
    pub unlocked_at: Option<i64>,
    pub progress: Option<ProgressEntry>,
    /// True when name, description and progress are withheld.
    pub masked: bool,
}

impl AchievementView {
    pub fn new(def: &AchievementDef, progress: Option<&PlayerProgress>) -> Self {
        let record = progress.and_then(|p| p.get_unlocked(def.id));
        let unlocked = record.is_some();
        let masked = def.hidden && !unlocked;

        if masked {
            return Self {
                id: def.id,
                name: HIDDEN_NAME,
                description: HIDDEN_DESCRIPTION,
                icon: HIDDEN_ICON,
                category: def.category,
                tier: def.tier,
                points: def.points,
                rarity: None,
                unlocked: false,
                unlocked_at: None,
                progress: None,
                masked: true,
            };
        }

        Self {
            id: def.id,
            name: def.name,
            description: def.description,
            icon: def.icon,
            category: def.category,
            tier: def.tier,
            points: def.points,
            rarity: def.rarity,
            unlocked,
            unlocked_at: record.map(|r| r.unlocked_at),
            progress: progress.and_then(|p| p.get_progress(def.id)).copied(),
            masked: false,
        }
    }
}

/// Every achievement in catalog order.
pub fn achievement_views(catalog: &Catalog, progress: Option<&PlayerProgress>) -> Vec<AchievementView> {
    catalog
        .all()
        .iter()
        .map(|def| AchievementView::new(def, progress))
        .collect()
}

pub fn unlocked_views(catalog: &Catalog, progress: Option<&PlayerProgress>) -> Vec<AchievementView> {
    achievement_views(catalog, progress)
        .into_iter()
        .filter(|v| v.unlocked)
        .collect()
}

pub fn locked_views(catalog: &Catalog, progress: Option<&PlayerProgress>) -> Vec<AchievementView> {
    achievement_views(catalog, progress)
        .into_iter()
        .filter(|v| !v.unlocked)
        .collect()
}

/// Unlocked/total per category, in display order. Empty categories are skipped.
pub fn category_summary(
    catalog: &Catalog,
    progress: Option<&PlayerProgress>,
) -> Vec<(AchievementCategory, usize, usize)> {
    AchievementCategory::ALL
        .iter()
        .filter_map(|&category| {
            let total = catalog.by_category(category).count();
            if total == 0 {
                return None;
            }
            let unlocked = catalog
                .by_category(category)
                .filter(|d| progress.is_some_and(|p| p.is_unlocked(d.id)))
                .count();
            Some((category, unlocked, total))
        })
        .collect()
}

/// Get unlock percentage (0.0 - 100.0).
pub fn unlock_percentage(catalog: &Catalog, progress: Option<&PlayerProgress>) -> f32 {
    let total = catalog.len();
    if total == 0 {
        return 0.0;
    }
    let unlocked = progress.map_or(0, |p| p.unlocked_count());
    (unlocked as f32 / total as f32) * 100.0
}
