//! Achievement system types and data structures.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::catalog::Catalog;

/// Achievement categories for organization in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Scoring,
    Checkout,
    Matches,
    Training,
    Consistency,
    Calendar,
    /// Achievements about the achievement system itself (points, counts, coverage).
    Milestones,
}

impl AchievementCategory {
    /// All categories in display order.
    pub const ALL: [AchievementCategory; 7] = [
        AchievementCategory::Scoring,
        AchievementCategory::Checkout,
        AchievementCategory::Matches,
        AchievementCategory::Training,
        AchievementCategory::Consistency,
        AchievementCategory::Calendar,
        AchievementCategory::Milestones,
    ];

    /// Display name for the category.
    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Scoring => "Scoring",
            AchievementCategory::Checkout => "Checkout",
            AchievementCategory::Matches => "Matches",
            AchievementCategory::Training => "Training",
            AchievementCategory::Consistency => "Consistency",
            AchievementCategory::Calendar => "Calendar",
            AchievementCategory::Milestones => "Milestones",
        }
    }

    /// Whether this category holds meta-achievements.
    pub fn is_meta(&self) -> bool {
        matches!(self, AchievementCategory::Milestones)
    }
}

/// Achievement tier, ordered bronze to diamond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl Tier {
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Diamond => "Diamond",
        }
    }

    /// Gold, platinum and diamond count towards category mastery.
    pub fn is_gold_or_above(&self) -> bool {
        *self >= Tier::Gold
    }
}

/// How rare an achievement is among players. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// How a requirement accumulates towards its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    /// A counter such as number of 180s.
    Count,
    /// A measured value such as a match average.
    Value,
    /// A caller-tracked run of consecutive successes.
    Streak,
    /// One-off events and meta-achievements.
    Special,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Requirement {
    pub kind: RequirementKind,
    pub target: f64,
    pub metric: &'static str,
}

/// Static definition of an achievement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    pub tier: Tier,
    pub points: u32,
    pub requirement: Requirement,
    pub hidden: bool,
    pub rarity: Option<Rarity>,
}

/// Record of an unlocked achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockedRecord {
    pub player_id: String,
    pub achievement_id: String,
    /// Unix timestamp (seconds).
    pub unlocked_at: i64,
    #[serde(default)]
    pub game_id: Option<String>,
    /// Set once the remote store has reported this unlock back to us.
    #[serde(default)]
    pub confirmed: bool,
}

/// Partial progress on a locked achievement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ProgressEntry {
    pub current: f64,
    pub target: f64,
    /// Always within 0..=100.
    pub percentage: f64,
}

/// Durable form of a player's progress, as written to the local cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayerSnapshot {
    #[serde(default)]
    pub unlocked: Vec<UnlockedRecord>,
    #[serde(default)]
    pub progress: HashMap<String, ProgressEntry>,
}

/// Per-player achievement state.
///
/// Fields are private so that `total_points` can only change together with
/// `unlocked`: it always equals the sum of points over unlocked achievements.
#[derive(Debug, Clone, Default)]
pub struct PlayerProgress {
    unlocked: Vec<UnlockedRecord>,
    progress: HashMap<String, ProgressEntry>,
    total_points: u32,
    last_unlocked: Option<UnlockedRecord>,
}

impl PlayerProgress {
    /// Rebuild state from a snapshot, dropping records whose id is not in the
    /// catalog and duplicate records for the same achievement.
    pub fn from_snapshot(snapshot: PlayerSnapshot, catalog: &Catalog) -> Self {
        let mut progress = Self::default();
        for record in snapshot.unlocked {
            progress.insert_record(record, catalog);
        }
        for (id, entry) in snapshot.progress {
            if catalog.get(&id).is_some() && !progress.is_unlocked(&id) {
                progress.progress.insert(id, entry);
            }
        }
        progress
    }

    pub fn to_snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            unlocked: self.unlocked.clone(),
            progress: self.progress.clone(),
        }
    }

    /// Check if an achievement is unlocked.
    pub fn is_unlocked(&self, achievement_id: &str) -> bool {
        self.unlocked
            .iter()
            .any(|r| r.achievement_id == achievement_id)
    }

    /// Unlock an achievement. Returns the new record, or `None` if it was
    /// already unlocked or the id is unknown.
    pub fn unlock(
        &mut self,
        player_id: &str,
        achievement_id: &str,
        game_id: Option<&str>,
        catalog: &Catalog,
    ) -> Option<&UnlockedRecord> {
        let record = UnlockedRecord {
            player_id: player_id.to_string(),
            achievement_id: achievement_id.to_string(),
            unlocked_at: chrono::Utc::now().timestamp(),
            game_id: game_id.map(|s| s.to_string()),
            confirmed: false,
        };
        if !self.insert_record(record, catalog) {
            return None;
        }
        self.unlocked.last()
    }

    /// Insert a record, keeping points in step. Returns false for duplicates
    /// and unknown ids.
    pub(crate) fn insert_record(&mut self, record: UnlockedRecord, catalog: &Catalog) -> bool {
        let Some(def) = catalog.get(&record.achievement_id) else {
            tracing::warn!(
                player = %record.player_id,
                achievement = %record.achievement_id,
                "Ignoring unlock for unknown achievement"
            );
            return false;
        };
        if self.is_unlocked(&record.achievement_id) {
            return false;
        }
        self.progress.remove(&record.achievement_id);
        if self
            .last_unlocked
            .as_ref()
            .map_or(true, |last| record.unlocked_at >= last.unlocked_at)
        {
            self.last_unlocked = Some(record.clone());
        }
        self.unlocked.push(record);
        self.total_points += def.points;
        debug_assert_eq!(self.total_points, self.recompute_points(catalog));
        true
    }

    /// Mark an unlocked record as confirmed by the remote store, adopting the
    /// server timestamp.
    pub(crate) fn confirm(&mut self, achievement_id: &str, unlocked_at: i64) {
        if let Some(record) = self
            .unlocked
            .iter_mut()
            .find(|r| r.achievement_id == achievement_id)
        {
            record.unlocked_at = unlocked_at;
            record.confirmed = true;
        } else {
            return;
        }
        // The server timestamp can reorder unlocks.
        self.last_unlocked = self.unlocked.iter().max_by_key(|r| r.unlocked_at).cloned();
    }

    /// Update progress on a locked achievement. Ignored once unlocked.
    pub fn update_progress(&mut self, achievement_id: &str, entry: ProgressEntry) {
        if self.is_unlocked(achievement_id) {
            return;
        }
        self.progress.insert(achievement_id.to_string(), entry);
    }

    /// Get the progress for an achievement, if any.
    pub fn get_progress(&self, achievement_id: &str) -> Option<&ProgressEntry> {
        self.progress.get(achievement_id)
    }

    pub fn progress(&self) -> &HashMap<String, ProgressEntry> {
        &self.progress
    }

    pub fn unlocked(&self) -> &[UnlockedRecord] {
        &self.unlocked
    }

    pub fn get_unlocked(&self, achievement_id: &str) -> Option<&UnlockedRecord> {
        self.unlocked
            .iter()
            .find(|r| r.achievement_id == achievement_id)
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn last_unlocked(&self) -> Option<&UnlockedRecord> {
        self.last_unlocked.as_ref()
    }

    /// Get the number of unlocked achievements.
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    fn recompute_points(&self, catalog: &Catalog) -> u32 {
        self.unlocked
            .iter()
            .filter_map(|r| catalog.get(&r.achievement_id))
            .map(|d| d.points)
            .sum()
    }
}
