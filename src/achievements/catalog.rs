//! Validated, indexed view over achievement definitions.

use std::collections::{BTreeSet, HashMap};

use super::data::ALL_ACHIEVEMENTS;
use super::metrics::is_meta_metric;
use super::types::{AchievementCategory, AchievementDef, RequirementKind};
use crate::error::CatalogError;

/// Immutable achievement catalog with lookup indexes.
#[derive(Debug, Clone)]
pub struct Catalog {
    defs: Vec<AchievementDef>,
    by_id: HashMap<&'static str, usize>,
    by_metric: HashMap<&'static str, Vec<usize>>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and non-positive targets or points.
    pub fn new(defs: Vec<AchievementDef>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for def in &defs {
            if !seen.insert(def.id) {
                return Err(CatalogError::DuplicateId(def.id.to_string()));
            }
            if !(def.requirement.target > 0.0) {
                return Err(CatalogError::InvalidTarget {
                    id: def.id.to_string(),
                    target: def.requirement.target,
                });
            }
            if def.points == 0 {
                return Err(CatalogError::InvalidPoints(def.id.to_string()));
            }
        }
        Ok(Self::index(defs))
    }

    /// The built-in darts catalog. Its validity is asserted by the data tests.
    pub fn builtin() -> Self {
        Self::index(ALL_ACHIEVEMENTS.to_vec())
    }

    fn index(defs: Vec<AchievementDef>) -> Self {
        let mut by_id = HashMap::with_capacity(defs.len());
        let mut by_metric: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (idx, def) in defs.iter().enumerate() {
            by_id.entry(def.id).or_insert(idx);
            by_metric
                .entry(def.requirement.metric)
                .or_default()
                .push(idx);
        }
        Self {
            defs,
            by_id,
            by_metric,
        }
    }

    pub fn get(&self, id: &str) -> Option<&AchievementDef> {
        self.by_id.get(id).map(|&idx| &self.defs[idx])
    }

    pub fn all(&self) -> &[AchievementDef] {
        &self.defs
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Definitions watching `metric`, in catalog order.
    pub fn watching<'a>(&'a self, metric: &str) -> impl Iterator<Item = &'a AchievementDef> + 'a {
        self.by_metric
            .get(metric)
            .map(|v| v.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&idx| &self.defs[idx])
    }

    /// Non-streak definitions watching `metric`.
    pub fn metric_targets<'a>(
        &'a self,
        metric: &str,
    ) -> impl Iterator<Item = &'a AchievementDef> + 'a {
        self.watching(metric)
            .filter(|d| d.requirement.kind != RequirementKind::Streak)
    }

    /// Streak definitions watching `metric`.
    pub fn streak_targets<'a>(
        &'a self,
        metric: &str,
    ) -> impl Iterator<Item = &'a AchievementDef> + 'a {
        self.watching(metric)
            .filter(|d| d.requirement.kind == RequirementKind::Streak)
    }

    pub fn by_category(
        &self,
        category: AchievementCategory,
    ) -> impl Iterator<Item = &AchievementDef> + '_ {
        self.defs.iter().filter(move |d| d.category == category)
    }

    /// Definitions resolved by the meta-achievement resolver.
    pub fn meta(&self) -> impl Iterator<Item = &AchievementDef> + '_ {
        self.defs
            .iter()
            .filter(|d| is_meta_metric(d.requirement.metric))
    }

    /// Categories that contain at least one non-meta achievement.
    pub fn gameplay_categories(&self) -> BTreeSet<AchievementCategory> {
        self.defs
            .iter()
            .filter(|d| !d.category.is_meta())
            .map(|d| d.category)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Look up a built-in definition by id.
pub fn get_achievement_def(id: &str) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Built-in definitions for one category.
pub fn get_achievements_by_category(category: AchievementCategory) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::metrics::{SCORES_180, TOTAL_POINTS, WINS};
    use crate::achievements::types::{Requirement, Tier};

    fn def(id: &'static str, target: f64, points: u32) -> AchievementDef {
        AchievementDef {
            id,
            name: "Test",
            description: "Test",
            icon: "*",
            category: AchievementCategory::Scoring,
            tier: Tier::Bronze,
            points,
            requirement: Requirement {
                kind: RequirementKind::Count,
                target,
                metric: SCORES_180,
            },
            hidden: false,
            rarity: None,
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::new(ALL_ACHIEVEMENTS.to_vec()).unwrap();
        assert_eq!(catalog.len(), ALL_ACHIEVEMENTS.len());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Catalog::new(vec![def("a", 1.0, 10), def("a", 2.0, 10)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_rejects_non_positive_target_and_points() {
        assert!(matches!(
            Catalog::new(vec![def("a", 0.0, 10)]),
            Err(CatalogError::InvalidTarget { .. })
        ));
        assert!(matches!(
            Catalog::new(vec![def("a", 1.0, 0)]),
            Err(CatalogError::InvalidPoints(_))
        ));
    }

    #[test]
    fn test_metric_index() {
        let catalog = Catalog::builtin();
        let ids: Vec<_> = catalog.metric_targets(SCORES_180).map(|d| d.id).collect();
        assert!(ids.contains(&"first_180"));
        assert!(ids.contains(&"ton_eighty_10"));

        assert_eq!(catalog.metric_targets(WINS).count(), 0);
        assert!(catalog.streak_targets(WINS).count() >= 3);
        assert_eq!(catalog.watching("unknown_metric").count(), 0);
    }

    #[test]
    fn test_meta_subset() {
        let catalog = Catalog::builtin();
        assert!(catalog
            .meta()
            .any(|d| d.requirement.metric == TOTAL_POINTS));
        assert!(catalog.meta().all(|d| d.category.is_meta()));
        assert!(!catalog
            .gameplay_categories()
            .contains(&AchievementCategory::Milestones));
    }

    #[test]
    fn test_get_achievement_def() {
        let def = get_achievement_def("first_180").unwrap();
        assert_eq!(def.name, "Maximum!");
        assert_eq!(def.category, AchievementCategory::Scoring);
        assert!(get_achievement_def("missing").is_none());
    }

    #[test]
    fn test_get_achievements_by_category() {
        let checkout = get_achievements_by_category(AchievementCategory::Checkout);
        assert!(!checkout.is_empty());
        for a in checkout {
            assert_eq!(a.category, AchievementCategory::Checkout);
        }
    }
}
