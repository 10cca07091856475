//! Achievement evaluation engine.
//!
//! Gameplay reports pre-classified numeric signals; the engine turns them into
//! progress updates and unlocks, resolves meta-achievements, queues
//! notifications and hands unlocks to the sync reconciler.
//!
//! All state changes for a call are applied before any I/O for that call is
//! started. Unlocks and progress collect in an outbox that is flushed (cache
//! write, then push dispatch) at the end of each public operation, so a
//! second evaluation issued right after the first always sees its unlocks.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

use crate::achievements::catalog::Catalog;
use crate::achievements::metrics::{
    default_mode, is_meta_metric, meets_target, percentage, EvalMode,
    ACHIEVEMENTS_UNLOCKED, GOLD_EVERY_CATEGORY, TOTAL_POINTS,
};
use crate::achievements::notifications::{NotificationItem, NotificationQueue};
use crate::achievements::store::ProgressStore;
use crate::achievements::types::{
    AchievementCategory, AchievementDef, PlayerProgress, ProgressEntry,
};
use crate::achievements::view::{self, AchievementView};
use crate::config::{EngineConfig, SyncDispatch};
use crate::error::SyncError;
use crate::sync::cache::{LocalCache, PendingSyncItem};
use crate::sync::reconciler::{merge_remote, PushOutcome, ReplayReport, SyncReconciler};
use crate::sync::remote::{HttpRemoteStore, OfflineRemote, RemoteStore};

/// Result of a load-and-merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Remote state merged in.
    Merged {
        remote_added: usize,
        /// Local-only unlocks put back on the pending queue.
        requeued: usize,
    },
    /// The remote fetch failed; only the local cache is in effect and the
    /// player stays "not loaded".
    LocalFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub load: LoadOutcome,
    pub replay: ReplayReport,
}

pub struct AchievementEngine {
    catalog: Catalog,
    store: ProgressStore,
    notifications: NotificationQueue,
    reconciler: SyncReconciler,
    dispatch: SyncDispatch,
    /// Set while the meta resolver runs; nested calls are dropped.
    resolving_meta: bool,
    outbox: Vec<PendingSyncItem>,
    dirty: BTreeSet<String>,
    in_flight: Vec<JoinHandle<PushOutcome>>,
}

impl AchievementEngine {
    pub fn new(catalog: Catalog, reconciler: SyncReconciler, dispatch: SyncDispatch) -> Self {
        Self {
            catalog,
            store: ProgressStore::new(),
            notifications: NotificationQueue::new(),
            reconciler,
            dispatch,
            resolving_meta: false,
            outbox: Vec::new(),
            dirty: BTreeSet::new(),
            in_flight: Vec::new(),
        }
    }

    /// Engine over the built-in catalog, wired to the configured cache and remote.
    pub fn from_config(config: &EngineConfig) -> Self {
        let cache = Arc::new(LocalCache::for_tenant(&config.data_dir(), &config.tenant));
        let remote: Arc<dyn RemoteStore> = match &config.remote.base_url {
            Some(url) => Arc::new(HttpRemoteStore::new(url, &config.tenant, &config.remote)),
            None => {
                tracing::info!("No remote store configured, unlocks will be queued locally");
                Arc::new(OfflineRemote)
            }
        };
        let reconciler = SyncReconciler::new(remote, cache, config.sync.retry_backoff());
        Self::new(Catalog::builtin(), reconciler, config.sync.dispatch)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn reconciler(&self) -> &SyncReconciler {
        &self.reconciler
    }

    // =========================================================================
    // Evaluation
    // =========================================================================

    /// Report a metric value. `mode` defaults per metric (see
    /// [`default_mode`]). Streak achievements are not considered here.
    pub fn evaluate(
        &mut self,
        player_id: &str,
        metric: &str,
        value: f64,
        game_id: Option<&str>,
        mode: Option<EvalMode>,
    ) {
        self.evaluate_metric(player_id, metric, value, game_id, mode);
        self.flush();
    }

    /// Report the current length of a caller-tracked streak (0 after a break).
    pub fn evaluate_streak(
        &mut self,
        player_id: &str,
        metric: &str,
        current_streak: u32,
        game_id: Option<&str>,
    ) {
        self.hydrate(player_id);
        let targets: Vec<AchievementDef> = self.catalog.streak_targets(metric).cloned().collect();
        let length = f64::from(current_streak);

        for def in targets {
            if self.store.is_unlocked(player_id, def.id) {
                continue;
            }
            if length >= def.requirement.target {
                self.unlock_achievement(player_id, def.id, game_id);
            } else {
                self.record_progress(player_id, &def, length);
            }
        }
        self.flush();
    }

    /// Unlock an achievement directly, e.g. a calendar event. Unknown ids are
    /// logged and ignored. Returns true if newly unlocked.
    pub fn unlock(&mut self, player_id: &str, achievement_id: &str, game_id: Option<&str>) -> bool {
        let unlocked = self.unlock_achievement(player_id, achievement_id, game_id);
        self.flush();
        unlocked
    }

    /// Evaluate meta-achievements against the current state. Runs
    /// automatically after every unlock.
    pub fn resolve_meta(&mut self, player_id: &str) {
        self.resolve_meta_achievements(player_id);
        self.flush();
    }

    fn evaluate_metric(
        &mut self,
        player_id: &str,
        metric: &str,
        value: f64,
        game_id: Option<&str>,
        mode: Option<EvalMode>,
    ) {
        if is_meta_metric(metric) {
            tracing::warn!(player = %player_id, metric, "Meta metrics cannot be reported directly");
            return;
        }
        if !value.is_finite() {
            tracing::warn!(player = %player_id, metric, value, "Ignoring non-finite metric value");
            return;
        }

        let mode = mode.unwrap_or_else(|| default_mode(metric));
        self.hydrate(player_id);
        let targets: Vec<AchievementDef> = self.catalog.metric_targets(metric).cloned().collect();
        if targets.is_empty() {
            tracing::debug!(metric, "No achievement watches this metric");
            return;
        }

        for def in targets {
            if self.store.is_unlocked(player_id, def.id) {
                continue;
            }
            let previous = self
                .store
                .get(player_id)
                .and_then(|p| p.get_progress(def.id))
                .map(|p| p.current);
            let effective = match mode {
                EvalMode::Increment => previous.unwrap_or(0.0) + value,
                EvalMode::Absolute => value,
            };

            tracing::debug!(
                player = %player_id,
                achievement = def.id,
                metric,
                effective,
                target = def.requirement.target,
                ?mode,
                "Evaluating"
            );

            if meets_target(metric, effective, def.requirement.target) {
                self.unlock_achievement(player_id, def.id, game_id);
            } else {
                self.record_progress(player_id, &def, effective);
            }
        }
    }

    fn record_progress(&mut self, player_id: &str, def: &AchievementDef, current: f64) {
        let metric = def.requirement.metric;
        let target = def.requirement.target;
        self.store.player_mut(player_id).update_progress(
            def.id,
            ProgressEntry {
                current,
                target,
                percentage: percentage(metric, current, target),
            },
        );
        self.dirty.insert(player_id.to_string());
    }

    /// Apply an unlock to the store and schedule its side effects.
    fn unlock_achievement(&mut self, player_id: &str, achievement_id: &str, game_id: Option<&str>) -> bool {
        let Some(def) = self.catalog.get(achievement_id).cloned() else {
            tracing::warn!(
                player = %player_id,
                achievement = %achievement_id,
                "Ignoring unlock for unknown achievement"
            );
            return false;
        };

        self.hydrate(player_id);
        let catalog = &self.catalog;
        let progress = self.store.player_mut(player_id);
        if progress.unlock(player_id, def.id, game_id, catalog).is_none() {
            return false;
        }
        let unlocked_count = progress.unlocked_count();
        let total_points = progress.total_points();

        tracing::info!(
            player = %player_id,
            achievement = def.id,
            tier = def.tier.name(),
            points = def.points,
            total_points,
            "Achievement unlocked"
        );

        self.notifications.enqueue(
            NotificationItem::new(def.clone(), player_id, unlocked_count, self.catalog.len()),
            Instant::now(),
        );
        self.outbox
            .push(PendingSyncItem::new(player_id, def.id, game_id));
        self.dirty.insert(player_id.to_string());

        self.resolve_meta_achievements(player_id);
        true
    }

    fn resolve_meta_achievements(&mut self, player_id: &str) {
        if self.resolving_meta {
            tracing::debug!(player = %player_id, "Meta resolution already running");
            return;
        }
        self.resolving_meta = true;

        let meta: Vec<AchievementDef> = self.catalog.meta().cloned().collect();
        loop {
            let mut unlocked_any = false;
            for def in &meta {
                if self.store.is_unlocked(player_id, def.id) {
                    continue;
                }
                let (current, target) = self.measure_meta(player_id, def);
                if current >= target {
                    unlocked_any |= self.unlock_achievement(player_id, def.id, None);
                } else if self.store.contains(player_id) {
                    self.store.player_mut(player_id).update_progress(
                        def.id,
                        ProgressEntry {
                            current,
                            target,
                            percentage: percentage(def.requirement.metric, current, target),
                        },
                    );
                    self.dirty.insert(player_id.to_string());
                }
            }
            // Unlocks above can make earlier entries eligible; go round again.
            if !unlocked_any {
                break;
            }
        }

        self.resolving_meta = false;
    }

    /// Current value and target for a meta requirement, read from the live store.
    fn measure_meta(&self, player_id: &str, def: &AchievementDef) -> (f64, f64) {
        let Some(progress) = self.store.get(player_id) else {
            return (0.0, def.requirement.target);
        };
        match def.requirement.metric {
            TOTAL_POINTS => (f64::from(progress.total_points()), def.requirement.target),
            ACHIEVEMENTS_UNLOCKED => (progress.unlocked_count() as f64, def.requirement.target),
            GOLD_EVERY_CATEGORY => {
                let categories = self.catalog.gameplay_categories();
                let covered = categories
                    .iter()
                    .filter(|&&category| self.has_gold_in(progress, category))
                    .count();
                // An empty catalog must not count as full coverage.
                (covered as f64, categories.len().max(1) as f64)
            }
            other => {
                tracing::warn!(achievement = def.id, metric = other, "Unknown meta metric");
                (0.0, f64::INFINITY)
            }
        }
    }

    fn has_gold_in(&self, progress: &PlayerProgress, category: AchievementCategory) -> bool {
        progress.unlocked().iter().any(|r| {
            self.catalog
                .get(&r.achievement_id)
                .is_some_and(|d| d.category == category && d.tier.is_gold_or_above())
        })
    }

    // =========================================================================
    // Session and sync
    // =========================================================================

    /// Make sure the player exists in memory, hydrated from the local cache.
    pub fn hydrate(&mut self, player_id: &str) {
        if self.store.contains(player_id) {
            return;
        }
        let snapshot = self.reconciler.cache().load_player(player_id);
        let progress = PlayerProgress::from_snapshot(snapshot, &self.catalog);
        tracing::debug!(
            player = %player_id,
            unlocked = progress.unlocked_count(),
            "Hydrated player from local cache"
        );
        self.store.insert(player_id, progress);
    }

    /// Fetch remote state and merge it with local state. Local-only unlocks
    /// are put back on the pending queue. On failure the local cache stays in
    /// effect and the player remains "not loaded".
    pub fn load_player(&mut self, player_id: &str) -> LoadOutcome {
        self.hydrate(player_id);

        let outcome = match self.reconciler.fetch(player_id) {
            Ok(remote) => {
                let local = self.store.get(player_id).cloned().unwrap_or_default();
                let merged = merge_remote(player_id, &local, &remote, &self.catalog);
                for record in &merged.local_only {
                    self.reconciler.enqueue(&PendingSyncItem::new(
                        player_id,
                        &record.achievement_id,
                        record.game_id.as_deref(),
                    ));
                }
                let outcome = LoadOutcome::Merged {
                    remote_added: merged.remote_added,
                    requeued: merged.local_only.len(),
                };
                tracing::info!(
                    player = %player_id,
                    remote_added = merged.remote_added,
                    requeued = merged.local_only.len(),
                    total_points = merged.progress.total_points(),
                    "Merged remote achievements"
                );
                self.store.insert(player_id, merged.progress);
                self.store.set_loaded(player_id, true);
                self.dirty.insert(player_id.to_string());
                outcome
            }
            Err(e) => {
                tracing::warn!(
                    player = %player_id,
                    error = %e,
                    "Remote load failed, using local cache"
                );
                self.store.set_loaded(player_id, false);
                LoadOutcome::LocalFallback
            }
        };

        self.flush();
        outcome
    }

    /// Load unless already loaded. Returns `None` when nothing was fetched.
    pub fn ensure_loaded(&mut self, player_id: &str) -> Option<LoadOutcome> {
        if self.store.is_loaded(player_id) {
            return None;
        }
        Some(self.load_player(player_id))
    }

    /// Session start: load-and-merge, then replay the pending queue.
    pub fn start_session(&mut self, player_id: &str) -> SessionReport {
        let load = self.load_player(player_id);
        let replay = self.reconciler.replay_pending(player_id);
        SessionReport { load, replay }
    }

    pub fn is_loaded(&self, player_id: &str) -> bool {
        self.store.is_loaded(player_id)
    }

    /// Send the batched progress update for a player.
    pub fn push_progress(&self, player_id: &str) -> Result<usize, SyncError> {
        match self.store.get(player_id) {
            Some(progress) => self.reconciler.push_progress(player_id, progress),
            None => Ok(0),
        }
    }

    /// Drop a player's in-memory state. The durable cache and pending queue
    /// are kept; the next load re-fetches from the remote store.
    pub fn reset_player(&mut self, player_id: &str) {
        self.store.reset_player(player_id);
        self.dirty.remove(player_id);
        tracing::info!(player = %player_id, "Player achievement state reset");
    }

    /// Block until every background push has finished. Returns how many were joined.
    pub fn wait_for_sync(&mut self) -> usize {
        let handles = std::mem::take(&mut self.in_flight);
        let count = handles.len();
        for handle in handles {
            if handle.join().is_err() {
                tracing::error!("Background sync thread panicked");
            }
        }
        count
    }

    /// Persist dirty players, then dispatch queued pushes.
    fn flush(&mut self) {
        for player_id in std::mem::take(&mut self.dirty) {
            let Some(progress) = self.store.get(&player_id) else {
                continue;
            };
            if let Err(e) = self
                .reconciler
                .cache()
                .save_player(&player_id, &progress.to_snapshot())
            {
                tracing::warn!(player = %player_id, error = %e, "Failed to write local cache");
            }
        }

        for item in std::mem::take(&mut self.outbox) {
            match self.dispatch {
                SyncDispatch::Inline => {
                    self.reconciler.push_and_replay(&item);
                }
                SyncDispatch::Background => {
                    self.in_flight.retain(|h| !h.is_finished());
                    let reconciler = self.reconciler.clone();
                    self.in_flight
                        .push(std::thread::spawn(move || reconciler.push_and_replay(&item)));
                }
            }
        }
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    pub fn progress(&self, player_id: &str) -> Option<&PlayerProgress> {
        self.store.get(player_id)
    }

    pub fn is_unlocked(&self, player_id: &str, achievement_id: &str) -> bool {
        self.store.is_unlocked(player_id, achievement_id)
    }

    pub fn total_points(&self, player_id: &str) -> u32 {
        self.store.get(player_id).map_or(0, |p| p.total_points())
    }

    pub fn achievement_views(&self, player_id: &str) -> Vec<AchievementView> {
        view::achievement_views(&self.catalog, self.store.get(player_id))
    }

    pub fn unlocked_views(&self, player_id: &str) -> Vec<AchievementView> {
        view::unlocked_views(&self.catalog, self.store.get(player_id))
    }

    pub fn locked_views(&self, player_id: &str) -> Vec<AchievementView> {
        view::locked_views(&self.catalog, self.store.get(player_id))
    }

    pub fn category_summary(&self, player_id: &str) -> Vec<(AchievementCategory, usize, usize)> {
        view::category_summary(&self.catalog, self.store.get(player_id))
    }

    pub fn unlock_percentage(&self, player_id: &str) -> f32 {
        view::unlock_percentage(&self.catalog, self.store.get(player_id))
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn dismiss_notification(&mut self, index: Option<usize>) -> Option<NotificationItem> {
        self.notifications.dismiss(index, Instant::now())
    }

    pub fn dismiss_all_notifications(&mut self) {
        self.notifications.dismiss_all();
    }

    pub fn tick_notifications(&mut self, now: Instant) {
        self.notifications.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::metrics::{DARTS_TO_FINISH, MATCH_AVERAGE, SCORES_180, WINS};
    use crate::sync::cache::test_support::temp_dir;
    use std::time::Duration;

    fn engine(label: &str) -> AchievementEngine {
        let cache = Arc::new(LocalCache::new(temp_dir(label)));
        let reconciler = SyncReconciler::new(Arc::new(OfflineRemote), cache, Duration::ZERO);
        AchievementEngine::new(Catalog::builtin(), reconciler, SyncDispatch::Inline)
    }

    #[test]
    fn test_first_180_unlocks_and_notifies() {
        let mut engine = engine("engine-first-180");

        engine.evaluate("p1", SCORES_180, 1.0, Some("g1"), None);

        assert!(engine.is_unlocked("p1", "first_180"));
        let record = engine.progress("p1").unwrap().get_unlocked("first_180").unwrap();
        assert_eq!(record.game_id.as_deref(), Some("g1"));
        let current = engine.notifications().current().unwrap();
        assert_eq!(current.achievement.id, "first_180");
        assert_eq!(current.unlocked_count, 1);
    }

    #[test]
    fn test_increment_progress_accumulates() {
        let mut engine = engine("engine-increment");

        for _ in 0..4 {
            engine.evaluate("p1", SCORES_180, 1.0, None, None);
        }

        let entry = engine.progress("p1").unwrap().get_progress("ton_eighty_10").unwrap();
        assert_eq!(entry.current, 4.0);
        assert_eq!(entry.percentage, 40.0);
    }

    #[test]
    fn test_absolute_progress_tracks_latest_reading() {
        let mut engine = engine("engine-absolute");

        engine.evaluate("p1", MATCH_AVERAGE, 35.0, None, None);
        engine.evaluate("p1", MATCH_AVERAGE, 20.0, None, None);

        let entry = engine.progress("p1").unwrap().get_progress("average_40").unwrap();
        assert_eq!(entry.current, 20.0);
        assert_eq!(entry.percentage, 50.0);
    }

    #[test]
    fn test_lower_is_better_progress_tracks_latest_reading() {
        let mut engine = engine("engine-absolute-lower");

        engine.evaluate("p1", DARTS_TO_FINISH, 20.0, None, None);
        engine.evaluate("p1", DARTS_TO_FINISH, 24.0, None, None);

        let entry = engine.progress("p1").unwrap().get_progress("twelve_darter").unwrap();
        assert_eq!(entry.current, 24.0);
        assert_eq!(entry.percentage, 50.0);
    }

    #[test]
    fn test_lower_is_better_progress_direction() {
        let mut engine = engine("engine-lower");

        engine.evaluate("p1", DARTS_TO_FINISH, 24.0, None, None);
        let entry = *engine
            .progress("p1")
            .unwrap()
            .get_progress("twelve_darter")
            .unwrap();
        assert_eq!(entry.percentage, 50.0);

        engine.evaluate("p1", DARTS_TO_FINISH, 15.0, None, None);
        assert!(engine.is_unlocked("p1", "fifteen_darter"));
        assert!(engine.is_unlocked("p1", "eighteen_darter"));
        assert!(!engine.is_unlocked("p1", "twelve_darter"));
    }

    #[test]
    fn test_streak_metrics_ignored_by_metric_evaluator() {
        let mut engine = engine("engine-streak-split");

        engine.evaluate("p1", WINS, 10.0, None, None);
        assert!(!engine.is_unlocked("p1", "win_streak_3"));

        engine.evaluate_streak("p1", WINS, 5, None);
        assert!(engine.is_unlocked("p1", "win_streak_3"));
        assert!(engine.is_unlocked("p1", "win_streak_5"));
        assert!(!engine.is_unlocked("p1", "win_streak_10"));
    }

    #[test]
    fn test_unknown_achievement_is_ignored() {
        let mut engine = engine("engine-unknown");
        assert!(!engine.unlock("p1", "not_a_real_achievement", None));
        assert_eq!(engine.total_points("p1"), 0);
        assert!(engine.notifications().is_empty());
    }

    #[test]
    fn test_meta_metrics_cannot_be_reported() {
        let mut engine = engine("engine-meta-metric");
        engine.evaluate("p1", TOTAL_POINTS, 10_000.0, None, None);
        assert!(!engine.is_unlocked("p1", "points_100"));
    }

    const TEN_EASY: [&str; 10] = [
        "first_180",
        "first_checkout",
        "first_game",
        "first_win",
        "first_training",
        "bullseye_1",
        "three_triples",
        "new_year",
        "night_owl",
        "early_bird",
    ];

    #[test]
    fn test_meta_resolution_skipped_while_guard_held() {
        let mut engine = engine("engine-guard");
        engine.resolving_meta = true;
        for id in TEN_EASY {
            assert!(engine.unlock("p1", id, None));
        }
        assert!(!engine.is_unlocked("p1", "unlocked_10"));

        engine.resolving_meta = false;
        engine.resolve_meta("p1");
        assert!(engine.is_unlocked("p1", "unlocked_10"));
        assert!(!engine.resolving_meta);
    }

    #[test]
    fn test_meta_unlocks_once_per_achievement() {
        let mut engine = engine("engine-meta-once");
        for id in TEN_EASY {
            engine.unlock("p1", id, None);
        }

        let progress = engine.progress("p1").unwrap();
        assert!(progress.is_unlocked("unlocked_10"));
        let ids: Vec<&str> = progress
            .unlocked()
            .iter()
            .map(|r| r.achievement_id.as_str())
            .collect();
        assert_eq!(ids.iter().filter(|&&id| id == "unlocked_10").count(), 1);

        let notified = engine
            .notifications()
            .current()
            .into_iter()
            .chain(engine.notifications().queued())
            .filter(|n| n.achievement.id == "unlocked_10")
            .count();
        assert_eq!(notified, 1);
    }

    #[test]
    fn test_reset_invalidates_loaded_flag() {
        let mut engine = engine("engine-reset");
        engine.evaluate("p1", SCORES_180, 1.0, None, None);

        engine.reset_player("p1");
        assert!(engine.progress("p1").is_none());
        assert!(!engine.is_loaded("p1"));

        // The durable cache survives a reset
        engine.evaluate("p1", SCORES_180, 0.0, None, None);
        assert!(engine.is_unlocked("p1", "first_180"));
    }

    #[test]
    fn test_unlocks_are_written_to_local_cache() {
        let mut engine = engine("engine-cache-write");
        engine.evaluate("p1", SCORES_180, 1.0, None, None);

        let snapshot = engine.reconciler().cache().load_player("p1");
        assert!(snapshot
            .unlocked
            .iter()
            .any(|r| r.achievement_id == "first_180"));
        // Offline remote: the unlock waits in the pending queue
        assert!(engine
            .reconciler()
            .cache()
            .pending("p1")
            .iter()
            .any(|i| i.achievement_id == "first_180"));
    }
}
