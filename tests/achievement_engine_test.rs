//! Integration test: achievement evaluation
//!
//! Drives the engine through its public API the way gameplay code does:
//! metric reports, streak reports, direct unlocks, meta resolution,
//! hidden-achievement masking and the notification queue.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use oche::achievements::metrics::{
    ACHIEVEMENTS_UNLOCKED, DARTS_TO_FINISH, GAME_TIME_MAX, GOLD_EVERY_CATEGORY, SCORES_180,
    TOTAL_POINTS, WINS,
};
use oche::achievements::notifications::TRANSITION_GAP;
use oche::achievements::{
    AchievementCategory, AchievementDef, Catalog, EvalMode, Requirement, RequirementKind, Tier,
};
use oche::sync::{LocalCache, OfflineRemote, SyncReconciler};
use oche::{AchievementEngine, SyncDispatch};

fn temp_dir(label: &str) -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "oche-engine-test-{}-{}-{}",
        label,
        std::process::id(),
        n
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn engine_with(catalog: Catalog, label: &str) -> AchievementEngine {
    let cache = Arc::new(LocalCache::new(temp_dir(label)));
    let reconciler = SyncReconciler::new(Arc::new(OfflineRemote), cache, Duration::ZERO);
    AchievementEngine::new(catalog, reconciler, SyncDispatch::Inline)
}

fn builtin_engine(label: &str) -> AchievementEngine {
    engine_with(Catalog::builtin(), label)
}

fn def(
    id: &'static str,
    category: AchievementCategory,
    tier: Tier,
    points: u32,
    kind: RequirementKind,
    metric: &'static str,
    target: f64,
) -> AchievementDef {
    AchievementDef {
        id,
        name: id,
        description: "test achievement",
        icon: "🎯",
        category,
        tier,
        points,
        requirement: Requirement {
            kind,
            target,
            metric,
        },
        hidden: false,
        rarity: None,
    }
}

fn notified_ids(engine: &AchievementEngine) -> Vec<&'static str> {
    let queue = engine.notifications();
    queue
        .current()
        .into_iter()
        .chain(queue.queued())
        .map(|n| n.achievement.id)
        .collect()
}

fn assert_points_consistent(engine: &AchievementEngine, player: &str) {
    let progress = engine.progress(player).expect("player present");
    let expected: u32 = progress
        .unlocked()
        .iter()
        .filter_map(|r| engine.catalog().get(&r.achievement_id))
        .map(|d| d.points)
        .sum();
    assert_eq!(progress.total_points(), expected);
}

// =============================================================================
// Unlock idempotence and points
// =============================================================================

#[test]
fn test_unlock_is_idempotent() {
    let mut engine = builtin_engine("idempotent");

    assert!(engine.unlock("p1", "first_win", Some("g1")));
    let points = engine.total_points("p1");
    assert!(!engine.unlock("p1", "first_win", Some("g2")));

    assert_eq!(engine.total_points("p1"), points);
    let record = engine.progress("p1").unwrap().get_unlocked("first_win").unwrap();
    assert_eq!(record.game_id.as_deref(), Some("g1"));
    assert_eq!(
        notified_ids(&engine)
            .iter()
            .filter(|&&id| id == "first_win")
            .count(),
        1
    );
}

#[test]
fn test_total_points_match_unlocked_set() {
    let mut engine = builtin_engine("points");

    for _ in 0..12 {
        engine.evaluate("p1", SCORES_180, 1.0, None, None);
    }
    engine.evaluate("p1", DARTS_TO_FINISH, 17.0, None, None);
    engine.evaluate_streak("p1", WINS, 5, None);
    engine.unlock("p1", "christmas", None);

    assert_points_consistent(&engine, "p1");
    assert!(engine.progress("p1").unwrap().unlocked_count() >= 6);
}

// =============================================================================
// Evaluation modes
// =============================================================================

#[test]
fn test_increment_reaches_target_on_tenth_report() {
    let mut engine = builtin_engine("increment");

    for _ in 0..9 {
        engine.evaluate("p1", SCORES_180, 1.0, None, None);
    }
    assert!(engine.is_unlocked("p1", "first_180"));
    assert!(!engine.is_unlocked("p1", "ton_eighty_10"));
    let entry = engine
        .progress("p1")
        .unwrap()
        .get_progress("ton_eighty_10")
        .copied()
        .unwrap();
    assert_eq!(entry.current, 9.0);
    assert_eq!(entry.percentage, 90.0);

    engine.evaluate("p1", SCORES_180, 1.0, None, None);
    assert!(engine.is_unlocked("p1", "ton_eighty_10"));
    assert!(engine.progress("p1").unwrap().get_progress("ton_eighty_10").is_none());
}

#[test]
fn test_absolute_value_compared_directly() {
    let catalog = Catalog::new(vec![def(
        "score_10",
        AchievementCategory::Training,
        Tier::Bronze,
        10,
        RequirementKind::Value,
        "session_score",
        10.0,
    )])
    .unwrap();

    let mut engine = engine_with(catalog, "absolute");
    engine.evaluate("p1", "session_score", 9.0, None, None);
    engine.evaluate("p1", "session_score", 9.0, None, None);
    assert!(!engine.is_unlocked("p1", "score_10"));

    engine.evaluate("p1", "session_score", 10.0, None, None);
    assert!(engine.is_unlocked("p1", "score_10"));
}

#[test]
fn test_explicit_mode_overrides_default() {
    let catalog = Catalog::new(vec![def(
        "score_10",
        AchievementCategory::Training,
        Tier::Bronze,
        10,
        RequirementKind::Count,
        "session_score",
        10.0,
    )])
    .unwrap();

    let mut engine = engine_with(catalog, "explicit-mode");
    engine.evaluate("p1", "session_score", 6.0, None, Some(EvalMode::Increment));
    engine.evaluate("p1", "session_score", 6.0, None, Some(EvalMode::Increment));
    assert!(engine.is_unlocked("p1", "score_10"));
}

#[test]
fn test_lower_is_better_game_time() {
    for (value, unlocked) in [(250.0, true), (300.0, true), (0.0, false), (400.0, false)] {
        let mut engine = builtin_engine("game-time");
        engine.evaluate("p1", GAME_TIME_MAX, value, Some("g1"), None);
        assert_eq!(
            engine.is_unlocked("p1", "speed_game"),
            unlocked,
            "game_time_max = {value}"
        );
        assert!(!engine.is_unlocked("p1", "lightning_game"));
    }
}

#[test]
fn test_streak_reset_restarts_progress() {
    let mut engine = builtin_engine("streak");

    engine.evaluate_streak("p1", WINS, 3, None);
    assert!(engine.is_unlocked("p1", "win_streak_3"));
    assert!(!engine.is_unlocked("p1", "win_streak_5"));

    engine.evaluate_streak("p1", WINS, 0, None);
    let entry = engine
        .progress("p1")
        .unwrap()
        .get_progress("win_streak_5")
        .copied()
        .unwrap();
    assert_eq!(entry.current, 0.0);

    engine.evaluate_streak("p1", WINS, 3, None);
    assert!(!engine.is_unlocked("p1", "win_streak_5"));
    let entry = engine
        .progress("p1")
        .unwrap()
        .get_progress("win_streak_5")
        .copied()
        .unwrap();
    assert_eq!(entry.current, 3.0);
}

// =============================================================================
// Meta-achievements
// =============================================================================

fn meta_catalog() -> Catalog {
    use AchievementCategory::*;
    use RequirementKind::*;
    Catalog::new(vec![
        def("a1", Scoring, Tier::Bronze, 60, Count, SCORES_180, 1.0),
        def("a2", Checkout, Tier::Bronze, 50, Count, "checkouts_hit", 1.0),
        def("points_100", Milestones, Tier::Silver, 10, Special, TOTAL_POINTS, 100.0),
        def("count_2", Milestones, Tier::Bronze, 5, Special, ACHIEVEMENTS_UNLOCKED, 2.0),
        def("count_4", Milestones, Tier::Silver, 5, Special, ACHIEVEMENTS_UNLOCKED, 4.0),
    ])
    .unwrap()
}

#[test]
fn test_meta_conditions_unlock_in_one_pass() {
    let mut engine = engine_with(meta_catalog(), "meta");

    engine.evaluate("p1", SCORES_180, 1.0, None, None);
    assert!(!engine.is_unlocked("p1", "points_100"));
    assert!(!engine.is_unlocked("p1", "count_2"));

    engine.evaluate("p1", "checkouts_hit", 1.0, None, None);

    // count_4 only becomes true once the other two metas are in
    for id in ["points_100", "count_2", "count_4"] {
        assert!(engine.is_unlocked("p1", id), "{id} should be unlocked");
    }
    assert_eq!(engine.total_points("p1"), 130);
    assert_points_consistent(&engine, "p1");

    let ids = notified_ids(&engine);
    assert_eq!(ids.len(), 5);
    for id in ["points_100", "count_2", "count_4"] {
        assert_eq!(ids.iter().filter(|&&n| n == id).count(), 1);
    }
}

#[test]
fn test_gold_in_every_category() {
    use AchievementCategory::*;
    use RequirementKind::*;
    let catalog = Catalog::new(vec![
        def("s_gold", Scoring, Tier::Gold, 50, Count, SCORES_180, 1.0),
        def("c_bronze", Checkout, Tier::Bronze, 10, Count, "checkouts_hit", 1.0),
        def("c_gold", Checkout, Tier::Gold, 50, Count, "checkouts_hit", 5.0),
        def("all_gold", Milestones, Tier::Platinum, 100, Special, GOLD_EVERY_CATEGORY, 2.0),
    ])
    .unwrap();
    let mut engine = engine_with(catalog, "gold");

    engine.evaluate("p1", SCORES_180, 1.0, None, None);
    engine.evaluate("p1", "checkouts_hit", 1.0, None, None);
    assert!(engine.is_unlocked("p1", "c_bronze"));
    assert!(!engine.is_unlocked("p1", "all_gold"));
    let entry = engine
        .progress("p1")
        .unwrap()
        .get_progress("all_gold")
        .copied()
        .unwrap();
    assert_eq!(entry.current, 1.0);
    assert_eq!(entry.target, 2.0);

    engine.evaluate("p1", "checkouts_hit", 4.0, None, None);
    assert!(engine.is_unlocked("p1", "all_gold"));
}

// =============================================================================
// Views
// =============================================================================

#[test]
fn test_hidden_achievement_masked_until_unlocked() {
    let mut engine = builtin_engine("hidden");

    let locked = engine
        .locked_views("p1")
        .into_iter()
        .find(|v| v.id == "nine_darter")
        .unwrap();
    assert!(locked.masked);
    assert_eq!(locked.name, "???");
    assert!(locked.progress.is_none());

    engine.evaluate("p1", DARTS_TO_FINISH, 9.0, Some("g9"), None);

    let unlocked = engine
        .unlocked_views("p1")
        .into_iter()
        .find(|v| v.id == "nine_darter")
        .unwrap();
    assert!(!unlocked.masked);
    assert_eq!(unlocked.name, "Perfection");
    assert!(unlocked.unlocked_at.is_some());
}

#[test]
fn test_category_summary_counts() {
    let mut engine = builtin_engine("summary");
    engine.unlock("p1", "first_180", None);
    engine.unlock("p1", "first_win", None);

    let summary = engine.category_summary("p1");
    let scoring = summary
        .iter()
        .find(|(c, _, _)| *c == AchievementCategory::Scoring)
        .unwrap();
    assert_eq!(scoring.1, 1);
    let total: usize = summary.iter().map(|(_, _, t)| t).sum();
    assert_eq!(total, engine.catalog().len());
}

// =============================================================================
// Notifications
// =============================================================================

#[test]
fn test_notifications_shown_in_unlock_order() {
    let mut engine = builtin_engine("notify");
    engine.unlock("p1", "first_180", None);
    engine.unlock("p1", "whitewash", None);
    engine.unlock("p1", "first_win", None);

    assert_eq!(
        notified_ids(&engine),
        vec!["first_180", "whitewash", "first_win"]
    );
    let current = engine.notifications().current().unwrap();
    assert_eq!(current.unlocked_count, 1);
    assert_eq!(current.total_count, engine.catalog().len());

    let dismissed = engine.dismiss_notification(None).unwrap();
    assert_eq!(dismissed.achievement.id, "first_180");
    assert!(engine.notifications().current().is_none());

    engine.tick_notifications(Instant::now() + TRANSITION_GAP + Duration::from_millis(1));
    let current = engine.notifications().current().unwrap();
    assert_eq!(current.achievement.id, "whitewash");
    assert_eq!(current.unlocked_count, 2);

    engine.dismiss_all_notifications();
    assert!(engine.notifications().is_empty());
}
