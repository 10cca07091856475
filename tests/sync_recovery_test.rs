//! Integration test: local-first sync and recovery
//!
//! Runs the engine against a scripted remote store to cover push retries,
//! the durable pending queue, merge-on-load, offline fallback and
//! background dispatch.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use oche::achievements::metrics::SCORES_180;
use oche::achievements::Catalog;
use oche::error::SyncError;
use oche::sync::remote::{ProgressUpdate, RemoteAchievement};
use oche::sync::{
    LocalCache, OfflineRemote, PushAck, PushOutcome, RemotePlayerState, RemoteStore,
    SyncReconciler,
};
use oche::{AchievementEngine, LoadOutcome, SyncDispatch};

fn temp_dir(label: &str) -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "oche-sync-test-{}-{}-{}",
        label,
        std::process::id(),
        n
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

/// In-memory remote store with scriptable failures.
#[derive(Default)]
struct ScriptedRemote {
    state: Mutex<ScriptedState>,
}

#[derive(Default)]
struct ScriptedState {
    /// Next N unlock pushes fail with a transport error.
    failing_pushes: usize,
    fetch_fails: bool,
    /// (player, achievement) -> unlocked_at
    unlocked: BTreeMap<(String, String), i64>,
    push_calls: usize,
    progress_batches: Vec<BTreeMap<String, ProgressUpdate>>,
}

impl ScriptedRemote {
    fn with(f: impl FnOnce(&mut ScriptedState)) -> Arc<Self> {
        let remote = Arc::new(Self::default());
        remote.script(f);
        remote
    }

    fn script(&self, f: impl FnOnce(&mut ScriptedState)) {
        let mut state = self.state.lock().unwrap();
        f(&mut state);
    }

    fn has_unlock(&self, player_id: &str, achievement_id: &str) -> bool {
        let state = self.state.lock().unwrap();
        state
            .unlocked
            .contains_key(&(player_id.to_string(), achievement_id.to_string()))
    }

    fn push_calls(&self) -> usize {
        self.state.lock().unwrap().push_calls
    }
}

impl RemoteStore for ScriptedRemote {
    fn fetch_player(&self, player_id: &str) -> Result<RemotePlayerState, SyncError> {
        let state = self.state.lock().unwrap();
        if state.fetch_fails {
            return Err(SyncError::Transport("connection refused".to_string()));
        }
        let achievements = state
            .unlocked
            .iter()
            .filter(|((player, _), _)| player == player_id)
            .map(|((_, id), at)| RemoteAchievement {
                achievement_id: id.clone(),
                unlocked_at: Some(*at),
                progress: None,
            })
            .collect();
        Ok(RemotePlayerState { achievements })
    }

    fn push_unlock(
        &self,
        player_id: &str,
        achievement_id: &str,
        _game_id: Option<&str>,
    ) -> Result<PushAck, SyncError> {
        let mut state = self.state.lock().unwrap();
        state.push_calls += 1;
        if state.failing_pushes > 0 {
            state.failing_pushes -= 1;
            return Err(SyncError::Transport("timed out".to_string()));
        }
        let key = (player_id.to_string(), achievement_id.to_string());
        if state.unlocked.contains_key(&key) {
            return Ok(PushAck::AlreadyUnlocked);
        }
        state.unlocked.insert(key, 1_700_000_000);
        Ok(PushAck::Created)
    }

    fn push_progress(
        &self,
        _player_id: &str,
        updates: &BTreeMap<String, ProgressUpdate>,
    ) -> Result<(), SyncError> {
        self.state
            .lock()
            .unwrap()
            .progress_batches
            .push(updates.clone());
        Ok(())
    }
}

fn engine_on(
    dir: &Path,
    remote: Arc<dyn RemoteStore>,
    dispatch: SyncDispatch,
) -> AchievementEngine {
    let cache = Arc::new(LocalCache::new(dir.to_path_buf()));
    let reconciler = SyncReconciler::new(remote, cache, Duration::ZERO);
    AchievementEngine::new(Catalog::builtin(), reconciler, dispatch)
}

fn pending_ids(engine: &AchievementEngine, player: &str) -> Vec<String> {
    engine
        .reconciler()
        .cache()
        .pending(player)
        .into_iter()
        .map(|i| i.achievement_id)
        .collect()
}

// =============================================================================
// Push retry and pending queue
// =============================================================================

#[test]
fn test_two_failures_queue_then_session_start_replays() {
    let dir = temp_dir("retry");
    let remote = ScriptedRemote::with(|s| s.failing_pushes = 2);
    let mut engine = engine_on(&dir, remote.clone(), SyncDispatch::Inline);

    assert!(engine.unlock("p1", "first_win", Some("g1")));

    // Local state is final even though the remote never heard about it
    assert!(engine.is_unlocked("p1", "first_win"));
    assert_eq!(remote.push_calls(), 2);
    assert_eq!(pending_ids(&engine, "p1"), vec!["first_win".to_string()]);
    assert!(!remote.has_unlock("p1", "first_win"));

    let report = engine.start_session("p1");

    assert_eq!(
        report.load,
        LoadOutcome::Merged {
            remote_added: 0,
            requeued: 1
        }
    );
    assert_eq!(report.replay.confirmed, 1);
    assert_eq!(report.replay.remaining, 0);
    assert!(pending_ids(&engine, "p1").is_empty());
    assert!(remote.has_unlock("p1", "first_win"));
    assert!(engine.is_loaded("p1"));
}

#[test]
fn test_single_failure_is_retried() {
    let dir = temp_dir("retry-once");
    let remote = ScriptedRemote::with(|s| s.failing_pushes = 1);
    let engine = engine_on(&dir, remote.clone(), SyncDispatch::Inline);

    let outcome = engine
        .reconciler()
        .push_unlock(&oche::sync::PendingSyncItem::new("p1", "first_180", None));

    assert_eq!(
        outcome,
        PushOutcome::Confirmed {
            attempts: 2,
            ack: PushAck::Created
        }
    );
    assert!(pending_ids(&engine, "p1").is_empty());
}

#[test]
fn test_duplicate_push_counts_as_success() {
    let dir = temp_dir("duplicate");
    let remote = ScriptedRemote::with(|s| {
        s.unlocked
            .insert(("p1".to_string(), "first_180".to_string()), 1_600_000_000);
    });
    let engine = engine_on(&dir, remote.clone(), SyncDispatch::Inline);
    let item = oche::sync::PendingSyncItem::new("p1", "first_180", None);
    engine.reconciler().enqueue(&item);

    let outcome = engine.reconciler().push_unlock(&item);

    assert_eq!(
        outcome,
        PushOutcome::Confirmed {
            attempts: 1,
            ack: PushAck::AlreadyUnlocked
        }
    );
    assert!(pending_ids(&engine, "p1").is_empty());
}

#[test]
fn test_replay_stops_on_transport_error() {
    let dir = temp_dir("replay-stop");
    let remote = ScriptedRemote::with(|s| s.failing_pushes = 10);
    let engine = engine_on(&dir, remote.clone(), SyncDispatch::Inline);
    for id in ["first_180", "first_win", "first_game"] {
        engine
            .reconciler()
            .enqueue(&oche::sync::PendingSyncItem::new("p1", id, None));
    }

    let report = engine.reconciler().replay_pending("p1");

    assert_eq!(report.confirmed, 0);
    assert_eq!(report.remaining, 3);
    assert_eq!(remote.push_calls(), 1);
    assert_eq!(pending_ids(&engine, "p1").len(), 3);
}

#[test]
fn test_confirmed_push_replays_earlier_backlog() {
    let dir = temp_dir("backlog");
    let remote = ScriptedRemote::with(|s| s.failing_pushes = 2);
    let mut engine = engine_on(&dir, remote.clone(), SyncDispatch::Inline);

    engine.unlock("p1", "first_game", None);
    assert_eq!(pending_ids(&engine, "p1"), vec!["first_game".to_string()]);

    engine.unlock("p1", "first_win", None);

    assert!(remote.has_unlock("p1", "first_win"));
    assert!(remote.has_unlock("p1", "first_game"));
    assert!(pending_ids(&engine, "p1").is_empty());
}

// =============================================================================
// Merge on load
// =============================================================================

#[test]
fn test_merge_keeps_local_and_remote_unlocks() {
    let dir = temp_dir("merge");

    // A previous offline session unlocked first_180 locally
    {
        let mut offline = engine_on(&dir, Arc::new(OfflineRemote), SyncDispatch::Inline);
        offline.evaluate("p1", SCORES_180, 1.0, None, None);
        assert!(offline.is_unlocked("p1", "first_180"));
    }

    // Another device unlocked first_win
    let remote = ScriptedRemote::with(|s| {
        s.unlocked
            .insert(("p1".to_string(), "first_win".to_string()), 1_650_000_000);
    });
    let mut engine = engine_on(&dir, remote.clone(), SyncDispatch::Inline);

    let outcome = engine.load_player("p1");

    assert_eq!(
        outcome,
        LoadOutcome::Merged {
            remote_added: 1,
            requeued: 1
        }
    );
    assert!(engine.is_unlocked("p1", "first_180"));
    assert!(engine.is_unlocked("p1", "first_win"));
    assert_eq!(engine.total_points("p1"), 20);

    let progress = engine.progress("p1").unwrap();
    let remote_record = progress.get_unlocked("first_win").unwrap();
    assert_eq!(remote_record.unlocked_at, 1_650_000_000);
    assert!(remote_record.confirmed);
    assert!(!progress.get_unlocked("first_180").unwrap().confirmed);
    assert_eq!(pending_ids(&engine, "p1"), vec!["first_180".to_string()]);

    // Merged state is written through to the cache
    let snapshot = engine.reconciler().cache().load_player("p1");
    assert_eq!(snapshot.unlocked.len(), 2);

    let report = engine.start_session("p1");
    assert_eq!(report.replay.confirmed, 1);
    assert!(remote.has_unlock("p1", "first_180"));
}

#[test]
fn test_remote_timestamp_wins_for_shared_unlock() {
    let dir = temp_dir("merge-ts");
    {
        let mut offline = engine_on(&dir, Arc::new(OfflineRemote), SyncDispatch::Inline);
        offline.unlock("p1", "first_180", None);
    }
    let remote = ScriptedRemote::with(|s| {
        s.unlocked
            .insert(("p1".to_string(), "first_180".to_string()), 1_500_000_000);
    });
    let mut engine = engine_on(&dir, remote.clone(), SyncDispatch::Inline);

    let outcome = engine.load_player("p1");

    assert_eq!(
        outcome,
        LoadOutcome::Merged {
            remote_added: 0,
            requeued: 0
        }
    );
    let record = engine
        .progress("p1")
        .unwrap()
        .get_unlocked("first_180")
        .cloned()
        .unwrap();
    assert_eq!(record.unlocked_at, 1_500_000_000);
    assert!(record.confirmed);
    assert_eq!(engine.total_points("p1"), 10);
}

#[test]
fn test_load_failure_falls_back_to_local_cache() {
    let dir = temp_dir("fallback");
    {
        let mut offline = engine_on(&dir, Arc::new(OfflineRemote), SyncDispatch::Inline);
        offline.unlock("p1", "first_game", None);
    }

    let remote = ScriptedRemote::with(|s| s.fetch_fails = true);
    let mut engine = engine_on(&dir, remote.clone(), SyncDispatch::Inline);

    assert_eq!(engine.load_player("p1"), LoadOutcome::LocalFallback);
    assert!(!engine.is_loaded("p1"));
    assert!(engine.is_unlocked("p1", "first_game"));

    // Gameplay keeps working while the remote is down
    engine.evaluate("p1", SCORES_180, 1.0, None, None);
    assert!(engine.is_unlocked("p1", "first_180"));

    remote.script(|s| s.fetch_fails = false);
    assert!(matches!(
        engine.ensure_loaded("p1"),
        Some(LoadOutcome::Merged { .. })
    ));
    assert!(engine.is_loaded("p1"));
    assert_eq!(engine.ensure_loaded("p1"), None);
}

#[test]
fn test_reset_forces_reload() {
    let dir = temp_dir("reset");
    let remote = ScriptedRemote::with(|_| {});
    let mut engine = engine_on(&dir, remote.clone(), SyncDispatch::Inline);
    engine.load_player("p1");
    assert!(engine.is_loaded("p1"));

    engine.reset_player("p1");

    assert!(!engine.is_loaded("p1"));
    assert!(engine.ensure_loaded("p1").is_some());
}

// =============================================================================
// Dispatch and progress
// =============================================================================

#[test]
fn test_background_dispatch_completes_after_wait() {
    let dir = temp_dir("background");
    let remote = ScriptedRemote::with(|_| {});
    let mut engine = engine_on(&dir, remote.clone(), SyncDispatch::Background);

    for id in ["first_180", "first_win", "first_game"] {
        engine.unlock("p1", id, None);
        // Committed before any push has run
        assert!(engine.is_unlocked("p1", id));
    }
    assert!(engine.wait_for_sync() >= 1);

    for id in ["first_180", "first_win", "first_game"] {
        assert!(remote.has_unlock("p1", id), "{id} should be pushed");
    }
    assert!(pending_ids(&engine, "p1").is_empty());
}

#[test]
fn test_progress_batch_is_pushed() {
    let dir = temp_dir("progress");
    let remote = ScriptedRemote::with(|_| {});
    let mut engine = engine_on(&dir, remote.clone(), SyncDispatch::Inline);
    for _ in 0..3 {
        engine.evaluate("p1", SCORES_180, 1.0, None, None);
    }

    let sent = engine.push_progress("p1").unwrap();

    assert!(sent >= 2);
    let state = remote.state.lock().unwrap();
    let batch = state.progress_batches.last().unwrap();
    let ton_eighty = batch["ton_eighty_10"];
    assert_eq!(ton_eighty.progress, 30.0);
    assert!(!ton_eighty.completed);
    assert!(batch["first_180"].completed);
}
