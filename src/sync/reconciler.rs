//! Reconciles the optimistic local state with the remote store.
//!
//! Local unlocks are final. The reconciler only decides whether, and when, the
//! remote store learns about them: one immediate retry after a fixed backoff,
//! then the durable pending queue, which is replayed at the next session start
//! and after any later confirmed push.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use crate::achievements::catalog::Catalog;
use crate::achievements::metrics::{percentage, value_for_percentage};
use crate::achievements::types::{PlayerProgress, ProgressEntry, UnlockedRecord};
use crate::error::SyncError;

use super::cache::{LocalCache, PendingSyncItem};
use super::remote::{ProgressUpdate, PushAck, RemotePlayerState, RemoteStore};

/// Attempts per push before falling back to the pending queue.
pub const PUSH_ATTEMPTS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Confirmed { attempts: u32, ack: PushAck },
    /// Both attempts failed; the item is in the durable pending queue.
    Queued,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplayReport {
    pub confirmed: usize,
    pub remaining: usize,
}

/// Result of merging remote state into local state.
#[derive(Debug, Clone)]
pub struct MergeResult {
    pub progress: PlayerProgress,
    /// Local unlocks the remote store does not know about.
    pub local_only: Vec<UnlockedRecord>,
    /// Unlocks that only existed remotely.
    pub remote_added: usize,
}

/// Union local and remote state.
///
/// Remote unlock timestamps are authoritative. Local unlocks missing remotely
/// are kept and reported as `local_only` so they can be re-queued. Progress is
/// taken from whichever side is further along.
pub fn merge_remote(
    player_id: &str,
    local: &PlayerProgress,
    remote: &RemotePlayerState,
    catalog: &Catalog,
) -> MergeResult {
    let mut merged = local.clone();
    let mut remote_unlocked = HashSet::new();
    let mut remote_added = 0;

    for item in &remote.achievements {
        let Some(def) = catalog.get(&item.achievement_id) else {
            tracing::warn!(
                player = %player_id,
                achievement = %item.achievement_id,
                "Remote reported unknown achievement"
            );
            continue;
        };

        if let Some(unlocked_at) = item.unlocked_at {
            remote_unlocked.insert(def.id);
            if merged.is_unlocked(def.id) {
                merged.confirm(def.id, unlocked_at);
            } else if merged.insert_record(
                UnlockedRecord {
                    player_id: player_id.to_string(),
                    achievement_id: def.id.to_string(),
                    unlocked_at,
                    game_id: None,
                    confirmed: true,
                },
                catalog,
            ) {
                remote_added += 1;
            }
            continue;
        }

        if let Some(percent) = item.progress {
            let metric = def.requirement.metric;
            let target = def.requirement.target;
            let remote_pct = percent.clamp(0.0, 100.0);
            let local_pct = merged.get_progress(def.id).map_or(0.0, |p| p.percentage);
            if remote_pct > local_pct {
                let current = value_for_percentage(metric, remote_pct, target);
                merged.update_progress(
                    def.id,
                    ProgressEntry {
                        current,
                        target,
                        percentage: percentage(metric, current, target),
                    },
                );
            }
        }
    }

    let local_only = merged
        .unlocked()
        .iter()
        .filter(|r| !remote_unlocked.contains(r.achievement_id.as_str()))
        .cloned()
        .collect();

    MergeResult {
        progress: merged,
        local_only,
        remote_added,
    }
}

/// Build the batched progress payload: percentages for locked achievements,
/// `completed` for unlocked ones.
pub fn progress_batch(progress: &PlayerProgress) -> BTreeMap<String, ProgressUpdate> {
    let mut updates: BTreeMap<String, ProgressUpdate> = progress
        .progress()
        .iter()
        .map(|(id, entry)| {
            (
                id.clone(),
                ProgressUpdate {
                    progress: entry.percentage,
                    completed: false,
                },
            )
        })
        .collect();
    for record in progress.unlocked() {
        updates.insert(
            record.achievement_id.clone(),
            ProgressUpdate {
                progress: 100.0,
                completed: true,
            },
        );
    }
    updates
}

/// Talks to the remote store and owns the durable pending queue.
#[derive(Clone)]
pub struct SyncReconciler {
    remote: Arc<dyn RemoteStore>,
    cache: Arc<LocalCache>,
    retry_backoff: Duration,
}

impl SyncReconciler {
    pub fn new(remote: Arc<dyn RemoteStore>, cache: Arc<LocalCache>, retry_backoff: Duration) -> Self {
        Self {
            remote,
            cache,
            retry_backoff,
        }
    }

    pub fn cache(&self) -> &LocalCache {
        &self.cache
    }

    pub fn fetch(&self, player_id: &str) -> Result<RemotePlayerState, SyncError> {
        let state = self.remote.fetch_player(player_id)?;
        tracing::debug!(
            player = %player_id,
            achievements = state.achievements.len(),
            "Fetched remote achievement state"
        );
        Ok(state)
    }

    /// Push one unlock, retrying once after the backoff. On a second failure
    /// the item goes to the pending queue.
    pub fn push_unlock(&self, item: &PendingSyncItem) -> PushOutcome {
        for attempt in 1..=PUSH_ATTEMPTS {
            match self.remote.push_unlock(
                &item.player_id,
                &item.achievement_id,
                item.game_id.as_deref(),
            ) {
                Ok(ack) => {
                    tracing::info!(
                        player = %item.player_id,
                        achievement = %item.achievement_id,
                        attempt,
                        ?ack,
                        "Unlock confirmed by remote"
                    );
                    self.forget(item);
                    return PushOutcome::Confirmed {
                        attempts: attempt,
                        ack,
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        player = %item.player_id,
                        achievement = %item.achievement_id,
                        attempt,
                        error = %e,
                        "Unlock push failed"
                    );
                    if attempt < PUSH_ATTEMPTS && !self.retry_backoff.is_zero() {
                        std::thread::sleep(self.retry_backoff);
                    }
                }
            }
        }

        self.enqueue(item);
        PushOutcome::Queued
    }

    /// Push one unlock and, once it is confirmed, replay whatever else the
    /// player has queued.
    pub fn push_and_replay(&self, item: &PendingSyncItem) -> PushOutcome {
        let outcome = self.push_unlock(item);
        if matches!(outcome, PushOutcome::Confirmed { .. }) {
            self.replay_pending(&item.player_id);
        }
        outcome
    }

    /// Add an item to the durable queue without pushing it.
    pub fn enqueue(&self, item: &PendingSyncItem) {
        match self.cache.add_pending(item) {
            Ok(true) => tracing::info!(
                player = %item.player_id,
                achievement = %item.achievement_id,
                "Unlock queued for later sync"
            ),
            Ok(false) => {}
            Err(e) => tracing::error!(
                player = %item.player_id,
                achievement = %item.achievement_id,
                error = %e,
                "Failed to persist pending unlock"
            ),
        }
    }

    fn forget(&self, item: &PendingSyncItem) {
        if let Err(e) = self
            .cache
            .remove_pending(&item.player_id, &item.achievement_id)
        {
            tracing::warn!(
                player = %item.player_id,
                achievement = %item.achievement_id,
                error = %e,
                "Failed to remove confirmed unlock from pending queue"
            );
        }
    }

    /// One attempt per queued item. Items stay queued until confirmed; a
    /// transport failure stops the pass since the rest would fail the same way.
    pub fn replay_pending(&self, player_id: &str) -> ReplayReport {
        let items = self.cache.pending(player_id);
        let mut report = ReplayReport {
            confirmed: 0,
            remaining: items.len(),
        };

        for item in &items {
            match self.remote.push_unlock(
                &item.player_id,
                &item.achievement_id,
                item.game_id.as_deref(),
            ) {
                Ok(ack) => {
                    tracing::info!(
                        player = %player_id,
                        achievement = %item.achievement_id,
                        ?ack,
                        "Replayed pending unlock"
                    );
                    self.forget(item);
                    report.confirmed += 1;
                    report.remaining -= 1;
                }
                Err(e) => {
                    tracing::warn!(
                        player = %player_id,
                        achievement = %item.achievement_id,
                        error = %e,
                        "Pending unlock still not accepted"
                    );
                    if matches!(e, SyncError::Transport(_) | SyncError::Offline) {
                        break;
                    }
                }
            }
        }

        if !items.is_empty() {
            tracing::info!(
                player = %player_id,
                confirmed = report.confirmed,
                remaining = report.remaining,
                "Pending sync replay finished"
            );
        }
        report
    }

    /// Send the batched progress update. Returns the number of entries sent.
    pub fn push_progress(&self, player_id: &str, progress: &PlayerProgress) -> Result<usize, SyncError> {
        let updates = progress_batch(progress);
        if updates.is_empty() {
            return Ok(0);
        }
        self.remote.push_progress(player_id, &updates)?;
        tracing::debug!(player = %player_id, entries = updates.len(), "Pushed progress batch");
        Ok(updates.len())
    }
}
