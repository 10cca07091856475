//! Unlock notification queue.
//!
//! Unlock events are queued in the order they happened and shown one at a
//! time through the `current` slot. Display timing is a pure function of the
//! achievement tier; the caller drives the clock by passing `Instant`s.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use uuid::Uuid;

use super::types::{AchievementDef, Tier};

/// Pause between dismissing one notification and showing the next.
pub const TRANSITION_GAP: Duration = Duration::from_millis(400);

/// An unlock event, immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationItem {
    pub id: Uuid,
    pub achievement: AchievementDef,
    pub player_id: String,
    /// Unix timestamp (seconds) of the unlock.
    pub timestamp: i64,
    /// Unlocked count after this unlock, for "n/total" display.
    pub unlocked_count: usize,
    pub total_count: usize,
}

impl NotificationItem {
    pub fn new(
        achievement: AchievementDef,
        player_id: &str,
        unlocked_count: usize,
        total_count: usize,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            achievement,
            player_id: player_id.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
            unlocked_count,
            total_count,
        }
    }
}

/// How long a notification stays on screen.
pub fn display_duration(tier: Tier) -> Duration {
    match tier {
        Tier::Bronze => Duration::from_secs(4),
        Tier::Silver => Duration::from_secs(5),
        Tier::Gold => Duration::from_secs(6),
        Tier::Platinum => Duration::from_secs(7),
        Tier::Diamond => Duration::from_secs(9),
    }
}

/// Celebration effect strength, 1 (subtle) to 5 (fireworks).
pub fn celebration_intensity(tier: Tier) -> u8 {
    match tier {
        Tier::Bronze => 1,
        Tier::Silver => 2,
        Tier::Gold => 3,
        Tier::Platinum => 4,
        Tier::Diamond => 5,
    }
}

#[derive(Debug, Clone)]
struct Showing {
    item: NotificationItem,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct NotificationQueue {
    current: Option<Showing>,
    queue: VecDeque<NotificationItem>,
    /// No promotion before this instant.
    hold_until: Option<Instant>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, showing it immediately if nothing is on screen.
    pub fn enqueue(&mut self, item: NotificationItem, now: Instant) {
        self.queue.push_back(item);
        self.promote(now);
    }

    pub fn current(&self) -> Option<&NotificationItem> {
        self.current.as_ref().map(|s| &s.item)
    }

    /// Items waiting to be shown, oldest first.
    pub fn queued(&self) -> impl Iterator<Item = &NotificationItem> {
        self.queue.iter()
    }

    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }

    /// With `None`, dismiss the current item; the next one is shown after
    /// [`TRANSITION_GAP`]. With `Some(i)`, remove the i-th queued item.
    /// Returns the removed item.
    pub fn dismiss(&mut self, index: Option<usize>, now: Instant) -> Option<NotificationItem> {
        match index {
            None => {
                let dismissed = self.current.take().map(|s| s.item);
                if dismissed.is_some() {
                    self.hold_until = Some(now + TRANSITION_GAP);
                }
                dismissed
            }
            Some(i) => self.queue.remove(i),
        }
    }

    pub fn dismiss_all(&mut self) {
        self.current = None;
        self.queue.clear();
        self.hold_until = None;
    }

    /// Advance the display clock: expire the current item once its tier's
    /// duration has elapsed and promote the next when allowed.
    pub fn tick(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|s| now >= s.expires_at) {
            self.dismiss(None, now);
        }
        self.promote(now);
    }

    fn promote(&mut self, now: Instant) {
        if self.current.is_some() {
            return;
        }
        if self.hold_until.is_some_and(|hold| now < hold) {
            return;
        }
        self.hold_until = None;
        if let Some(item) = self.queue.pop_front() {
            let expires_at = now + display_duration(item.achievement.tier);
            self.current = Some(Showing { item, expires_at });
        }
    }
}
