//! In-memory progress store, keyed by player.

use std::collections::{HashMap, HashSet};

use super::types::PlayerProgress;

/// Owns every player's [`PlayerProgress`] plus the set of players whose
/// remote state has been merged in.
#[derive(Debug, Default)]
pub struct ProgressStore {
    players: HashMap<String, PlayerProgress>,
    loaded: HashSet<String>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player_id: &str) -> Option<&PlayerProgress> {
        self.players.get(player_id)
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.players.contains_key(player_id)
    }

    /// Get a player's progress, creating an empty entry on first reference.
    pub fn player_mut(&mut self, player_id: &str) -> &mut PlayerProgress {
        self.players.entry(player_id.to_string()).or_default()
    }

    pub fn insert(&mut self, player_id: &str, progress: PlayerProgress) {
        self.players.insert(player_id.to_string(), progress);
    }

    pub fn is_unlocked(&self, player_id: &str, achievement_id: &str) -> bool {
        self.players
            .get(player_id)
            .is_some_and(|p| p.is_unlocked(achievement_id))
    }

    pub fn is_loaded(&self, player_id: &str) -> bool {
        self.loaded.contains(player_id)
    }

    pub fn set_loaded(&mut self, player_id: &str, loaded: bool) {
        if loaded {
            self.loaded.insert(player_id.to_string());
        } else {
            self.loaded.remove(player_id);
        }
    }

    /// Drop a player's in-memory state. The next load fetches from the remote
    /// store again.
    pub fn reset_player(&mut self, player_id: &str) -> Option<PlayerProgress> {
        self.loaded.remove(player_id);
        self.players.remove(player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::catalog::Catalog;

    #[test]
    fn test_first_reference_creates_empty_player() {
        let mut store = ProgressStore::new();
        assert!(!store.contains("p1"));

        let progress = store.player_mut("p1");
        assert_eq!(progress.unlocked_count(), 0);
        assert_eq!(progress.total_points(), 0);
        assert!(store.contains("p1"));
    }

    #[test]
    fn test_players_are_isolated() {
        let catalog = Catalog::builtin();
        let mut store = ProgressStore::new();

        store.player_mut("p1").unlock("p1", "first_180", None, &catalog);

        assert!(store.is_unlocked("p1", "first_180"));
        assert!(!store.is_unlocked("p2", "first_180"));
    }

    #[test]
    fn test_reset_clears_state_and_loaded_flag() {
        let catalog = Catalog::builtin();
        let mut store = ProgressStore::new();

        store.player_mut("p1").unlock("p1", "first_180", None, &catalog);
        store.set_loaded("p1", true);
        assert!(store.is_loaded("p1"));

        let removed = store.reset_player("p1").unwrap();
        assert_eq!(removed.unlocked_count(), 1);
        assert!(!store.is_loaded("p1"));
        assert!(!store.contains("p1"));
    }
}
