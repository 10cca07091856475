//! Durable local cache: per-player progress snapshots and the pending-sync queue.
//!
//! Layout under the tenant root:
//!
//! ```text
//! <root>/<player>/progress.json      PlayerSnapshot
//! <root>/<player>/pending_sync.json  Vec<PendingSyncItem>
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::achievements::types::PlayerSnapshot;
use crate::error::CacheError;

const PROGRESS_FILE: &str = "progress.json";
const PENDING_FILE: &str = "pending_sync.json";

/// An unlock accepted locally but not yet confirmed by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSyncItem {
    pub player_id: String,
    pub achievement_id: String,
    #[serde(default)]
    pub game_id: Option<String>,
}

impl PendingSyncItem {
    pub fn new(player_id: &str, achievement_id: &str, game_id: Option<&str>) -> Self {
        Self {
            player_id: player_id.to_string(),
            achievement_id: achievement_id.to_string(),
            game_id: game_id.map(|s| s.to_string()),
        }
    }
}

/// Get the default data directory (~/.oche).
pub fn default_data_dir() -> Result<PathBuf, CacheError> {
    let home_dir = dirs::home_dir().ok_or(CacheError::NoHomeDir)?;
    Ok(home_dir.join(".oche"))
}

/// Map a tenant or player id onto a file-safe directory name.
///
/// Lowercase ASCII letters, digits and `-` pass through; every other byte
/// becomes `_xx` (lowercase hex). Distinct ids always get distinct names,
/// including on case-insensitive filesystems. The empty id maps to `_`,
/// which no non-empty id can produce.
fn dir_name(id: &str) -> String {
    if id.is_empty() {
        return "_".to_string();
    }
    let mut name = String::with_capacity(id.len());
    for byte in id.bytes() {
        match byte {
            b'a'..=b'z' | b'0'..=b'9' | b'-' => name.push(byte as char),
            _ => name.push_str(&format!("_{:02x}", byte)),
        }
    }
    name
}

/// Load a JSON file, returning `T::default()` if missing. A corrupt file is
/// logged and treated as missing.
fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt cache file");
            T::default()
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => T::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read cache file");
            T::default()
        }
    }
}

/// Save a value as pretty-printed JSON, via a temp file so a crash mid-write
/// leaves the previous version intact.
fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), CacheError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Tenant-scoped durable cache.
#[derive(Debug)]
pub struct LocalCache {
    root: PathBuf,
    /// Serializes read-modify-write of pending queues across push threads.
    pending_lock: Mutex<()>,
}

impl LocalCache {
    /// Cache rooted at `<data_dir>/<tenant>`.
    pub fn for_tenant(data_dir: &Path, tenant: &str) -> Self {
        Self::new(data_dir.join(dir_name(tenant)))
    }

    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            pending_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn player_dir(&self, player_id: &str) -> PathBuf {
        self.root.join(dir_name(player_id))
    }

    pub fn load_player(&self, player_id: &str) -> PlayerSnapshot {
        load_json_or_default(&self.player_dir(player_id).join(PROGRESS_FILE))
    }

    pub fn save_player(&self, player_id: &str, snapshot: &PlayerSnapshot) -> Result<(), CacheError> {
        save_json(&self.player_dir(player_id).join(PROGRESS_FILE), snapshot)
    }

    pub fn pending(&self, player_id: &str) -> Vec<PendingSyncItem> {
        let _guard = self.lock_pending();
        self.read_pending(player_id)
    }

    /// Queue an item. Returns false if it was already queued.
    pub fn add_pending(&self, item: &PendingSyncItem) -> Result<bool, CacheError> {
        let _guard = self.lock_pending();
        let mut items = self.read_pending(&item.player_id);
        if items
            .iter()
            .any(|i| i.achievement_id == item.achievement_id)
        {
            return Ok(false);
        }
        items.push(item.clone());
        self.write_pending(&item.player_id, &items)?;
        Ok(true)
    }

    /// Remove a confirmed item. Returns false if it was not queued.
    pub fn remove_pending(&self, player_id: &str, achievement_id: &str) -> Result<bool, CacheError> {
        let _guard = self.lock_pending();
        let mut items = self.read_pending(player_id);
        let before = items.len();
        items.retain(|i| i.achievement_id != achievement_id);
        if items.len() == before {
            return Ok(false);
        }
        self.write_pending(player_id, &items)?;
        Ok(true)
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, ()> {
        // The guarded data is (), so a poisoned lock carries no broken state.
        self.pending_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_pending(&self, player_id: &str) -> Vec<PendingSyncItem> {
        load_json_or_default(&self.player_dir(player_id).join(PENDING_FILE))
    }

    fn write_pending(&self, player_id: &str, items: &[PendingSyncItem]) -> Result<(), CacheError> {
        save_json(&self.player_dir(player_id).join(PENDING_FILE), &items)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::temp_dir;
    use super::*;
    use crate::achievements::types::{ProgressEntry, UnlockedRecord};

    #[test]
    fn test_load_missing_returns_default() {
        let cache = LocalCache::new(temp_dir("cache-missing"));
        assert_eq!(cache.load_player("nobody"), PlayerSnapshot::default());
        assert!(cache.pending("nobody").is_empty());
    }

    #[test]
    fn test_save_and_load_snapshot() {
        let cache = LocalCache::new(temp_dir("cache-roundtrip"));
        let mut snapshot = PlayerSnapshot::default();
        snapshot.unlocked.push(UnlockedRecord {
            player_id: "p1".to_string(),
            achievement_id: "first_180".to_string(),
            unlocked_at: 42,
            game_id: Some("g1".to_string()),
            confirmed: false,
        });
        snapshot.progress.insert(
            "ton_eighty_10".to_string(),
            ProgressEntry {
                current: 3.0,
                target: 10.0,
                percentage: 30.0,
            },
        );

        cache.save_player("p1", &snapshot).unwrap();
        assert_eq!(cache.load_player("p1"), snapshot);
    }

    #[test]
    fn test_corrupt_file_loads_as_default() {
        let cache = LocalCache::new(temp_dir("cache-corrupt"));
        let dir = cache.root().join("p1");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(PROGRESS_FILE), "{ not json").unwrap();

        assert_eq!(cache.load_player("p1"), PlayerSnapshot::default());
    }

    #[test]
    fn test_pending_queue_dedupes_and_removes() {
        let cache = LocalCache::new(temp_dir("cache-pending"));
        let item = PendingSyncItem::new("p1", "first_180", Some("g1"));

        assert!(cache.add_pending(&item).unwrap());
        assert!(!cache.add_pending(&item).unwrap());
        assert_eq!(cache.pending("p1"), vec![item.clone()]);

        assert!(cache.remove_pending("p1", "first_180").unwrap());
        assert!(!cache.remove_pending("p1", "first_180").unwrap());
        assert!(cache.pending("p1").is_empty());
    }

    #[test]
    fn test_players_and_tenants_are_namespaced() {
        let dir = temp_dir("cache-namespace");
        let club_a = LocalCache::for_tenant(&dir, "club-a");
        let club_b = LocalCache::for_tenant(&dir, "club-b");

        club_a
            .add_pending(&PendingSyncItem::new("p1", "first_180", None))
            .unwrap();

        assert_eq!(club_a.pending("p1").len(), 1);
        assert!(club_a.pending("p2").is_empty());
        assert!(club_b.pending("p1").is_empty());
    }

    #[test]
    fn test_dir_names_are_file_safe() {
        assert_eq!(dir_name("p1"), "p1");
        assert_eq!(dir_name("club-7"), "club-7");
        assert_eq!(dir_name("../etc"), "_2e_2e_2fetc");
        assert_eq!(dir_name("Alice"), "_41lice");
        assert_eq!(dir_name(""), "_");
    }

    #[test]
    fn test_similar_player_ids_do_not_share_files() {
        let cache = LocalCache::new(temp_dir("cache-collide"));
        let ids = ["alice.smith", "alice_smith", "alice-smith", "Alice.Smith"];
        for id in ids {
            cache
                .add_pending(&PendingSyncItem::new(id, "first_180", None))
                .unwrap();
        }

        for id in ids {
            let pending = cache.pending(id);
            assert_eq!(pending.len(), 1, "{id}");
            assert_eq!(pending[0].player_id, id);
        }

        let mut snapshot = PlayerSnapshot::default();
        snapshot.unlocked.push(UnlockedRecord {
            player_id: "alice.smith".to_string(),
            achievement_id: "first_180".to_string(),
            unlocked_at: 1,
            game_id: None,
            confirmed: false,
        });
        cache.save_player("alice.smith", &snapshot).unwrap();
        assert!(cache.load_player("alice_smith").unlocked.is_empty());
    }

    #[test]
    fn test_similar_tenant_ids_do_not_share_files() {
        let dir = temp_dir("cache-tenant-collide");
        let dotted = LocalCache::for_tenant(&dir, "club.a");
        let underscored = LocalCache::for_tenant(&dir, "club_a");
        assert_ne!(dotted.root(), underscored.root());

        dotted
            .add_pending(&PendingSyncItem::new("p1", "first_180", None))
            .unwrap();
        assert!(underscored.pending("p1").is_empty());
    }
}
