//! Remote achievement store boundary.
//!
//! The remote store is eventually consistent and may be unreachable at any
//! time. Callers treat every method as fallible and never block gameplay on it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::RemoteConfig;
use crate::error::SyncError;

/// One achievement as reported by the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteAchievement {
    pub achievement_id: String,
    /// Server-confirmed unlock time (Unix seconds). Absent when locked.
    #[serde(default)]
    pub unlocked_at: Option<i64>,
    /// Partial progress percentage, 0..=100.
    #[serde(default)]
    pub progress: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RemotePlayerState {
    #[serde(default)]
    pub achievements: Vec<RemoteAchievement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub progress: f64,
    pub completed: bool,
}

/// Successful unlock push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushAck {
    Created,
    /// The remote already had it, e.g. from an earlier attempt whose response was lost.
    AlreadyUnlocked,
}

#[derive(Serialize)]
struct UnlockBody<'a> {
    achievement_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    game_id: Option<&'a str>,
}

#[derive(Serialize)]
struct ProgressBody<'a> {
    updates: &'a BTreeMap<String, ProgressUpdate>,
}

pub trait RemoteStore: Send + Sync {
    /// `GET` the player's achievement state.
    fn fetch_player(&self, player_id: &str) -> Result<RemotePlayerState, SyncError>;

    /// `POST` one unlock.
    fn push_unlock(
        &self,
        player_id: &str,
        achievement_id: &str,
        game_id: Option<&str>,
    ) -> Result<PushAck, SyncError>;

    /// `POST` a batch of progress updates.
    fn push_progress(
        &self,
        player_id: &str,
        updates: &BTreeMap<String, ProgressUpdate>,
    ) -> Result<(), SyncError>;
}

/// Stand-in used when no remote URL is configured. Every call fails, so
/// unlocks accumulate in the pending queue until a remote is set up.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineRemote;

impl RemoteStore for OfflineRemote {
    fn fetch_player(&self, _player_id: &str) -> Result<RemotePlayerState, SyncError> {
        Err(SyncError::Offline)
    }

    fn push_unlock(
        &self,
        _player_id: &str,
        _achievement_id: &str,
        _game_id: Option<&str>,
    ) -> Result<PushAck, SyncError> {
        Err(SyncError::Offline)
    }

    fn push_progress(
        &self,
        _player_id: &str,
        _updates: &BTreeMap<String, ProgressUpdate>,
    ) -> Result<(), SyncError> {
        Err(SyncError::Offline)
    }
}

/// JSON-over-HTTP remote store.
pub struct HttpRemoteStore {
    agent: ureq::Agent,
    base_url: String,
    tenant: String,
    user_agent: String,
}

impl HttpRemoteStore {
    pub fn new(base_url: &str, tenant: &str, config: &RemoteConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            tenant: tenant.to_string(),
            user_agent: config.user_agent.clone(),
        }
    }

    fn player_url(&self, player_id: &str) -> String {
        format!(
            "{}/tenants/{}/players/{}/achievements",
            self.base_url,
            urlencoding::encode(&self.tenant),
            urlencoding::encode(player_id)
        )
    }
}

impl RemoteStore for HttpRemoteStore {
    fn fetch_player(&self, player_id: &str) -> Result<RemotePlayerState, SyncError> {
        let state: RemotePlayerState = self
            .agent
            .get(&self.player_url(player_id))
            .set("User-Agent", &self.user_agent)
            .call()?
            .into_json()
            .map_err(|e| SyncError::Decode(e.to_string()))?;
        Ok(state)
    }

    fn push_unlock(
        &self,
        player_id: &str,
        achievement_id: &str,
        game_id: Option<&str>,
    ) -> Result<PushAck, SyncError> {
        let url = format!("{}/unlock", self.player_url(player_id));
        let result = self
            .agent
            .post(&url)
            .set("User-Agent", &self.user_agent)
            .send_json(UnlockBody {
                achievement_id,
                game_id,
            });

        match result {
            Ok(_) => Ok(PushAck::Created),
            Err(ureq::Error::Status(409, _)) => Ok(PushAck::AlreadyUnlocked),
            Err(e) => Err(e.into()),
        }
    }

    fn push_progress(
        &self,
        player_id: &str,
        updates: &BTreeMap<String, ProgressUpdate>,
    ) -> Result<(), SyncError> {
        let url = format!("{}/progress", self.player_url(player_id));
        self.agent
            .post(&url)
            .set("User-Agent", &self.user_agent)
            .send_json(ProgressBody { updates })?;
        Ok(())
    }
}
