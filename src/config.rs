//! Engine configuration.
//!
//! Read from `~/.oche/config.json` when present, then overridden from the
//! environment. Every field has a default, so an empty file or no file at all
//! is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::sync::cache::default_data_dir;

pub const CONFIG_FILE: &str = "config.json";

/// How unlock pushes are run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncDispatch {
    /// On a background thread per push (fire-and-forget).
    Background,
    /// On the calling thread, after the state change is committed.
    Inline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL of the remote store. `None` runs fully offline.
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 10,
            user_agent: format!("oche/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Wait between the first failed push and its single retry.
    pub retry_backoff_ms: u64,
    pub dispatch: SyncDispatch,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            retry_backoff_ms: 2000,
            dispatch: SyncDispatch::Background,
        }
    }
}

impl SyncConfig {
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Namespace for the local cache and the remote store.
    pub tenant: String,
    /// Root of the local cache. Defaults to `~/.oche`.
    pub data_dir: Option<PathBuf>,
    pub remote: RemoteConfig,
    pub sync: SyncConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tenant: "default".to_string(),
            data_dir: None,
            remote: RemoteConfig::default(),
            sync: SyncConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load from the default location with environment overrides applied.
    /// Problems are logged and the defaults used instead.
    pub fn load() -> Self {
        let mut config = match default_data_dir() {
            Ok(dir) => Self::from_file(&dir.join(CONFIG_FILE)).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring invalid config file");
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        if let Err(e) = config.apply_env(|key| std::env::var(key).ok()) {
            tracing::warn!(error = %e, "Ignoring invalid environment override");
        }
        config
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply `OCHE_*` overrides. `lookup` is `std::env::var` in production.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(tenant) = lookup("OCHE_TENANT").filter(|s| !s.is_empty()) {
            self.tenant = tenant;
        }
        if let Some(dir) = lookup("OCHE_DATA_DIR").filter(|s| !s.is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(url) = lookup("OCHE_REMOTE_URL") {
            self.remote.base_url = if url.is_empty() { None } else { Some(url) };
        }
        if let Some(value) = lookup("OCHE_RETRY_BACKOFF_MS") {
            self.sync.retry_backoff_ms = value.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "OCHE_RETRY_BACKOFF_MS",
                value,
            })?;
        }
        Ok(())
    }

    /// Resolved data directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| default_data_dir().ok())
            .unwrap_or_else(|| std::env::temp_dir().join("oche"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.tenant, "default");
        assert!(config.remote.base_url.is_none());
        assert_eq!(config.sync.retry_backoff(), Duration::from_secs(2));
        assert_eq!(config.sync.dispatch, SyncDispatch::Background);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "tenant": "club-7", "sync": { "dispatch": "inline" } }"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tenant, "club-7");
        assert_eq!(config.sync.dispatch, SyncDispatch::Inline);
        assert_eq!(config.sync.retry_backoff_ms, 2000);
        assert_eq!(config.remote.timeout_secs, 10);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("oche-no-such-config-12345.json");
        assert_eq!(EngineConfig::from_file(&path).unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("OCHE_TENANT", "league"),
            ("OCHE_REMOTE_URL", "https://darts.example"),
            ("OCHE_RETRY_BACKOFF_MS", "50"),
        ]
        .into_iter()
        .collect();

        let mut config = EngineConfig::default();
        config
            .apply_env(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.tenant, "league");
        assert_eq!(config.remote.base_url.as_deref(), Some("https://darts.example"));
        assert_eq!(config.sync.retry_backoff_ms, 50);
    }

    #[test]
    fn test_invalid_env_value_is_rejected() {
        let mut config = EngineConfig::default();
        let err = config
            .apply_env(|k| (k == "OCHE_RETRY_BACKOFF_MS").then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));
    }
}
