//! Local cache and remote synchronization.

pub mod cache;
pub mod reconciler;
pub mod remote;

pub use cache::{LocalCache, PendingSyncItem};
pub use reconciler::{merge_remote, PushOutcome, ReplayReport, SyncReconciler};
pub use remote::{HttpRemoteStore, OfflineRemote, PushAck, RemotePlayerState, RemoteStore};
