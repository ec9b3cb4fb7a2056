//! In-memory session registry

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::retrieval::SessionIndex;
use crate::types::{SessionMeta, SessionSummary};

use super::Session;

/// Process-lifetime registry of sessions, keyed by identifier.
///
/// Uploads insert under distinct fresh keys and never contend. Per-entry
/// mutation goes through the session's own conversation lock; the registry
/// itself only inserts, looks up, and removes.
pub struct SessionStore {
    sessions: DashMap<Uuid, Session>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Create a session for an uploaded document.
    ///
    /// Generates a fresh identifier and records the creation timestamp;
    /// `chunks_count` is taken from the index.
    pub fn create(&self, filename: String, pages: u32, index: SessionIndex) -> SessionMeta {
        let meta = SessionMeta::new(filename, index.len() as u32, pages);
        let session = Session::new(meta.clone(), Arc::new(index));

        self.sessions.insert(meta.session_id, session);
        tracing::info!(
            "Created session {} for '{}' ({} chunks)",
            meta.session_id,
            meta.filename,
            meta.chunks_count
        );

        meta
    }

    /// Look up a session by identifier
    pub fn get(&self, id: &Uuid) -> Option<Session> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    /// Summaries of all live sessions
    pub fn list(&self) -> Vec<SessionSummary> {
        self.sessions
            .iter()
            .map(|entry| SessionSummary::from(&entry.value().meta))
            .collect()
    }

    /// Remove a session, releasing its index and conversation state
    pub fn delete(&self, id: &Uuid) -> Option<SessionMeta> {
        let removed = self.sessions.remove(id).map(|(_, session)| session.meta);
        if let Some(ref meta) = removed {
            tracing::info!("Deleted session {} ('{}')", meta.session_id, meta.filename);
        }
        removed
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Evict sessions idle longer than `ttl`, returning how many were removed
    pub fn evict_idle(&self, ttl: Duration) -> usize {
        let expired: Vec<Uuid> = self
            .sessions
            .iter()
            .filter(|entry| entry.value().idle_for() >= ttl)
            .map(|entry| *entry.key())
            .collect();

        let mut evicted = 0;
        for id in expired {
            if self.sessions.remove(&id).is_some() {
                evicted += 1;
            }
        }

        if evicted > 0 {
            tracing::info!("Evicted {} idle session(s)", evicted);
        }
        evicted
    }

    /// Spawn the background eviction sweep. Returns `None` when the TTL is
    /// zero, which disables eviction entirely.
    pub fn spawn_sweeper(
        store: Arc<SessionStore>,
        config: &SessionConfig,
    ) -> Option<tokio::task::JoinHandle<()>> {
        if config.idle_ttl_secs == 0 {
            tracing::info!("Session eviction disabled (TTL is 0)");
            return None;
        }

        let ttl = Duration::from_secs(config.idle_ttl_secs);
        let interval = Duration::from_secs(config.sweep_interval_secs.max(1));

        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                store.evict_idle(ttl);
            }
        }))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
