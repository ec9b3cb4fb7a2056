//! Session lifecycle: the binding between an uploaded document's retrieval
//! index and its ongoing conversation

mod store;

pub use store::SessionStore;

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, MutexGuard};

use crate::retrieval::SessionIndex;
use crate::types::SessionMeta;

/// One question/answer exchange
#[derive(Debug, Clone)]
pub struct Turn {
    /// The question as asked
    pub question: String,
    /// The generated answer
    pub answer: String,
}

/// Append-only conversation history for one session
#[derive(Debug, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Record a completed exchange
    pub fn append(&mut self, question: String, answer: String) {
        self.turns.push(Turn { question, answer });
    }

    /// All prior turns, oldest first
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }
}

/// Live session handle.
///
/// Cheap to clone; the metadata is immutable, the index is immutable after
/// build, and the conversation is guarded by an async mutex so concurrent
/// chat calls against the same session serialize rather than race.
#[derive(Clone)]
pub struct Session {
    /// Immutable creation metadata
    pub meta: SessionMeta,
    /// Vector index over this session's document
    pub index: Arc<SessionIndex>,
    conversation: Arc<Mutex<Conversation>>,
    last_active: Arc<parking_lot::Mutex<Instant>>,
}

impl Session {
    /// Create a session around a freshly built index
    pub fn new(meta: SessionMeta, index: Arc<SessionIndex>) -> Self {
        Self {
            meta,
            index,
            conversation: Arc::new(Mutex::new(Conversation::default())),
            last_active: Arc::new(parking_lot::Mutex::new(Instant::now())),
        }
    }

    /// Acquire the conversation lock.
    ///
    /// Held across the retrieval and generation span of a chat call, which
    /// is the per-session serialization point.
    pub async fn lock_conversation(&self) -> MutexGuard<'_, Conversation> {
        self.conversation.lock().await
    }

    /// Mark the session as recently used
    pub fn touch(&self) {
        *self.last_active.lock() = Instant::now();
    }

    /// Time since the session was last used
    pub fn idle_for(&self) -> Duration {
        self.last_active.lock().elapsed()
    }
}
