//! Session-scoped conversation history store.
//!
//! `SessionStore` maps a session id to its ordered list of turns, backed by
//! `DashMap`. Histories are cloned on read so no `DashMap` guard is ever held
//! across an `.await`.
//!
//! Each history is bounded: once it grows past `max_turns`, the oldest turns
//! are dropped first.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use taleweaver_types::chat::Turn;

/// Default number of turns retained per session.
pub const DEFAULT_MAX_TURNS: usize = 10;

/// Held for the duration of one exchange when same-session requests are
/// sequenced. Dropping it lets the next request for that session proceed.
pub type SessionGuard = OwnedMutexGuard<()>;

#[derive(Debug)]
struct Inner {
    sessions: DashMap<String, Vec<Turn>>,
    locks: DashMap<String, Arc<Mutex<()>>>,
    max_turns: usize,
}

/// Concurrent, bounded, per-session turn history.
///
/// Cloning produces a shared view of the same underlying table (backed by `Arc`).
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// Create an empty store keeping at most `max_turns` turns per session.
    pub fn new(max_turns: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                sessions: DashMap::new(),
                locks: DashMap::new(),
                max_turns,
            }),
        }
    }

    /// Maximum turns retained per session.
    pub fn max_turns(&self) -> usize {
        self.inner.max_turns
    }

    /// Return the history for `session_id`, registering an empty one if absent.
    pub fn get_or_create(&self, session_id: &str) -> Vec<Turn> {
        self.inner
            .sessions
            .entry(session_id.to_string())
            .or_default()
            .clone()
    }

    /// Append a turn, creating the session if needed, then evict from the
    /// front until the history fits in `max_turns`.
    pub fn append(&self, session_id: &str, turn: Turn) {
        let mut history = self
            .inner
            .sessions
            .entry(session_id.to_string())
            .or_default();
        push_bounded(&mut history, turn, self.inner.max_turns);
    }

    /// Append a turn only if the session is still registered.
    ///
    /// Returns `false` when the session was cleared in the meantime; the
    /// turn is dropped and the session is not re-created.
    pub fn append_if_present(&self, session_id: &str, turn: Turn) -> bool {
        match self.inner.sessions.get_mut(session_id) {
            Some(mut history) => {
                push_bounded(&mut history, turn, self.inner.max_turns);
                true
            }
            None => false,
        }
    }

    /// The last `n` turns in chronological order (fewer if the history is shorter).
    pub fn recent(&self, session_id: &str, n: usize) -> Vec<Turn> {
        self.inner
            .sessions
            .get(session_id)
            .map(|history| {
                let start = history.len().saturating_sub(n);
                history[start..].to_vec()
            })
            .unwrap_or_default()
    }

    /// Full history for `session_id`; empty if the session is unknown.
    pub fn get(&self, session_id: &str) -> Vec<Turn> {
        self.inner
            .sessions
            .get(session_id)
            .map(|history| history.value().clone())
            .unwrap_or_default()
    }

    /// Remove a session entirely. Clearing an unknown session is a no-op.
    pub fn clear(&self, session_id: &str) {
        self.inner.sessions.remove(session_id);
        // Keep the lock while an exchange still holds or awaits it.
        self.inner
            .locks
            .remove_if(session_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    /// Whether a session is registered.
    pub fn contains(&self, session_id: &str) -> bool {
        self.inner.sessions.contains_key(session_id)
    }

    /// Snapshot of all registered session ids.
    pub fn session_ids(&self) -> Vec<String> {
        self.inner.sessions.iter().map(|r| r.key().clone()).collect()
    }

    /// Number of registered sessions.
    pub fn len(&self) -> usize {
        self.inner.sessions.len()
    }

    /// Whether no sessions are registered.
    pub fn is_empty(&self) -> bool {
        self.inner.sessions.is_empty()
    }

    /// Wait for exclusive access to `session_id`.
    ///
    /// Requests that hold the returned guard from `recent()` through
    /// `append()` complete in arrival order for a given session.
    pub async fn sequence(&self, session_id: &str) -> SessionGuard {
        let lock = self
            .inner
            .locks
            .entry(session_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }
}

fn push_bounded(history: &mut Vec<Turn>, turn: Turn, max_turns: usize) {
    history.push(turn);
    let len = history.len();
    if len > max_turns {
        history.drain(..len - max_turns);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TURNS)
    }
}
