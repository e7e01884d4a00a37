//! Process-wide session store.
//!
//! Each browser session owns an independent [`GameState`]; nothing is
//! shared or persisted. The store is plain in-memory bookkeeping:
//! create a session, look its state up per interaction, drop it when the
//! session ends. Single-threaded by design, so no locking.

use rustc_hash::FxHashMap;

use crate::core::GameState;
use crate::game::Duel;

/// Unique identifier for a live session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// In-memory store of independent game sessions.
///
/// ## Example
///
/// ```
/// use territory_duel::game::Duel;
/// use territory_duel::session::SessionStore;
///
/// let duel = Duel::us_states();
/// let mut store = SessionStore::new();
///
/// let id = store.open(&duel);
/// assert!(store.state(id).is_some());
///
/// store.end(id);
/// assert!(store.state(id).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    sessions: FxHashMap<SessionId, GameState>,
    next_id: u64,
}

impl SessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new session with a fresh state dated today.
    pub fn open(&mut self, duel: &Duel) -> SessionId {
        self.insert(duel.open_session())
    }

    /// Insert a pre-built state (used by tests to pin the opening day).
    pub fn insert(&mut self, state: GameState) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.sessions.insert(id, state);
        id
    }

    /// Get a session's state.
    #[must_use]
    pub fn state(&self, id: SessionId) -> Option<&GameState> {
        self.sessions.get(&id)
    }

    /// Get a session's state mutably, for applying commands.
    pub fn state_mut(&mut self, id: SessionId) -> Option<&mut GameState> {
        self.sessions.get_mut(&id)
    }

    /// Tear a session down, dropping its state.
    ///
    /// Returns true if the session existed.
    pub fn end(&mut self, id: SessionId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check if no sessions are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
