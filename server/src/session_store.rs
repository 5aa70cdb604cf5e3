use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use common::games::letter_catch::Session;
use common::{GameError, SessionId};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::Mutex;

/// Owner of all sessions. Callers only ever see clones; every change goes
/// through `update`, which holds the session's lock for the whole
/// read-evaluate-commit cycle.
pub trait SessionStore: Send + Sync + 'static {
    /// Returns `false` (and keeps the existing entry) if the id is taken.
    fn insert(&self, session: Session) -> bool;

    fn get(&self, id: &SessionId) -> Option<Session>;

    /// Runs `transition` against the current state and commits the returned
    /// session if it succeeds. Calls for the same id are serialized.
    fn update<R, F>(&self, id: &SessionId, transition: F) -> Result<R, GameError>
    where
        F: FnOnce(&Session) -> Result<(Session, R), GameError>;

    /// All sessions in insertion order.
    fn sessions(&self) -> Vec<Session>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct StoredSession {
    sequence: u64,
    session: Arc<Mutex<Session>>,
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<SessionId, StoredSession>,
    next_sequence: AtomicU64,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&self, id: &SessionId) -> Option<Arc<Mutex<Session>>> {
        // Clone the handle so the shard lock is released before the session lock is taken.
        self.sessions
            .get(id)
            .map(|entry| Arc::clone(&entry.value().session))
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, session: Session) -> bool {
        match self.sessions.entry(session.id().clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(StoredSession {
                    sequence: self.next_sequence.fetch_add(1, Ordering::Relaxed),
                    session: Arc::new(Mutex::new(session)),
                });
                true
            }
        }
    }

    fn get(&self, id: &SessionId) -> Option<Session> {
        self.handle(id).map(|session| session.lock().clone())
    }

    fn update<R, F>(&self, id: &SessionId, transition: F) -> Result<R, GameError>
    where
        F: FnOnce(&Session) -> Result<(Session, R), GameError>,
    {
        let handle = self
            .handle(id)
            .ok_or_else(|| GameError::NotFound(id.clone()))?;
        let mut current = handle.lock();
        let (next, outcome) = transition(&*current)?;
        *current = next;
        Ok(outcome)
    }

    fn sessions(&self) -> Vec<Session> {
        let mut handles: Vec<(u64, Arc<Mutex<Session>>)> = self
            .sessions
            .iter()
            .map(|entry| (entry.value().sequence, Arc::clone(&entry.value().session)))
            .collect();
        handles.sort_by_key(|(sequence, _)| *sequence);
        handles
            .iter()
            .map(|(_, session)| session.lock().clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
