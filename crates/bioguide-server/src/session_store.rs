//! Bounded in-memory session registry.

use std::collections::{HashMap, VecDeque};

use parking_lot::RwLock;
use tracing::debug;

use bioguide_dialogue::Session;

struct Inner {
    sessions: HashMap<String, Session>,
    /// Session ids, oldest first.
    order: VecDeque<String>,
}

/// Live sessions by id, capped at `capacity`.
///
/// Inserting past the cap evicts the oldest sessions. The lock is only held
/// inside these methods, never across an await.
pub struct SessionStore {
    capacity: usize,
    inner: RwLock<Inner>,
}

impl SessionStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: RwLock::new(Inner {
                sessions: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Register a session, evicting the oldest ones when full.
    pub fn insert(&self, session: Session) {
        let mut inner = self.inner.write();
        while inner.sessions.len() >= self.capacity {
            let Some(oldest) = inner.order.pop_front() else { break };
            if inner.sessions.remove(&oldest).is_some() {
                debug!("Evicted session {}", oldest);
            }
        }
        inner.order.push_back(session.id.clone());
        inner.sessions.insert(session.id.clone(), session);
    }

    /// Run `f` on a session, if it exists.
    pub fn read<R>(&self, id: &str, f: impl FnOnce(&Session) -> R) -> Option<R> {
        self.inner.read().sessions.get(id).map(f)
    }

    /// Run `f` on a session mutably, if it exists.
    pub fn update<R>(&self, id: &str, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.inner.write().sessions.get_mut(id).map(f)
    }

    pub fn len(&self) -> usize {
        self.inner.read().sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_session_evicted_at_capacity() {
        let store = SessionStore::new(2);
        let first = Session::new(None);
        let second = Session::new(None);
        let third = Session::new(None);
        let (a, b, c) = (first.id.clone(), second.id.clone(), third.id.clone());

        store.insert(first);
        store.insert(second);
        store.insert(third);

        assert_eq!(store.len(), 2);
        assert!(store.read(&a, |_| ()).is_none());
        assert!(store.read(&b, |_| ()).is_some());
        assert!(store.read(&c, |_| ()).is_some());
    }

    #[test]
    fn test_update_mutates_in_place() {
        let store = SessionStore::new(4);
        let session = Session::new(None);
        let id = session.id.clone();
        store.insert(session);

        store.update(&id, |s| s.begin_turn("ready")).unwrap().unwrap();
        assert_eq!(store.read(&id, |s| s.is_pending()), Some(true));
        assert!(store.update("missing", |_| ()).is_none());
    }
}
