//! Observable session store.
//!
//! Single source of truth for "who is logged in". The token and the user
//! identity live in durable storage under the `token` and `user` keys, so a
//! reload picks the session back up. Every write notifies the registered
//! listeners synchronously, before the write method returns.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use aidswap_shared::{AuthResponse, SessionUser};

use crate::storage::{BrowserStorage, KeyValueStore};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// A complete session: both halves present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// What storage currently holds. Either half may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The session, if and only if token and user are both present.
    pub fn session(&self) -> Option<Session> {
        match (&self.token, &self.user) {
            (Some(token), Some(user)) => Some(Session {
                token: token.clone(),
                user: user.clone(),
            }),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.session().map(|s| s.user.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(&SessionSnapshot)>;

pub struct SessionStore {
    storage: Box<dyn KeyValueStore>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener: Cell<u64>,
}

impl SessionStore {
    pub fn new(storage: impl KeyValueStore + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
        }
    }

    /// Store backed by the platform's durable storage.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    pub fn get_token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.write_token(token);
        self.notify();
    }

    pub fn remove_token(&self) {
        self.storage.remove(TOKEN_KEY);
        self.notify();
    }

    pub fn get_user(&self) -> Option<SessionUser> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                crate::log_warn!("Ignoring unreadable stored user: {}", e);
                None
            }
        }
    }

    pub fn set_user(&self, user: &SessionUser) {
        self.write_user(user);
        self.notify();
    }

    pub fn remove_user(&self) {
        self.storage.remove(USER_KEY);
        self.notify();
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            token: self.get_token(),
            user: self.get_user(),
        }
    }

    /// The complete session, or `None` for partial or empty state.
    pub fn session(&self) -> Option<Session> {
        self.snapshot().session()
    }

    /// Clear token and user together. Listeners hear about it once.
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.notify();
    }

    /// Store the token and user from a login/register response together.
    /// Listeners hear about it once.
    pub fn set_auth_data(&self, response: &AuthResponse) {
        self.write_token(&response.token);
        self.write_user(&response.user);
        self.notify();
    }

    /// Register a listener called after every write with the new state.
    pub fn subscribe(&self, listener: impl Fn(&SessionSnapshot) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` if the listener was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    fn write_token(&self, token: &str) {
        if !self.storage.set(TOKEN_KEY, token) {
            crate::log_warn!("Session token could not be persisted");
        }
    }

    fn write_user(&self, user: &SessionUser) {
        match serde_json::to_string(user) {
            Ok(json) => {
                if !self.storage.set(USER_KEY, &json) {
                    crate::log_warn!("Session user could not be persisted");
                }
            }
            Err(e) => crate::log_error!("Failed to encode session user: {}", e),
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        // Listeners may (un)subscribe while being called
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn user(id: i64) -> SessionUser {
        SessionUser {
            id,
            username: format!("user{id}"),
        }
    }

    fn auth_response(id: i64) -> AuthResponse {
        AuthResponse {
            message: Some("ok".into()),
            user: user(id),
            token: format!("token-{id}"),
        }
    }

    fn counting(store: &SessionStore) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        store.subscribe(move |_| c.set(c.get() + 1));
        count
    }

    #[test]
    fn authenticated_tracks_last_token_write() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(!store.is_authenticated());

        store.set_token("a");
        assert!(store.is_authenticated());
        store.set_token("a");
        assert!(store.is_authenticated());
        assert_eq!(store.get_token().as_deref(), Some("a"));

        store.remove_token();
        assert!(!store.is_authenticated());
        store.remove_token();
        assert!(!store.is_authenticated());

        store.set_token("b");
        assert!(store.is_authenticated());
        assert_eq!(store.get_token().as_deref(), Some("b"));
    }

    #[test]
    fn empty_token_is_not_a_session() {
        let store = SessionStore::new(MemoryStorage::new());
        store.set_token("");
        assert!(!store.is_authenticated());
    }

    #[test]
    fn logout_clears_everything_from_any_state() {
        let setups: Vec<Box<dyn Fn(&SessionStore)>> = vec![
            Box::new(|_| {}),
            Box::new(|s| s.set_token("t")),
            Box::new(|s| s.set_user(&user(1))),
            Box::new(|s| s.set_auth_data(&auth_response(2))),
        ];

        for setup in setups {
            let store = SessionStore::new(MemoryStorage::new());
            setup(&store);
            store.logout();
            assert_eq!(store.get_token(), None);
            assert_eq!(store.get_user(), None);
            assert_eq!(store.session(), None);
        }
    }

    #[test]
    fn logout_and_login_notify_once() {
        let store = SessionStore::new(MemoryStorage::new());
        let count = counting(&store);

        store.set_auth_data(&auth_response(5));
        assert_eq!(count.get(), 1);

        store.logout();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn listeners_see_the_new_state_before_write_returns() {
        let store = SessionStore::new(MemoryStorage::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        store.subscribe(move |snap| s.borrow_mut().push(snap.is_authenticated()));

        store.set_token("x");
        assert_eq!(*seen.borrow(), vec![true]);
        store.remove_token();
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn every_listener_is_notified_and_unsubscribe_stops_it() {
        let store = SessionStore::new(MemoryStorage::new());
        let first = counting(&store);
        let second = Rc::new(Cell::new(0));
        let c = Rc::clone(&second);
        let id = store.subscribe(move |_| c.set(c.get() + 1));

        store.set_user(&user(3));
        assert_eq!((first.get(), second.get()), (1, 1));

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.remove_user();
        assert_eq!((first.get(), second.get()), (2, 1));
    }

    #[test]
    fn listener_may_subscribe_during_notification() {
        let store = Rc::new(SessionStore::new(MemoryStorage::new()));
        let inner = Rc::clone(&store);
        store.subscribe(move |_| {
            inner.subscribe(|_| {});
        });
        store.set_token("t");
        store.set_token("t");
    }

    #[test]
    fn partial_state_is_not_a_session() {
        let store = SessionStore::new(MemoryStorage::new());
        store.set_token("only-token");
        assert!(store.is_authenticated());
        assert_eq!(store.session(), None);

        store.set_user(&user(9));
        let session = store.session().unwrap();
        assert_eq!(session.token, "only-token");
        assert_eq!(session.user.id, 9);
        assert_eq!(store.snapshot().user_id(), Some(9));
    }

    #[test]
    fn session_survives_a_new_store_over_the_same_storage() {
        let storage = Rc::new(MemoryStorage::new());
        SessionStore::new(Rc::clone(&storage)).set_auth_data(&auth_response(4));

        let reloaded = SessionStore::new(Rc::clone(&storage));
        assert_eq!(reloaded.get_user(), Some(user(4)));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("token-4"));
        assert_eq!(
            storage.get(USER_KEY).as_deref(),
            Some(r#"{"id":4,"username":"user4"}"#)
        );
    }

    #[test]
    fn corrupt_user_reads_as_absent() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set(USER_KEY, "{not json");
        let store = SessionStore::new(storage);
        assert_eq!(store.get_user(), None);
    }
}
