//! Bridges the session store into Dioxus.
//!
//! `AuthProvider` owns the store and mirrors its state into a signal through
//! a store listener, so any component reading the context re-renders on
//! login and logout.

use std::rc::Rc;

use aidswap_shared::{AuthResponse, SessionUser};
use dioxus::prelude::*;

use crate::api_client::ApiClient;
use crate::config::ClientConfig;
use crate::guard::NavState;
use crate::session::{Session, SessionSnapshot, SessionStore};

/// Authentication context provided to the app
#[derive(Clone)]
pub struct AuthContext {
    store: Rc<SessionStore>,
    /// `None` until the stored session has been read.
    state: Signal<Option<SessionSnapshot>>,
    config: Rc<ClientConfig>,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.state == other.state
    }
}

/// Provider component that sets up auth context
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let store = use_hook(|| Rc::new(SessionStore::browser()));
    let config = use_hook(|| Rc::new(ClientConfig::from_env()));
    let mut state = use_signal(|| None::<SessionSnapshot>);

    let listener = use_hook({
        let store = Rc::clone(&store);
        move || {
            store.subscribe(move |snapshot| {
                let mut state = state;
                state.set(Some(snapshot.clone()));
            })
        }
    });

    use_drop({
        let store = Rc::clone(&store);
        move || {
            store.unsubscribe(listener);
        }
    });

    // Read the persisted session once mounted
    use_effect({
        let store = Rc::clone(&store);
        move || {
            let snapshot = store.snapshot();
            crate::log_debug!(
                "Restored session (authenticated: {})",
                snapshot.session().is_some()
            );
            state.set(Some(snapshot));
        }
    });

    use_context_provider(|| AuthContext {
        store,
        state,
        config,
    });

    children
}

impl AuthContext {
    /// Create an API client configured for the current session
    pub fn client(&self) -> ApiClient {
        ApiClient::new()
            .with_base_url(self.config.api_base_url.clone())
            .with_token(self.store.get_token())
    }

    pub fn nav_state(&self) -> NavState {
        match self.state.read().as_ref() {
            Some(snapshot) => NavState::from_snapshot(snapshot),
            None => NavState::Unknown,
        }
    }

    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.nav_state() == NavState::Authenticated
    }

    pub fn session(&self) -> Option<Session> {
        self.state.read().as_ref().and_then(SessionSnapshot::session)
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.session().map(|s| s.user)
    }

    /// Get the current user ID
    pub fn user_id(&self) -> Option<i64> {
        self.state.read().as_ref().and_then(SessionSnapshot::user_id)
    }

    /// Persist a login/register response. Listeners (and this context's
    /// signal) update before this returns.
    pub fn login(&self, response: &AuthResponse) {
        crate::log_info!("Signed in as {}", response.user.username);
        self.store.set_auth_data(response);
    }

    /// Logout and clear session
    pub fn logout(&self) {
        crate::log_info!("Signed out");
        self.store.logout();
    }
}
