//! Route guard: which routes a visitor may see in each session state.

use crate::routes::Route;
use crate::session::SessionSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Stored session not read yet.
    Unknown,
    Anonymous,
    Authenticated,
}

impl NavState {
    /// Partial state (a token without a user) counts as anonymous.
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        if snapshot.session().is_some() {
            Self::Authenticated
        } else {
            Self::Anonymous
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
    /// Show a loading screen until the state is known.
    Wait,
}

impl Route {
    /// Routes for visitors without a session.
    pub fn is_guest_only(&self) -> bool {
        matches!(self, Route::Login {} | Route::Register {})
    }
}

pub fn guard(state: NavState, route: &Route) -> GuardDecision {
    match state {
        NavState::Unknown => GuardDecision::Wait,
        NavState::Anonymous if route.is_guest_only() => GuardDecision::Render,
        NavState::Anonymous => GuardDecision::Redirect(Route::Login {}),
        NavState::Authenticated => match route {
            Route::Login {} | Route::Register {} | Route::NotFound { .. } => {
                GuardDecision::Redirect(Route::Feed {})
            }
            _ => GuardDecision::Render,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aidswap_shared::SessionUser;

    fn snapshot(token: Option<&str>, user: bool) -> SessionSnapshot {
        SessionSnapshot {
            token: token.map(str::to_string),
            user: user.then(|| SessionUser {
                id: 1,
                username: "amal".into(),
            }),
        }
    }

    #[test]
    fn anonymous_is_sent_to_login() {
        assert_eq!(
            guard(NavState::Anonymous, &Route::MyPosts {}),
            GuardDecision::Redirect(Route::Login {})
        );
        assert_eq!(
            guard(NavState::Anonymous, &Route::PostDetail { id: 7 }),
            GuardDecision::Redirect(Route::Login {})
        );
        assert_eq!(guard(NavState::Anonymous, &Route::Register {}), GuardDecision::Render);
        assert_eq!(guard(NavState::Anonymous, &Route::Login {}), GuardDecision::Render);
    }

    #[test]
    fn authenticated_skips_the_auth_pages() {
        assert_eq!(
            guard(NavState::Authenticated, &Route::Login {}),
            GuardDecision::Redirect(Route::Feed {})
        );
        assert_eq!(
            guard(NavState::Authenticated, &Route::PostDetail { id: 7 }),
            GuardDecision::Render
        );
    }

    #[test]
    fn unknown_routes_redirect_by_state() {
        let lost = Route::NotFound {
            segments: vec!["nowhere".into()],
        };
        assert_eq!(
            guard(NavState::Authenticated, &lost),
            GuardDecision::Redirect(Route::Feed {})
        );
        assert_eq!(
            guard(NavState::Anonymous, &lost),
            GuardDecision::Redirect(Route::Login {})
        );
    }

    #[test]
    fn unknown_state_waits() {
        assert_eq!(guard(NavState::Unknown, &Route::Feed {}), GuardDecision::Wait);
        assert_eq!(guard(NavState::Unknown, &Route::Login {}), GuardDecision::Wait);
    }

    #[test]
    fn state_follows_the_snapshot() {
        assert_eq!(NavState::from_snapshot(&snapshot(None, false)), NavState::Anonymous);
        assert_eq!(NavState::from_snapshot(&snapshot(Some("t"), false)), NavState::Anonymous);
        assert_eq!(
            NavState::from_snapshot(&snapshot(Some("t"), true)),
            NavState::Authenticated
        );
    }

    #[test]
    fn login_flips_the_decision_for_a_deep_link() {
        let target = Route::PostDetail { id: 7 };
        let before = NavState::from_snapshot(&snapshot(None, false));
        assert_eq!(guard(before, &target), GuardDecision::Redirect(Route::Login {}));

        let after = NavState::from_snapshot(&snapshot(Some("t"), true));
        assert_eq!(guard(after, &target), GuardDecision::Render);
        assert_eq!(target.to_string(), "/post/7");
    }
}
