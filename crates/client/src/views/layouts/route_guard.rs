//! Outermost layout: applies the route guard to every route.

use dioxus::prelude::*;

use crate::auth_session::AuthContext;
use crate::guard::{guard, GuardDecision};
use crate::Route;

#[component]
pub fn RouteGuard() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let route = use_route::<Route>();

    // Track the route in a signal so the redirect effect re-runs on navigation
    let mut current = use_signal(|| route.clone());
    if *current.peek() != route {
        current.set(route.clone());
    }

    use_effect({
        let auth = auth.clone();
        move || {
            let state = auth.nav_state();
            let route = current.read().clone();
            if let GuardDecision::Redirect(to) = guard(state, &route) {
                crate::log_debug!("Guard: {:?} on {} -> {}", state, route, to);
                nav.replace(to);
            }
        }
    });

    match guard(auth.nav_state(), &route) {
        GuardDecision::Render => rsx! { Outlet::<Route> {} },
        GuardDecision::Wait => rsx! {
            div { class: "flex min-h-screen items-center justify-center text-gray-500", "Loading…" }
        },
        GuardDecision::Redirect(_) => rsx! {
            div { class: "flex min-h-screen items-center justify-center text-gray-500", "Redirecting..." }
        },
    }
}

/// Catch-all route. The guard always redirects away from it; this only
/// renders for the instant before the redirect lands.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "flex min-h-screen flex-col items-center justify-center text-gray-600",
            h2 { class: "mb-2 text-xl font-semibold", "Page not found" }
            p { class: "text-sm", "/{path}" }
        }
    }
}
