//! AidSwap client - Dioxus web application
//!
//! Browser (and desktop) front end for the AidSwap aid-exchange platform:
//! post what you have or need, respond to posts, message other users and
//! rate the help you received. All business logic lives behind the REST
//! API; this crate holds the session, toasts, routing and views.

#![allow(non_snake_case)]

pub mod logging;

pub mod api_client;
pub mod auth_session;
pub mod config;
pub mod format;
pub mod guard;
pub mod notifications;
pub mod session;
pub mod storage;
pub mod toast;
pub mod workflow;

pub mod components;
pub mod hooks;
pub mod routes;
pub mod views;

pub use api_client::{AidApi, ApiClient};
pub use auth_session::{AuthContext, AuthProvider};
pub use routes::Route;
