mod app_layout;
mod route_guard;

pub use app_layout::AppLayout;
pub use route_guard::{NotFound, RouteGuard};
