//! Cross-platform logging.
//!
//! The `log_*!` macros format their arguments once and hand the line to the
//! platform backend:
//! - Web: `web_sys::console` (so messages land in the browser devtools)
//! - Desktop: `tracing`, filtered by the subscriber installed in `main`

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[cfg(target_arch = "wasm32")]
pub fn emit(level: LogLevel, msg: &str) {
    let value = msg.into();
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&value),
        LogLevel::Info => web_sys::console::log_1(&value),
        LogLevel::Warn => web_sys::console::warn_1(&value),
        LogLevel::Error => web_sys::console::error_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn emit(level: LogLevel, msg: &str) {
    match level {
        LogLevel::Debug => tracing::debug!("{}", msg),
        LogLevel::Info => tracing::info!("{}", msg),
        LogLevel::Warn => tracing::warn!("{}", msg),
        LogLevel::Error => tracing::error!("{}", msg),
    }
}

/// Install the desktop log subscriber. `RUST_LOG` overrides the default
/// filter. On the web the console needs no setup.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("aidswap_client=debug"));
    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init() {}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Warn, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::LogLevel::Error, &format!($($arg)*))
    };
}
