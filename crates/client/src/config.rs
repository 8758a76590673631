//! Client configuration.
//!
//! The only setting is where the REST API lives:
//! - Web: `AIDSWAP_API_URL` at build time, else `/api` (same origin, proxied
//!   by the dev server).
//! - Desktop: `AIDSWAP_API_URL` at run time, then at build time, else
//!   `http://localhost:3000/api`.

/// Environment variable naming the API base URL.
pub const API_URL_ENV: &str = "AIDSWAP_API_URL";

#[cfg(target_arch = "wasm32")]
const DEFAULT_API_URL: &str = "/api";

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Resolve the configuration for the current platform.
    pub fn from_env() -> Self {
        let runtime = runtime_api_url();
        let build_time = option_env!("AIDSWAP_API_URL").map(str::to_string);
        let mut config = Self::resolve(runtime, build_time);
        config.api_base_url = absolutize(&config.api_base_url);
        config
    }

    fn resolve(runtime: Option<String>, build_time: Option<String>) -> Self {
        let api_base_url = [runtime, build_time]
            .into_iter()
            .flatten()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .find(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { api_base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_api_url() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_api_url() -> Option<String> {
    std::env::var(API_URL_ENV).ok()
}

/// reqwest needs absolute URLs; anchor a path-only base at the page origin.
#[cfg(target_arch = "wasm32")]
fn absolutize(base: &str) -> String {
    if !base.starts_with('/') {
        return base.to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}{}", origin.trim_end_matches('/'), base))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn absolutize(base: &str) -> String {
    base.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_value_wins_and_is_normalised() {
        let cfg = ClientConfig::resolve(
            Some(" https://aid.example.org/api/ ".into()),
            Some("https://build.example.org".into()),
        );
        assert_eq!(cfg.api_base_url, "https://aid.example.org/api");
    }

    #[test]
    fn blank_values_fall_through_to_default() {
        let cfg = ClientConfig::resolve(Some("  ".into()), None);
        assert_eq!(cfg, ClientConfig::default());

        let cfg = ClientConfig::resolve(None, Some("/v2".into()));
        assert_eq!(cfg.api_base_url, "/v2");
    }
}
