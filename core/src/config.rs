//! Where the client finds the API server.

use serde::Deserialize;

/// Environment variable holding the server origin, e.g. `https://codesandbox.io`.
pub const BASE_URL_ENV: &str = "SANDBOX_API_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Connection settings for `ApiClient`.
///
/// `base_url` is the server origin only; `API_ROOT` is appended per request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ClientSettings {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read settings from `SANDBOX_API_URL`, falling back to the local dev server.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
