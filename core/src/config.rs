//! Base URL configuration for the request client.

/// Environment variable that overrides the backend base URL.
pub const API_URL_ENV: &str = "BOARD_API_URL";

/// Backend base URL used when no override is set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Resolved client configuration. Built once at startup and handed to
/// `RequestClient::new`; the client never consults the environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Pick the override when it is present and non-blank, else the default.
    pub fn resolve(override_url: Option<&str>) -> Self {
        match override_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    /// Resolve from `BOARD_API_URL`.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(API_URL_ENV).ok().as_deref())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
