//! Gateway configuration.
//!
//! One knob: the base address the remote API listens on. The default
//! matches the development deployment; on native builds the
//! `SHELFMARK_API_URL` environment variable overrides it.

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:5004";

/// Remote API location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address, without a trailing slash: "http://localhost:5004"
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a config with an explicit base address.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolve the config from the environment, falling back to the default.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(url) = std::env::var("SHELFMARK_API_URL") {
            if !url.is_empty() {
                return Self::new(url);
            }
        }
        Self::default()
    }

    /// Join a path onto the base address.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_dev_deployment() {
        assert_eq!(ApiConfig::default().base_url, "http://localhost:5004");
    }

    #[test]
    fn new_strips_trailing_slashes() {
        let config = ApiConfig::new("https://books.example.com/");
        assert_eq!(
            config.endpoint("/api/Book/3"),
            "https://books.example.com/api/Book/3"
        );
    }
}
