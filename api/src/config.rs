//! Endpoint configuration for the categories service.

/// Where the service listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Scope under which every category route is mounted.
pub const CATEGORIES_PATH: &str = "/categories";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config for `base_url`. Trailing slashes are dropped so paths
    /// can be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// `{base}/categories` followed by `suffix` (which carries its own slashes).
    pub fn categories_url(&self, suffix: &str) -> String {
        format!("{}{}{}", self.base_url, CATEGORIES_PATH, suffix)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
