//! Client Configuration

/// API root used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Durable storage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Where the REST API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API root without a trailing slash, e.g. `http://localhost:5000/api`
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Configuration baked in at build time through `GREENSTEP_API_URL`.
    /// The browser has no process environment to read at runtime.
    pub fn from_build_env() -> Self {
        match option_env!("GREENSTEP_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Absolute URL for an API path such as `/goals`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
