//! Connection settings for the admin product API.

use reqwest::Url;

use crate::error::ConfigError;

/// Base URL used when nothing else is configured (local development server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const PRODUCTS_PREFIX: &str = "api/admin/products";

/// Where the admin API lives. Passed explicitly to [`crate::api::ProductApi`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(Self {
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a product endpoint, e.g. `endpoint("edit/42")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            PRODUCTS_PREFIX,
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
