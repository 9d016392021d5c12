//! Source configuration.
//!
//! The upstream API keys requests through the URL path rather than a header: the base URL is
//! `{host}/api/json/v1/{key}`. The access key is the only secret this crate consumes, injected
//! via the process environment.

use crate::error::{Result, SourceError};

/// Environment variable holding the upstream access key.
pub const API_KEY_ENV: &str = "MEALDB_API_KEY";

/// Environment variable overriding the upstream host (scheme + authority).
pub const API_HOST_ENV: &str = "MEALDB_API_HOST";

/// Public upstream host.
pub const DEFAULT_API_HOST: &str = "https://www.themealdb.com";

/// Configuration for the MealDB source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Upstream access key, embedded in the base URL path.
    pub api_key: String,
    /// Upstream host; overridable for tests and proxies.
    pub api_host: String,
}

impl SourceConfig {
    /// Build a config against the default public host.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_host: DEFAULT_API_HOST.to_string(),
        }
    }

    /// Build a config against a non-default host.
    #[must_use]
    pub fn with_host(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_host: api_host.into(),
        }
    }

    /// Read the config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if `MEALDB_API_KEY` is unset or empty.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                SourceError::Config(format!(
                    "{API_KEY_ENV} must be set to an upstream access key"
                ))
            })?;
        let api_host =
            std::env::var(API_HOST_ENV).unwrap_or_else(|_| DEFAULT_API_HOST.to_string());
        Ok(Self { api_key, api_host })
    }

    /// Compose the keyed base URL that endpoint paths are appended to.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!(
            "{}/api/json/v1/{}",
            self.api_host.trim_end_matches('/'),
            self.api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SourceConfig;

    #[test]
    fn base_url_embeds_host_version_and_key() {
        let config = SourceConfig::new("12345");
        assert_eq!(
            config.base_url(),
            "https://www.themealdb.com/api/json/v1/12345"
        );
    }

    #[test]
    fn base_url_tolerates_trailing_slash_on_host() {
        let config = SourceConfig::with_host("k", "http://127.0.0.1:9999/");
        assert_eq!(config.base_url(), "http://127.0.0.1:9999/api/json/v1/k");
    }
}
