//! Error types for the MealDB source.

use thiserror::Error;
use url::Url;

/// Main error type for source operations.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Configuration errors (missing access key, invalid base URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport errors (connectivity, timeouts, body decoding), from the HTTP client.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status from the upstream API, propagated without interpretation.
    #[error("Upstream returned HTTP {status}")]
    Status { status: reqwest::StatusCode },
}

/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

impl From<reqwest::Error> for SourceError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(sanitize_reqwest_error(&value))
    }
}

/// Strip secrets from a URL before it can reach logs or error text.
///
/// Credentials, query and fragment are dropped, and the upstream access key is masked. The key
/// is the path segment right after the API version segment (`/api/json/v1/{key}/...`).
#[must_use]
pub fn redact_url(url: &Url) -> String {
    let mut u = url.clone();
    let _ = u.set_username("");
    let _ = u.set_password(None);
    u.set_query(None);
    u.set_fragment(None);

    let masked = u.path_segments().map(|segments| {
        let mut out: Vec<&str> = Vec::new();
        let mut mask_next = false;
        for segment in segments {
            out.push(if mask_next { "***" } else { segment });
            mask_next = segment.eq_ignore_ascii_case("v1");
        }
        out.join("/")
    });
    if let Some(path) = masked {
        u.set_path(&path);
    }
    u.to_string()
}

/// Rewrite any URL embedded in a reqwest error message through [`redact_url`].
#[must_use]
pub fn sanitize_reqwest_error(e: &reqwest::Error) -> String {
    let mut msg = e.to_string();
    if let Some(u) = e.url() {
        msg = msg.replace(u.as_str(), &redact_url(u));
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::redact_url;
    use url::Url;

    #[test]
    fn redact_masks_key_segment_and_drops_query() {
        let url = Url::parse("https://www.themealdb.com/api/json/v1/12345/search.php?s=fish#top")
            .expect("url");
        assert_eq!(
            redact_url(&url),
            "https://www.themealdb.com/api/json/v1/***/search.php"
        );
    }

    #[test]
    fn redact_drops_credentials() {
        let url = Url::parse("https://user:pw@example.com/api/json/v1/k/lookup.php").expect("url");
        let redacted = redact_url(&url);
        assert!(!redacted.contains("user"));
        assert!(!redacted.contains("pw"));
        assert!(redacted.ends_with("/api/json/v1/***/lookup.php"));
    }

    #[test]
    fn redact_leaves_unkeyed_paths_alone() {
        let url = Url::parse("https://example.com/a/b?q=1").expect("url");
        assert_eq!(redact_url(&url), "https://example.com/a/b");
    }
}
