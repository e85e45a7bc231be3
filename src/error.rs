//! Error types for the SearXNG client.

use std::fmt;

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Placeholder used when the response body cannot be read.
pub(crate) const UNREADABLE_BODY: &str = "[Could not read response body]";

/// Maximum number of characters of a malformed body kept for diagnostics.
pub(crate) const PREVIEW_LIMIT: usize = 200;

/// Diagnostic context attached to errors.
///
/// Carries enough to identify the failing request without leaking secrets:
/// the password is never stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The fully-resolved request URL.
    pub url: String,
    /// The configured backend base URL.
    pub searxng_url: Option<String>,
    /// Whether a forward proxy was active for this request.
    pub proxy: bool,
    /// The configured basic-auth username, if any.
    pub username: Option<String>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "url={}", self.url)?;
        if let Some(base) = &self.searxng_url {
            write!(f, ", searxng_url={}", base)?;
        }
        write!(f, ", proxy={}", self.proxy)?;
        if let Some(username) = &self.username {
            write!(f, ", username={}", username)?;
        }
        Ok(())
    }
}

/// Errors that can occur during a search call.
///
/// One variant per failure stage of the pipeline; an empty result set is not
/// an error and is reported as a regular message string instead.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Missing or malformed backend URL or client configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure reaching the backend (DNS, refused, TLS, timeout).
    #[error("Failed to reach SearXNG: {message} ({context})")]
    Network {
        /// Message of the underlying transport failure.
        message: String,
        /// Request diagnostics.
        context: ErrorContext,
    },

    /// Non-2xx HTTP status from the backend.
    #[error("SearXNG returned {status} {status_text}: {body} ({context})")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Canonical status text.
        status_text: String,
        /// Best-effort response body.
        body: String,
        /// Request diagnostics.
        context: ErrorContext,
    },

    /// Response body is not valid JSON.
    #[error("Failed to parse JSON response from SearXNG. URL: {url}. Response preview: {preview}")]
    Json {
        /// The request URL.
        url: String,
        /// Body truncated to the preview limit.
        preview: String,
    },

    /// Parsed JSON lacks the expected `results` field.
    #[error("SearXNG response has no 'results' field for query '{query}' ({context})")]
    MissingResults {
        /// The search query.
        query: String,
        /// Request diagnostics.
        context: ErrorContext,
    },
}

impl SearchError {
    /// Builds a JSON parse error with the body truncated for diagnostics.
    pub(crate) fn json_preview(url: impl Into<String>, body: &str) -> Self {
        let preview = if body.chars().count() > PREVIEW_LIMIT {
            let truncated: String = body.chars().take(PREVIEW_LIMIT).collect();
            format!("{}...", truncated)
        } else {
            body.to_string()
        };
        Self::Json {
            url: url.into(),
            preview,
        }
    }
}
