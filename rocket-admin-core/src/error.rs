/// Structured error types for rocket-admin-core.
///
/// Uses `thiserror` so library consumers get tagged, composable errors.
/// Binary crates report these at the top level and map every kind to a
/// non-zero exit; no kind is retried or recovered.

use thiserror::Error;

/// Longest slice of a raw response body carried inside a parse error.
const SNIPPET_LEN: usize = 200;

/// Main error type for backend invocations
#[derive(Error, Debug)]
pub enum InvokeError {
    /// Request could not be sent or the response body could not be read
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        source: reqwest::Error,
    },

    /// Backend answered with a non-success HTTP status
    #[error("HTTP {status}: {status_text}")]
    Remote { status: u16, status_text: String },

    /// Backend answered 2xx but the body was not valid JSON
    #[error("Failed to parse response as JSON: {source} (body: {snippet})")]
    Parse {
        snippet: String,
        source: serde_json::Error,
    },
}

/// Result type alias for backend invocations
pub type Result<T> = std::result::Result<T, InvokeError>;

impl InvokeError {
    /// Create a network error for the given request URL
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Create a remote error from a status code and its reason phrase
    pub fn remote(status: u16, status_text: impl Into<String>) -> Self {
        Self::Remote {
            status,
            status_text: status_text.into(),
        }
    }

    /// Create a parse error, truncating the raw body to a short snippet
    pub fn parse(source: serde_json::Error, body: &str) -> Self {
        let snippet = if body.chars().count() > SNIPPET_LEN {
            let head: String = body.chars().take(SNIPPET_LEN).collect();
            format!("{}...", head)
        } else {
            body.to_string()
        };
        Self::Parse { snippet, source }
    }
}
