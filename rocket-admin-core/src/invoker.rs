//! The HTTP invoker: one POST per process run, empty body, JSON
//! content-type, response parsed as JSON.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{InvokeError, Result};

/// A fully resolved request: base URL plus endpoint path. Method and
/// headers are fixed (POST, `Content-Type: application/json`) and the
/// body is always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    base_url: String,
    path: String,
}

impl InvocationRequest {
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
        }
    }

    /// Complete request URL.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Outcome of a successful invocation: the HTTP status and the parsed
/// JSON payload.
#[derive(Debug, Clone)]
pub struct InvocationResult {
    pub status: u16,
    pub body: Value,
}

impl InvocationResult {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues administrative POSTs against the backend.
///
/// No timeout is configured; slow responses (Render cold starts) are
/// waited out, matching the tool's interactive usage.
#[derive(Debug, Clone, Default)]
pub struct ActionInvoker {
    client: Client,
}

impl ActionInvoker {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Perform the POST and parse the response body as JSON.
    pub async fn invoke(&self, request: &InvocationRequest) -> Result<InvocationResult> {
        let url = request.url();
        debug!(%url, "sending POST");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|source| InvokeError::network(&url, source))?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(InvokeError::remote(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|source| InvokeError::network(&url, source))?;
        let body: Value =
            serde_json::from_str(&text).map_err(|source| InvokeError::parse(source, &text))?;

        Ok(InvocationResult {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_joins_base_and_path() {
        let request = InvocationRequest::new("http://localhost:8080", "/api/sync/reseed/all");
        assert_eq!(request.url(), "http://localhost:8080/api/sync/reseed/all");
        assert_eq!(request.base_url(), "http://localhost:8080");
        assert_eq!(request.path(), "/api/sync/reseed/all");
    }

    #[test]
    fn test_result_ok_covers_success_range() {
        let ok = InvocationResult {
            status: 200,
            body: Value::Null,
        };
        assert!(ok.ok());

        let created = InvocationResult {
            status: 201,
            body: Value::Null,
        };
        assert!(created.ok());

        let server_error = InvocationResult {
            status: 500,
            body: Value::Null,
        };
        assert!(!server_error.ok());
    }
}
