use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// A successful (2xx) gateway reply. The body is kept as the raw text the
/// gateway sent; no schema is assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    status: StatusCode,
    body: String,
}

impl GatewayResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: String) -> Self {
        Self { status, body }
    }

    /// Get the HTTP status code
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Borrow the raw body
    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Consume the response and return the raw body
    #[must_use]
    pub fn into_text(self) -> String {
        self.body
    }

    /// Decode the body for callers that rely on a particular shape
    ///
    /// # Errors
    /// Returns `ClientError::InvalidResponse` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_str(&self.body)
            .map_err(|e| ClientError::InvalidResponse(format!("Invalid JSON body: {e}")))
    }
}
