use std::time::Duration;

use bytes::Bytes;
use http::Method;
use serde::Serialize;

use crate::error::ClientError;
use crate::models::{InitializeTransactionRequest, TransferRequest, require_non_empty};

/// A gateway call: method, path below the API root, optional JSON body and
/// an optional timeout overriding the client default
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    segments: Vec<String>,
    body: Option<Bytes>,
    timeout: Option<Duration>,
}

impl Request {
    /// Create a new request builder
    #[must_use]
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// `POST /transaction/initialize`
    ///
    /// # Errors
    /// Returns `ClientError::InvalidRequest` for a blank reference.
    pub fn initialize_transaction(req: &InitializeTransactionRequest) -> Result<Self, ClientError> {
        req.validate()?;
        Self::builder()
            .method(Method::POST)
            .segments(["transaction", "initialize"])
            .json(req)?
            .build()
    }

    /// `GET /transaction/verify/{reference}`
    ///
    /// The reference is percent-encoded as one path segment.
    ///
    /// # Errors
    /// Returns `ClientError::InvalidRequest` for a blank, `.` or `..` reference.
    pub fn verify_transaction(reference: &str) -> Result<Self, ClientError> {
        require_non_empty("reference", reference)?;
        // URL normalization would drop these segments
        if matches!(reference, "." | "..") {
            return Err(ClientError::InvalidRequest(format!(
                "reference '{reference}' is not a usable path segment"
            )));
        }
        Self::builder()
            .method(Method::GET)
            .segments(["transaction", "verify", reference])
            .build()
    }

    /// `GET /coins`
    #[must_use]
    pub fn accepted_coins() -> Self {
        Self {
            method: Method::GET,
            segments: vec!["coins".to_owned()],
            body: None,
            timeout: None,
        }
    }

    /// `POST /transfer`
    ///
    /// # Errors
    /// Returns `ClientError::InvalidRequest` if the transfer fails validation.
    pub fn transfer(req: &TransferRequest) -> Result<Self, ClientError> {
        req.validate()?;
        Self::builder()
            .method(Method::POST)
            .segments(["transfer"])
            .json(req)?
            .build()
    }

    /// Override the client's default timeout for this call only
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Get the HTTP method
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Unencoded path segments below the API root
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Path below the API root, for logging
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Get the serialized JSON body, if any
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Get the timeout override
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Builder for gateway requests outside the four named operations
#[derive(Debug, Default)]
pub struct RequestBuilder {
    method: Option<Method>,
    segments: Vec<String>,
    body: Option<Bytes>,
    timeout: Option<Duration>,
}

impl RequestBuilder {
    /// Set the HTTP method
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Append one path segment
    #[must_use]
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Append several path segments
    #[must_use]
    pub fn segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.segments.extend(segments.into_iter().map(Into::into));
        self
    }

    /// Set the body to a JSON-serialized value
    ///
    /// # Errors
    /// Returns `ClientError::RequestBuild` if the value cannot be serialized.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, ClientError> {
        self.body = Some(Bytes::from(serde_json::to_vec(value)?));
        Ok(self)
    }

    /// Set request timeout
    #[must_use]
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the request
    ///
    /// # Errors
    /// Returns `ClientError::RequestBuild` if no path segment was given.
    pub fn build(self) -> Result<Request, ClientError> {
        if self.segments.is_empty() {
            return Err(ClientError::RequestBuild("Request path is required".into()));
        }

        Ok(Request {
            method: self.method.unwrap_or(Method::GET),
            segments: self.segments,
            body: self.body,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_request_shape() {
        let req = Request::verify_transaction("abc123").unwrap();
        assert_eq!(req.method(), Method::GET);
        assert_eq!(req.path(), "/transaction/verify/abc123");
        assert!(req.body().is_none());
        assert!(req.timeout().is_none());
    }

    #[test]
    fn test_verify_rejects_blank_reference() {
        for reference in ["", "  ", ".", ".."] {
            assert!(matches!(
                Request::verify_transaction(reference),
                Err(ClientError::InvalidRequest(_))
            ));
        }
    }

    #[test]
    fn test_coins_request_shape() {
        let req = Request::accepted_coins();
        assert_eq!(req.method(), Method::GET);
        assert_eq!(req.path(), "/coins");
        assert!(req.body().is_none());
    }

    #[test]
    fn test_transfer_request_carries_json_body() {
        let transfer = TransferRequest {
            amount: 5,
            recipient: "0xF378c952d5266eF8e1783521a1395Fe40cDCe55B".into(),
            coin: "USDT".into(),
            blockchain: "Binance Smart Chain".into(),
        };
        let req = Request::transfer(&transfer).unwrap();
        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.path(), "/transfer");

        let parsed: TransferRequest = serde_json::from_slice(req.body().unwrap()).unwrap();
        assert_eq!(parsed, transfer);
    }

    #[test]
    fn test_timeout_override() {
        let req = Request::accepted_coins()
            .with_timeout(Duration::from_millis(250));
        assert_eq!(req.timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_builder_requires_path() {
        assert!(matches!(
            Request::builder().method(Method::GET).build(),
            Err(ClientError::RequestBuild(_))
        ));
    }
}
