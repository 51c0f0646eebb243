use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::credentials::AuthHeaders;
use crate::error::{ClientError, TransportErrorKind};
use crate::request::Request;
use crate::response::GatewayResponse;

/// Sends requests to the gateway over HTTP and classifies the outcome
pub(crate) struct HttpTransport {
    base_url: Url,
    http_client: reqwest::Client,
    headers: AuthHeaders,
}

impl HttpTransport {
    pub(crate) fn new(
        base_url: Url,
        headers: AuthHeaders,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Configuration(format!("HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            http_client,
            headers,
        })
    }

    /// Base URL path followed by the request's segments, each percent-encoded
    pub(crate) fn url_for(&self, request: &Request) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ClientError::RequestBuild(format!(
                    "base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(request.segments());
        Ok(url)
    }

    pub(crate) async fn send(&self, request: Request) -> Result<GatewayResponse, ClientError> {
        let url = self.url_for(&request)?;
        let method = request.method().clone();
        let path = request.path();

        debug!(%method, %path, "sending gateway request");

        let mut req_builder = self
            .http_client
            .request(method.clone(), url)
            .headers(self.headers.as_header_map().clone());

        // Per-call override of the client-wide timeout
        if let Some(timeout) = request.timeout() {
            req_builder = req_builder.timeout(timeout);
        }
        if let Some(body) = request.body() {
            req_builder = req_builder.body(body.clone());
        }

        let resp = req_builder.send().await.map_err(|e| classify(&e))?;
        let status = resp.status();

        if !status.is_success() {
            let body = read_error_body(resp).await;
            warn!(%method, %path, status = status.as_u16(), "gateway rejected request");
            return Err(ClientError::Gateway { status, body });
        }

        let body = resp.text().await.map_err(|e| classify(&e))?;

        debug!(%method, %path, status = status.as_u16(), "gateway request completed");
        Ok(GatewayResponse::new(status, body))
    }
}

/// Collects whatever part of a non-2xx body arrives. A broken body must not
/// hide the status, so read errors end the body instead of failing the call.
async fn read_error_body(mut resp: reqwest::Response) -> String {
    let mut buf = Vec::new();
    loop {
        match resp.chunk().await {
            Ok(Some(chunk)) => buf.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(e) => {
                debug!(error = %e, received = buf.len(), "error response body cut short");
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn classify(err: &reqwest::Error) -> ClientError {
    if err.is_builder() {
        return ClientError::RequestBuild(err.to_string());
    }

    let kind = if err.is_timeout() {
        TransportErrorKind::Timeout
    } else if err.is_connect() {
        TransportErrorKind::Connection
    } else if err.is_body() || err.is_decode() {
        TransportErrorKind::Body
    } else {
        TransportErrorKind::Other
    };
    ClientError::transport(kind, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_base_url;
    use crate::credentials::auth_headers;

    fn transport(base: &str) -> HttpTransport {
        HttpTransport::new(
            parse_base_url(base).unwrap(),
            auth_headers("pk", "sk").unwrap(),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn test_url_keeps_base_path() {
        let t = transport("https://api.lazerpay.engineering/api/v1");
        let url = t
            .url_for(&Request::verify_transaction("abc123").unwrap())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.lazerpay.engineering/api/v1/transaction/verify/abc123"
        );
    }

    #[test]
    fn test_url_with_trailing_slash_base() {
        let t = transport("http://127.0.0.1:9000/");
        let url = t.url_for(&Request::accepted_coins()).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/coins");

        let t = transport("https://example.com/api/v1/");
        let url = t.url_for(&Request::accepted_coins()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/v1/coins");
    }

    #[test]
    fn test_reference_cannot_escape_its_segment() {
        let t = transport("https://example.com/api/v1");
        let url = t
            .url_for(&Request::verify_transaction("../../coins?x=1").unwrap())
            .unwrap();
        assert_eq!(
            url.path(),
            "/api/v1/transaction/verify/..%2F..%2Fcoins%3Fx=1"
        );
        assert!(url.query().is_none());
    }
}
