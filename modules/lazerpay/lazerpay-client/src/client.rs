use std::sync::Arc;

use tracing::debug;

use crate::config::LazerpayClientConfig;
use crate::credentials::AuthHeaders;
use crate::error::ClientError;
use crate::models::{InitializeTransactionRequest, TransferRequest};
use crate::request::Request;
use crate::response::GatewayResponse;
use crate::transport::HttpTransport;

/// Async client for the Lazerpay gateway.
///
/// Cloning is cheap and clones share the connection pool. Every operation
/// is one request/response exchange with no retries.
#[derive(Clone)]
pub struct LazerpayClient {
    transport: Arc<HttpTransport>,
}

impl std::fmt::Debug for LazerpayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazerpayClient").finish_non_exhaustive()
    }
}

impl LazerpayClient {
    /// Create client from configuration. The authentication headers are
    /// derived here, once.
    ///
    /// # Errors
    /// Returns `ClientError::Configuration` if the base URL is invalid, a key
    /// cannot be sent as a header, or the HTTP client cannot be built.
    pub fn from_config(config: LazerpayClientConfig) -> Result<Self, ClientError> {
        let url = config.parsed_base_url()?;
        let LazerpayClientConfig {
            credentials,
            base_url,
            timeout,
        } = config;
        let headers = AuthHeaders::new(&credentials)?;
        let transport = HttpTransport::new(url, headers, timeout)?;

        debug!(%base_url, ?timeout, "lazerpay client ready");

        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    /// Create client from `LAZERPAY_*` environment variables
    ///
    /// # Errors
    /// See [`LazerpayClientConfig::from_env`] and [`LazerpayClient::from_config`].
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_config(LazerpayClientConfig::from_env()?)
    }

    /// Send a prebuilt request. Use this to set a per-call timeout.
    ///
    /// # Errors
    /// `Transport` when no response arrived, `Gateway` for any non-2xx status
    /// (body preserved), `RequestBuild` if the URL cannot be assembled.
    pub async fn execute(&self, request: Request) -> Result<GatewayResponse, ClientError> {
        self.transport.send(request).await
    }

    /// Start a payment: `POST /transaction/initialize`
    ///
    /// # Errors
    /// `InvalidRequest` before any I/O for a blank reference; otherwise as
    /// [`LazerpayClient::execute`].
    pub async fn initialize_transaction(
        &self,
        req: &InitializeTransactionRequest,
    ) -> Result<GatewayResponse, ClientError> {
        self.execute(Request::initialize_transaction(req)?).await
    }

    /// Look up a payment by its reference: `GET /transaction/verify/{reference}`
    ///
    /// # Errors
    /// `InvalidRequest` before any I/O for an unusable reference; otherwise as
    /// [`LazerpayClient::execute`].
    pub async fn verify_transaction(
        &self,
        reference: &str,
    ) -> Result<GatewayResponse, ClientError> {
        self.execute(Request::verify_transaction(reference)?).await
    }

    /// List the coins the gateway accepts: `GET /coins`
    ///
    /// # Errors
    /// As [`LazerpayClient::execute`].
    pub async fn get_accepted_coins(&self) -> Result<GatewayResponse, ClientError> {
        self.execute(Request::accepted_coins()).await
    }

    /// Send funds to an address: `POST /transfer`
    ///
    /// # Errors
    /// `InvalidRequest` before any I/O if the transfer fails validation;
    /// otherwise as [`LazerpayClient::execute`].
    pub async fn transfer(&self, req: &TransferRequest) -> Result<GatewayResponse, ClientError> {
        self.execute(Request::transfer(req)?).await
    }
}
