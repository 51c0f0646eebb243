//! Synchronous facade over [`LazerpayClient`] for callers without an async
//! runtime (scripts, build tools, plain threads).

use tokio::runtime::{Builder, Runtime};

use crate::client::LazerpayClient;
use crate::config::LazerpayClientConfig;
use crate::error::ClientError;
use crate::models::{InitializeTransactionRequest, TransferRequest};
use crate::request::Request;
use crate::response::GatewayResponse;

/// Blocking Lazerpay client.
///
/// Owns a current-thread runtime that drives every call, so pooled
/// connections stay bound to one runtime. Calling these methods from inside
/// an async context panics; use [`LazerpayClient`] there instead.
#[derive(Debug)]
pub struct BlockingLazerpayClient {
    inner: LazerpayClient,
    runtime: Runtime,
}

impl BlockingLazerpayClient {
    /// # Errors
    /// Same as [`LazerpayClient::from_config`], plus `Configuration` if the
    /// runtime cannot start.
    pub fn from_config(config: LazerpayClientConfig) -> Result<Self, ClientError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Configuration(format!("tokio runtime: {e}")))?;
        let inner = LazerpayClient::from_config(config)?;
        Ok(Self { inner, runtime })
    }

    /// # Errors
    /// See [`LazerpayClientConfig::from_env`].
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_config(LazerpayClientConfig::from_env()?)
    }

    /// The async client this facade drives
    #[must_use]
    pub fn async_client(&self) -> &LazerpayClient {
        &self.inner
    }

    /// # Errors
    /// See [`LazerpayClient::execute`].
    pub fn execute(&self, request: Request) -> Result<GatewayResponse, ClientError> {
        self.runtime.block_on(self.inner.execute(request))
    }

    /// # Errors
    /// See [`LazerpayClient::initialize_transaction`].
    pub fn initialize_transaction(
        &self,
        req: &InitializeTransactionRequest,
    ) -> Result<GatewayResponse, ClientError> {
        self.runtime.block_on(self.inner.initialize_transaction(req))
    }

    /// # Errors
    /// See [`LazerpayClient::verify_transaction`].
    pub fn verify_transaction(&self, reference: &str) -> Result<GatewayResponse, ClientError> {
        self.runtime.block_on(self.inner.verify_transaction(reference))
    }

    /// # Errors
    /// See [`LazerpayClient::get_accepted_coins`].
    pub fn get_accepted_coins(&self) -> Result<GatewayResponse, ClientError> {
        self.runtime.block_on(self.inner.get_accepted_coins())
    }

    /// # Errors
    /// See [`LazerpayClient::transfer`].
    pub fn transfer(&self, req: &TransferRequest) -> Result<GatewayResponse, ClientError> {
        self.runtime.block_on(self.inner.transfer(req))
    }
}
