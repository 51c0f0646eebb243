//! Lazerpay Client Library
//!
//! Builds authenticated requests against the Lazerpay crypto-payment gateway
//! and hands back the gateway's raw response body:
//!
//! - initialize a transaction (`POST /transaction/initialize`)
//! - verify a transaction (`GET /transaction/verify/{reference}`)
//! - list accepted coins (`GET /coins`)
//! - transfer funds (`POST /transfer`)
//!
//! Every request carries `Content-Type: application/json`,
//! `Authorization: <secret key>` and `x-api-key: <public key>`. Non-2xx
//! replies come back as [`ClientError::Gateway`] with status and body intact.
//!
//! # Examples
//!
//! ## Async Usage
//!
//! ```no_run
//! use lazerpay_client::{Credentials, LazerpayClient, LazerpayClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::new("pk_test_xxx", "sk_test_xxx")?;
//! let client = LazerpayClient::from_config(LazerpayClientConfig::new(credentials))?;
//!
//! let response = client.verify_transaction("4tytytreytrey65756u5u66").await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```
//!
//! ## Per-call timeout
//!
//! ```no_run
//! use std::time::Duration;
//! use lazerpay_client::{LazerpayClient, Request};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LazerpayClient::from_env()?;
//! let request = Request::accepted_coins().with_timeout(Duration::from_secs(2));
//! let coins = client.execute(request).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Blocking Usage
//!
//! ```no_run
//! use lazerpay_client::{BlockingLazerpayClient, TransferRequest};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BlockingLazerpayClient::from_env()?;
//! let response = client.transfer(&TransferRequest {
//!     amount: 1,
//!     recipient: "0xF378c952d5266eF8e1783521a1395Fe40cDCe55B".into(),
//!     coin: "USDT".into(),
//!     blockchain: "Binance Smart Chain".into(),
//! })?;
//! # Ok(())
//! # }
//! ```

mod blocking;
mod client;
mod config;
mod credentials;
mod error;
mod models;
mod request;
mod response;
mod transport;

// Re-export public API
pub use blocking::BlockingLazerpayClient;
pub use client::LazerpayClient;
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ENV_BASE_URL, ENV_PUBLIC_KEY, ENV_SECRET_KEY,
    ENV_TIMEOUT_SECS, LazerpayClientConfig,
};
pub use credentials::{API_KEY_HEADER, AuthHeaders, Credentials, auth_headers};
pub use error::{ClientError, TransportErrorKind};
pub use models::{InitializeTransactionRequest, TransferRequest, is_evm_address};
pub use request::{Request, RequestBuilder};
pub use response::GatewayResponse;

// Re-export commonly used types from dependencies
pub use http::{Method, StatusCode};
