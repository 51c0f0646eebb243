use std::time::Duration;

use url::Url;

use crate::credentials::Credentials;
use crate::error::ClientError;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.lazerpay.engineering/api/v1";

/// Timeout applied to every call unless a request overrides it
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_PUBLIC_KEY: &str = "LAZERPAY_PUBLIC_KEY";
pub const ENV_SECRET_KEY: &str = "LAZERPAY_SECRET_KEY";
pub const ENV_BASE_URL: &str = "LAZERPAY_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "LAZERPAY_TIMEOUT_SECS";

/// Configuration for [`LazerpayClient`](crate::LazerpayClient)
#[derive(Debug)]
pub struct LazerpayClientConfig {
    pub credentials: Credentials,
    pub base_url: String,
    pub timeout: Duration,
}

impl LazerpayClientConfig {
    /// Configuration against the production gateway with the default timeout
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different API root (sandbox, stub server)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the default timeout for every call
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Expects:
    /// - `LAZERPAY_PUBLIC_KEY`: merchant public key (required)
    /// - `LAZERPAY_SECRET_KEY`: merchant secret key (required)
    /// - `LAZERPAY_BASE_URL`: API root (default: production)
    /// - `LAZERPAY_TIMEOUT_SECS`: default timeout in whole seconds (default: 30)
    ///
    /// # Errors
    /// Returns `ClientError::Configuration` if a required variable is missing,
    /// a key is empty, or the timeout is not a positive integer.
    pub fn from_env() -> Result<Self, ClientError> {
        let public_key = required_var(ENV_PUBLIC_KEY)?;
        let secret_key = required_var(ENV_SECRET_KEY)?;
        let mut config = Self::new(Credentials::new(public_key, secret_key)?);

        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            config = config.with_base_url(base_url);
        }

        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ClientError::Configuration(format!(
                    "{ENV_TIMEOUT_SECS} must be an integer, got '{raw}'"
                ))
            })?;
            if secs == 0 {
                return Err(ClientError::Configuration(format!(
                    "{ENV_TIMEOUT_SECS} must be greater than zero"
                )));
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Parse and check the base URL
    ///
    /// # Errors
    /// Returns `ClientError::Configuration` unless the URL is absolute http(s)
    /// without query or fragment.
    pub fn parsed_base_url(&self) -> Result<Url, ClientError> {
        parse_base_url(&self.base_url)
    }
}

fn required_var(name: &str) -> Result<String, ClientError> {
    std::env::var(name)
        .map_err(|_| ClientError::Configuration(format!("{name} not set")))
}

/// # Errors
/// See [`LazerpayClientConfig::parsed_base_url`].
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let url = Url::parse(raw)
        .map_err(|e| ClientError::Configuration(format!("invalid base URL '{raw}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::Configuration(format!(
            "base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() {
        return Err(ClientError::Configuration(format!(
            "base URL '{raw}' cannot carry a path"
        )));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ClientError::Configuration(format!(
            "base URL '{raw}' must not have a query or fragment"
        )));
    }

    Ok(url)
}
