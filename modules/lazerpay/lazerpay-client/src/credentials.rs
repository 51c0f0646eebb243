use std::fmt;

use http::header::{self, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::ClientError;

/// Header carrying the merchant's public key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Merchant key pair issued by the gateway.
///
/// The secret key lives in a [`SecretString`] and both keys are left out of
/// `Debug` output.
pub struct Credentials {
    public_key: String,
    secret_key: SecretString,
}

impl Credentials {
    /// Create credentials from the merchant's public and secret keys.
    ///
    /// # Errors
    /// Returns `ClientError::Configuration` if either key is empty or blank.
    pub fn new(
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let public_key = public_key.into();
        let secret_key = secret_key.into();

        if public_key.trim().is_empty() {
            return Err(ClientError::Configuration("public key is empty".into()));
        }
        if secret_key.trim().is_empty() {
            return Err(ClientError::Configuration("secret key is empty".into()));
        }

        Ok(Self {
            public_key,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// The merchant's public key
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// The fixed header set attached to every gateway request:
/// `Content-Type: application/json`, `Authorization: <secret key>` and
/// `x-api-key: <public key>`.
#[derive(Clone)]
pub struct AuthHeaders {
    headers: HeaderMap,
}

impl AuthHeaders {
    /// Derive the header set from a key pair. Never touches the network.
    ///
    /// # Errors
    /// Returns `ClientError::Configuration` if a key contains characters that
    /// cannot appear in an HTTP header value.
    pub fn new(credentials: &Credentials) -> Result<Self, ClientError> {
        let authorization = sensitive_value(credentials.secret_key.expose_secret(), "secret key")?;
        let api_key = sensitive_value(credentials.public_key(), "public key")?;

        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        Ok(Self { headers })
    }

    /// Look up a single header by name (case-insensitive)
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    /// Number of headers in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> header::Iter<'_, HeaderValue> {
        self.headers.iter()
    }

    #[must_use]
    pub fn as_header_map(&self) -> &HeaderMap {
        &self.headers
    }
}

// Only header names are printed.
impl fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.headers.keys()).finish()
    }
}

/// Build the authentication header set straight from a key pair.
///
/// # Errors
/// Returns `ClientError::Configuration` if either key is empty or not a valid
/// header value.
pub fn auth_headers(
    public_key: impl Into<String>,
    secret_key: impl Into<String>,
) -> Result<AuthHeaders, ClientError> {
    AuthHeaders::new(&Credentials::new(public_key, secret_key)?)
}

fn sensitive_value(raw: &str, what: &str) -> Result<HeaderValue, ClientError> {
    let mut value = HeaderValue::from_str(raw).map_err(|_| {
        ClientError::Configuration(format!("{what} is not a valid HTTP header value"))
    })?;
    value.set_sensitive(true);
    Ok(value)
}
