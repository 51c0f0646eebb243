//! Request bodies sent to the gateway.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Body of `POST /transaction/initialize`.
///
/// `amount` travels as a string; callers format it themselves. `reference`
/// should be unique per transaction, the gateway uses it to correlate later
/// verification calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeTransactionRequest {
    pub reference: String,
    pub amount: String,
    pub customer_name: String,
    pub customer_email: String,
    pub currency: String,
    pub coin: String,
    pub accept_partial_payment: bool,
}

impl InitializeTransactionRequest {
    /// Checks the fields the client can check without asking the gateway
    ///
    /// # Errors
    /// Returns `ClientError::InvalidRequest` if the reference is blank.
    pub fn validate(&self) -> Result<(), ClientError> {
        require_non_empty("reference", &self.reference)
    }
}

/// Body of `POST /transfer`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub amount: u64,
    pub recipient: String,
    pub coin: String,
    pub blockchain: String,
}

impl TransferRequest {
    /// # Errors
    /// Returns `ClientError::InvalidRequest` if `amount` is zero, the recipient
    /// is not an Ethereum-style address, or `coin`/`blockchain` is blank.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.amount < 1 {
            return Err(ClientError::InvalidRequest(
                "amount must be at least 1".into(),
            ));
        }
        require_non_empty("recipient", &self.recipient)?;
        if !is_evm_address(&self.recipient) {
            return Err(ClientError::InvalidRequest(format!(
                "recipient '{}' is not a valid address",
                self.recipient
            )));
        }
        require_non_empty("coin", &self.coin)?;
        require_non_empty("blockchain", &self.blockchain)
    }
}

/// `0x` followed by 40 hex digits. Checksum casing is not verified.
#[must_use]
pub fn is_evm_address(s: &str) -> bool {
    let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) else {
        return false;
    };
    digits.len() == 40 && hex::decode(digits).is_ok()
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::InvalidRequest(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}
