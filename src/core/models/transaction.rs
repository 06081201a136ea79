//! Transaction identifiers
//!
//! An opaque token forwarded to the document store so a request can be
//! correlated across services. It carries no meaning for resolution.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

const TID_PREFIX: &str = "tid_";
const TID_SUFFIX_LEN: usize = 10;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A transaction id such as `tid_k3j9x0p2aa`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generate a fresh id from the current time
    ///
    /// The suffix is the nanosecond timestamp in base 36, truncated to the
    /// least significant ten digits.
    #[must_use]
    pub fn generate() -> Self {
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let mut value = nanos.unsigned_abs();

        let mut suffix = [b'0'; TID_SUFFIX_LEN];
        for slot in suffix.iter_mut().rev() {
            *slot = ALPHABET[usize::try_from(value % 36).unwrap_or_default()];
            value /= 36;
        }

        Self(format!("{TID_PREFIX}{}", String::from_utf8_lossy(&suffix)))
    }

    /// The id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
