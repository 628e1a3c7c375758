//! Error types for the integration crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `TransportError`: the companion service could not serve a call

use std::fmt;

/// Code recorded when the backend could not be reached at all.
pub const UNAVAILABLE_CODE: u16 = 503;
/// Code recorded when the backend answered with something unusable.
pub const BAD_GATEWAY_CODE: u16 = 502;

/// Errors from calls to the messaging backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection to the backend failed.
    Unreachable { endpoint: String, reason: String },
    /// No response within the configured timeout.
    Timeout { endpoint: String },
    /// Backend answered with a non-success status.
    Status { endpoint: String, code: u16 },
    /// Backend answered with a body that could not be decoded.
    InvalidResponse { endpoint: String, reason: String },
    /// Client could not be constructed.
    InvalidConfig { reason: String },
}

impl TransportError {
    /// Returns the HTTP status the backend answered with, if it answered.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the code recorded on the session for this failure.
    ///
    /// Failures without a status map onto the gateway codes a proxy would
    /// have produced for them.
    #[must_use]
    pub fn error_code(&self) -> u16 {
        match self {
            Self::Status { code, .. } => *code,
            Self::Unreachable { .. } | Self::Timeout { .. } | Self::InvalidConfig { .. } => {
                UNAVAILABLE_CODE
            }
            Self::InvalidResponse { .. } => BAD_GATEWAY_CODE,
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { endpoint, reason } => {
                write!(f, "backend unreachable at {endpoint}: {reason}")
            }
            Self::Timeout { endpoint } => write!(f, "backend timed out at {endpoint}"),
            Self::Status { endpoint, code } => {
                write!(f, "backend returned HTTP {code} for {endpoint}")
            }
            Self::InvalidResponse { endpoint, reason } => {
                write!(f, "invalid backend response from {endpoint}: {reason}")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid backend configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for TransportError {}
