//! Startup and serving errors.

use std::fmt;

/// Failures that stop the server.
#[derive(Debug)]
pub enum ServerError {
    /// The messaging backend client could not be built.
    Backend { reason: String },
    /// The listen address could not be bound.
    Bind { address: String, reason: String },
    /// The HTTP server stopped with an error.
    Serve { reason: String },
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend { reason } => write!(f, "backend client setup failed: {reason}"),
            Self::Bind { address, reason } => {
                write!(f, "failed to bind '{address}': {reason}")
            }
            Self::Serve { reason } => write!(f, "server error: {reason}"),
        }
    }
}

impl std::error::Error for ServerError {}
