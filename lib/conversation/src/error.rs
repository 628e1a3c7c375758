//! Error types for the conversation crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `SessionError`: session attributes that fail validation at the boundary
//! - `InputError`: utterances that need a re-prompt, never fatal
//! - `TurnFailure`: why a turn could not be answered normally

use my_telegrams_integration::TransportError;
use rootcause::prelude::Report;
use std::fmt;

/// Errors from session attribute handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Persisted attributes do not have the expected shape.
    InvalidAttributes { reason: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAttributes { reason } => {
                write!(f, "invalid session attributes: {reason}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Utterances the skill could not act on.
///
/// Handlers recover from these locally by asking again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A required slot was not filled.
    MissingSlot { slot: &'static str },
    /// No contact name was close enough to what was heard.
    UnknownContact { spoken: String },
    /// Speed dial value is not a number or not assigned.
    UnknownSpeedDial { spoken: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSlot { slot } => write!(f, "slot '{slot}' not filled"),
            Self::UnknownContact { spoken } => {
                write!(f, "no contact matches '{spoken}'")
            }
            Self::UnknownSpeedDial { spoken } => {
                write!(f, "no contact on speed dial '{spoken}'")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// A turn that ended without a handler answering it.
#[derive(Debug)]
pub enum TurnFailure {
    /// No registered handler accepts the request in the current state.
    NoHandlerFound { intent: String },
    /// A backend call failed.
    Backend(Report<TransportError>),
    /// Anything else.
    Unclassified { reason: String },
}

impl fmt::Display for TurnFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHandlerFound { intent } => {
                write!(f, "no handler can handle request '{intent}'")
            }
            Self::Backend(report) => write!(f, "backend failure: {report}"),
            Self::Unclassified { reason } => write!(f, "unexpected failure: {reason}"),
        }
    }
}

impl std::error::Error for TurnFailure {}
