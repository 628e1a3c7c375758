//! Last-resort responses for turns that failed.
//!
//! Every failure reaching this point ends the session. The user still gets an
//! in-character answer in their locale; operators get a log line at a level
//! that says how surprised they should be.

use crate::error::TurnFailure;
use crate::session::SessionState;
use my_telegrams_i18n::{PhraseSelector, PhraseTable};
use tracing::{error, info, warn};

/// How a failed turn is explained to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// A backend call failed earlier in the turn with this code.
    HttpError(u16),
    /// Unroutable utterance from an authorized user.
    AuthorizedDetour,
    /// Unroutable utterance before login completed.
    UnauthorizedDetour,
    /// Nothing more specific applies.
    Unclassified,
}

/// Speech for a backend HTTP error code.
#[must_use]
pub fn http_error_phrase(code: u16, phrases: &PhraseTable) -> &'static str {
    match code {
        401 | 403 => phrases.account_linking_required,
        502..=504 => phrases.server_error,
        _ => phrases.backend_exception,
    }
}

/// Maps failed turns to a final response.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchExceptionPolicy;

impl DispatchExceptionPolicy {
    /// Classifies a failure. The first matching rule wins:
    ///
    /// 1. a recorded HTTP error code, whatever the failure was
    /// 2. a detour while authorized
    /// 3. a detour while not authorized
    /// 4. everything else
    #[must_use]
    pub fn classify(failure: &TurnFailure, session: &SessionState) -> FailureClass {
        if let Some(code) = session.http_error_code {
            return FailureClass::HttpError(code);
        }
        match failure {
            TurnFailure::NoHandlerFound { .. } if session.is_authorized() => {
                FailureClass::AuthorizedDetour
            }
            TurnFailure::NoHandlerFound { .. } => FailureClass::UnauthorizedDetour,
            TurnFailure::Backend(_) | TurnFailure::Unclassified { .. } => {
                FailureClass::Unclassified
            }
        }
    }

    /// Returns the speech for a failed turn and clears the session.
    pub fn resolve(
        failure: &TurnFailure,
        session: &mut SessionState,
        phrases: &PhraseTable,
        selector: &dyn PhraseSelector,
    ) -> String {
        let class = Self::classify(failure, session);
        let speech = match class {
            FailureClass::HttpError(code) => {
                warn!(code, failure = %failure, "Turn failed on backend error");
                http_error_phrase(code, phrases).to_string()
            }
            FailureClass::AuthorizedDetour => {
                info!(failure = %failure, authorized = true, "Detour");
                phrases.detour_exception.to_string()
            }
            FailureClass::UnauthorizedDetour => {
                info!(failure = %failure, authorized = false, "Detour");
                phrases.not_authorized_detour.to_string()
            }
            FailureClass::Unclassified => {
                error!(failure = %failure, "Unclassified turn failure");
                phrases.frontend_error(selector)
            }
        };

        session.clear();
        speech
    }
}
