//! Intent handler seam.
//!
//! Handlers are tried in registration order; the first one whose
//! `can_handle` accepts the turn answers it.

use crate::request::{Intent, TurnRequest};
use crate::response::TurnResponse;
use crate::services::{AccountServices, BackendConnector};
use crate::session::SessionState;
use async_trait::async_trait;
use my_telegrams_i18n::{PhraseSelector, PhraseTable};
use my_telegrams_integration::TransportError;
use rootcause::prelude::Report;

/// Everything a handler sees during one turn.
pub struct TurnContext<'a> {
    pub request: &'a TurnRequest,
    pub session: &'a mut SessionState,
    pub phrases: &'a PhraseTable,
    pub selector: &'a dyn PhraseSelector,
    backend: &'a dyn BackendConnector,
}

impl<'a> TurnContext<'a> {
    pub fn new(
        request: &'a TurnRequest,
        session: &'a mut SessionState,
        phrases: &'a PhraseTable,
        selector: &'a dyn PhraseSelector,
        backend: &'a dyn BackendConnector,
    ) -> Self {
        Self {
            request,
            session,
            phrases,
            selector,
            backend,
        }
    }

    /// The intent of this turn, if it is an intent request.
    #[must_use]
    pub fn intent(&self) -> Option<&'a Intent> {
        self.request.as_intent()
    }

    /// Backend client for the session's account, once one is loaded.
    #[must_use]
    pub fn account_services(&self) -> Option<Box<dyn AccountServices>> {
        self.session
            .account
            .as_ref()
            .map(|account| self.backend.account_services(account.id))
    }
}

/// Answers one kind of turn.
#[async_trait]
pub trait IntentHandler: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Returns true if this handler answers `request` in the current state.
    fn can_handle(&self, request: &TurnRequest, session: &SessionState) -> bool;

    /// Answers the turn.
    ///
    /// # Errors
    ///
    /// Backend failures are returned to the dispatcher, which records them
    /// on the session and ends the turn.
    async fn handle(&self, ctx: &mut TurnContext<'_>)
    -> Result<TurnResponse, Report<TransportError>>;
}
