//! Turn routing.
//!
//! A turn is offered to each registered handler in order. Whatever no
//! handler answers, or whatever fails on the way, goes through
//! [`DispatchExceptionPolicy`] and ends the session.

use crate::error::TurnFailure;
use crate::handler::{IntentHandler, TurnContext};
use crate::handlers::default_handlers;
use crate::policy::DispatchExceptionPolicy;
use crate::request::{RequestKind, TurnRequest};
use crate::response::TurnResponse;
use crate::services::BackendConnector;
use crate::session::SessionState;
use my_telegrams_core::TurnId;
use my_telegrams_i18n::{PhraseProvider, PhraseSelector, PhraseTable};
use my_telegrams_integration::TransportError;
use rootcause::prelude::Report;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Result of offering a turn to the handlers.
#[derive(Debug)]
pub enum DispatchOutcome {
    Handled(TurnResponse),
    /// No handler accepts this request in the current session state.
    NoHandlerFound { intent: String },
    /// The accepting handler hit a backend failure. Its code is already
    /// recorded on the session.
    BackendFailure(Report<TransportError>),
}

impl DispatchOutcome {
    /// Splits the outcome into a response or a failure for the policy.
    ///
    /// # Errors
    ///
    /// Returns the failure for every outcome other than `Handled`.
    pub fn into_result(self) -> Result<TurnResponse, TurnFailure> {
        match self {
            Self::Handled(response) => Ok(response),
            Self::NoHandlerFound { intent } => Err(TurnFailure::NoHandlerFound { intent }),
            Self::BackendFailure(report) => Err(TurnFailure::Backend(report)),
        }
    }
}

/// What the host sends back and persists after a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    pub response: TurnResponse,
    pub session: SessionState,
}

/// Routes turns to intent handlers.
pub struct Dispatcher {
    handlers: Vec<Box<dyn IntentHandler>>,
    backend: Arc<dyn BackendConnector>,
    phrases: Arc<dyn PhraseProvider>,
    selector: Arc<dyn PhraseSelector>,
}

impl Dispatcher {
    /// Creates a dispatcher without handlers.
    #[must_use]
    pub fn new(
        backend: Arc<dyn BackendConnector>,
        phrases: Arc<dyn PhraseProvider>,
        selector: Arc<dyn PhraseSelector>,
    ) -> Self {
        Self {
            handlers: Vec::new(),
            backend,
            phrases,
            selector,
        }
    }

    /// Creates a dispatcher with the skill's handlers registered.
    #[must_use]
    pub fn with_default_handlers(
        backend: Arc<dyn BackendConnector>,
        phrases: Arc<dyn PhraseProvider>,
        selector: Arc<dyn PhraseSelector>,
    ) -> Self {
        let mut dispatcher = Self::new(backend, phrases, selector);
        for handler in default_handlers() {
            dispatcher.register(handler);
        }
        dispatcher
    }

    /// Appends a handler. Earlier handlers take precedence.
    pub fn register(&mut self, handler: Box<dyn IntentHandler>) {
        self.handlers.push(handler);
    }

    /// Handler names in routing order.
    pub fn handler_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.iter().map(|handler| handler.name())
    }

    /// Offers the turn to the first handler that accepts it.
    pub async fn dispatch(
        &self,
        request: &TurnRequest,
        session: &mut SessionState,
    ) -> DispatchOutcome {
        let Some(handler) = self
            .handlers
            .iter()
            .find(|handler| handler.can_handle(request, session))
        else {
            debug!(
                authorized = session.is_authorized(),
                "No handler accepts the turn"
            );
            return DispatchOutcome::NoHandlerFound {
                intent: request.label().to_string(),
            };
        };

        debug!(handler = handler.name(), "Dispatching turn");
        let phrases = self.phrases.get(&request.locale);
        let mut ctx = TurnContext::new(
            request,
            session,
            phrases,
            self.selector.as_ref(),
            self.backend.as_ref(),
        );
        match handler.handle(&mut ctx).await {
            Ok(response) => DispatchOutcome::Handled(response),
            Err(report) => {
                let code = report.current_context().error_code();
                warn!(handler = handler.name(), code, "Backend call failed");
                session.http_error_code = Some(code);
                DispatchOutcome::BackendFailure(report)
            }
        }
    }

    /// Runs a whole turn.
    ///
    /// Loads the account into a fresh session, dispatches, and resolves any
    /// failure into a final response. Never fails: every error becomes
    /// speech.
    #[instrument(skip_all, fields(turn = %TurnId::new(), request = request.label()))]
    pub async fn process_turn(
        &self,
        user_ref: &str,
        request: &TurnRequest,
        mut session: SessionState,
    ) -> TurnResult {
        let phrases = self.phrases.get(&request.locale);

        let needs_account = !matches!(request.request, RequestKind::SessionEnded);
        if needs_account && session.account.is_none() {
            match self.backend.identity_store().load_account(user_ref).await {
                Ok(account) => {
                    debug!(account = %account.id, "Account loaded");
                    session.account = Some(account.into());
                }
                Err(report) => {
                    let code = report.current_context().error_code();
                    warn!(code, "Account lookup failed");
                    session.http_error_code = Some(code);
                    return self.fail(&TurnFailure::Backend(report), session, phrases);
                }
            }
        }

        match self.dispatch(request, &mut session).await.into_result() {
            Ok(response) => TurnResult { response, session },
            Err(failure) => self.fail(&failure, session, phrases),
        }
    }

    /// Ends a turn that failed before it could be dispatched.
    #[must_use]
    pub fn reject(&self, locale: &str, failure: &TurnFailure, session: SessionState) -> TurnResult {
        self.fail(failure, session, self.phrases.get(locale))
    }

    fn fail(
        &self,
        failure: &TurnFailure,
        mut session: SessionState,
        phrases: &PhraseTable,
    ) -> TurnResult {
        let speech =
            DispatchExceptionPolicy::resolve(failure, &mut session, phrases, self.selector.as_ref());
        TurnResult {
            response: TurnResponse::ending(speech),
            session,
        }
    }
}
