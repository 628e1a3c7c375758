//! Platform-required handlers: launch, help, stop, fallback, session end.

use crate::handler::{IntentHandler, TurnContext};
use crate::request::{RequestKind, TurnRequest, intents};
use crate::response::TurnResponse;
use crate::session::SessionState;
use async_trait::async_trait;
use my_telegrams_integration::TransportError;
use rootcause::prelude::Report;

/// Greets the user and points at the next step.
pub struct LaunchHandler;

#[async_trait]
impl IntentHandler for LaunchHandler {
    fn name(&self) -> &'static str {
        "launch"
    }

    fn can_handle(&self, request: &TurnRequest, _session: &SessionState) -> bool {
        matches!(request.request, RequestKind::Launch)
    }

    async fn handle(
        &self,
        ctx: &mut TurnContext<'_>,
    ) -> Result<TurnResponse, Report<TransportError>> {
        let phrases = ctx.phrases;
        let next = if ctx.session.is_authorized() {
            phrases.send_or_check
        } else {
            phrases.authorize_prompt
        };
        Ok(TurnResponse::continuing(format!("{}. {}", phrases.welcome, next)).with_reprompt(next))
    }
}

pub struct HelpHandler;

#[async_trait]
impl IntentHandler for HelpHandler {
    fn name(&self) -> &'static str {
        "help"
    }

    fn can_handle(&self, request: &TurnRequest, _session: &SessionState) -> bool {
        request.is_intent(&[intents::HELP])
    }

    async fn handle(
        &self,
        ctx: &mut TurnContext<'_>,
    ) -> Result<TurnResponse, Report<TransportError>> {
        Ok(TurnResponse::continuing(ctx.phrases.help))
    }
}

pub struct CancelOrStopHandler;

#[async_trait]
impl IntentHandler for CancelOrStopHandler {
    fn name(&self) -> &'static str {
        "cancel_or_stop"
    }

    fn can_handle(&self, request: &TurnRequest, _session: &SessionState) -> bool {
        request.is_intent(&[intents::CANCEL, intents::STOP])
    }

    async fn handle(
        &self,
        ctx: &mut TurnContext<'_>,
    ) -> Result<TurnResponse, Report<TransportError>> {
        ctx.session.clear();
        Ok(TurnResponse::ending(
            ctx.phrases.random_goodbye(ctx.selector),
        ))
    }
}

/// Utterances the interaction model could not map to a skill intent.
pub struct FallbackHandler;

#[async_trait]
impl IntentHandler for FallbackHandler {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn can_handle(&self, request: &TurnRequest, _session: &SessionState) -> bool {
        request.is_intent(&[intents::FALLBACK])
    }

    async fn handle(
        &self,
        ctx: &mut TurnContext<'_>,
    ) -> Result<TurnResponse, Report<TransportError>> {
        ctx.session.clear();
        Ok(TurnResponse::continuing(ctx.phrases.fallback_intent)
            .with_reprompt(ctx.phrases.fallback_intent_reprompt(ctx.selector)))
    }
}

pub struct SessionEndedHandler;

#[async_trait]
impl IntentHandler for SessionEndedHandler {
    fn name(&self) -> &'static str {
        "session_ended"
    }

    fn can_handle(&self, request: &TurnRequest, _session: &SessionState) -> bool {
        matches!(request.request, RequestKind::SessionEnded)
    }

    async fn handle(
        &self,
        ctx: &mut TurnContext<'_>,
    ) -> Result<TurnResponse, Report<TransportError>> {
        ctx.session.clear();
        Ok(TurnResponse::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Intent;
    use crate::testing::{
        FakeAccount, FakeBackend, authorized_account, linked_account, run_handler, session_for,
    };
    use my_telegrams_i18n::{FirstSelector, Locale, PhraseTable};

    fn english() -> &'static PhraseTable {
        PhraseTable::for_locale(Locale::English)
    }

    #[tokio::test]
    async fn launch_offers_login_when_unauthorized() {
        let account = linked_account();
        let backend = FakeBackend::new(account.clone(), FakeAccount::new());
        let mut session = session_for(&account);

        let response = run_handler(&LaunchHandler, &TurnRequest::launch("en-US"), &mut session, &backend)
            .await
            .expect("handled");

        assert!(response.speech.starts_with("Welcome. "));
        assert!(response.speech.ends_with(english().authorize_prompt));
        assert!(!response.should_end_session);
    }

    #[tokio::test]
    async fn launch_offers_actions_when_authorized() {
        let account = authorized_account();
        let backend = FakeBackend::new(account.clone(), FakeAccount::new());
        let mut session = session_for(&account);

        let response = run_handler(&LaunchHandler, &TurnRequest::launch("de-DE"), &mut session, &backend)
            .await
            .expect("handled");

        let german = PhraseTable::for_locale(Locale::German);
        assert_eq!(
            response.speech,
            format!("{}. {}", german.welcome, german.send_or_check)
        );
        assert_eq!(response.reprompt.as_deref(), Some(german.send_or_check));
    }

    #[tokio::test]
    async fn stop_says_goodbye_and_clears_session() {
        let account = authorized_account();
        let backend = FakeBackend::new(account.clone(), FakeAccount::new());
        let mut session = session_for(&account);
        let request = TurnRequest::intent("en-US", Intent::new(intents::STOP));

        let response = run_handler(&CancelOrStopHandler, &request, &mut session, &backend)
            .await
            .expect("handled");

        assert!(response.should_end_session);
        assert_eq!(response.speech, english().random_goodbye(&FirstSelector));
        assert!(session.is_empty());
    }

    #[tokio::test]
    async fn fallback_reprompts_and_clears_session() {
        let account = authorized_account();
        let backend = FakeBackend::new(account.clone(), FakeAccount::new());
        let mut session = session_for(&account);
        let request = TurnRequest::intent("en-US", Intent::new(intents::FALLBACK));

        let response = run_handler(&FallbackHandler, &request, &mut session, &backend)
            .await
            .expect("handled");

        assert_eq!(response.speech, english().fallback_intent);
        assert_eq!(
            response.reprompt,
            Some(english().fallback_intent_reprompt(&FirstSelector))
        );
        assert!(!response.should_end_session);
        assert!(session.is_empty());
    }

    #[tokio::test]
    async fn help_keeps_session_open() {
        let account = linked_account();
        let backend = FakeBackend::new(account.clone(), FakeAccount::new());
        let mut session = session_for(&account);
        let request = TurnRequest::intent("en-US", Intent::new(intents::HELP));

        let response = run_handler(&HelpHandler, &request, &mut session, &backend)
            .await
            .expect("handled");

        assert_eq!(response.speech, english().help);
        assert!(!response.should_end_session);
        assert!(!session.is_empty());
    }

    #[test]
    fn session_ended_only_accepts_session_end() {
        let session = SessionState::default();
        assert!(SessionEndedHandler.can_handle(&TurnRequest::session_ended("en-US"), &session));
        assert!(!SessionEndedHandler.can_handle(&TurnRequest::launch("en-US"), &session));
    }
}
