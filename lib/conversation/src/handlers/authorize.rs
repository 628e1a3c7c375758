use crate::authorization::AuthorizationFlow;
use crate::handler::{IntentHandler, TurnContext};
use crate::request::{TurnRequest, intents};
use crate::response::TurnResponse;
use crate::session::SessionState;
use async_trait::async_trait;
use my_telegrams_integration::TransportError;
use rootcause::prelude::Report;
use tracing::debug;

/// Accepts "yes" from an unauthorized user and walks the login dialogue.
///
/// Once the session is authorized this handler declines, so a stray "yes"
/// falls through to the dispatch exception policy.
pub struct AuthorizeHandler;

#[async_trait]
impl IntentHandler for AuthorizeHandler {
    fn name(&self) -> &'static str {
        "authorize"
    }

    fn can_handle(&self, request: &TurnRequest, session: &SessionState) -> bool {
        request.is_intent(&[intents::AUTHORIZE])
            && session.account.is_some()
            && !session.is_authorized()
    }

    async fn handle(
        &self,
        ctx: &mut TurnContext<'_>,
    ) -> Result<TurnResponse, Report<TransportError>> {
        let code = ctx.intent().and_then(|intent| intent.slot(intents::CODE_SLOT));
        let Some(client) = ctx.account_services() else {
            return Ok(TurnResponse::ending(ctx.phrases.no_phone_number));
        };
        let Some(account) = ctx.session.account.as_mut() else {
            return Ok(TurnResponse::ending(ctx.phrases.no_phone_number));
        };

        let step = AuthorizationFlow::new(ctx.phrases)
            .advance(account, code, client.as_ref())
            .await?;
        debug!(stage = %step.stage, "Authorization advanced");
        Ok(step.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Intent;
    use crate::testing::{
        CODE, FakeAccount, FakeBackend, authorized_account, linked_account, run_handler,
        session_for,
    };
    use my_telegrams_core::{Account, AccountId};
    use my_telegrams_i18n::{Locale, PhraseTable};

    fn yes(code: Option<&str>) -> TurnRequest {
        let mut intent = Intent::new(intents::AUTHORIZE);
        if let Some(code) = code {
            intent = intent.with_slot(intents::CODE_SLOT, code);
        }
        TurnRequest::intent("en-US", intent)
    }

    #[tokio::test]
    async fn first_yes_requests_a_code() {
        let account = linked_account();
        let fake = FakeAccount::new();
        let backend = FakeBackend::new(account.clone(), fake.clone());
        let mut session = session_for(&account);

        let response = run_handler(&AuthorizeHandler, &yes(None), &mut session, &backend)
            .await
            .expect("handled");

        assert_eq!(fake.log().code_requests, 1);
        assert_eq!(response.speech, PhraseTable::for_locale(Locale::English).code_sent);
        assert!(response.directive.is_some());
        assert!(!session.is_authorized());
    }

    #[tokio::test]
    async fn correct_code_authorizes_the_session() {
        let account = linked_account();
        let fake = FakeAccount::new();
        let backend = FakeBackend::new(account.clone(), fake.clone());
        let mut session = session_for(&account);

        let response = run_handler(&AuthorizeHandler, &yes(Some(CODE)), &mut session, &backend)
            .await
            .expect("handled");

        assert!(session.is_authorized());
        assert!(!response.should_end_session);
        assert_eq!(fake.log().sign_ins, vec![CODE.to_string()]);
    }

    #[tokio::test]
    async fn missing_phone_number_ends_without_backend_call() {
        let account = Account::new(AccountId::new(), None);
        let fake = FakeAccount::new();
        let backend = FakeBackend::new(account.clone(), fake.clone());
        let mut session = session_for(&account);

        let response = run_handler(&AuthorizeHandler, &yes(None), &mut session, &backend)
            .await
            .expect("handled");

        assert!(response.should_end_session);
        assert_eq!(fake.log().code_requests, 0);
    }

    #[test]
    fn declines_once_authorized() {
        let session = session_for(&authorized_account());
        assert!(!AuthorizeHandler.can_handle(&yes(None), &session));
        assert!(!AuthorizeHandler.can_handle(&yes(None), &SessionState::default()));
    }
}
