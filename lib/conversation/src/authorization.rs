//! Phone-verification login across turns.
//!
//! ```text
//! Unlinked ──(phone on file, no code)──▶ CodeRequested ──(code accepted)──▶ Authorized
//!                                              │
//!                                              └──(code rejected)──▶ CodeRejected (session ends)
//! ```
//!
//! The account is marked authorized only after the backend accepted a code.

use crate::request::intents;
use crate::response::TurnResponse;
use crate::session::AccountState;
use my_telegrams_i18n::{BREAK_200, PhraseTable};
use my_telegrams_integration::{MessagingAccountClient, TransportError};
use rootcause::prelude::Report;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, instrument, warn};

/// Where a login attempt stands after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStage {
    /// No phone number on file; the user has to add one first.
    Unlinked,
    /// A code was sent and the user is asked to read it back.
    CodeRequested,
    /// The backend accepted the code.
    Authorized,
    /// The backend rejected the code; the user retries in a new session.
    CodeRejected,
}

impl AuthorizationStage {
    /// Returns true if this stage ends the dialogue.
    #[must_use]
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Unlinked | Self::CodeRejected)
    }
}

impl fmt::Display for AuthorizationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unlinked => "unlinked",
            Self::CodeRequested => "code_requested",
            Self::Authorized => "authorized",
            Self::CodeRejected => "code_rejected",
        };
        f.write_str(name)
    }
}

/// Outcome of one [`AuthorizationFlow::advance`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationStep {
    pub stage: AuthorizationStage,
    pub response: TurnResponse,
}

/// Drives the login dialogue for one turn.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationFlow<'a> {
    phrases: &'a PhraseTable,
}

impl<'a> AuthorizationFlow<'a> {
    #[must_use]
    pub fn new(phrases: &'a PhraseTable) -> Self {
        Self { phrases }
    }

    /// Advances the login by one turn.
    ///
    /// `code` is the value of the code slot, if the user already said it.
    ///
    /// # Errors
    ///
    /// Backend failures are returned unchanged; the caller records them.
    #[instrument(skip_all, fields(account = %account.id, code_supplied = code.is_some()))]
    pub async fn advance<C>(
        &self,
        account: &mut AccountState,
        code: Option<&str>,
        client: &C,
    ) -> Result<AuthorizationStep, Report<TransportError>>
    where
        C: MessagingAccountClient + ?Sized,
    {
        if !account.has_phone_number() {
            info!("No phone number on file");
            return Ok(self.step(
                AuthorizationStage::Unlinked,
                TurnResponse::ending(self.phrases.no_phone_number),
            ));
        }

        let Some(code) = code else {
            client.request_code().await?;
            info!("Verification code requested");
            return Ok(self.step(
                AuthorizationStage::CodeRequested,
                TurnResponse::continuing(self.phrases.code_sent)
                    .eliciting(intents::AUTHORIZE, intents::CODE_SLOT),
            ));
        };

        if client.sign_in(code).await? {
            account.authorized = true;
            info!("Account authorized");
            let speech = format!(
                "{} {} {}",
                self.phrases.authorized, BREAK_200, self.phrases.send_or_check
            );
            Ok(self.step(
                AuthorizationStage::Authorized,
                TurnResponse::continuing(speech),
            ))
        } else {
            warn!("Verification code rejected");
            Ok(self.step(
                AuthorizationStage::CodeRejected,
                TurnResponse::ending(self.phrases.wrong_code),
            ))
        }
    }

    fn step(&self, stage: AuthorizationStage, response: TurnResponse) -> AuthorizationStep {
        AuthorizationStep { stage, response }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::SlotElicitation;
    use crate::testing::{CODE, FakeAccount, linked_account, unavailable};
    use my_telegrams_i18n::Locale;

    fn english() -> &'static PhraseTable {
        PhraseTable::for_locale(Locale::English)
    }

    fn account_state() -> AccountState {
        AccountState::from(linked_account())
    }

    #[tokio::test]
    async fn missing_phone_number_ends_without_backend_call() {
        let client = FakeAccount::new();
        let mut account = account_state();
        account.phone_number = None;

        for code in [None, Some(CODE)] {
            let step = AuthorizationFlow::new(english())
                .advance(&mut account, code, &client)
                .await
                .expect("advance");

            assert_eq!(step.stage, AuthorizationStage::Unlinked);
            assert!(step.response.should_end_session);
            assert_eq!(step.response.speech, english().no_phone_number);
        }
        let log = client.log();
        assert_eq!(log.code_requests, 0);
        assert!(log.sign_ins.is_empty());
        assert!(!account.authorized);
    }

    #[tokio::test]
    async fn no_code_requests_one_and_elicits_code_slot() {
        let client = FakeAccount::new();
        let mut account = account_state();

        let step = AuthorizationFlow::new(english())
            .advance(&mut account, None, &client)
            .await
            .expect("advance");

        assert_eq!(step.stage, AuthorizationStage::CodeRequested);
        assert!(!step.response.should_end_session);
        assert_eq!(
            step.response.directive,
            Some(SlotElicitation::new(intents::AUTHORIZE, intents::CODE_SLOT))
        );
        assert_eq!(client.log().code_requests, 1);
        assert!(!account.authorized);
    }

    #[tokio::test]
    async fn accepted_code_authorizes_and_keeps_session_open() {
        let client = FakeAccount::new();
        let mut account = account_state();

        let step = AuthorizationFlow::new(english())
            .advance(&mut account, Some(CODE), &client)
            .await
            .expect("advance");

        assert_eq!(step.stage, AuthorizationStage::Authorized);
        assert!(account.authorized);
        assert!(!step.response.should_end_session);
        assert!(step.response.speech.starts_with(english().authorized));
        assert!(step.response.speech.contains(BREAK_200));
        assert_eq!(client.log().sign_ins, vec![CODE.to_string()]);
        assert_eq!(client.log().code_requests, 0);
    }

    #[tokio::test]
    async fn rejected_code_leaves_account_unauthorized_and_ends() {
        let client = FakeAccount::new();
        let mut account = account_state();

        let step = AuthorizationFlow::new(english())
            .advance(&mut account, Some("0000"), &client)
            .await
            .expect("advance");

        assert_eq!(step.stage, AuthorizationStage::CodeRejected);
        assert!(step.stage.ends_session());
        assert!(!account.authorized);
        assert!(step.response.should_end_session);
        assert_eq!(step.response.speech, english().wrong_code);
    }

    #[tokio::test]
    async fn backend_failure_propagates_and_does_not_authorize() {
        let client = FakeAccount::new().failing(unavailable());
        let mut account = account_state();

        let report = AuthorizationFlow::new(english())
            .advance(&mut account, Some(CODE), &client)
            .await
            .expect_err("should fail");

        assert_eq!(report.current_context().error_code(), 503);
        assert!(!account.authorized);
    }

    #[tokio::test]
    async fn german_prompts_come_from_german_table() {
        let german = PhraseTable::for_locale(Locale::German);
        let client = FakeAccount::new();
        let mut account = account_state();

        let step = AuthorizationFlow::new(german)
            .advance(&mut account, None, &client)
            .await
            .expect("advance");

        assert_eq!(step.response.speech, german.code_sent);
    }
}
