//! In-memory backend fakes shared by the unit tests.

use crate::handler::{IntentHandler, TurnContext};
use crate::request::TurnRequest;
use crate::response::TurnResponse;
use crate::services::{AccountServices, BackendConnector};
use crate::session::{AccountState, SessionState};
use async_trait::async_trait;
use my_telegrams_core::{Account, AccountId, Contact, Conversation};
use my_telegrams_i18n::{FirstSelector, Locale, PhraseTable};
use my_telegrams_integration::{
    AddressBook, IdentityStore, MessagingAccountClient, TransportError,
};
use rootcause::prelude::Report;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

pub(crate) const CODE: &str = "4821";

#[derive(Debug, Default)]
pub(crate) struct CallLog {
    pub code_requests: usize,
    pub sign_ins: Vec<String>,
    pub sent: Vec<(String, String)>,
    pub contact_lookups: usize,
}

/// Records calls and answers from canned data.
#[derive(Clone, Default)]
pub(crate) struct FakeAccount {
    log: Arc<Mutex<CallLog>>,
    contacts: Vec<Contact>,
    unread: Vec<Conversation>,
    failure: Option<TransportError>,
}

impl FakeAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_unread(mut self, unread: Vec<Conversation>) -> Self {
        self.unread = unread;
        self
    }

    pub fn failing(mut self, failure: TransportError) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn log(&self) -> MutexGuard<'_, CallLog> {
        self.log.lock().expect("call log lock")
    }

    fn check(&self) -> Result<(), Report<TransportError>> {
        match &self.failure {
            Some(failure) => Err(failure.clone().into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MessagingAccountClient for FakeAccount {
    async fn request_code(&self) -> Result<(), Report<TransportError>> {
        self.check()?;
        self.log().code_requests += 1;
        Ok(())
    }

    async fn sign_in(&self, code: &str) -> Result<bool, Report<TransportError>> {
        self.check()?;
        self.log().sign_ins.push(code.to_string());
        Ok(code == CODE)
    }

    async fn send_message(
        &self,
        recipient: &Contact,
        text: &str,
    ) -> Result<(), Report<TransportError>> {
        self.check()?;
        self.log()
            .sent
            .push((recipient.display_name(), text.to_string()));
        Ok(())
    }
}

#[async_trait]
impl AddressBook for FakeAccount {
    async fn contacts(&self) -> Result<Vec<Contact>, Report<TransportError>> {
        self.check()?;
        self.log().contact_lookups += 1;
        Ok(self.contacts.clone())
    }

    async fn unread_conversations(&self) -> Result<Vec<Conversation>, Report<TransportError>> {
        self.check()?;
        Ok(self.unread.clone())
    }
}

/// Identity store plus per-account fakes.
pub(crate) struct FakeBackend {
    pub identity: Result<Account, TransportError>,
    pub account: FakeAccount,
    pub lookups: AtomicUsize,
}

impl FakeBackend {
    pub fn new(identity: Account, account: FakeAccount) -> Self {
        Self {
            identity: Ok(identity),
            account,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn unreachable(account: FakeAccount) -> Self {
        Self {
            identity: Err(TransportError::Unreachable {
                endpoint: "/identities/lookup".to_string(),
                reason: "connection refused".to_string(),
            }),
            account,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityStore for FakeBackend {
    async fn load_account(&self, _user_ref: &str) -> Result<Account, Report<TransportError>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match &self.identity {
            Ok(account) => Ok(account.clone()),
            Err(failure) => Err(failure.clone().into()),
        }
    }
}

impl BackendConnector for FakeBackend {
    fn identity_store(&self) -> &dyn IdentityStore {
        self
    }

    fn account_services(&self, _account: AccountId) -> Box<dyn AccountServices> {
        Box::new(self.account.clone())
    }
}

pub(crate) fn linked_account() -> Account {
    Account::new(AccountId::new(), Some("+4915112345678".to_string()))
}

pub(crate) fn authorized_account() -> Account {
    let mut account = linked_account();
    account.is_authorized = true;
    account
}

pub(crate) fn session_for(account: &Account) -> SessionState {
    SessionState {
        account: Some(AccountState::from(account.clone())),
        http_error_code: None,
    }
}

pub(crate) fn unavailable() -> TransportError {
    TransportError::Status {
        endpoint: "/accounts/acct/code".to_string(),
        code: 503,
    }
}

/// Runs one handler directly, asserting it accepts the turn.
pub(crate) async fn run_handler(
    handler: &dyn IntentHandler,
    request: &TurnRequest,
    session: &mut SessionState,
    backend: &FakeBackend,
) -> Result<TurnResponse, Report<TransportError>> {
    assert!(
        handler.can_handle(request, session),
        "{} should accept {}",
        handler.name(),
        request.label()
    );
    let phrases = PhraseTable::for_locale(Locale::from_tag(&request.locale));
    let mut ctx = TurnContext::new(request, session, phrases, &FirstSelector, backend);
    handler.handle(&mut ctx).await
}
