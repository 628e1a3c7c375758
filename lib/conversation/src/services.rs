//! Backend seam used by the dispatcher.

use my_telegrams_core::AccountId;
use my_telegrams_integration::{AddressBook, HttpBackend, IdentityStore, MessagingAccountClient};

/// Everything a handler may call for the session's account.
pub trait AccountServices: MessagingAccountClient + AddressBook {}

impl<T: MessagingAccountClient + AddressBook> AccountServices for T {}

/// Hands out backend clients per turn.
pub trait BackendConnector: Send + Sync {
    /// Store used to load the account at session start.
    fn identity_store(&self) -> &dyn IdentityStore;

    /// Client scoped to one linked account.
    fn account_services(&self, account: AccountId) -> Box<dyn AccountServices>;
}

impl BackendConnector for HttpBackend {
    fn identity_store(&self) -> &dyn IdentityStore {
        self
    }

    fn account_services(&self, account: AccountId) -> Box<dyn AccountServices> {
        Box::new(self.for_account(account))
    }
}
