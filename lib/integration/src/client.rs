//! Operations the conversation layer needs from the messaging backend.
//!
//! Every call blocks the turn that issued it. Nothing here retries; a failed
//! call surfaces as a [`TransportError`] and ends the turn.

use crate::error::TransportError;
use async_trait::async_trait;
use my_telegrams_core::{Account, Contact, Conversation, Result};

/// Login and send operations for one linked account.
#[async_trait]
pub trait MessagingAccountClient: Send + Sync {
    /// Asks the messaging service to text a verification code to the
    /// account's phone number.
    async fn request_code(&self) -> Result<(), TransportError>;

    /// Submits the code the user read back.
    ///
    /// Returns `Ok(false)` when the service rejected the code.
    async fn sign_in(&self, code: &str) -> Result<bool, TransportError>;

    /// Sends a text message to a contact.
    async fn send_message(
        &self,
        recipient: &Contact,
        text: &str,
    ) -> Result<(), TransportError>;
}

/// Read access to the account's contacts and chats.
#[async_trait]
pub trait AddressBook: Send + Sync {
    /// Lists the account's contacts.
    async fn contacts(&self) -> Result<Vec<Contact>, TransportError>;

    /// Lists chats with unread messages.
    async fn unread_conversations(&self) -> Result<Vec<Conversation>, TransportError>;
}

/// Resolves the voice user to a linked account at session start.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Loads the account linked to `user_ref` (the platform's linked
    /// access token or user id).
    async fn load_account(&self, user_ref: &str) -> Result<Account, TransportError>;
}
