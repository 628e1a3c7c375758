//! Domain records shared by the skill crates.
//!
//! These mirror what the identity store and address book hand back. They are
//! reconstructed for every session and never mutated by the address book side.

use crate::id::AccountId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A messaging account linked to the voice user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Identity-store key for this account.
    pub id: AccountId,
    /// Phone number registered on the companion website, if any.
    pub phone_number: Option<String>,
    /// Whether a verification code was accepted for this account.
    pub is_authorized: bool,
}

impl Account {
    /// Creates an unauthorized account.
    #[must_use]
    pub fn new(id: AccountId, phone_number: Option<String>) -> Self {
        Self {
            id,
            phone_number,
            is_authorized: false,
        }
    }

    /// Returns true if a phone number is on file.
    #[must_use]
    pub fn has_phone_number(&self) -> bool {
        self.phone_number
            .as_deref()
            .is_some_and(|number| !number.trim().is_empty())
    }
}

/// An address book entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Numeric shortcut for names that are hard to recognize by voice.
    #[serde(default)]
    pub speed_dial_number: Option<u32>,
    /// Messaging-service entity the contact resolves to.
    #[serde(default)]
    pub messaging_id: Option<i64>,
}

impl Contact {
    /// Creates a contact with only a first name.
    #[must_use]
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: None,
            speed_dial_number: None,
            messaging_id: None,
        }
    }

    /// Sets the last name.
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Sets the speed dial number.
    #[must_use]
    pub fn with_speed_dial(mut self, number: u32) -> Self {
        self.speed_dial_number = Some(number);
        self
    }

    /// Sets the messaging entity id.
    #[must_use]
    pub fn with_messaging_id(mut self, id: i64) -> Self {
        self.messaging_id = Some(id);
        self
    }

    /// Returns the name to speak back to the user.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

/// A single received message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub text: String,
    pub received_at: DateTime<Utc>,
}

/// Unread messages grouped by chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub sender: Contact,
    pub messages: Vec<MessageRecord>,
    pub is_group: bool,
    pub entity_id: i64,
}

impl Conversation {
    /// Returns the number of unread messages in this chat.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.messages.len()
    }
}
