//! Per-dialogue session state.
//!
//! The host hands the persisted attributes back on every turn. They are
//! validated into [`SessionState`] on the way in and serialized with the same
//! keys on the way out.

use crate::error::SessionError;
use my_telegrams_core::{Account, AccountId};
use rootcause::prelude::Report;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Projection of the linked account kept across turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    #[serde(rename = "ID")]
    pub id: AccountId,
    #[serde(rename = "PHONE_NUMBER", default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Only ever set after the backend accepted a verification code.
    #[serde(rename = "AUTHORIZED", default)]
    pub authorized: bool,
}

impl AccountState {
    /// Returns true if a non-blank phone number is on file.
    #[must_use]
    pub fn has_phone_number(&self) -> bool {
        self.phone_number
            .as_deref()
            .is_some_and(|number| !number.trim().is_empty())
    }
}

impl From<Account> for AccountState {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            phone_number: account.phone_number,
            authorized: account.is_authorized,
        }
    }
}

/// Session attributes for one dialogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(rename = "ACCOUNT", default, skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountState>,
    /// Status of the last failed backend call in this turn.
    #[serde(
        rename = "HTTP_ERROR_CODE",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub http_error_code: Option<u16>,
}

impl SessionState {
    /// Validates persisted attributes. `null` is an empty session.
    ///
    /// # Errors
    ///
    /// Returns an error if the attributes do not have the expected shape.
    pub fn from_attributes(attributes: JsonValue) -> Result<Self, Report<SessionError>> {
        if attributes.is_null() {
            return Ok(Self::default());
        }
        let state = serde_json::from_value(attributes).map_err(|e| {
            SessionError::InvalidAttributes {
                reason: e.to_string(),
            }
        })?;
        Ok(state)
    }

    /// Returns the attributes to persist for the next turn.
    #[must_use]
    pub fn to_attributes(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or_else(|_| JsonValue::Object(Default::default()))
    }

    /// Returns true if the linked account passed code verification.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.account.as_ref().is_some_and(|a| a.authorized)
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.account.is_none() && self.http_error_code.is_none()
    }

    /// Drops everything; used on terminal turns.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account_state(authorized: bool) -> AccountState {
        AccountState {
            id: AccountId::new(),
            phone_number: Some("+4915112345678".to_string()),
            authorized,
        }
    }

    #[test]
    fn null_attributes_are_an_empty_session() {
        let state = SessionState::from_attributes(JsonValue::Null).expect("valid");
        assert!(state.is_empty());
        assert!(!state.is_authorized());
    }

    #[test]
    fn attributes_use_persisted_key_names() {
        let state = SessionState {
            account: Some(account_state(true)),
            http_error_code: Some(503),
        };
        let attrs = state.to_attributes();

        assert_eq!(attrs["ACCOUNT"]["AUTHORIZED"], json!(true));
        assert_eq!(attrs["ACCOUNT"]["PHONE_NUMBER"], json!("+4915112345678"));
        assert_eq!(attrs["HTTP_ERROR_CODE"], json!(503));
        assert_eq!(SessionState::from_attributes(attrs).expect("valid"), state);
    }

    #[test]
    fn missing_authorized_flag_defaults_to_false() {
        let id = AccountId::new();
        let state = SessionState::from_attributes(json!({
            "ACCOUNT": { "ID": id }
        }))
        .expect("valid");
        let account = state.account.expect("account");
        assert!(!account.authorized);
        assert!(!account.has_phone_number());
    }

    #[test]
    fn malformed_attributes_are_rejected() {
        let report = SessionState::from_attributes(json!({ "ACCOUNT": { "AUTHORIZED": "yes" } }))
            .expect_err("should be invalid");
        assert!(matches!(
            report.current_context(),
            SessionError::InvalidAttributes { .. }
        ));
    }

    #[test]
    fn clear_empties_the_session() {
        let mut state = SessionState {
            account: Some(account_state(false)),
            http_error_code: Some(500),
        };
        state.clear();
        assert!(state.is_empty());
        assert_eq!(state.to_attributes(), json!({}));
    }

    #[test]
    fn account_state_copies_authorization_from_identity_record() {
        let account = Account::new(AccountId::new(), None);
        let state = AccountState::from(account.clone());
        assert_eq!(state.id, account.id);
        assert!(!state.authorized);
    }
}
