//! Turn input as delivered by the host after intent recognition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Intent and slot names of the interaction model.
pub mod intents {
    pub const AUTHORIZE: &str = "CustomYesIntent";
    pub const SEND_TELEGRAM: &str = "SendTelegramIntent";
    pub const SEND_SPEED_DIAL: &str = "SendSpeedDialIntent";
    pub const CHECK_TELEGRAMS: &str = "CheckTelegramsIntent";
    pub const HELP: &str = "AMAZON.HelpIntent";
    pub const CANCEL: &str = "AMAZON.CancelIntent";
    pub const STOP: &str = "AMAZON.StopIntent";
    pub const FALLBACK: &str = "AMAZON.FallbackIntent";

    pub const CODE_SLOT: &str = "code";
    pub const FIRST_NAME_SLOT: &str = "first_name";
    pub const MESSAGE_SLOT: &str = "message";
    pub const SPEED_DIAL_SLOT: &str = "speed_dial_number";
}

/// A recognized intent with its filled slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: BTreeMap<String, String>,
}

impl Intent {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: BTreeMap::new(),
        }
    }

    /// Fills a slot.
    #[must_use]
    pub fn with_slot(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(slot.into(), value.into());
        self
    }

    /// Returns a slot value; blank values count as unfilled.
    #[must_use]
    pub fn slot(&self, slot: &str) -> Option<&str> {
        self.slots
            .get(slot)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

/// Kind of platform request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestKind {
    /// The user opened the skill without an intent.
    Launch,
    /// The user said something mapped to an intent.
    Intent(Intent),
    /// The platform closed the session.
    SessionEnded,
}

/// One turn of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRequest {
    /// Platform locale tag, e.g. `de-DE`.
    pub locale: String,
    pub request: RequestKind,
}

impl TurnRequest {
    #[must_use]
    pub fn launch(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            request: RequestKind::Launch,
        }
    }

    #[must_use]
    pub fn intent(locale: impl Into<String>, intent: Intent) -> Self {
        Self {
            locale: locale.into(),
            request: RequestKind::Intent(intent),
        }
    }

    #[must_use]
    pub fn session_ended(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            request: RequestKind::SessionEnded,
        }
    }

    /// Returns the intent if this is an intent request.
    #[must_use]
    pub fn as_intent(&self) -> Option<&Intent> {
        match &self.request {
            RequestKind::Intent(intent) => Some(intent),
            _ => None,
        }
    }

    /// Returns true if this is an intent request for any of `names`.
    #[must_use]
    pub fn is_intent(&self, names: &[&str]) -> bool {
        self.as_intent()
            .is_some_and(|intent| names.contains(&intent.name.as_str()))
    }

    /// Name used in logs and routing failures.
    #[must_use]
    pub fn label(&self) -> &str {
        match &self.request {
            RequestKind::Launch => "LaunchRequest",
            RequestKind::Intent(intent) => intent.name.as_str(),
            RequestKind::SessionEnded => "SessionEndedRequest",
        }
    }
}
