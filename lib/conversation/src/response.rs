//! Turn output handed back to the host.

use serde::{Deserialize, Serialize};

/// Instruction to prompt for one named slot on the next turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotElicitation {
    pub intent_name: String,
    pub slot_name: String,
}

impl SlotElicitation {
    #[must_use]
    pub fn new(intent_name: impl Into<String>, slot_name: impl Into<String>) -> Self {
        Self {
            intent_name: intent_name.into(),
            slot_name: slot_name.into(),
        }
    }
}

/// What the skill says and whether the dialogue goes on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResponse {
    /// Speech, possibly with embedded pause markers.
    pub speech: String,
    /// Spoken if the user stays silent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<String>,
    pub should_end_session: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directive: Option<SlotElicitation>,
}

impl TurnResponse {
    /// Speaks and keeps the session open.
    #[must_use]
    pub fn continuing(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            reprompt: None,
            should_end_session: false,
            directive: None,
        }
    }

    /// Speaks and ends the session.
    #[must_use]
    pub fn ending(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            reprompt: None,
            should_end_session: true,
            directive: None,
        }
    }

    /// Says nothing; used to acknowledge session end.
    #[must_use]
    pub fn empty() -> Self {
        Self::ending(String::new())
    }

    /// Adds a reprompt. A reprompt keeps the session open.
    #[must_use]
    pub fn with_reprompt(mut self, reprompt: impl Into<String>) -> Self {
        self.reprompt = Some(reprompt.into());
        self.should_end_session = false;
        self
    }

    /// Asks the platform to elicit a slot next turn.
    #[must_use]
    pub fn eliciting(mut self, intent_name: &str, slot_name: &str) -> Self {
        self.directive = Some(SlotElicitation::new(intent_name, slot_name));
        self.should_end_session = false;
        self
    }
}
