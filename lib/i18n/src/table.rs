//! Phrase tables and the provider that hands them out per turn.

use crate::locale::Locale;
use crate::selector::PhraseSelector;
use crate::{english, german};
use std::fmt;
use tracing::debug;

/// Immutable speech snippets for one locale.
///
/// Scalars are spoken as-is. Lists hold variants that a [`PhraseSelector`]
/// chooses from, so repeated turns do not sound identical.
pub struct PhraseTable {
    pub locale: Locale,

    pub welcome: &'static str,
    pub help: &'static str,
    pub send_or_check: &'static str,
    pub authorize_prompt: &'static str,

    pub backend_exception: &'static str,
    pub server_error: &'static str,
    pub account_linking_required: &'static str,
    pub wrong_intent: &'static str,
    pub detour_exception: &'static str,
    pub not_authorized_detour: &'static str,
    /// Spoken after a thinking filler when no better explanation exists.
    pub frontend_error_tail: &'static str,

    pub fallback_intent: &'static str,
    /// Appended to a don't-understand variant.
    pub fallback_tail: &'static str,
    /// Appended to a thinking filler.
    pub fallback_reprompt_tail: &'static str,

    pub no_phone_number: &'static str,
    pub code_sent: &'static str,
    pub authorized: &'static str,
    pub wrong_code: &'static str,

    pub ask_recipient: &'static str,
    pub ask_speed_dial: &'static str,
    pub contact_not_found: &'static str,
    pub no_speed_dial: &'static str,
    pub no_new_telegrams: &'static str,
    /// Asks for the message text addressed to the named contact.
    pub ask_message: fn(&str) -> String,
    /// Summarizes unread telegrams given a count and a spoken sender list.
    pub unread_summary: fn(usize, &str) -> String,
    /// Word joining the last two items of a spoken list.
    pub list_and: &'static str,

    pub acks: &'static [&'static str],
    pub acceptance_acks: &'static [&'static str],
    pub done_acks: &'static [&'static str],
    pub thinking: &'static [&'static str],
    pub dont_understand: &'static [&'static str],
    pub goodbyes: &'static [&'static str],
    pub anything_else: &'static [&'static str],
}

impl fmt::Debug for PhraseTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhraseTable")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl PhraseTable {
    /// Returns the table for `locale`.
    #[must_use]
    pub fn for_locale(locale: Locale) -> &'static PhraseTable {
        match locale {
            Locale::German => &german::PHRASES,
            Locale::English => &english::PHRASES,
        }
    }

    pub fn random_ack(&self, selector: &dyn PhraseSelector) -> &'static str {
        selector.pick(self.acks)
    }

    pub fn random_acceptance_ack(&self, selector: &dyn PhraseSelector) -> &'static str {
        selector.pick(self.acceptance_acks)
    }

    pub fn random_done_ack(&self, selector: &dyn PhraseSelector) -> &'static str {
        selector.pick(self.done_acks)
    }

    pub fn random_goodbye(&self, selector: &dyn PhraseSelector) -> &'static str {
        selector.pick(self.goodbyes)
    }

    pub fn random_thinking(&self, selector: &dyn PhraseSelector) -> &'static str {
        selector.pick(self.thinking)
    }

    pub fn random_dont_understand(&self, selector: &dyn PhraseSelector) -> &'static str {
        selector.pick(self.dont_understand)
    }

    /// A done-ack followed by an "anything else?" question.
    #[must_use]
    pub fn random_anything_else(&self, selector: &dyn PhraseSelector) -> String {
        let ack = self.random_done_ack(selector);
        let question = self.random_anything_else_without_ack(selector);
        format!("{ack}. {question}")
    }

    pub fn random_anything_else_without_ack(&self, selector: &dyn PhraseSelector) -> &'static str {
        selector.pick(self.anything_else)
    }

    /// Generic apology for failures nothing else explains.
    #[must_use]
    pub fn frontend_error(&self, selector: &dyn PhraseSelector) -> String {
        format!(
            "{}{}{}",
            self.random_thinking(selector),
            self.frontend_error_tail,
            self.random_goodbye(selector)
        )
    }

    /// Re-prompt after an utterance the skill did not understand.
    #[must_use]
    pub fn fallback(&self, selector: &dyn PhraseSelector) -> String {
        format!("{}{}", self.random_dont_understand(selector), self.fallback_tail)
    }

    #[must_use]
    pub fn fallback_intent_reprompt(&self, selector: &dyn PhraseSelector) -> String {
        format!(
            "{}{}",
            self.random_thinking(selector),
            self.fallback_reprompt_tail
        )
    }

    /// Joins names for speech: `A`, `A and B`, `A, B and C`.
    #[must_use]
    pub fn spoken_list(&self, items: &[String]) -> String {
        match items {
            [] => String::new(),
            [only] => only.clone(),
            [head @ .., last] => format!("{} {} {}", head.join(", "), self.list_and, last),
        }
    }
}

/// Looks up the phrase table for a platform locale tag.
pub trait PhraseProvider: Send + Sync {
    /// Returns the table for `locale_tag`, falling back to the default table.
    fn get(&self, locale_tag: &str) -> &PhraseTable;
}

/// Provider over the tables compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinPhrases;

impl PhraseProvider for BuiltinPhrases {
    fn get(&self, locale_tag: &str) -> &PhraseTable {
        let locale = Locale::from_tag(locale_tag);
        if locale == Locale::English && !locale_tag.to_ascii_lowercase().starts_with("en") {
            debug!(locale_tag, "no phrase table for locale, using English");
        }
        PhraseTable::for_locale(locale)
    }
}
