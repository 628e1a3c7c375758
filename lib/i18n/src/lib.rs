//! Locale phrase tables for the my-telegrams skill.
//!
//! This crate provides:
//!
//! - **Locale**: the supported locales and tag parsing with English fallback
//! - **Phrase tables**: immutable per-locale speech snippets
//! - **Selectors**: injectable choice among phrase variants

pub mod locale;
pub mod selector;
pub mod table;

mod english;
mod german;

pub use locale::Locale;
pub use selector::{FirstSelector, PhraseSelector, RandomSelector};
pub use table::{BuiltinPhrases, PhraseProvider, PhraseTable};

/// Name the skill introduces itself with.
pub const SKILL_NAME: &str = "My Telegrams";

/// Pause markers embedded in speech output.
pub const BREAK_150: &str = "<break time='150ms'/>";
pub const BREAK_200: &str = "<break time='200ms'/>";
