//! Supported locales.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A locale with its own phrase table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// German (`de-DE`).
    German,
    /// English, also used for every tag without a dedicated table.
    #[default]
    English,
}

impl Locale {
    /// Maps a platform locale tag to a locale. Never fails.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("de-DE") {
            Self::German
        } else {
            Self::English
        }
    }

    /// Returns the canonical tag.
    #[must_use]
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::German => "de-DE",
            Self::English => "en-US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
