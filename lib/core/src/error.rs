//! Shared `Result` alias.
//!
//! Crates keep their own error enums in their `error` modules; this alias
//! only fixes how those enums travel, as the typed context of a
//! rootcause [`Report`].

use rootcause::Report;

/// `Result` whose error is a report carrying context `C`.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;
