//! Fuzzy matching of spoken names against known contact names.
//!
//! Speech recognition mangles unusual names, so the spoken string is compared
//! against every candidate and the closest one wins if it is close enough.

use my_telegrams_core::Contact;
use similar::TextDiff;

/// Ratio a candidate must exceed to be accepted.
pub const ACCEPTANCE_THRESHOLD: f32 = 0.7;

/// Similarity of two names in `[0, 1]`, ignoring case.
///
/// Twice the number of characters in the longest common subsequence, divided
/// by the combined length of both names.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f32 {
    let a = a.to_uppercase();
    let b = b.to_uppercase();
    TextDiff::from_chars(a.as_str(), b.as_str()).ratio()
}

/// Returns the index of the best candidate above the threshold.
///
/// Ties keep the earliest candidate.
#[must_use]
pub fn best_match_index<S: AsRef<str>>(candidates: &[S], spoken: &str) -> Option<usize> {
    let mut best_ratio = 0.0_f32;
    let mut best = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let ratio = similarity(candidate.as_ref(), spoken);
        if ratio > ACCEPTANCE_THRESHOLD && ratio > best_ratio {
            best_ratio = ratio;
            best = Some(index);
        }
    }

    best
}

/// Returns the candidate that best matches `spoken`, if any is close enough.
#[must_use]
pub fn best_match<'a, S: AsRef<str>>(candidates: &'a [S], spoken: &str) -> Option<&'a str> {
    best_match_index(candidates, spoken).map(|index| candidates[index].as_ref())
}

/// Resolves a spoken first name to a contact.
#[must_use]
pub fn resolve_contact<'a>(contacts: &'a [Contact], spoken: &str) -> Option<&'a Contact> {
    let first_names: Vec<&str> = contacts.iter().map(|c| c.first_name.as_str()).collect();
    best_match_index(&first_names, spoken).map(|index| &contacts[index])
}
