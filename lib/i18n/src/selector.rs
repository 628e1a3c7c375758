//! Choice among phrase variants.
//!
//! Speech varies between turns by picking a random variant from a list.
//! The choice sits behind [`PhraseSelector`] so tests can pin it.

use rand::seq::SliceRandom;

/// Picks one variant out of a phrase list.
pub trait PhraseSelector: Send + Sync {
    /// Returns one of `options`, or an empty string when there are none.
    fn pick(&self, options: &[&'static str]) -> &'static str;
}

/// Uniformly random selection using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl PhraseSelector for RandomSelector {
    fn pick(&self, options: &[&'static str]) -> &'static str {
        options
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or("")
    }
}

/// Always selects the first variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSelector;

impl PhraseSelector for FirstSelector {
    fn pick(&self, options: &[&'static str]) -> &'static str {
        options.first().copied().unwrap_or("")
    }
}
