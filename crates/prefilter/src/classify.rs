//! Classification cascade over a single user utterance

use crate::greeting::{extract_named_greeting, matches_known_greeting};
use crate::language::check_language;

/// Default minimum partial-similarity score for a fuzzy greeting match
pub const DEFAULT_GREETING_THRESHOLD: u8 = 85;

/// Outcome of running the pre-filter cascade on one utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The user introduced themselves; reply greets them by name
    NamedGreeting(String),
    /// The input resembles a known greeting phrase
    FuzzyGreeting,
    /// The input is not in English; reply asks for English
    NonEnglish,
    /// No shortcut applies; forward to the model gateway
    PassThrough,
}

/// Runs the pre-filter cascade. Checks short-circuit in precedence
/// order, so an utterance that both names the speaker and resembles a
/// greeting is always a [`Classification::NamedGreeting`].
#[derive(Debug, Clone)]
pub struct Classifier {
    greeting_threshold: u8,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_GREETING_THRESHOLD)
    }
}

impl Classifier {
    pub fn new(greeting_threshold: u8) -> Self {
        Self { greeting_threshold }
    }

    /// Classify one utterance. Pure: no I/O, no state.
    pub fn classify(&self, input: &str) -> Classification {
        if let Some(name) = extract_named_greeting(input) {
            tracing::debug!(name = %name, "Classified as named greeting");
            return Classification::NamedGreeting(name);
        }

        if matches_known_greeting(input, self.greeting_threshold) {
            return Classification::FuzzyGreeting;
        }

        if check_language(input).is_non_english() {
            return Classification::NonEnglish;
        }

        Classification::PassThrough
    }
}
