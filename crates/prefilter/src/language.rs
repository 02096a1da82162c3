//! Non-English input detection
//!
//! Language identification runs on a cleaned copy of the input: only
//! alphanumeric runs of length >= 2 are kept, joined by single spaces.
//! Inputs with fewer than two such tokens carry too little signal and are
//! never flagged as non-English, and identification failure fails open to
//! English. Both outcomes are explicit variants so the fallback is a
//! testable branch rather than a swallowed error.

use once_cell::sync::Lazy;
use regex::Regex;
use whatlang::Lang;

/// Alphanumeric runs of length >= 2, matched against the raw input
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9]{2,}").unwrap());

/// Minimum token count required before language identification runs
const MIN_TOKENS: usize = 2;

/// Outcome of the language check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageCheck {
    /// Input identified as English
    English,
    /// Input identified as some other language (ISO 639-3 code)
    NonEnglish(String),
    /// Too little signal to identify a language; treated as English
    Undetermined,
}

impl LanguageCheck {
    /// Whether the session should refuse this input as non-English
    pub fn is_non_english(&self) -> bool {
        matches!(self, LanguageCheck::NonEnglish(_))
    }
}

/// Identify the language of the input, failing open to English.
pub fn check_language(input: &str) -> LanguageCheck {
    let tokens: Vec<&str> = TOKEN_RE.find_iter(input).map(|m| m.as_str()).collect();
    if tokens.len() < MIN_TOKENS {
        return LanguageCheck::Undetermined;
    }

    let cleaned = tokens.join(" ");
    match whatlang::detect_lang(&cleaned) {
        Some(Lang::Eng) => LanguageCheck::English,
        Some(lang) => {
            tracing::debug!(lang = lang.code(), "Detected non-English input");
            LanguageCheck::NonEnglish(lang.code().to_string())
        }
        None => LanguageCheck::Undetermined,
    }
}
