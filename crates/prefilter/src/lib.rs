//! Intent pre-filter for the banking assistant agent
//!
//! Classifies a raw user utterance before any model call is made. The
//! cascade short-circuits at the first match, in this precedence order:
//!
//! 1. Named greeting ("hi this is Maria" -> greet Maria by name)
//! 2. Fuzzy greeting (partial similarity against known greeting phrases)
//! 3. Non-English detection (language identification on cleaned tokens)
//! 4. Pass-through (forward to the model gateway)
//!
//! Classification is pure: no side effects, and language-identification
//! failure fails open to English rather than propagating.
//!
//! # Example
//!
//! ```
//! use banking_agent_prefilter::{Classification, Classifier};
//!
//! let classifier = Classifier::default();
//! assert_eq!(classifier.classify("hello"), Classification::FuzzyGreeting);
//! ```

pub mod classify;
pub mod greeting;
pub mod language;

pub use classify::{Classification, Classifier, DEFAULT_GREETING_THRESHOLD};
pub use greeting::{extract_named_greeting, partial_ratio};
pub use language::{check_language, LanguageCheck};
