//! Canned assistant replies
//!
//! Every reply the session can produce without the model lives here, so
//! the wording is in one place and tests can assert against it.

use std::fmt::Display;

/// Reply when the user introduced themselves by name
pub fn named_greeting_reply(name: &str) -> String {
    format!("Hello {name}! How can I assist you with your banking needs today?")
}

/// Reply to a greeting without a name
pub const FUZZY_GREETING_REPLY: &str = "Hello! How can I assist you today?";

/// Refusal for non-English input
pub const NON_ENGLISH_REPLY: &str =
    "I'm sorry, I can only understand and respond in English. Please rephrase your message in English.";

/// Shown when the model returned an empty reply
pub const EMPTY_OUTPUT_FALLBACK: &str = "I couldn't generate a response. Please try again.";

/// Shown when the model gateway failed; the error is surfaced verbatim
pub fn gateway_error_reply(error: impl Display) -> String {
    format!("An error occurred while querying the model: {error}")
}
