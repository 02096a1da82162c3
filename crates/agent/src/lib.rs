//! Session loop for the banking assistant agent
//!
//! A [`Session`] owns one conversation: it runs the pre-filter cascade
//! on each user message, calls the model gateway only on pass-through,
//! and appends exactly one assistant turn per user turn.

pub mod responses;
pub mod session;

pub use session::Session;
