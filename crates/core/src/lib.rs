//! Core types for the banking assistant agent
//!
//! This crate provides foundational types used across all other crates:
//! - Conversation turns and the session transcript
//! - The banking scenario catalog (scenario -> required fields)

pub mod conversation;
pub mod scenario;

pub use conversation::{Transcript, Turn, TurnRole};
pub use scenario::Scenario;
