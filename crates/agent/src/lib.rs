//! Dialogue Agent for Conversational Transaction Capture
//!
//! The controller sits on top of the deterministic field extractor and turns
//! a chat into transaction records: it tracks one open draft per
//! conversation, asks the next clarifying question, merges replies into the
//! draft, and emits a terminal commit or cancellation.
//!
//! ```text
//! utterance ──> FieldExtractor ──> Draft(status)
//!                                     │
//!                        DialogueController inspects status
//!                                     │
//!              ┌──────────────────────┼───────────────────────┐
//!              ▼                      ▼                       ▼
//!       Question (loop)        Commit(record)          Cancelled
//! ```

pub mod controller;
mod prompts;
pub mod session;

pub use controller::{ControllerConfig, DialogueController};
pub use session::SessionRegistry;
