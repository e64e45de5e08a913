//! Controller Emissions
//!
//! Every turn handled by the dialogue controller produces exactly one
//! emission: a clarifying question, a commit instruction for the persistence
//! collaborator, or a cancellation notice.

use serde::{Deserialize, Serialize};

use crate::record::TransactionRecord;

/// A clarifying question for the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Literal prompt text, rendered as-is by the presentation layer
    pub text: String,
    /// Selectable options, when a fixed set of answers exists
    /// (payment methods, registered cards)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
        }
    }

    pub fn with_options(text: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }
}

/// Outcome of one handled utterance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Emission {
    /// Ask the user a follow-up; the draft stays open
    Question(Question),
    /// The draft is complete; hand the record to persistence
    Commit(TransactionRecord),
    /// The user cancelled; the draft was discarded
    Cancelled {
        /// Notice text shown to the user
        message: String,
    },
}

impl Emission {
    pub fn is_commit(&self) -> bool {
        matches!(self, Emission::Commit(_))
    }

    pub fn is_question(&self) -> bool {
        matches!(self, Emission::Question(_))
    }
}
