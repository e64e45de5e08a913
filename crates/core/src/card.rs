//! Registered Card Types
//!
//! The card registry itself is an external collaborator; the core only needs
//! enough of a card to offer it as a selectable option and to record which
//! card a credit expense is billed to.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a card in the external registry
pub type CardId = Uuid;

/// A card known to the external registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredCard {
    pub id: CardId,
    /// Display name, usually the issuer ("Nubank", "Inter")
    pub display_name: String,
    /// Last 4 digits of the card number
    pub last4: String,
}

impl RegisteredCard {
    pub fn new(display_name: impl Into<String>, last4: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            last4: last4.into(),
        }
    }

    /// Label shown as a selectable option, e.g. "Nubank •••• 1234"
    pub fn label(&self) -> String {
        format!("{} •••• {}", self.display_name, self.last4)
    }

    /// Whether a free-text reply refers to this card
    ///
    /// Matches the display name or the last-4 digits, case-insensitively.
    pub fn matches(&self, reply: &str) -> bool {
        let lower = reply.to_lowercase();
        lower.contains(&self.display_name.to_lowercase()) || lower.contains(self.last4.as_str())
    }
}
