//! Session Registry
//!
//! Maps conversation identifiers to their dialogue controllers. Each session
//! owns exactly one controller and therefore at most one open draft; the map
//! itself is safe to share across threads, while a single session's turns
//! are serialized by the per-entry lock.

use std::sync::Arc;

use dashmap::DashMap;

use fintalk_config::KnowledgeBase;
use fintalk_core::{Emission, RegisteredCard};

use crate::controller::{ControllerConfig, DialogueController};

pub struct SessionRegistry {
    kb: Arc<KnowledgeBase>,
    config: ControllerConfig,
    cards: Vec<RegisteredCard>,
    sessions: DashMap<String, DialogueController>,
}

impl SessionRegistry {
    pub fn new(kb: Arc<KnowledgeBase>, config: ControllerConfig) -> Self {
        Self {
            kb,
            config,
            cards: Vec::new(),
            sessions: DashMap::new(),
        }
    }

    /// Cards offered to every session's payment questions
    pub fn with_cards(mut self, cards: Vec<RegisteredCard>) -> Self {
        self.cards = cards;
        self
    }

    /// Route one utterance to its session, creating the session on first use
    pub fn handle_utterance(&self, session_id: &str, utterance: &str) -> Emission {
        let mut entry = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(session_id, "creating dialogue session");
                DialogueController::new(self.kb.clone(), self.config.clone())
                    .with_cards(self.cards.clone())
            });
        entry.handle_utterance(utterance)
    }

    /// Drop a session and any open draft it holds
    pub fn end_session(&self, session_id: &str) {
        if self.sessions.remove(session_id).is_some() {
            tracing::debug!(session_id, "session ended");
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_created_on_first_use() {
        let registry = SessionRegistry::new(KnowledgeBase::shared(), ControllerConfig::default());
        assert_eq!(registry.session_count(), 0);

        registry.handle_utterance("a", "cafe 8");
        registry.handle_utterance("b", "uber");
        assert_eq!(registry.session_count(), 2);

        registry.end_session("a");
        assert_eq!(registry.session_count(), 1);
    }

    #[test]
    fn test_drafts_are_session_scoped() {
        let registry = SessionRegistry::new(KnowledgeBase::shared(), ControllerConfig::default());

        // Session "a" opens a draft waiting for an amount
        let emission = registry.handle_utterance("a", "uber");
        assert!(emission.is_question());

        // Session "b" is unaffected and commits directly
        let emission = registry.handle_utterance("b", "cafe 8 no pix");
        assert!(emission.is_commit());

        // Session "a" still has its open draft
        let emission = registry.handle_utterance("a", "20");
        assert!(emission.is_commit());
    }
}
