//! Knowledge Base for Transaction Extraction
//!
//! Static lookup tables consumed by the field extractor and the dialogue
//! controller: ordered category rules, merchant brands with display assets,
//! card-issuer presentation metadata, and the lexicon of recognized keywords
//! (income cues, stop words, payment cues, affirmations).
//!
//! All tables ship with complete built-in defaults and can be overridden
//! from a YAML file. Tables are immutable after load and safe to share
//! across threads.

pub mod brands;
pub mod categories;
pub mod issuers;
pub mod lexicon;

pub use brands::BrandEntry;
pub use categories::CategoryRule;
pub use issuers::IssuerStyle;
pub use lexicon::{Lexicon, PaymentCue};

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors when loading or validating a knowledge base
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("knowledge base file not found at {0}: {1}")]
    FileNotFound(String, String),

    #[error("failed to parse knowledge base: {0}")]
    Parse(String),

    #[error("invalid knowledge base entry: {0}")]
    Invalid(String),
}

/// The complete knowledge base
///
/// Category and payment rules are ordered lists, never maps: earlier rules
/// intentionally shadow later ones and the first match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Ordered category rules, first match wins
    #[serde(default = "categories::default_rules")]
    pub categories: Vec<CategoryRule>,

    /// Merchant brand table, first match wins
    #[serde(default = "brands::default_brands")]
    pub brands: Vec<BrandEntry>,

    /// Card-issuer presentation metadata, keyed by issuer id
    #[serde(default = "issuers::default_issuers")]
    pub issuers: Vec<IssuerStyle>,

    /// Keyword lexicon
    #[serde(default)]
    pub lexicon: Lexicon,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            categories: categories::default_rules(),
            brands: brands::default_brands(),
            issuers: issuers::default_issuers(),
            lexicon: Lexicon::default(),
        }
    }
}

static SHARED: Lazy<Arc<KnowledgeBase>> = Lazy::new(|| Arc::new(KnowledgeBase::default()));

impl KnowledgeBase {
    /// Shared built-in knowledge base
    pub fn shared() -> Arc<KnowledgeBase> {
        SHARED.clone()
    }

    /// Load from a YAML file; missing sections fall back to the defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::FileNotFound(path.as_ref().display().to_string(), e.to_string())
        })?;

        let kb: KnowledgeBase =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        kb.validate()?;
        Ok(kb)
    }

    /// Check table invariants; a failure here is a configuration defect,
    /// never a runtime condition
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rule in &self.categories {
            if rule.keywords.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "category rule {} has no keywords",
                    rule.category
                )));
            }
        }
        for brand in &self.brands {
            if brand.keywords.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "brand {} has no keywords",
                    brand.name
                )));
            }
        }
        for cue in &self.lexicon.payment_cues {
            if cue.cues.is_empty() {
                tracing::warn!(method = ?cue.method, "payment cue list is empty");
            }
        }
        Ok(())
    }

    /// First brand whose keyword set intersects the lowercased utterance
    pub fn find_brand(&self, lower: &str) -> Option<&BrandEntry> {
        self.brands
            .iter()
            .find(|b| b.keywords.iter().any(|k| lower.contains(k.as_str())))
    }

    /// Issuer presentation metadata by id ("nubank", "visa", ...)
    pub fn issuer(&self, id: &str) -> Option<&IssuerStyle> {
        self.issuers.iter().find(|i| i.id == id)
    }
}
