//! Keyword Lexicon
//!
//! The fixed PT-BR/EN vocabulary recognized by the extractor and controller:
//! income cues, relative-date words, description stop words, payment-method
//! cues, and confirmation affirmatives. Ordered lists are walked first match
//! wins; the order is part of the contract.

use fintalk_core::PaymentMethod;
use serde::{Deserialize, Serialize};

/// Cue list for one payment method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCue {
    pub method: PaymentMethod,
    pub cues: Vec<String>,
}

impl PaymentCue {
    fn new(method: PaymentMethod, cues: &[&str]) -> Self {
        Self {
            method,
            cues: cues.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Recognized keyword vocabulary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Verbs that flip the type to income
    #[serde(default = "default_income_verbs")]
    pub income_verbs: Vec<String>,

    /// Nouns that flip the type to income
    #[serde(default = "default_income_nouns")]
    pub income_nouns: Vec<String>,

    /// "today" words (removed from descriptions, never shift the date)
    #[serde(default = "default_today_words")]
    pub today_words: Vec<String>,

    /// Words meaning "yesterday" (date − 1 day)
    #[serde(default = "default_yesterday_words")]
    pub yesterday_words: Vec<String>,

    /// Words meaning "the day before yesterday" (date − 2 days); checked
    /// before the yesterday list because "anteontem" contains "ontem"
    #[serde(default = "default_day_before_words")]
    pub day_before_yesterday_words: Vec<String>,

    /// Transaction verbs, prepositions and filler removed from descriptions
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,

    /// Currency words removed on word boundaries ("reais", "rs")
    #[serde(default = "default_currency_words")]
    pub currency_words: Vec<String>,

    /// Currency symbols stripped literally ("r$", "$")
    #[serde(default = "default_currency_symbols")]
    pub currency_symbols: Vec<String>,

    /// Ordered payment-method cues, first match wins
    #[serde(default = "default_payment_cues")]
    pub payment_cues: Vec<PaymentCue>,

    /// Affirmative replies accepted during confirmation
    #[serde(default = "default_affirmations")]
    pub affirmations: Vec<String>,

    /// Income keywords that force the Salary category
    #[serde(default = "default_salary_keywords")]
    pub salary_keywords: Vec<String>,
}

fn default_income_verbs() -> Vec<String> {
    to_owned(&["received", "earned", "ganhei", "recebi", "faturei", "entrada"])
}

fn default_income_nouns() -> Vec<String> {
    to_owned(&[
        "salary", "deposit", "bonus", "salario", "deposito", "extra", "ganho", "renda",
        "freelance", "projeto", "project", "venda", "sold",
    ])
}

fn default_today_words() -> Vec<String> {
    to_owned(&["today", "now", "hoje", "agora"])
}

fn default_yesterday_words() -> Vec<String> {
    to_owned(&["yesterday", "ontem"])
}

fn default_day_before_words() -> Vec<String> {
    to_owned(&["anteontem", "day before yesterday"])
}

fn default_stop_words() -> Vec<String> {
    to_owned(&[
        "spent", "paid", "on", "for", "buy", "bought", "gastei", "paguei", "em", "no", "na",
        "para", "comprei", "compras", "com", "de", "do", "da", "x", "vezes", "parcelado", "dia",
        "custou", "valor", "foi", "custa",
    ])
}

fn default_currency_words() -> Vec<String> {
    to_owned(&["rs", "reais", "real"])
}

fn default_currency_symbols() -> Vec<String> {
    to_owned(&["r$", "$"])
}

fn default_payment_cues() -> Vec<PaymentCue> {
    vec![
        PaymentCue::new(PaymentMethod::Pix, &["pix"]),
        PaymentCue::new(
            PaymentMethod::Credit,
            &["credito", "crédito", "cartao", "cartão"],
        ),
        PaymentCue::new(PaymentMethod::Debit, &["debito", "débito"]),
        PaymentCue::new(
            PaymentMethod::Cash,
            &["dinheiro", "cedula", "cédula", "a vista", "à vista"],
        ),
        PaymentCue::new(
            PaymentMethod::Trust,
            &["fiado", "confiança", "confianca", "pendura", "particular"],
        ),
    ]
}

fn default_affirmations() -> Vec<String> {
    to_owned(&["sim", "yes", "pode", "claro", "ok", "confirmar"])
}

fn default_salary_keywords() -> Vec<String> {
    to_owned(&["salary", "salario", "freelance", "projeto"])
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            income_verbs: default_income_verbs(),
            income_nouns: default_income_nouns(),
            today_words: default_today_words(),
            yesterday_words: default_yesterday_words(),
            day_before_yesterday_words: default_day_before_words(),
            stop_words: default_stop_words(),
            currency_words: default_currency_words(),
            currency_symbols: default_currency_symbols(),
            payment_cues: default_payment_cues(),
            affirmations: default_affirmations(),
            salary_keywords: default_salary_keywords(),
        }
    }
}

impl Lexicon {
    /// Whether any income cue appears in the lowercased utterance
    pub fn is_income(&self, lower: &str) -> bool {
        self.income_verbs
            .iter()
            .chain(self.income_nouns.iter())
            .any(|k| lower.contains(k.as_str()))
            || lower.contains("income")
    }

    /// First payment method whose cue list matches, default Unknown
    ///
    /// Intentionally conservative: only explicit lexical cues set a method,
    /// never the merchant.
    pub fn detect_payment(&self, lower: &str) -> PaymentMethod {
        self.payment_cues
            .iter()
            .find(|cue| cue.cues.iter().any(|c| lower.contains(c.as_str())))
            .map(|cue| cue.method)
            .unwrap_or(PaymentMethod::Unknown)
    }

    /// Whether a confirmation reply is affirmative
    pub fn is_affirmative(&self, lower: &str) -> bool {
        self.affirmations.iter().any(|k| lower.contains(k.as_str()))
    }

    /// Whether an income description should be forced to Salary
    pub fn forces_salary(&self, description_lower: &str) -> bool {
        self.salary_keywords
            .iter()
            .any(|k| description_lower.contains(k.as_str()))
    }

    /// All words removed from descriptions on word boundaries
    pub fn removable_words(&self) -> Vec<&str> {
        self.income_verbs
            .iter()
            .map(|s| s.as_str())
            .chain(std::iter::once("income"))
            .chain(self.today_words.iter().map(|s| s.as_str()))
            .chain(self.yesterday_words.iter().map(|s| s.as_str()))
            .chain(self.day_before_yesterday_words.iter().map(|s| s.as_str()))
            .chain(self.stop_words.iter().map(|s| s.as_str()))
            .chain(self.currency_words.iter().map(|s| s.as_str()))
            .collect()
    }
}
