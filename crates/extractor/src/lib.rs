//! Deterministic Field Extraction for Financial Chat
//!
//! Single-pass, rule-based extraction of transaction fields from a free-form
//! utterance ("Uber 20", "Macbook 6000 em 12x"). The extractor is pure: the
//! same utterance, knowledge base and reference date always produce the same
//! `Draft`. No I/O, no clock reads, no hidden state.
//!
//! Pipeline order matters and is fixed: amount, type, date, installments,
//! description cleanup, category, payment method, brand.

mod dates;
mod description;

use std::sync::Arc;

use chrono::NaiveDate;
use fintalk_config::KnowledgeBase;
use fintalk_core::{Category, Draft, DraftStatus, TransactionType};
use regex::Regex;

/// Rule-based extractor over a shared knowledge base
pub struct FieldExtractor {
    kb: Arc<KnowledgeBase>,
    /// First numeral in the utterance, decimal comma or point
    amount_pattern: Regex,
    /// Explicit day-of-month cue ("dia 15")
    day_pattern: Regex,
    /// Installment count ("12x", "em 12x", "em 12 vezes")
    installment_pattern: Regex,
    /// All removable words from the lexicon, on word boundaries
    strip_pattern: Regex,
}

impl FieldExtractor {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        let strip_pattern = Self::build_strip_pattern(&kb);
        Self {
            kb,
            amount_pattern: Regex::new(r"(\d+[.,]?\d*)").unwrap(),
            day_pattern: Regex::new(r"dia\s+(\d+)").unwrap(),
            installment_pattern: Regex::new(r"(?:em\s+)?(\d+)\s*x|(?:em\s+)(\d+)\s*vezes")
                .unwrap(),
            strip_pattern,
        }
    }

    fn build_strip_pattern(kb: &KnowledgeBase) -> Regex {
        let joined = kb
            .lexicon
            .removable_words()
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"\b({})\b", joined)).unwrap()
    }

    /// Extract a draft from one utterance, relative to the given date
    pub fn extract(&self, utterance: &str, today: NaiveDate) -> Draft {
        let lower = utterance.to_lowercase();
        let lexicon = &self.kb.lexicon;

        let mut draft = Draft::empty(today);

        // 1. Amount: first numeral wins, comma accepted as decimal separator
        let amount_match = self.amount_pattern.find(&lower);
        match amount_match {
            Some(m) => {
                if let Ok(value) = m.as_str().replace(',', ".").parse::<f64>() {
                    draft.amount = value;
                    draft.status = DraftStatus::Success;
                }
            }
            None => {
                draft.status = DraftStatus::MissingAmount;
            }
        }

        // 2. Type
        if lexicon.is_income(&lower) {
            draft.kind = TransactionType::Income;
        }

        // 3. Date
        draft.date = dates::resolve(&lower, today, &self.day_pattern, lexicon);

        // 4. Installments: only promote a complete draft to confirmation
        let installment_match = self.installment_pattern.captures(&lower);
        if let Some(count) = installment_match.as_ref().and_then(parse_count) {
            if count > 1 && draft.status == DraftStatus::Success {
                draft.convert_to_installments(count);
                draft.status = DraftStatus::NeedsConfirmation;
            }
        }

        // 5. Description
        draft.description = description::cleanup(
            &lower,
            amount_match.map(|m| m.as_str()),
            installment_match
                .as_ref()
                .and_then(|c| c.get(0))
                .map(|m| m.as_str()),
            &self.strip_pattern,
            &lexicon.currency_symbols,
        );
        if draft.description.is_empty() && draft.status != DraftStatus::MissingAmount {
            draft.description = draft.kind.generic_label().to_string();
        }

        // 6. Category
        let description_lower = draft.description.to_lowercase();
        draft.category = self
            .kb
            .categories
            .iter()
            .find(|r| r.matches(&description_lower, &lower))
            .map(|r| r.category)
            .unwrap_or(Category::General);
        if draft.kind == TransactionType::Income && lexicon.forces_salary(&description_lower) {
            draft.category = Category::Salary;
        }

        // 7. Payment method
        draft.payment_method = lexicon.detect_payment(&lower);

        // 8. Brand
        if let Some(brand) = self.kb.find_brand(&lower) {
            draft.brand = Some(brand.name.clone());
            draft.brand_asset = brand.asset.clone();
        }

        tracing::debug!(
            amount = draft.amount,
            status = ?draft.status,
            category = %draft.category,
            payment = ?draft.payment_method,
            "extracted draft"
        );

        draft
    }

    /// Extract just an amount, used when merging a follow-up reply
    pub fn extract_amount(&self, utterance: &str) -> Option<f64> {
        let lower = utterance.to_lowercase();
        self.amount_pattern
            .find(&lower)
            .and_then(|m| m.as_str().replace(',', ".").parse::<f64>().ok())
    }

    /// Extract just an installment count, used when merging a follow-up reply
    pub fn extract_installment_count(&self, utterance: &str) -> Option<u32> {
        let lower = utterance.to_lowercase();
        self.installment_pattern
            .captures(&lower)
            .as_ref()
            .and_then(parse_count)
    }
}

fn parse_count(caps: &regex::Captures<'_>) -> Option<u32> {
    caps.get(1)
        .or_else(|| caps.get(2))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintalk_core::PaymentMethod;

    fn extractor() -> FieldExtractor {
        FieldExtractor::new(KnowledgeBase::shared())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
    }

    #[test]
    fn test_simple_expense() {
        let draft = extractor().extract("Spent 50 on groceries", today());
        assert_eq!(draft.amount, 50.0);
        assert_eq!(draft.kind, TransactionType::Expense);
        assert_eq!(draft.category, Category::Food);
        assert_eq!(draft.description, "Groceries");
        assert_eq!(draft.status, DraftStatus::Success);
    }

    #[test]
    fn test_income_with_salary_category() {
        let draft = extractor().extract("Received 1000 salary", today());
        assert_eq!(draft.amount, 1000.0);
        assert_eq!(draft.kind, TransactionType::Income);
        assert_eq!(draft.category, Category::Salary);
        assert_eq!(draft.status, DraftStatus::Success);
    }

    #[test]
    fn test_relative_date() {
        let draft = extractor().extract("Lunch 20 yesterday", today());
        assert_eq!(draft.date, today() - chrono::Duration::days(1));
        assert_eq!(draft.description, "Lunch");
        assert_eq!(draft.category, Category::Food);
    }

    #[test]
    fn test_missing_amount() {
        let draft = extractor().extract("Hello world", today());
        assert_eq!(draft.status, DraftStatus::MissingAmount);
        assert_eq!(draft.amount, 0.0);
        assert_eq!(draft.description, "Hello world");
    }

    #[test]
    fn test_missing_amount_keeps_description_empty() {
        // No generic label while the amount is still missing
        let draft = extractor().extract("parcelado", today());
        assert_eq!(draft.status, DraftStatus::MissingAmount);
        assert!(draft.description.is_empty());
    }

    #[test]
    fn test_decimal_separators_equivalent() {
        let point = extractor().extract("cafe 4.50", today());
        let comma = extractor().extract("cafe 4,50", today());
        assert_eq!(point.amount, 4.5);
        assert_eq!(comma.amount, 4.5);
    }

    #[test]
    fn test_installment_purchase() {
        let draft = extractor().extract("Macbook 6000 em 12x", today());
        assert_eq!(draft.status, DraftStatus::NeedsConfirmation);
        assert_eq!(draft.amount, 500.0);
        let plan = draft.installment_plan.unwrap();
        assert_eq!(plan.count, 12);
        assert_eq!(plan.total_amount, 6000.0);
        // Suffix is only appended at confirmation time
        assert_eq!(draft.description, "Macbook");
    }

    #[test]
    fn test_installment_vezes_spelling() {
        let draft = extractor().extract("sofa 2400 em 10 vezes", today());
        assert_eq!(draft.status, DraftStatus::NeedsConfirmation);
        assert_eq!(draft.installment_plan.unwrap().count, 10);
        assert_eq!(draft.amount, 240.0);
    }

    #[test]
    fn test_single_installment_is_not_a_plan() {
        let draft = extractor().extract("mercado 80 em 1x", today());
        assert_eq!(draft.status, DraftStatus::Success);
        assert!(draft.installment_plan.is_none());
        assert_eq!(draft.amount, 80.0);
    }

    #[test]
    fn test_numeral_in_installment_phrase_is_the_amount() {
        // The first numeral always becomes the amount, even when it only
        // appears inside the installment phrase; the plan then reinterprets
        // it as the total
        let draft = extractor().extract("parcelado em 12x", today());
        assert_eq!(draft.status, DraftStatus::NeedsConfirmation);
        let plan = draft.installment_plan.unwrap();
        assert_eq!(plan.count, 12);
        assert_eq!(plan.total_amount, 12.0);
        assert_eq!(draft.amount, 1.0);
    }

    #[test]
    fn test_brand_detection() {
        let draft = extractor().extract("uber 20", today());
        assert_eq!(draft.brand.as_deref(), Some("Uber"));
        assert!(draft.brand_asset.is_some());
        assert_eq!(draft.category, Category::Transport);
    }

    #[test]
    fn test_brand_without_amount() {
        let draft = extractor().extract("corrida de uber", today());
        assert_eq!(draft.status, DraftStatus::MissingAmount);
        assert_eq!(draft.brand.as_deref(), Some("Uber"));
    }

    #[test]
    fn test_payment_method_detected() {
        let draft = extractor().extract("mercado 80 no pix", today());
        assert_eq!(draft.payment_method, PaymentMethod::Pix);

        let draft = extractor().extract("jantar 120 no cartão de crédito", today());
        assert_eq!(draft.payment_method, PaymentMethod::Credit);
    }

    #[test]
    fn test_generic_label_when_nothing_remains() {
        let draft = extractor().extract("50", today());
        assert_eq!(draft.status, DraftStatus::Success);
        assert_eq!(draft.description, "Expense");
        assert_eq!(draft.category, Category::General);

        let draft = extractor().extract("recebi 50", today());
        assert_eq!(draft.description, "Income");
    }

    #[test]
    fn test_amount_only_merge_helpers() {
        let ex = extractor();
        assert_eq!(ex.extract_amount("foram 35,90"), Some(35.9));
        assert_eq!(ex.extract_amount("não sei"), None);
        assert_eq!(ex.extract_installment_count("em 10x"), Some(10));
        assert_eq!(ex.extract_installment_count("à vista"), None);
    }
}
