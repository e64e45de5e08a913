//! Slot-Filling Dialogue Controller
//!
//! Holds at most one open draft per conversation and drives it to a terminal
//! outcome: every handled utterance yields exactly one emission (question,
//! commit, or cancellation). Transitions depend only on the open draft's
//! status and the new utterance, so a conversation can always be replayed.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;

use fintalk_config::KnowledgeBase;
use fintalk_core::{
    Draft, DraftStatus, Emission, InstallmentPlan, PaymentMethod, Question, RegisteredCard,
    TransactionRecord, TransactionType,
};
use fintalk_extractor::FieldExtractor;

use crate::prompts;

/// Tunables for the controller's escalation and retry behavior
#[derive(Debug, Clone, Deserialize)]
pub struct ControllerConfig {
    /// Expenses above this without a payment method trigger a follow-up
    #[serde(default = "default_high_value_threshold")]
    pub high_value_threshold: f64,
    /// Re-asks for payment details before the draft is discarded
    #[serde(default = "default_max_detail_retries")]
    pub max_detail_retries: u32,
}

fn default_high_value_threshold() -> f64 {
    100.0
}

fn default_max_detail_retries() -> u32 {
    2
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            high_value_threshold: default_high_value_threshold(),
            max_detail_retries: default_max_detail_retries(),
        }
    }
}

/// Per-conversation dialogue state
///
/// Owns the open draft (if any) between turns. Never shared across
/// conversations; the registry hands out one controller per session.
pub struct DialogueController {
    kb: Arc<KnowledgeBase>,
    extractor: FieldExtractor,
    config: ControllerConfig,
    cards: Vec<RegisteredCard>,
    open_draft: Option<Draft>,
    detail_retries: u32,
}

impl DialogueController {
    pub fn new(kb: Arc<KnowledgeBase>, config: ControllerConfig) -> Self {
        let extractor = FieldExtractor::new(kb.clone());
        Self {
            kb,
            extractor,
            config,
            cards: Vec::new(),
            open_draft: None,
            detail_retries: 0,
        }
    }

    /// Registered cards offered as options on payment questions
    pub fn with_cards(mut self, cards: Vec<RegisteredCard>) -> Self {
        self.cards = cards;
        self
    }

    pub fn has_open_draft(&self) -> bool {
        self.open_draft.is_some()
    }

    /// Inspect the open draft between turns
    pub fn open_draft(&self) -> Option<&Draft> {
        self.open_draft.as_ref()
    }

    /// Handle one utterance against today's date
    pub fn handle_utterance(&mut self, utterance: &str) -> Emission {
        self.handle_utterance_on(utterance, chrono::Local::now().date_naive())
    }

    /// Handle one utterance with an explicit reference date
    pub fn handle_utterance_on(&mut self, utterance: &str, today: NaiveDate) -> Emission {
        match self.open_draft.take() {
            None => self.start_draft(utterance, today),
            Some(draft) => match draft.status {
                DraftStatus::MissingAmount => self.merge_amount(draft, utterance),
                DraftStatus::NeedsDetails => self.merge_details(draft, utterance),
                DraftStatus::NeedsConfirmation => self.resolve_confirmation(draft, utterance),
                // Success drafts are committed in the turn that produced
                // them and are never stored
                DraftStatus::Success => self.start_draft(utterance, today),
            },
        }
    }

    fn start_draft(&mut self, utterance: &str, today: NaiveDate) -> Emission {
        let draft = self.extractor.extract(utterance, today);

        match draft.status {
            DraftStatus::MissingAmount => {
                let question = prompts::missing_amount_question(&draft);
                self.park(draft);
                Emission::Question(Question::new(question))
            }
            DraftStatus::NeedsConfirmation => {
                let question = prompts::confirm_installments_question(&draft);
                self.park(draft);
                Emission::Question(Question::new(question))
            }
            _ => self.finish_or_escalate(draft),
        }
    }

    /// A complete draft either commits or, for a high-value expense with no
    /// payment method, escalates to a payment-details question.
    fn finish_or_escalate(&mut self, mut draft: Draft) -> Emission {
        if self.needs_payment_details(&draft) {
            draft.status = DraftStatus::NeedsDetails;
            let question = prompts::payment_details_question(&draft);
            tracing::debug!(amount = draft.amount, "escalating for payment details");
            self.park(draft);
            return Emission::Question(self.payment_question(question));
        }
        self.commit(draft)
    }

    fn needs_payment_details(&self, draft: &Draft) -> bool {
        draft.status == DraftStatus::Success
            && draft.kind == TransactionType::Expense
            && !draft.payment_method.is_known()
            && (draft.amount > self.config.high_value_threshold || draft.has_installments())
    }

    /// MissingAmount: look for an amount (and opportunistically a payment
    /// method) in the reply only, never re-extract the whole utterance.
    fn merge_amount(&mut self, mut draft: Draft, utterance: &str) -> Emission {
        match self.extractor.extract_amount(utterance) {
            Some(amount) => {
                draft.amount = amount;
                draft.status = DraftStatus::Success;
                let method = self.kb.lexicon.detect_payment(&utterance.to_lowercase());
                if method.is_known() {
                    draft.payment_method = method;
                }
                tracing::debug!(amount, "merged amount into open draft");
                self.finish_or_escalate(draft)
            }
            None => {
                self.park(draft);
                Emission::Question(Question::new(prompts::amount_retry_question()))
            }
        }
    }

    /// NeedsDetails: resolve the payment method, or convert to installments
    /// if the reply introduces a count.
    fn merge_details(&mut self, mut draft: Draft, utterance: &str) -> Emission {
        let lower = utterance.to_lowercase();

        // "sim" answers the "Foi no Cartão de Crédito?" question
        if draft.has_installments() && self.kb.lexicon.is_affirmative(&lower) {
            draft.payment_method = PaymentMethod::Credit;
            draft.status = DraftStatus::Success;
            return self.commit(draft);
        }

        if let Some(count) = self.extractor.extract_installment_count(utterance) {
            if count > 1 {
                return self.convert_to_installments(draft, count);
            }
        }

        if lower.contains("parcelado") {
            self.park(draft);
            return Emission::Question(Question::new(prompts::installment_count_question()));
        }

        if let Some(card) = self.cards.iter().find(|c| c.matches(utterance)) {
            tracing::debug!(card = %card.label(), "expense billed to registered card");
            draft.card_reference = Some(card.id);
            draft.payment_method = PaymentMethod::Credit;
            draft.status = DraftStatus::Success;
            return self.commit(draft);
        }

        let method = self.kb.lexicon.detect_payment(&lower);
        if method.is_known() {
            draft.payment_method = method;
            draft.status = DraftStatus::Success;
            return self.commit(draft);
        }

        // Bounded retries: a high-value expense is never committed with an
        // unknown method, so after the limit the draft is discarded
        if self.detail_retries >= self.config.max_detail_retries {
            tracing::debug!(
                retries = self.detail_retries,
                "payment details unresolved, discarding draft"
            );
            self.detail_retries = 0;
            return Emission::Cancelled {
                message: prompts::details_give_up_message(),
            };
        }
        self.detail_retries += 1;
        let question = prompts::payment_details_question(&draft);
        self.park(draft);
        Emission::Question(self.payment_question(question))
    }

    /// The reply names an installment count: reinterpret the amount as the
    /// plan total and ask for confirmation.
    fn convert_to_installments(&mut self, mut draft: Draft, count: u32) -> Emission {
        match draft.installment_plan {
            Some(plan) => draft.set_installment_plan(InstallmentPlan::new(count, plan.total_amount)),
            None => draft.convert_to_installments(count),
        }
        if !draft.payment_method.is_known() {
            draft.payment_method = PaymentMethod::Credit;
        }
        draft.ensure_installment_suffix();
        draft.status = DraftStatus::NeedsConfirmation;

        let question = prompts::converted_confirm_question(&draft);
        self.park(draft);
        Emission::Question(Question::new(question))
    }

    /// NeedsConfirmation: an affirmative accepts the plan, anything else
    /// cancels and discards the draft. Acceptance still passes through the
    /// escalation check, so an installment purchase with no stated payment
    /// method asks the credit-card question before committing.
    fn resolve_confirmation(&mut self, mut draft: Draft, utterance: &str) -> Emission {
        if self.kb.lexicon.is_affirmative(&utterance.to_lowercase()) {
            draft.status = DraftStatus::Success;
            return self.finish_or_escalate(draft);
        }
        tracing::debug!("confirmation declined, draft discarded");
        self.detail_retries = 0;
        Emission::Cancelled {
            message: prompts::cancel_message(),
        }
    }

    fn commit(&mut self, mut draft: Draft) -> Emission {
        draft.ensure_installment_suffix();
        let record = TransactionRecord::from_draft(&draft);
        tracing::debug!(
            amount = record.amount,
            category = %record.category,
            installments = ?record.installments,
            "committing transaction"
        );
        self.detail_retries = 0;
        Emission::Commit(record)
    }

    fn park(&mut self, draft: Draft) {
        tracing::debug!(status = ?draft.status, "draft parked for next turn");
        self.open_draft = Some(draft);
    }

    fn payment_question(&self, text: String) -> Question {
        if self.cards.is_empty() {
            Question::new(text)
        } else {
            Question::with_options(text, self.cards.iter().map(|c| c.label()).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintalk_core::Category;

    fn controller() -> DialogueController {
        DialogueController::new(KnowledgeBase::shared(), ControllerConfig::default())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
    }

    #[test]
    fn test_complete_utterance_commits_immediately() {
        let mut ctl = controller();
        let emission = ctl.handle_utterance_on("almoço 25 no pix", today());
        match emission {
            Emission::Commit(record) => {
                assert_eq!(record.amount, 25.0);
                assert_eq!(record.category, Category::Food);
                assert_eq!(record.payment_method, PaymentMethod::Pix);
                assert!(record.description.ends_with("[Pix]"));
            }
            other => panic!("expected commit, got {:?}", other),
        }
        assert!(!ctl.has_open_draft());
    }

    #[test]
    fn test_low_value_unknown_payment_commits() {
        let mut ctl = controller();
        let emission = ctl.handle_utterance_on("cafe 8", today());
        assert!(emission.is_commit());
    }

    #[test]
    fn test_high_value_unknown_payment_escalates() {
        let mut ctl = controller();
        let emission = ctl.handle_utterance_on("notebook 3500", today());
        assert!(emission.is_question());
        assert_eq!(
            ctl.open_draft().unwrap().status,
            DraftStatus::NeedsDetails
        );

        let emission = ctl.handle_utterance_on("foi no débito", today());
        match emission {
            Emission::Commit(record) => {
                assert_eq!(record.payment_method, PaymentMethod::Debit);
            }
            other => panic!("expected commit, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_amount_then_amount_with_payment() {
        let mut ctl = controller();
        let emission = ctl.handle_utterance_on("uber", today());
        match emission {
            Emission::Question(q) => assert!(q.text.contains("Uber")),
            other => panic!("expected question, got {:?}", other),
        }

        let emission = ctl.handle_utterance_on("24,90 no crédito", today());
        match emission {
            Emission::Commit(record) => {
                assert_eq!(record.amount, 24.9);
                assert_eq!(record.payment_method, PaymentMethod::Credit);
                assert_eq!(record.brand.as_deref(), Some("Uber"));
            }
            other => panic!("expected commit, got {:?}", other),
        }
    }

    #[test]
    fn test_amount_retry_when_reply_has_no_number() {
        let mut ctl = controller();
        ctl.handle_utterance_on("uber", today());
        let emission = ctl.handle_utterance_on("não lembro", today());
        match emission {
            Emission::Question(q) => assert!(q.text.contains("Ainda não captei")),
            other => panic!("expected question, got {:?}", other),
        }
        assert_eq!(
            ctl.open_draft().unwrap().status,
            DraftStatus::MissingAmount
        );
    }

    #[test]
    fn test_merged_amount_can_still_escalate() {
        let mut ctl = controller();
        ctl.handle_utterance_on("presente", today());
        // Amount arrives without a payment method and is above the threshold
        let emission = ctl.handle_utterance_on("350", today());
        assert!(emission.is_question());
        assert_eq!(
            ctl.open_draft().unwrap().status,
            DraftStatus::NeedsDetails
        );
    }

    #[test]
    fn test_details_conversion_to_installments() {
        let mut ctl = controller();
        ctl.handle_utterance_on("geladeira 2400", today());
        let emission = ctl.handle_utterance_on("em 10x", today());
        match emission {
            Emission::Question(q) => assert!(q.text.contains("10x de R$240")),
            other => panic!("expected question, got {:?}", other),
        }
        let draft = ctl.open_draft().unwrap();
        assert_eq!(draft.status, DraftStatus::NeedsConfirmation);
        assert_eq!(draft.amount, 240.0);
        assert_eq!(draft.payment_method, PaymentMethod::Credit);

        let emission = ctl.handle_utterance_on("pode", today());
        match emission {
            Emission::Commit(record) => {
                assert_eq!(record.installments, Some(10));
                assert!(record.description.contains("(1/10)"));
            }
            other => panic!("expected commit, got {:?}", other),
        }
    }

    #[test]
    fn test_details_parcelado_without_count() {
        let mut ctl = controller();
        ctl.handle_utterance_on("sofa 1800", today());
        let emission = ctl.handle_utterance_on("parcelado", today());
        match emission {
            Emission::Question(q) => assert!(q.text.contains("quantas vezes")),
            other => panic!("expected question, got {:?}", other),
        }
        assert_eq!(ctl.open_draft().unwrap().status, DraftStatus::NeedsDetails);
    }

    #[test]
    fn test_bounded_retries_end_in_cancellation() {
        let mut ctl = controller();
        ctl.handle_utterance_on("bicicleta 900", today());

        let first = ctl.handle_utterance_on("hmm", today());
        assert!(first.is_question());
        let second = ctl.handle_utterance_on("sei la", today());
        assert!(second.is_question());

        // A high-value expense never commits with an unknown method
        let third = ctl.handle_utterance_on("tanto faz", today());
        match third {
            Emission::Cancelled { message } => assert!(!message.is_empty()),
            other => panic!("expected cancellation, got {:?}", other),
        }
        assert!(!ctl.has_open_draft());
    }

    #[test]
    fn test_confirmed_installments_still_require_payment_method() {
        let mut ctl = controller();
        ctl.handle_utterance_on("Macbook 6000 em 12x", today());

        // Accepting the plan is not enough: the payment method is still
        // unknown, so the controller asks instead of committing
        let emission = ctl.handle_utterance_on("sim", today());
        match emission {
            Emission::Question(q) => assert!(q.text.contains("Cartão de Crédito")),
            other => panic!("expected question, got {:?}", other),
        }
        assert_eq!(ctl.open_draft().unwrap().status, DraftStatus::NeedsDetails);

        let emission = ctl.handle_utterance_on("sim", today());
        match emission {
            Emission::Commit(record) => {
                assert_eq!(record.payment_method, PaymentMethod::Credit);
                assert_eq!(record.amount, 500.0);
                assert_eq!(record.installments, Some(12));
            }
            other => panic!("expected commit, got {:?}", other),
        }
    }

    #[test]
    fn test_confirmation_with_known_payment_commits_directly() {
        let mut ctl = controller();
        ctl.handle_utterance_on("tv 3000 em 10x no pix", today());
        let emission = ctl.handle_utterance_on("sim", today());
        match emission {
            Emission::Commit(record) => {
                assert_eq!(record.payment_method, PaymentMethod::Pix);
                assert_eq!(record.installments, Some(10));
            }
            other => panic!("expected commit, got {:?}", other),
        }
    }

    #[test]
    fn test_confirmation_declined_discards_draft() {
        let mut ctl = controller();
        ctl.handle_utterance_on("tv 3000 em 10x", today());
        let emission = ctl.handle_utterance_on("melhor não", today());
        match emission {
            Emission::Cancelled { message } => assert!(message.contains("cancelado")),
            other => panic!("expected cancellation, got {:?}", other),
        }
        assert!(!ctl.has_open_draft());

        // A fresh utterance starts a brand-new draft
        let emission = ctl.handle_utterance_on("cafe 8", today());
        assert!(emission.is_commit());
    }

    #[test]
    fn test_card_reply_resolves_payment() {
        let cards = vec![RegisteredCard::new("Nubank", "4821")];
        let card_id = cards[0].id;
        let mut ctl = controller().with_cards(cards);

        ctl.handle_utterance_on("celular 1200", today());
        let emission = ctl.handle_utterance_on("no nubank", today());
        match emission {
            Emission::Commit(record) => {
                assert_eq!(record.payment_method, PaymentMethod::Credit);
                assert_eq!(record.card_reference, Some(card_id));
            }
            other => panic!("expected commit, got {:?}", other),
        }
    }

    #[test]
    fn test_payment_question_offers_card_options() {
        let cards = vec![
            RegisteredCard::new("Nubank", "4821"),
            RegisteredCard::new("Inter", "0034"),
        ];
        let mut ctl = controller().with_cards(cards);

        let emission = ctl.handle_utterance_on("passagem 800", today());
        match emission {
            Emission::Question(q) => {
                assert_eq!(q.options.len(), 2);
                assert!(q.options[0].contains("Nubank"));
            }
            other => panic!("expected question, got {:?}", other),
        }
    }

    #[test]
    fn test_income_never_escalates() {
        let mut ctl = controller();
        let emission = ctl.handle_utterance_on("recebi 5000 de salario", today());
        match emission {
            Emission::Commit(record) => {
                assert_eq!(record.kind, TransactionType::Income);
                assert_eq!(record.category, Category::Salary);
                assert_eq!(record.payment_method, PaymentMethod::Unknown);
            }
            other => panic!("expected commit, got {:?}", other),
        }
    }
}
