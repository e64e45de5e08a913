//! Commit Payload
//!
//! The currency-aware payload handed to the persistence collaborator once a
//! draft reaches `Success`. For a multi-installment draft, persistence is
//! responsible for materializing the N dated records; the payload carries
//! the per-installment amount and the count.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::card::CardId;
use crate::draft::{Category, Draft, PaymentMethod, TransactionType};

/// A fully-specified transaction, ready to persist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub kind: TransactionType,
    /// Per-installment amount when `installments` is set
    pub amount: f64,
    pub category: Category,
    /// Description with the payment-method tag appended
    pub description: String,
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_reference: Option<CardId>,
}

impl TransactionRecord {
    /// Build the persistence payload from a completed draft
    ///
    /// Appends the payment-method presentation tag to the description,
    /// unless a tag is already present.
    pub fn from_draft(draft: &Draft) -> Self {
        let mut description = draft.description.clone();
        if let Some(tag) = draft.payment_method.tag() {
            if !description.contains('[') {
                if description.is_empty() {
                    description = tag.to_string();
                } else {
                    description = format!("{} {}", description, tag);
                }
            }
        }

        Self {
            kind: draft.kind,
            amount: draft.amount,
            category: draft.category,
            description,
            date: draft.date,
            payment_method: draft.payment_method,
            brand: draft.brand.clone(),
            brand_asset: draft.brand_asset.clone(),
            installments: draft.installment_plan.map(|p| p.count),
            card_reference: draft.card_reference,
        }
    }
}
