//! Transaction Draft Model
//!
//! A `Draft` is the typed representation of a transaction being assembled
//! across one or more conversational turns. Its `status` is derived from
//! which required fields are present at the time of the last extraction or
//! merge; it is never set independently of the fields themselves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Round a monetary value to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Spending category for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Utilities,
    BillPayment,
    Shopping,
    Entertainment,
    Health,
    Salary,
    General,
}

impl Category {
    /// Stable name used in persistence payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::BillPayment => "BillPayment",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Salary => "Salary",
            Category::General => "General",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of the money flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Generic description substituted when cleanup leaves nothing behind
    pub fn generic_label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl Default for TransactionType {
    fn default() -> Self {
        TransactionType::Expense
    }
}

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Pix,
    Credit,
    Debit,
    Cash,
    Trust,
    Unknown,
}

impl PaymentMethod {
    /// Whether a concrete method was resolved
    pub fn is_known(&self) -> bool {
        !matches!(self, PaymentMethod::Unknown)
    }

    /// Presentation tag appended to the description at commit time
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            PaymentMethod::Pix => Some("[Pix]"),
            PaymentMethod::Credit => Some("[Crédito]"),
            PaymentMethod::Debit => Some("[Débito]"),
            PaymentMethod::Cash => Some("[Dinheiro]"),
            PaymentMethod::Trust => Some("[Confiança 🤝]"),
            PaymentMethod::Unknown => None,
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Unknown
    }
}

/// A multi-installment purchase plan
///
/// `Draft::amount` always holds the per-installment value; the plan keeps the
/// original total so the two stay consistent under corrections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallmentPlan {
    /// Number of installments (> 1)
    pub count: u32,
    /// Total purchase amount before splitting
    pub total_amount: f64,
}

impl InstallmentPlan {
    pub fn new(count: u32, total_amount: f64) -> Self {
        Self {
            count,
            total_amount,
        }
    }

    /// Per-installment amount, rounded to 2 decimals
    pub fn per_installment(&self) -> f64 {
        round2(self.total_amount / self.count as f64)
    }

    /// Suffix appended to the description once confirmed, e.g. "(1/12)"
    pub fn suffix(&self) -> String {
        format!("(1/{})", self.count)
    }
}

/// Completeness status of a draft
///
/// `Success` is terminal and consumed immediately by the controller. The
/// cancelled outcome is a controller emission, not a draft status: a
/// cancelled draft is simply discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    /// No parsable numeral was found; `amount` is a placeholder zero
    MissingAmount,
    /// An installment plan was detected and awaits user confirmation
    NeedsConfirmation,
    /// Payment method (or installment count) must still be elicited
    NeedsDetails,
    /// All required fields present; ready to commit
    Success,
}

/// A transaction-in-progress, owned by a single conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    /// Monetary value; per-installment when `installment_plan` is set
    pub amount: f64,
    /// Free-text label, cleaned of recognized boilerplate
    pub description: String,
    pub category: Category,
    pub kind: TransactionType,
    /// Calendar date, no time-of-day
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
    /// Recognized merchant, from the knowledge base
    pub brand: Option<String>,
    /// Display asset URI for the recognized merchant
    pub brand_asset: Option<String>,
    pub installment_plan: Option<InstallmentPlan>,
    /// Registered card this expense is billed to
    pub card_reference: Option<crate::card::CardId>,
    pub status: DraftStatus,
}

impl Draft {
    /// Create an empty draft for the given date, pending extraction
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            amount: 0.0,
            description: String::new(),
            category: Category::General,
            kind: TransactionType::Expense,
            date,
            payment_method: PaymentMethod::Unknown,
            brand: None,
            brand_asset: None,
            installment_plan: None,
            card_reference: None,
            status: DraftStatus::MissingAmount,
        }
    }

    pub fn has_installments(&self) -> bool {
        self.installment_plan.is_some()
    }

    /// Reinterpret the current amount as an installment total
    ///
    /// Stores the plan and re-derives `amount` as the per-installment value.
    pub fn convert_to_installments(&mut self, count: u32) {
        let plan = InstallmentPlan::new(count, self.amount);
        self.amount = plan.per_installment();
        self.installment_plan = Some(plan);
    }

    /// Replace the plan and re-derive `amount` from it
    pub fn set_installment_plan(&mut self, plan: InstallmentPlan) {
        self.amount = plan.per_installment();
        self.installment_plan = Some(plan);
    }

    /// Append the "(1/N)" suffix to the description, exactly once
    pub fn ensure_installment_suffix(&mut self) {
        if let Some(plan) = self.installment_plan {
            if !self.description.contains("(1/") {
                if self.description.is_empty() {
                    self.description = plan.suffix();
                } else {
                    self.description = format!("{} {}", self.description, plan.suffix());
                }
            }
        }
    }
}
