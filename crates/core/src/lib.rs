//! Core types for conversational transaction capture
//!
//! This crate provides the vocabulary shared by the field extractor and the
//! dialogue controller:
//! - The `Draft` model (a transaction-in-progress) and its status enum
//! - Category / payment-method / transaction-type enums
//! - Emissions produced by the dialogue controller (question, commit, cancel)
//! - The commit payload handed to the persistence collaborator
//! - Registered card types for credit-card resolution

pub mod card;
pub mod draft;
pub mod emission;
pub mod record;

pub use card::{CardId, RegisteredCard};
pub use draft::{
    round2, Category, Draft, DraftStatus, InstallmentPlan, PaymentMethod, TransactionType,
};
pub use emission::{Emission, Question};
pub use record::TransactionRecord;
