//! Super Visa income eligibility estimator.
//!
//! Declared facts are classified against the LICO + 30 % income table into a
//! language-agnostic outcome, which the message catalog then renders in the
//! visitor's language.

pub mod classifier;
pub mod domain;
pub mod messages;
pub mod router;
pub mod service;
pub mod thresholds;

#[cfg(test)]
mod tests;

pub use crate::i18n::Language;
pub use classifier::{EligibilityClassifier, EligibilityOutcome, EligibilityStatus};
pub use domain::{DeclaredIncome, EligibilityForm, EligibilityInput, SponsorStatus};
pub use messages::{
    CatalogError, EligibilityResult, EligibilityView, MessageBundle, MessageCatalog,
    ThresholdRowView, ThresholdTableView,
};
pub use router::eligibility_router;
pub use service::EligibilityService;
pub use thresholds::{
    IncomeThresholdTable, ThresholdError, ThresholdRow, ThresholdTableError,
    INCREMENT_PER_PERSON,
};
