use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{DeclaredIncome, EligibilityInput, SponsorStatus};
use super::thresholds::IncomeThresholdTable;

/// Verdict shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    Eligible,
    Ineligible,
    Incomplete,
}

impl EligibilityStatus {
    pub fn label(self) -> &'static str {
        match self {
            EligibilityStatus::Eligible => "eligible",
            EligibilityStatus::Ineligible => "ineligible",
            EligibilityStatus::Incomplete => "incomplete",
        }
    }
}

/// Language-agnostic classification with the figures each message needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EligibilityOutcome {
    /// Only citizens and permanent residents may sponsor.
    StatusIneligible { sponsor_status: SponsorStatus },
    /// Declared income was unparseable or not positive; nothing was compared.
    IncompleteIncome,
    Eligible {
        income: f64,
        required: u64,
        family_size: u64,
    },
    IncomeGap {
        income: f64,
        required: u64,
        gap: f64,
        family_size: u64,
    },
}

impl EligibilityOutcome {
    pub fn status(&self) -> EligibilityStatus {
        match self {
            EligibilityOutcome::Eligible { .. } => EligibilityStatus::Eligible,
            EligibilityOutcome::StatusIneligible { .. } | EligibilityOutcome::IncomeGap { .. } => {
                EligibilityStatus::Ineligible
            }
            EligibilityOutcome::IncompleteIncome => EligibilityStatus::Incomplete,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            EligibilityOutcome::StatusIneligible { .. } => "status_ineligible",
            EligibilityOutcome::IncompleteIncome => "incomplete_income",
            EligibilityOutcome::Eligible { .. } => "eligible",
            EligibilityOutcome::IncomeGap { .. } => "income_gap",
        }
    }
}

/// Pure classifier over a shared, read-only threshold table.
#[derive(Debug, Clone, Default)]
pub struct EligibilityClassifier {
    table: IncomeThresholdTable,
}

impl EligibilityClassifier {
    pub fn new(table: IncomeThresholdTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &IncomeThresholdTable {
        &self.table
    }

    pub fn classify(&self, input: &EligibilityInput) -> EligibilityOutcome {
        if !input.sponsor_status.may_sponsor() {
            debug!(status = ?input.sponsor_status, "sponsor status cannot sponsor relatives");
            return EligibilityOutcome::StatusIneligible {
                sponsor_status: input.sponsor_status,
            };
        }

        let family_size = input.total_family_size();
        let required = self.table.threshold_for(family_size);
        let family_size = family_size.get();

        let income = match input.declared_annual_income {
            DeclaredIncome::Amount(income) => income,
            DeclaredIncome::Invalid => {
                debug!(family_size, "declared income missing or invalid");
                return EligibilityOutcome::IncompleteIncome;
            }
        };

        let outcome = if income >= required as f64 {
            EligibilityOutcome::Eligible {
                income,
                required,
                family_size,
            }
        } else {
            EligibilityOutcome::IncomeGap {
                income,
                required,
                gap: required as f64 - income,
                family_size,
            }
        };

        debug!(
            status = ?input.sponsor_status,
            family_size,
            required,
            outcome = outcome.kind(),
            "eligibility classified"
        );
        outcome
    }
}
