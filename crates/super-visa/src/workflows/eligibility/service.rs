use super::classifier::{EligibilityClassifier, EligibilityOutcome};
use super::domain::{EligibilityForm, EligibilityInput};
use super::messages::{EligibilityView, MessageCatalog, ThresholdTableView};
use super::thresholds::IncomeThresholdTable;
use crate::i18n::Language;

/// Composes the classifier with the message catalog for the estimator panel.
///
/// Holds only read-only data, so one instance is shared across requests.
#[derive(Debug, Clone, Default)]
pub struct EligibilityService {
    classifier: EligibilityClassifier,
    catalog: MessageCatalog,
    default_language: Language,
}

impl EligibilityService {
    pub fn new(
        table: IncomeThresholdTable,
        catalog: MessageCatalog,
        default_language: Language,
    ) -> Self {
        Self {
            classifier: EligibilityClassifier::new(table),
            catalog,
            default_language,
        }
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    pub fn classify(&self, input: &EligibilityInput) -> EligibilityOutcome {
        self.classifier.classify(input)
    }

    /// Coerces the raw form, classifies it, and renders the verdict.
    pub fn estimate(&self, form: &EligibilityForm, language: Language) -> EligibilityView {
        let input = form.coerce();
        let outcome = self.classifier.classify(&input);
        self.catalog.view(outcome, language)
    }

    pub fn thresholds(&self, language: Language) -> ThresholdTableView {
        self.catalog
            .threshold_table(self.classifier.table(), language)
    }
}
