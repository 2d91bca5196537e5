use std::io::Read;

use serde::{Deserialize, Serialize};

use super::classifier::{EligibilityOutcome, EligibilityStatus};
use super::thresholds::IncomeThresholdTable;
use crate::agency::CONTACT_INFO;
use crate::i18n::{format_cad, format_integer, Language};

/// Every user-visible estimator string for one language. Figures are
/// substituted into `{income}`, `{required}`, `{gap}`, `{size}`, `{base}`,
/// and `{increment}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBundle {
    pub status_ineligible_title: String,
    pub status_ineligible_detail: String,
    pub incomplete_title: String,
    pub incomplete_detail: String,
    pub eligible_title: String,
    pub result_income_note: String,
    pub ineligible_title: String,
    pub result_gap_note: String,
    pub cta_eligible: String,
    pub cta_default: String,
    pub restart: String,
    pub family_size_single: String,
    pub family_size_plural: String,
    pub family_size_open: String,
    pub beyond_table_label: String,
    pub beyond_table_value: String,
}

impl MessageBundle {
    pub fn french() -> Self {
        Self {
            status_ineligible_title: "Statut non admissible".to_string(),
            status_ineligible_detail:
                "Seuls les citoyens canadiens et résidents permanents peuvent parrainer leurs parents."
                    .to_string(),
            incomplete_title: "Données incomplètes".to_string(),
            incomplete_detail: "Veuillez entrer un revenu annuel valide.".to_string(),
            eligible_title: "Vous semblez éligible !".to_string(),
            result_income_note: "Votre revenu de {income} CAD atteint le minimum requis de {required} CAD pour une famille de {size} personnes.".to_string(),
            ineligible_title: "Revenu insuffisant".to_string(),
            result_gap_note: "Il vous manque environ {gap} CAD pour atteindre le seuil LICO de {required} CAD pour une famille de {size} personnes. Un co-signataire pourrait vous aider.".to_string(),
            cta_eligible: "Appliquer Maintenant - Consultation Gratuite".to_string(),
            cta_default: "Parler à un conseiller - Consultation Gratuite".to_string(),
            restart: "Recommencer le test".to_string(),
            family_size_single: "{size} personne".to_string(),
            family_size_plural: "{size} personnes".to_string(),
            family_size_open: "{size}+ personnes".to_string(),
            beyond_table_label: "Plus de {size} personnes".to_string(),
            beyond_table_value: "{base} + {increment} / pers.".to_string(),
        }
    }

    pub fn english() -> Self {
        Self {
            status_ineligible_title: "Ineligible status".to_string(),
            status_ineligible_detail:
                "Only Canadian citizens and permanent residents can sponsor their parents."
                    .to_string(),
            incomplete_title: "Incomplete information".to_string(),
            incomplete_detail: "Please enter a valid annual income.".to_string(),
            eligible_title: "You appear to be eligible!".to_string(),
            result_income_note: "Your income of {income} CAD meets the required minimum of {required} CAD for a family of {size}.".to_string(),
            ineligible_title: "Insufficient income".to_string(),
            result_gap_note: "You are about {gap} CAD short of the LICO threshold of {required} CAD for a family of {size}. A co-signer could help you.".to_string(),
            cta_eligible: "Apply Now - Free Consultation".to_string(),
            cta_default: "Talk to an advisor - Free Consultation".to_string(),
            restart: "Restart the test".to_string(),
            family_size_single: "{size} person".to_string(),
            family_size_plural: "{size} people".to_string(),
            family_size_open: "{size}+ people".to_string(),
            beyond_table_label: "More than {size} people".to_string(),
            beyond_table_value: "{base} + {increment} / person".to_string(),
        }
    }

    fn required_placeholders(&self) -> [(&'static str, &str, &'static str); 7] {
        [
            ("resultIncomeNote", self.result_income_note.as_str(), "{income}"),
            ("resultIncomeNote", self.result_income_note.as_str(), "{required}"),
            ("resultIncomeNote", self.result_income_note.as_str(), "{size}"),
            ("resultGapNote", self.result_gap_note.as_str(), "{gap}"),
            ("resultGapNote", self.result_gap_note.as_str(), "{required}"),
            ("resultGapNote", self.result_gap_note.as_str(), "{size}"),
            ("familySizePlural", self.family_size_plural.as_str(), "{size}"),
        ]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("message catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("template '{template}' for '{language}' is missing the {placeholder} placeholder")]
    MissingPlaceholder {
        language: &'static str,
        template: &'static str,
        placeholder: &'static str,
    },
}

/// French and English bundles. Built in by default; a JSON catalog of the same
/// shape (`{"fr": {...}, "en": {...}}`) can replace them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    fr: MessageBundle,
    en: MessageBundle,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Rendered verdict in the active language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityResult {
    pub status: EligibilityStatus,
    pub message: String,
    pub detail: String,
}

/// Everything the estimator panel needs to display a verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityView {
    pub language: Language,
    #[serde(flatten)]
    pub result: EligibilityResult,
    pub outcome: EligibilityOutcome,
    pub cta_label: String,
    pub cta_url: String,
    pub restart_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThresholdRowView {
    pub family_size: u32,
    pub label: String,
    pub minimum_income: u64,
    pub formatted_income: String,
}

/// Localized income table, including the extrapolation rule past the last row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThresholdTableView {
    pub language: Language,
    pub rows: Vec<ThresholdRowView>,
    pub beyond_label: String,
    pub beyond_value: String,
    pub increment_per_person: u64,
}

impl MessageCatalog {
    pub fn builtin() -> Self {
        Self {
            fr: MessageBundle::french(),
            en: MessageBundle::english(),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_reader(reader)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        Self::from_json_reader(raw.as_bytes())
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for language in Language::ALL {
            for (template, text, placeholder) in self.bundle(language).required_placeholders() {
                if !text.contains(placeholder) {
                    return Err(CatalogError::MissingPlaceholder {
                        language: language.code(),
                        template,
                        placeholder,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn bundle(&self, language: Language) -> &MessageBundle {
        match language {
            Language::Fr => &self.fr,
            Language::En => &self.en,
        }
    }

    pub fn render(&self, outcome: &EligibilityOutcome, language: Language) -> EligibilityResult {
        let bundle = self.bundle(language);
        let (message, detail) = match outcome {
            EligibilityOutcome::StatusIneligible { .. } => (
                bundle.status_ineligible_title.clone(),
                bundle.status_ineligible_detail.clone(),
            ),
            EligibilityOutcome::IncompleteIncome => (
                bundle.incomplete_title.clone(),
                bundle.incomplete_detail.clone(),
            ),
            EligibilityOutcome::Eligible {
                income,
                required,
                family_size,
            } => (
                bundle.eligible_title.clone(),
                fill(
                    &bundle.result_income_note,
                    &[
                        ("{income}", format_cad(*income, language)),
                        ("{required}", format_cad(*required as f64, language)),
                        ("{size}", family_size.to_string()),
                    ],
                ),
            ),
            EligibilityOutcome::IncomeGap {
                required,
                gap,
                family_size,
                ..
            } => (
                bundle.ineligible_title.clone(),
                fill(
                    &bundle.result_gap_note,
                    &[
                        ("{gap}", format_cad(displayed_gap(*gap), language)),
                        ("{required}", format_cad(*required as f64, language)),
                        ("{size}", family_size.to_string()),
                    ],
                ),
            ),
        };

        EligibilityResult {
            status: outcome.status(),
            message,
            detail,
        }
    }

    pub fn view(&self, outcome: EligibilityOutcome, language: Language) -> EligibilityView {
        let bundle = self.bundle(language);
        let result = self.render(&outcome, language);
        let cta_label = match result.status {
            EligibilityStatus::Eligible => bundle.cta_eligible.clone(),
            EligibilityStatus::Ineligible | EligibilityStatus::Incomplete => {
                bundle.cta_default.clone()
            }
        };

        EligibilityView {
            language,
            result,
            outcome,
            cta_label,
            cta_url: CONTACT_INFO.whatsapp_url(),
            restart_label: bundle.restart.clone(),
        }
    }

    pub fn threshold_table(
        &self,
        table: &IncomeThresholdTable,
        language: Language,
    ) -> ThresholdTableView {
        let bundle = self.bundle(language);
        let last = table.last_row();

        let rows = table
            .rows()
            .iter()
            .map(|row| {
                let template = if row.family_size == last.family_size {
                    &bundle.family_size_open
                } else if row.family_size == 1 {
                    &bundle.family_size_single
                } else {
                    &bundle.family_size_plural
                };
                ThresholdRowView {
                    family_size: row.family_size,
                    label: fill(template, &[("{size}", row.family_size.to_string())]),
                    minimum_income: row.minimum_income,
                    formatted_income: format_cad(row.minimum_income as f64, language),
                }
            })
            .collect();

        ThresholdTableView {
            language,
            rows,
            beyond_label: fill(
                &bundle.beyond_table_label,
                &[("{size}", last.family_size.to_string())],
            ),
            beyond_value: fill(
                &bundle.beyond_table_value,
                &[
                    ("{base}", format_integer(last.minimum_income, language)),
                    (
                        "{increment}",
                        format_integer(table.increment_per_person(), language),
                    ),
                ],
            ),
            increment_per_person: table.increment_per_person(),
        }
    }
}

/// A shortfall under half a cent would otherwise print as zero next to an
/// ineligible verdict.
fn displayed_gap(gap: f64) -> f64 {
    ((gap * 100.0).round() / 100.0).max(0.01)
}

/// Unknown placeholders are left as written.
fn fill(template: &str, values: &[(&str, String)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (placeholder, value)| {
            text.replace(placeholder, value)
        })
}
