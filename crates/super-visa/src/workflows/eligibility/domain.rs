use std::num::NonZeroU64;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::i18n::Language;

/// Immigration status of the person vouching for the invited relatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsorStatus {
    Citizen,
    PermanentResident,
    Other,
}

impl SponsorStatus {
    pub const ALL: [SponsorStatus; 3] = [
        SponsorStatus::Citizen,
        SponsorStatus::PermanentResident,
        SponsorStatus::Other,
    ];

    /// Matches wire names and the select-box labels of both page languages.
    pub fn from_label(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "citizen" | "canadian citizen" | "citoyen" | "citoyen canadien" => Some(Self::Citizen),
            "permanent_resident" | "permanent resident" | "pr" | "résident permanent"
            | "resident permanent" => Some(Self::PermanentResident),
            "other" | "other (ineligible)" | "autre" | "autre (inéligible)"
            | "autre (ineligible)" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (SponsorStatus::Citizen, Language::Fr) => "Citoyen Canadien",
            (SponsorStatus::Citizen, Language::En) => "Canadian Citizen",
            (SponsorStatus::PermanentResident, Language::Fr) => "Résident Permanent",
            (SponsorStatus::PermanentResident, Language::En) => "Permanent Resident",
            (SponsorStatus::Other, Language::Fr) => "Autre (Inéligible)",
            (SponsorStatus::Other, Language::En) => "Other (Ineligible)",
        }
    }

    pub fn may_sponsor(self) -> bool {
        !matches!(self, SponsorStatus::Other)
    }
}

/// Yearly income as typed by the visitor, after numeric normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "amount")]
pub enum DeclaredIncome {
    Amount(f64),
    Invalid,
}

impl DeclaredIncome {
    /// Drops every character other than ASCII digits and `.`, then reads the
    /// longest leading decimal number. Anything not finite and positive is invalid.
    pub fn parse(raw: &str) -> Self {
        let cleaned: String = raw
            .chars()
            .filter(|ch| ch.is_ascii_digit() || *ch == '.')
            .collect();

        match leading_decimal(&cleaned).and_then(|number| number.parse::<f64>().ok()) {
            Some(amount) => Self::from_amount(amount),
            None => Self::Invalid,
        }
    }

    pub fn from_amount(amount: f64) -> Self {
        if amount.is_finite() && amount > 0.0 {
            Self::Amount(amount)
        } else {
            Self::Invalid
        }
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            DeclaredIncome::Amount(amount) => Some(*amount),
            DeclaredIncome::Invalid => None,
        }
    }
}

/// `digits[.digits]` prefix of an already-cleaned string, normalized so that
/// `f64::from_str` accepts it (`.5` becomes `0.5`, `5.` becomes `5`).
fn leading_decimal(cleaned: &str) -> Option<String> {
    let mut integer = String::new();
    let mut fraction = String::new();
    let mut seen_point = false;

    for ch in cleaned.chars() {
        match ch {
            '.' if seen_point => break,
            '.' => seen_point = true,
            digit if seen_point => fraction.push(digit),
            digit => integer.push(digit),
        }
    }

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }
    if integer.is_empty() {
        integer.push('0');
    }
    if fraction.is_empty() {
        Some(integer)
    } else {
        Some(format!("{integer}.{fraction}"))
    }
}

/// Facts declared for one estimation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityInput {
    pub sponsor_status: SponsorStatus,
    pub relatives_invited: u32,
    pub dependents_in_household: u32,
    pub declared_annual_income: DeclaredIncome,
}

impl EligibilityInput {
    pub fn new(
        sponsor_status: SponsorStatus,
        relatives_invited: u32,
        dependents_in_household: u32,
        declared_annual_income: &str,
    ) -> Self {
        Self {
            sponsor_status,
            relatives_invited,
            dependents_in_household,
            declared_annual_income: DeclaredIncome::parse(declared_annual_income),
        }
    }

    /// Sponsor + household dependents + invited relatives.
    pub fn total_family_size(&self) -> NonZeroU64 {
        let others = u64::from(self.dependents_in_household) + u64::from(self.relatives_invited);
        NonZeroU64::MIN.saturating_add(others)
    }
}

/// Raw field values as posted by the estimator form. Numbers are accepted
/// either as JSON strings or JSON numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityForm {
    #[serde(default, deserialize_with = "raw_field")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "raw_field")]
    pub relatives_invited: Option<String>,
    #[serde(default, deserialize_with = "raw_field")]
    pub dependents: Option<String>,
    #[serde(default, deserialize_with = "raw_field")]
    pub income: Option<String>,
}

impl EligibilityForm {
    /// Superficial coercion done by the page before calling the classifier.
    ///
    /// Unknown status falls to `Other`. Dependents default to 0 and invited
    /// relatives to 1 when blank, unparseable, out of range, or below their floor.
    pub fn coerce(&self) -> EligibilityInput {
        let sponsor_status = self
            .status
            .as_deref()
            .and_then(SponsorStatus::from_label)
            .unwrap_or(SponsorStatus::Other);

        let dependents_in_household = self
            .dependents
            .as_deref()
            .and_then(leading_integer)
            .unwrap_or(0);

        let relatives_invited = self
            .relatives_invited
            .as_deref()
            .and_then(leading_integer)
            .filter(|count| *count >= 1)
            .unwrap_or(1);

        EligibilityInput {
            sponsor_status,
            relatives_invited,
            dependents_in_household,
            declared_annual_income: DeclaredIncome::parse(self.income.as_deref().unwrap_or("")),
        }
    }
}

/// Leading unsigned integer after optional whitespace; a minus sign yields `None`.
/// Counts too large for `u32` saturate so the household never shrinks.
fn leading_integer(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = trimmed.chars().take_while(|ch| ch.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}

fn raw_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}
