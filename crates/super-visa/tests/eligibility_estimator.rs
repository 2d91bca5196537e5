use std::num::NonZeroU64;

use super_visa::i18n::Language;
use super_visa::workflows::eligibility::{
    EligibilityForm, EligibilityInput, EligibilityOutcome, EligibilityService, EligibilityStatus,
    IncomeThresholdTable, MessageCatalog, SponsorStatus, INCREMENT_PER_PERSON,
};

fn service() -> EligibilityService {
    EligibilityService::new(
        IncomeThresholdTable::standard(),
        MessageCatalog::builtin(),
        Language::Fr,
    )
}

fn form(status: &str, relatives: &str, dependents: &str, income: &str) -> EligibilityForm {
    EligibilityForm {
        status: Some(status.to_string()),
        relatives_invited: Some(relatives.to_string()),
        dependents: Some(dependents.to_string()),
        income: Some(income.to_string()),
    }
}

#[test]
fn citizen_with_exact_threshold_income_is_eligible() {
    let view = service().estimate(&form("Citoyen Canadien", "1", "0", "41675"), Language::Fr);

    assert_eq!(view.result.status, EligibilityStatus::Eligible);
    assert_eq!(view.result.message, "Vous semblez éligible !");
    assert!(view.result.detail.contains("41 675 $ CAD"));
    assert!(view.result.detail.contains("2 personnes"));
}

#[test]
fn permanent_resident_short_of_threshold_sees_gap() {
    let view = service().estimate(
        &form("Résident Permanent", "1", "1", "40 000 $"),
        Language::Fr,
    );

    assert_eq!(view.result.status, EligibilityStatus::Ineligible);
    assert_eq!(
        view.outcome,
        EligibilityOutcome::IncomeGap {
            income: 40000.0,
            required: 51_235,
            gap: 11235.0,
            family_size: 3,
        }
    );
    assert!(view.result.detail.contains("11 235 $ CAD"));
    assert!(view.result.detail.contains("51 235 $ CAD"));
}

#[test]
fn other_status_short_circuits_before_income() {
    let view = service().estimate(&form("Autre (Inéligible)", "1", "0", "999999"), Language::En);

    assert_eq!(view.result.status, EligibilityStatus::Ineligible);
    assert_eq!(view.result.message, "Ineligible status");
    assert!(!view.result.detail.contains("999"));
    assert!(matches!(
        view.outcome,
        EligibilityOutcome::StatusIneligible {
            sponsor_status: SponsorStatus::Other
        }
    ));
}

#[test]
fn non_numeric_income_is_incomplete() {
    let view = service().estimate(&form("citizen", "1", "0", "abc"), Language::En);

    assert_eq!(view.result.status, EligibilityStatus::Incomplete);
    assert_eq!(view.outcome, EligibilityOutcome::IncompleteIncome);
}

#[test]
fn ten_person_family_uses_extrapolated_requirement() {
    let table = IncomeThresholdTable::standard();
    let seven = table.threshold_for(NonZeroU64::new(7).expect("non-zero"));

    let input = EligibilityInput::new(SponsorStatus::Citizen, 2, 7, "200000");
    let outcome = service().classify(&input);

    assert_eq!(
        outcome,
        EligibilityOutcome::Eligible {
            income: 200000.0,
            required: seven + 3 * INCREMENT_PER_PERSON,
            family_size: 10,
        }
    );
}

#[test]
fn repeated_estimates_are_identical() {
    let service = service();
    let submitted = form("Permanent Resident", "2", "3", "72,500.75");

    let first = service.estimate(&submitted, Language::En);
    let second = service.estimate(&submitted, Language::En);

    assert_eq!(first, second);
}

#[test]
fn threshold_listing_matches_classifier_requirements() {
    let service = service();
    let listing = service.thresholds(Language::En);

    for row in &listing.rows {
        let dependents = row.family_size.saturating_sub(2);
        let relatives = if row.family_size == 1 { 0 } else { 1 };
        let input = EligibilityInput::new(
            SponsorStatus::Citizen,
            relatives,
            dependents,
            &row.minimum_income.to_string(),
        );
        match service.classify(&input) {
            EligibilityOutcome::Eligible {
                required,
                family_size,
                ..
            } => {
                assert_eq!(required, row.minimum_income);
                assert_eq!(family_size, u64::from(row.family_size));
            }
            other => panic!("expected eligible at the threshold, got {other:?}"),
        }
    }
}

#[test]
fn oversized_household_count_cannot_shrink_into_eligibility() {
    let view = service().estimate(&form("citizen", "1", "4294967296", "50000"), Language::En);

    assert_eq!(view.result.status, EligibilityStatus::Ineligible);
    match view.outcome {
        EligibilityOutcome::IncomeGap { family_size, .. } => {
            assert_eq!(family_size, u64::from(u32::MAX) + 2);
        }
        other => panic!("expected an income gap, got {other:?}"),
    }
}

#[test]
fn huge_declared_income_is_echoed_without_overflow() {
    let view = service().estimate(
        &form("citizen", "1", "0", "100000000000000000000000"),
        Language::En,
    );

    assert_eq!(view.result.status, EligibilityStatus::Eligible);
    assert!(view
        .result
        .detail
        .contains("$100,000,000,000,000,000,000,000 CAD"));
}
