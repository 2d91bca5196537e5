use super::common::*;
use crate::workflows::eligibility::{
    EligibilityOutcome, EligibilityStatus, SponsorStatus, INCREMENT_PER_PERSON,
};

#[test]
fn other_status_is_ineligible_regardless_of_income() {
    let classifier = classifier();

    for income in ["999999", "abc", "0", "41675"] {
        let outcome = classifier.classify(&input(SponsorStatus::Other, 1, 0, income));
        assert_eq!(
            outcome,
            EligibilityOutcome::StatusIneligible {
                sponsor_status: SponsorStatus::Other
            }
        );
        assert_eq!(outcome.status(), EligibilityStatus::Ineligible);
    }
}

#[test]
fn income_equal_to_threshold_is_eligible() {
    let outcome = classifier().classify(&input(SponsorStatus::Citizen, 1, 0, "41675"));

    assert_eq!(
        outcome,
        EligibilityOutcome::Eligible {
            income: 41675.0,
            required: 41_675,
            family_size: 2,
        }
    );
}

#[test]
fn shortfall_reports_gap_required_and_size() {
    let outcome = classifier().classify(&input(SponsorStatus::PermanentResident, 1, 1, "40000"));

    match outcome {
        EligibilityOutcome::IncomeGap {
            income,
            required,
            gap,
            family_size,
        } => {
            assert_eq!(income, 40000.0);
            assert_eq!(required, 51_235);
            assert_eq!(gap, 11235.0);
            assert_eq!(family_size, 3);
        }
        other => panic!("expected income gap, got {other:?}"),
    }
}

#[test]
fn unparseable_income_is_incomplete() {
    let classifier = classifier();
    for income in ["abc", "", "0", "-", "$"] {
        let outcome = classifier.classify(&input(SponsorStatus::Citizen, 1, 0, income));
        assert_eq!(outcome, EligibilityOutcome::IncompleteIncome, "income {income:?}");
        assert_eq!(outcome.status(), EligibilityStatus::Incomplete);
    }
}

#[test]
fn large_families_use_extrapolated_threshold() {
    // 1 sponsor + 7 dependents + 2 relatives
    let outcome = classifier().classify(&input(SponsorStatus::Citizen, 2, 7, "100000"));

    let expected_required = 88_593 + 3 * INCREMENT_PER_PERSON;
    match outcome {
        EligibilityOutcome::IncomeGap {
            required,
            family_size,
            gap,
            ..
        } => {
            assert_eq!(family_size, 10);
            assert_eq!(required, expected_required);
            assert_eq!(gap, expected_required as f64 - 100000.0);
        }
        other => panic!("expected income gap, got {other:?}"),
    }
}

#[test]
fn classification_is_idempotent() {
    let classifier = classifier();
    let declared = input(SponsorStatus::PermanentResident, 2, 3, "72 000 $");

    assert_eq!(classifier.classify(&declared), classifier.classify(&declared));
}

#[test]
fn every_input_combination_yields_one_verdict() {
    let classifier = classifier();
    let incomes = ["", "abc", "0", "1", "41675", "51234.99", "1e9", "9999999999", "..."];

    for status in SponsorStatus::ALL {
        for dependents in [0_u32, 1, 5, 12, u32::MAX] {
            for relatives in [1_u32, 2, 4, u32::MAX] {
                for income in incomes {
                    let outcome =
                        classifier.classify(&input(status, relatives, dependents, income));
                    let status_matches = matches!(
                        (outcome.status(), &outcome),
                        (EligibilityStatus::Eligible, EligibilityOutcome::Eligible { .. })
                            | (
                                EligibilityStatus::Ineligible,
                                EligibilityOutcome::StatusIneligible { .. }
                                    | EligibilityOutcome::IncomeGap { .. }
                            )
                            | (EligibilityStatus::Incomplete, EligibilityOutcome::IncompleteIncome)
                    );
                    assert!(status_matches);
                }
            }
        }
    }
}
