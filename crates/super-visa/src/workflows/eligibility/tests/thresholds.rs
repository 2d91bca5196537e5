use std::num::NonZeroU64;

use crate::workflows::eligibility::{
    IncomeThresholdTable, ThresholdError, ThresholdRow, ThresholdTableError, INCREMENT_PER_PERSON,
};

fn size(value: u64) -> NonZeroU64 {
    NonZeroU64::new(value).expect("non-zero size")
}

#[test]
fn tabulated_sizes_return_exact_rows() {
    let table = IncomeThresholdTable::standard();
    let expected = [33_477, 41_675, 51_235, 62_207, 70_554, 79_574, 88_593];

    for (idx, minimum) in expected.iter().enumerate() {
        assert_eq!(table.threshold_for(size(idx as u64 + 1)), *minimum);
    }
    assert_eq!(table.rows().len(), 7);
}

#[test]
fn sizes_past_the_table_extrapolate_from_the_last_row() {
    let table = IncomeThresholdTable::standard();
    let base = table.threshold_for(size(7));

    for family_size in [8_u64, 9, 10, 20] {
        assert_eq!(
            table.threshold_for(size(family_size)),
            base + (family_size - 7) * INCREMENT_PER_PERSON
        );
    }
    assert_eq!(table.threshold_for(size(10)), 88_593 + 3 * 9_018);
}

#[test]
fn thresholds_never_decrease() {
    let table = IncomeThresholdTable::standard();
    let mut previous = 0;
    for family_size in 1..=60 {
        let current = table.threshold_for(size(family_size));
        assert!(
            current >= previous,
            "size {family_size} dropped from {previous} to {current}"
        );
        previous = current;
    }
}

#[test]
fn extrapolation_saturates_instead_of_overflowing() {
    let table = IncomeThresholdTable::standard();
    assert_eq!(table.threshold_for(size(u64::MAX)), u64::MAX);
}

#[test]
fn zero_size_fails_fast() {
    let table = IncomeThresholdTable::standard();
    assert_eq!(
        table.threshold_for_size(0),
        Err(ThresholdError::BelowMinimum { size: 0 })
    );
    assert_eq!(table.threshold_for_size(2), Ok(41_675));
}

#[test]
fn custom_tables_are_validated() {
    let row = |family_size, minimum_income| ThresholdRow {
        family_size,
        minimum_income,
    };

    assert_eq!(
        IncomeThresholdTable::new(Vec::new(), 100),
        Err(ThresholdTableError::Empty)
    );
    assert_eq!(
        IncomeThresholdTable::new(vec![row(1, 10), row(3, 20)], 100),
        Err(ThresholdTableError::NonContiguous {
            expected: 2,
            found: 3
        })
    );
    assert_eq!(
        IncomeThresholdTable::new(vec![row(1, 10), row(2, 10)], 100),
        Err(ThresholdTableError::NotIncreasing {
            family_size: 2,
            minimum_income: 10
        })
    );
    assert_eq!(
        IncomeThresholdTable::new(vec![row(1, 10)], 0),
        Err(ThresholdTableError::ZeroIncrement)
    );

    let table = IncomeThresholdTable::new(vec![row(1, 10), row(2, 20)], 5).expect("valid table");
    assert_eq!(table.threshold_for(size(4)), 30);
}
