use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

/// Extra yearly income required for each household member beyond the last tabulated row.
pub const INCREMENT_PER_PERSON: u64 = 9_018;

/// LICO + 30 % schedule (CAD per year) for family sizes 1 through 7.
const STANDARD_ROWS: [(u32, u64); 7] = [
    (1, 33_477),
    (2, 41_675),
    (3, 51_235),
    (4, 62_207),
    (5, 70_554),
    (6, 79_574),
    (7, 88_593),
];

/// Minimum qualifying income for one family size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRow {
    pub family_size: u32,
    pub minimum_income: u64,
}

/// Immutable income schedule shared by every estimation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeThresholdTable {
    rows: Vec<ThresholdRow>,
    increment_per_person: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThresholdError {
    #[error("family size must be at least 1 (got {size})")]
    BelowMinimum { size: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThresholdTableError {
    #[error("threshold table must contain at least one row")]
    Empty,
    #[error("threshold rows must cover family sizes contiguously from 1 (expected {expected}, found {found})")]
    NonContiguous { expected: u32, found: u32 },
    #[error("minimum income must increase with family size (size {family_size} has {minimum_income})")]
    NotIncreasing {
        family_size: u32,
        minimum_income: u64,
    },
    #[error("increment per additional person must be positive")]
    ZeroIncrement,
}

impl IncomeThresholdTable {
    /// Validates that rows start at size 1, are contiguous, and strictly increase.
    pub fn new(
        rows: Vec<ThresholdRow>,
        increment_per_person: u64,
    ) -> Result<Self, ThresholdTableError> {
        if rows.is_empty() {
            return Err(ThresholdTableError::Empty);
        }
        if increment_per_person == 0 {
            return Err(ThresholdTableError::ZeroIncrement);
        }

        let mut previous_income = None;
        for (idx, row) in rows.iter().enumerate() {
            let expected = idx as u32 + 1;
            if row.family_size != expected {
                return Err(ThresholdTableError::NonContiguous {
                    expected,
                    found: row.family_size,
                });
            }
            if previous_income.is_some_and(|previous| row.minimum_income <= previous) {
                return Err(ThresholdTableError::NotIncreasing {
                    family_size: row.family_size,
                    minimum_income: row.minimum_income,
                });
            }
            previous_income = Some(row.minimum_income);
        }

        Ok(Self {
            rows,
            increment_per_person,
        })
    }

    pub fn standard() -> Self {
        let rows = STANDARD_ROWS
            .iter()
            .map(|&(family_size, minimum_income)| ThresholdRow {
                family_size,
                minimum_income,
            })
            .collect();
        Self {
            rows,
            increment_per_person: INCREMENT_PER_PERSON,
        }
    }

    pub fn rows(&self) -> &[ThresholdRow] {
        &self.rows
    }

    pub fn increment_per_person(&self) -> u64 {
        self.increment_per_person
    }

    /// Largest tabulated row; sizes above it are extrapolated.
    pub fn last_row(&self) -> ThresholdRow {
        self.rows[self.rows.len() - 1]
    }

    /// Minimum qualifying income for `size` household members.
    ///
    /// Sizes past the last row add `increment_per_person` per extra member.
    /// The arithmetic saturates, so every positive size maps to a value.
    pub fn threshold_for(&self, size: NonZeroU64) -> u64 {
        let size = size.get();
        let last = self.last_row();
        let last_size = u64::from(last.family_size);

        if size <= last_size {
            return self.rows[(size - 1) as usize].minimum_income;
        }

        let extra_members = size - last_size;
        last.minimum_income
            .saturating_add(extra_members.saturating_mul(self.increment_per_person))
    }

    /// Entry point for raw sizes; zero is a caller bug and is rejected.
    pub fn threshold_for_size(&self, size: u64) -> Result<u64, ThresholdError> {
        NonZeroU64::new(size)
            .map(|size| self.threshold_for(size))
            .ok_or(ThresholdError::BelowMinimum { size })
    }
}

impl Default for IncomeThresholdTable {
    fn default() -> Self {
        Self::standard()
    }
}
