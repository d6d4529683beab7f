use crate::types::{CodeCounter, Frequency, NameVariantCounter, SocCode, SocName, StateCounter};
use std::fmt;

/// Why a data row was left out of the aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The row does not have as many fields as the header.
    FieldCountMismatch,
    /// The case status is anything other than certified.
    NotCertified,
    /// The SOC code is too short to be repaired.
    UnrepairableSocCode,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FieldCountMismatch => write!(f, "field count mismatch"),
            SkipReason::NotCertified => write!(f, "not certified"),
            SkipReason::UnrepairableSocCode => write!(f, "unrepairable SOC code"),
        }
    }
}

/// Tally of skipped data rows, per reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkippedRows {
    pub field_count_mismatch: usize,
    pub not_certified: usize,
    pub unrepairable_soc_code: usize,
}

impl SkippedRows {
    pub fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::FieldCountMismatch => self.field_count_mismatch += 1,
            SkipReason::NotCertified => self.not_certified += 1,
            SkipReason::UnrepairableSocCode => self.unrepairable_soc_code += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.field_count_mismatch + self.not_certified + self.unrepairable_soc_code
    }
}

/// Statistics gathered over every certified application of an input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationResult {
    pub name_variants: NameVariantCounter,
    pub codes: CodeCounter,
    pub states: StateCounter,
    pub total_certified: Frequency,
    pub skipped_rows: SkippedRows,
}

impl AggregationResult {
    /// The name spelling most often seen with `soc_code`; ties go to the spelling
    /// observed first.
    pub fn canonical_soc_name(&self, soc_code: &SocCode) -> Option<&SocName> {
        self.name_variants
            .get(soc_code)
            .and_then(|variants| variants.most_common())
    }
}
