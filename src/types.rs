use crate::models::FrequencyCounter;
use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// A Standard Occupational Classification code, normalized to the `XX-XXXX` form.
pub type SocCode = String;

/// A normalized occupation title as observed in the input (upper-cased, `*` removed).
pub type SocName = String;

/// A worksite state or territory abbreviation (e.g. `CA`).
pub type WorksiteState = String;

/// Represents the number of certified applications counted for a key.
pub type Frequency = usize;

/// Zero-based column position within a delimited row.
pub type ColumnIndex = usize;

/// Total certified applications per SOC code.
pub type CodeCounter = FrequencyCounter<SocCode>;

/// Total certified applications per worksite state.
pub type StateCounter = FrequencyCounter<WorksiteState>;

/// For each SOC code, how often every observed name spelling was seen with it.
pub type NameVariantCounter = HashMap<SocCode, FrequencyCounter<SocName>>;
