use crate::types::WorksiteState;

/// Strips and upper-cases a worksite state. No other repair is applied.
pub fn normalize_worksite_state(raw_worksite_state: &str) -> WorksiteState {
    raw_worksite_state.trim().to_uppercase()
}
