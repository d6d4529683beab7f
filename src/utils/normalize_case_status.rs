use crate::constants::CERTIFIED_CASE_STATUS;

/// Normalizes a raw case status: surrounding whitespace is stripped, every internal
/// space removed and the result upper-cased.
///
/// # Example
/// ```
/// use h1b_counting::utils::normalize_case_status;
///
/// assert_eq!(normalize_case_status(" Certi fied "), "CERTIFIED");
/// ```
pub fn normalize_case_status(raw_case_status: &str) -> String {
    raw_case_status.trim().replace(' ', "").to_uppercase()
}

/// Whether a raw case status denotes a certified application.
pub fn is_certified_case_status(raw_case_status: &str) -> bool {
    normalize_case_status(raw_case_status) == CERTIFIED_CASE_STATUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certified_variants_are_accepted() {
        assert!(is_certified_case_status("CERTIFIED"));
        assert!(is_certified_case_status(" Certified "));
        assert!(is_certified_case_status("CERTI FIED"));
        assert!(is_certified_case_status("certified"));
    }

    #[test]
    fn test_other_statuses_are_rejected() {
        assert!(!is_certified_case_status("DENIED"));
        assert!(!is_certified_case_status("CERTIFIED-WITHDRAWN"));
        assert!(!is_certified_case_status("WITHDRAWN"));
        assert!(!is_certified_case_status(""));
    }
}
