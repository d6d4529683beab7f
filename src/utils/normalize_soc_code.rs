use crate::types::SocCode;

/// Normalizes a raw SOC code into the `XX-XXXX` form.
///
/// The code is stripped and upper-cased, then repaired:
/// - a `.` or `/` in the third position is replaced by `-`
/// - a code without any `-` gets one inserted after its first two characters
/// - anything else is returned as is
///
/// Returns `None` when the code has fewer than three characters, since there is
/// nothing to repair.
///
/// # Example
/// ```
/// use h1b_counting::utils::normalize_soc_code;
///
/// assert_eq!(normalize_soc_code("15.1132"), Some("15-1132".to_string()));
/// assert_eq!(normalize_soc_code("151132"), Some("15-1132".to_string()));
/// assert_eq!(normalize_soc_code("15"), None);
/// ```
pub fn normalize_soc_code(raw_soc_code: &str) -> Option<SocCode> {
    let soc_code = raw_soc_code.trim().to_uppercase();

    let (separator_offset, separator) = soc_code.char_indices().nth(2)?;
    let (major_group, rest) = soc_code.split_at(separator_offset);

    if separator == '.' || separator == '/' {
        Some(format!("{}-{}", major_group, &rest[separator.len_utf8()..]))
    } else if !soc_code.contains('-') {
        Some(format!("{}-{}", major_group, rest))
    } else {
        Some(soc_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_hyphen_is_inserted() {
        assert_eq!(normalize_soc_code("151234"), Some("15-1234".to_string()));
    }

    #[test]
    fn test_dot_and_slash_are_replaced() {
        assert_eq!(normalize_soc_code("15.1234"), Some("15-1234".to_string()));
        assert_eq!(normalize_soc_code("15/1234"), Some("15-1234".to_string()));
    }

    #[test]
    fn test_well_formed_code_is_unchanged() {
        assert_eq!(normalize_soc_code("15-1234"), Some("15-1234".to_string()));
    }

    #[test]
    fn test_code_is_stripped_and_upper_cased() {
        assert_eq!(normalize_soc_code("  ab-12cd "), Some("AB-12CD".to_string()));
    }

    #[test]
    fn test_hyphen_elsewhere_is_left_alone() {
        assert_eq!(
            normalize_soc_code("15-1132.00"),
            Some("15-1132.00".to_string())
        );
        assert_eq!(normalize_soc_code("151-132"), Some("151-132".to_string()));
    }

    #[test]
    fn test_short_codes_are_unrecoverable() {
        assert_eq!(normalize_soc_code(""), None);
        assert_eq!(normalize_soc_code("15"), None);
        assert_eq!(normalize_soc_code("   1 "), None);
    }

    #[test]
    fn test_three_character_code() {
        assert_eq!(normalize_soc_code("15."), Some("15-".to_string()));
        assert_eq!(normalize_soc_code("151"), Some("15-1".to_string()));
    }
}
