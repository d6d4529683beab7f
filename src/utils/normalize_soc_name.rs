use crate::types::SocName;

/// Strips, upper-cases and removes every `*` from an occupation title.
pub fn normalize_soc_name(raw_soc_name: &str) -> SocName {
    raw_soc_name.trim().to_uppercase().replace('*', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_soc_name() {
        assert_eq!(normalize_soc_name(" Software Developers* "), "SOFTWARE DEVELOPERS");
        assert_eq!(normalize_soc_name("*FOO*"), "FOO");
        assert_eq!(normalize_soc_name(""), "");
    }
}
