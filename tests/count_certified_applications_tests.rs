use h1b_counting::{
    count_certified_applications_from_str, count_certified_applications_with_custom_config,
    rank_reports, Error, ReportConfig,
};
use std::io::Cursor;
use test_utils::{build_input, generate_synthetic_input};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternate_headers_from_older_files() {
        let input = build_input(
            "LCA_CASE_NUMBER;STATUS;LCA_CASE_SOC_CODE;LCA_CASE_SOC_NAME;LCA_CASE_WORKLOC1_STATE",
            &[
                "I-1;CERTIFIED;15-1132;SOFTWARE DEVELOPERS;CA",
                "I-2;CERTIFIED;15-1132;SOFTWARE DEVELOPERS;WA",
                "I-3;DENIED;15-1132;SOFTWARE DEVELOPERS;WA",
            ],
        );
        let result = count_certified_applications_from_str(&input).unwrap();

        assert_eq!(result.total_certified, 2);
        assert_eq!(result.codes.get(&"15-1132".to_string()), Some(2));
        assert_eq!(result.skipped_rows.not_certified, 1);
    }

    #[test]
    fn test_status_filter_ignores_case_and_spaces() {
        let input = build_input(
            "SOC_NAME;SOC_CODE;WORKSITE_STATE;CASE_STATUS",
            &[
                "A;11-1111;CA; Certified ",
                "A;11-1111;CA;CERTI FIED",
                "A;11-1111;CA;certified",
                "A;11-1111;CA;DENIED",
            ],
        );
        let result = count_certified_applications_from_str(&input).unwrap();

        assert_eq!(result.total_certified, 3);
        assert_eq!(result.states.get(&"CA".to_string()), Some(3));
    }

    #[test]
    fn test_malformed_rows_are_tallied_not_counted() {
        let input = build_input(
            "SOC_NAME;SOC_CODE;WORKSITE_STATE;CASE_STATUS",
            &[
                "A;11-1111;CA",
                "A;11-1111;CA;CERTIFIED;EXTRA",
                "A;1;CA;CERTIFIED",
                "A;11-1111;CA;CERTIFIED",
            ],
        );
        let result = count_certified_applications_from_str(&input).unwrap();

        assert_eq!(result.total_certified, 1);
        assert_eq!(result.skipped_rows.field_count_mismatch, 2);
        assert_eq!(result.skipped_rows.unrepairable_soc_code, 1);
        assert_eq!(result.states.get(&"CA".to_string()), Some(1));
        assert_eq!(result.states.len(), 1);
    }

    #[test]
    fn test_counting_twice_gives_identical_results() {
        let input = generate_synthetic_input(500);

        let first = count_certified_applications_from_str(&input).unwrap();
        let second = count_certified_applications_from_str(&input).unwrap();

        assert_eq!(first, second);
        assert_eq!(rank_reports(&first, 10), rank_reports(&second, 10));
    }

    #[test]
    fn test_synthetic_input_totals() {
        // Every other row carries a certified status
        let result =
            count_certified_applications_from_str(&generate_synthetic_input(400)).unwrap();

        assert_eq!(result.total_certified, 200);
        assert_eq!(result.codes.iter().map(|(_, count)| count).sum::<usize>(), 200);
        assert_eq!(result.states.iter().map(|(_, count)| count).sum::<usize>(), 200);
        assert_eq!(result.skipped_rows.not_certified, 200);

        let reports = rank_reports(&result, 10);
        let percentage_sum: f64 = reports.states.iter().map(|entry| entry.percentage).sum();
        assert!((percentage_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_delimiter() {
        let input = "SOC_NAME|SOC_CODE|WORKSITE_STATE|CASE_STATUS\nA|11.1111|ny|CERTIFIED\n";
        let config = ReportConfig {
            top_k: 10,
            delimiter: b'|',
        };
        let result =
            count_certified_applications_with_custom_config(Cursor::new(input), config).unwrap();

        assert_eq!(result.codes.get(&"11-1111".to_string()), Some(1));
        assert_eq!(result.states.get(&"NY".to_string()), Some(1));
    }

    #[test]
    fn test_unresolvable_header() {
        let input = build_input("NAME;CODE;STATE;STATUS", &["A;11-1111;CA;CERTIFIED"]);

        assert!(matches!(
            count_certified_applications_from_str(&input),
            Err(Error::Schema { .. })
        ));
    }
}
