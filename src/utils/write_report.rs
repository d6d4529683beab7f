use crate::constants::REPORT_COLUMNS_SUFFIX;
use crate::models::RankedEntry;
use std::io::{self, Write};

/// Writes a report: the `<title>;NUMBER_CERTIFIED_APPLICATIONS;PERCENTAGE` header line,
/// followed by one line per entry.
pub fn write_report<W: Write>(
    mut writer: W,
    title: &str,
    entries: &[RankedEntry],
) -> io::Result<()> {
    writeln!(writer, "{};{}", title, REPORT_COLUMNS_SUFFIX)?;

    for entry in entries {
        writeln!(writer, "{}", entry)?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_report() {
        let entries = vec![
            RankedEntry {
                label: "CA".to_string(),
                count: 3,
                percentage: 75.0,
            },
            RankedEntry {
                label: "NY".to_string(),
                count: 1,
                percentage: 25.0,
            },
        ];
        let mut output = Vec::new();
        write_report(&mut output, "TOP_STATES", &entries).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "TOP_STATES;NUMBER_CERTIFIED_APPLICATIONS;PERCENTAGE\nCA;3;75.0%\nNY;1;25.0%\n"
        );
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let mut output = Vec::new();
        write_report(&mut output, "TOP_OCCUPATIONS", &[]).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "TOP_OCCUPATIONS;NUMBER_CERTIFIED_APPLICATIONS;PERCENTAGE\n"
        );
    }
}
