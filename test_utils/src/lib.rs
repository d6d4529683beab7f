use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CANONICAL_HEADER: &str = "CASE_NUMBER;CASE_STATUS;SOC_CODE;SOC_NAME;WORKSITE_STATE";

/// Joins a header and data rows into `;` delimited file contents.
pub fn build_input(header: &str, rows: &[&str]) -> String {
    let mut contents = String::from(header);
    contents.push('\n');

    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }

    contents
}

/// A temporary directory holding an input file plus the paths the two reports
/// should be written to. Everything is removed once this is dropped.
pub struct ReportFixture {
    pub dir: TempDir,
    pub input_path: PathBuf,
    pub occupations_path: PathBuf,
    pub states_path: PathBuf,
}

impl ReportFixture {
    pub fn new(input_contents: &str) -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let input_path = dir.path().join("input").join("h1b_input.csv");
        let output_dir = dir.path().join("output");

        fs::create_dir_all(input_path.parent().unwrap_or(dir.path()))?;
        fs::create_dir_all(&output_dir)?;
        fs::write(&input_path, input_contents)?;

        Ok(ReportFixture {
            input_path,
            occupations_path: output_dir.join("top_10_occupations.txt"),
            states_path: output_dir.join("top_10_states.txt"),
            dir,
        })
    }

    pub fn read_report(path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Generates input with `row_count` data rows spread across a fixed set of
/// occupations, states and case statuses.
pub fn generate_synthetic_input(row_count: usize) -> String {
    const OCCUPATIONS: &[(&str, &str)] = &[
        ("15-1132", "SOFTWARE DEVELOPERS, APPLICATIONS"),
        ("151121", "COMPUTER SYSTEMS ANALYSTS"),
        ("15.1131", "COMPUTER PROGRAMMERS*"),
        ("13-2011", "ACCOUNTANTS AND AUDITORS"),
        ("17/2071", "ELECTRICAL ENGINEERS"),
    ];
    const STATES: &[&str] = &["CA", "ny", " TX", "NJ", "WA", "IL"];
    const STATUSES: &[&str] = &["CERTIFIED", "DENIED", "Certified", "WITHDRAWN"];

    let mut contents = String::from(CANONICAL_HEADER);
    contents.push('\n');

    for i in 0..row_count {
        let (soc_code, soc_name) = OCCUPATIONS[i % OCCUPATIONS.len()];
        contents.push_str(&format!(
            "I-200-{:05};{};{};{};{}\n",
            i,
            STATUSES[i % STATUSES.len()],
            soc_code,
            soc_name,
            STATES[(i / 3) % STATES.len()]
        ));
    }

    contents
}
