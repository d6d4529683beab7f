mod constants;
pub mod models;
pub use constants::{
    CERTIFIED_CASE_STATUS, DEFAULT_REPORT_CONFIG, FIELD_HEADER_NAMES, TOP_OCCUPATIONS_TITLE,
    TOP_STATES_TITLE,
};
pub use models::{
    aggregate, rank_top, rank_top_occupations, rank_top_states, try_aggregate, AggregationResult,
    CertifiedApplicationCounter, DelimitedRow, Error, FieldIndexMap, FrequencyCounter,
    LogicalField, RankedEntry, ReportConfig, SkipReason, SkippedRows,
};
pub mod types;
pub mod utils;
pub use types::{Frequency, SocCode, SocName, WorksiteState};

use csv::ReaderBuilder;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Cursor, Read};
use std::path::Path;
use utils::write_report;

/// The two rankings produced for one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Reports {
    pub occupations: Vec<RankedEntry>,
    pub states: Vec<RankedEntry>,
}

/// Counts the certified applications of a `;` delimited input whose first line is
/// the header.
pub fn count_certified_applications<R: Read>(reader: R) -> Result<AggregationResult, Error> {
    count_certified_applications_with_custom_config(reader, DEFAULT_REPORT_CONFIG)
}

pub fn count_certified_applications_with_custom_config<R: Read>(
    reader: R,
    config: ReportConfig,
) -> Result<AggregationResult, Error> {
    // Rows of the wrong length must reach the field count check rather than fail the read
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = csv_reader.records();

    // An empty input has no rows to count, which yields header-only reports
    let header = match records.next() {
        Some(header) => header?,
        None => {
            info!("Input is empty; nothing to count");
            return Ok(AggregationResult::default());
        }
    };
    let header_fields: Vec<&str> = header.iter().collect();
    let field_index_map = FieldIndexMap::resolve(&header_fields)?;

    Ok(try_aggregate(records, header.len(), field_index_map)?)
}

pub fn count_certified_applications_from_str(text: &str) -> Result<AggregationResult, Error> {
    count_certified_applications(Cursor::new(text))
}

/// Ranks both dimensions of an aggregation.
pub fn rank_reports(result: &AggregationResult, top_k: usize) -> Reports {
    Reports {
        occupations: rank_top_occupations(result, top_k),
        states: rank_top_states(result, top_k),
    }
}

/// Reads `input_path`, then writes the top occupations and top states reports.
///
/// Nothing is written unless the whole input was read and its header resolved.
pub fn generate_reports<P, Q, S>(
    input_path: P,
    occupations_output_path: Q,
    states_output_path: S,
) -> Result<Reports, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: AsRef<Path>,
{
    generate_reports_with_custom_config(
        input_path,
        occupations_output_path,
        states_output_path,
        DEFAULT_REPORT_CONFIG,
    )
}

pub fn generate_reports_with_custom_config<P, Q, S>(
    input_path: P,
    occupations_output_path: Q,
    states_output_path: S,
    config: ReportConfig,
) -> Result<Reports, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: AsRef<Path>,
{
    info!("Reading {}", input_path.as_ref().display());
    let input = File::open(input_path)?;
    let result = count_certified_applications_with_custom_config(input, config)?;

    let reports = rank_reports(&result, config.top_k);

    write_report(
        BufWriter::new(File::create(occupations_output_path.as_ref())?),
        TOP_OCCUPATIONS_TITLE,
        &reports.occupations,
    )?;
    info!(
        "Wrote {} occupations to {}",
        reports.occupations.len(),
        occupations_output_path.as_ref().display()
    );

    write_report(
        BufWriter::new(File::create(states_output_path.as_ref())?),
        TOP_STATES_TITLE,
        &reports.states,
    )?;
    info!(
        "Wrote {} states to {}",
        reports.states.len(),
        states_output_path.as_ref().display()
    );

    Ok(reports)
}
