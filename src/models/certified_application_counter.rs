use crate::models::{AggregationResult, DelimitedRow, FieldIndexMap, SkipReason};
use crate::utils::{
    is_certified_case_status, normalize_soc_code, normalize_soc_name, normalize_worksite_state,
};
use log::{debug, info};
use std::convert::Infallible;

/// Accumulates the certified applications of one input, row by row.
///
/// Every row passes the same checks in the same order: field count, case status,
/// SOC code repair. Only rows that pass all of them touch the counters.
pub struct CertifiedApplicationCounter {
    field_index_map: FieldIndexMap,
    field_count: usize,
    result: AggregationResult,
    rows_seen: usize,
}

impl CertifiedApplicationCounter {
    /// Creates a counter for rows shaped like a header of `field_count` fields.
    pub fn new(field_index_map: FieldIndexMap, field_count: usize) -> Self {
        CertifiedApplicationCounter {
            field_index_map,
            field_count,
            result: AggregationResult::default(),
            rows_seen: 0,
        }
    }

    /// Processes one data row. A row that is left out is tallied under its
    /// `SkipReason`, which is also returned.
    pub fn process_record<R: DelimitedRow + ?Sized>(
        &mut self,
        row: &R,
    ) -> Result<(), SkipReason> {
        self.rows_seen += 1;

        if let Err(reason) = self.accumulate(row) {
            debug!("Skipping data row {}: {}", self.rows_seen, reason);
            self.result.skipped_rows.record(reason);
            return Err(reason);
        }

        Ok(())
    }

    pub fn finish(self) -> AggregationResult {
        info!(
            "Counted {} certified applications over {} data rows ({} skipped): {} SOC codes, {} states",
            self.result.total_certified,
            self.rows_seen,
            self.result.skipped_rows.total(),
            self.result.codes.len(),
            self.result.states.len()
        );

        self.result
    }

    fn accumulate<R: DelimitedRow + ?Sized>(&mut self, row: &R) -> Result<(), SkipReason> {
        if row.field_count() != self.field_count {
            return Err(SkipReason::FieldCountMismatch);
        }

        // Every resolved index lies within the header, so a row of header length has it
        let field = |index: usize| row.field(index).unwrap_or_default();
        let map = &self.field_index_map;

        if !is_certified_case_status(field(map.case_status)) {
            return Err(SkipReason::NotCertified);
        }

        let soc_code = normalize_soc_code(field(map.occupation_code))
            .ok_or(SkipReason::UnrepairableSocCode)?;
        let soc_name = normalize_soc_name(field(map.occupation_name));
        let worksite_state = normalize_worksite_state(field(map.worksite_state));

        self.result
            .name_variants
            .entry(soc_code.clone())
            .or_default()
            .increment(soc_name);
        self.result.codes.increment(soc_code);
        self.result.states.increment(worksite_state);
        self.result.total_certified += 1;

        Ok(())
    }
}

/// Runs a whole aggregation pass over rows read from a fallible source, each of which
/// should have `field_count` fields. The first read error ends the pass.
pub fn try_aggregate<I, R, E>(
    rows: I,
    field_count: usize,
    field_index_map: FieldIndexMap,
) -> Result<AggregationResult, E>
where
    I: IntoIterator<Item = Result<R, E>>,
    R: DelimitedRow,
{
    let mut counter = CertifiedApplicationCounter::new(field_index_map, field_count);

    for row in rows {
        // Skips are tallied on the result
        let _ = counter.process_record(&row?);
    }

    Ok(counter.finish())
}

/// Runs a whole aggregation pass over in-memory rows.
pub fn aggregate<I, R>(
    rows: I,
    field_count: usize,
    field_index_map: FieldIndexMap,
) -> AggregationResult
where
    I: IntoIterator<Item = R>,
    R: DelimitedRow,
{
    match try_aggregate(
        rows.into_iter().map(Ok::<R, Infallible>),
        field_count,
        field_index_map,
    ) {
        Ok(result) => result,
        Err(never) => match never {},
    }
}
