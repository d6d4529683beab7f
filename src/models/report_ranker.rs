use crate::models::{AggregationResult, FrequencyCounter, RankedEntry};
use crate::types::Frequency;
use crate::utils::{calculate_percentage, select_top_k, sort_results};
use std::hash::Hash;

/// Builds a top-`k` report out of a frequency counter.
///
/// The `k` most frequent keys are selected first (see `select_top_k` for how ties at
/// the boundary are handled), each key is turned into its display label by
/// `label_for`, and the entries are then ordered by count descending and label
/// ascending. Percentages are taken against `total`.
pub fn rank_top<K, F>(
    counter: &FrequencyCounter<K>,
    k: usize,
    label_for: F,
    total: Frequency,
) -> Vec<RankedEntry>
where
    K: Eq + Hash + Clone,
    F: Fn(&K) -> String,
{
    let labelled: Vec<(String, Frequency)> = select_top_k(counter, k)
        .into_iter()
        .map(|(key, count)| (label_for(key), count))
        .collect();

    sort_results(labelled)
        .into_iter()
        .map(|(label, count)| RankedEntry {
            label,
            count,
            percentage: calculate_percentage(count, total),
        })
        .collect()
}

/// Top `k` occupations, labelled with the most common name spelling of each SOC code.
pub fn rank_top_occupations(result: &AggregationResult, k: usize) -> Vec<RankedEntry> {
    rank_top(
        &result.codes,
        k,
        |soc_code| {
            result
                .canonical_soc_name(soc_code)
                .cloned()
                .unwrap_or_else(|| soc_code.clone())
        },
        result.total_certified,
    )
}

/// Top `k` worksite states.
pub fn rank_top_states(result: &AggregationResult, k: usize) -> Vec<RankedEntry> {
    rank_top(
        &result.states,
        k,
        |state| state.clone(),
        result.total_certified,
    )
}
