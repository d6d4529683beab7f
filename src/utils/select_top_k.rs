use crate::models::FrequencyCounter;
use crate::types::Frequency;
use std::hash::Hash;

/// Picks the `k` keys with the highest frequencies.
///
/// Candidates are ordered by frequency (descending) and then by first observation, so
/// when several keys tie for the last slot the one seen earliest in the input is kept.
/// The returned order is the selection order, not the final report order.
pub fn select_top_k<K: Eq + Hash + Clone>(
    counter: &FrequencyCounter<K>,
    k: usize,
) -> Vec<(&K, Frequency)> {
    let mut candidates: Vec<(&K, Frequency)> = counter.iter().collect();

    // Stable sort keeps first-observation order among equal frequencies
    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    candidates.truncate(k);

    candidates
}
