use crate::types::Frequency;

/// Sorts `(label, frequency)` pairs into report order.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two labels have the same frequency, sorts by label in
///   ascending lexicographical order for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use h1b_counting::utils::sort_results;
///
/// let sorted = sort_results(vec![
///     ("NY".to_string(), 10),
///     ("TX".to_string(), 15),
///     ("CA".to_string(), 10),
/// ]);
/// assert_eq!(sorted, vec![
///     ("TX".to_string(), 15),
///     ("CA".to_string(), 10),
///     ("NY".to_string(), 10)
/// ]);
/// ```
pub fn sort_results(mut results: Vec<(String, Frequency)>) -> Vec<(String, Frequency)> {
    results.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by label (ascending)
    });

    results
}
