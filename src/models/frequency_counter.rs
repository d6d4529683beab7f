use crate::types::Frequency;
use std::collections::HashMap;
use std::hash::Hash;

/// A frequency counter which remembers the order in which keys were first observed.
///
/// Lookups go through `key_map`, which maps a key to its slot in `entries`; new keys are
/// appended, so iterating `entries` always yields keys in first-observation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyCounter<K: Eq + Hash + Clone> {
    key_map: HashMap<K, usize>,
    entries: Vec<(K, Frequency)>,
}

impl<K: Eq + Hash + Clone> FrequencyCounter<K> {
    /// Creates an empty FrequencyCounter
    pub fn new() -> Self {
        FrequencyCounter {
            key_map: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Adds one occurrence of `key`, inserting it if this is the first time it is seen,
    /// and returns the updated frequency
    pub fn increment(&mut self, key: K) -> Frequency {
        if let Some(&slot) = self.key_map.get(&key) {
            self.entries[slot].1 += 1;
            self.entries[slot].1
        } else {
            let slot = self.entries.len();
            self.key_map.insert(key.clone(), slot);
            self.entries.push((key, 1));
            1
        }
    }

    /// Gets the frequency for a key, or None if the key was never observed
    pub fn get(&self, key: &K) -> Option<Frequency> {
        self.key_map.get(key).map(|&slot| self.entries[slot].1)
    }

    /// Iterates over `(key, frequency)` pairs in first-observation order
    pub fn iter(&self) -> impl Iterator<Item = (&K, Frequency)> {
        self.entries.iter().map(|(key, frequency)| (key, *frequency))
    }

    /// Returns the key with the highest frequency. Ties go to the key observed first.
    pub fn most_common(&self) -> Option<&K> {
        let mut best: Option<&(K, Frequency)> = None;

        for entry in &self.entries {
            if best.map_or(true, |(_, best_frequency)| entry.1 > *best_frequency) {
                best = Some(entry);
            }
        }

        best.map(|(key, _)| key)
    }

    /// Gets the number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash + Clone> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut counter = FrequencyCounter::new();

        for key in keys {
            counter.increment(key);
        }

        counter
    }
}
