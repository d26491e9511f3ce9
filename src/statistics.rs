//! # Statistics Engine
//!
//! Owns the consolidated dataset and derives the descriptive statistics
//! reported at the end of a session: a merge-sorted listing, the arithmetic
//! mean, the median and the mode.
//!
//! ## Empty input
//!
//! Every aggregate returns `0.0` for an empty dataset instead of failing.
//!
//! ## Mode
//!
//! When several values tie for the highest occurrence count, the reported
//! mode is the arithmetic mean of all tied values.

use std::collections::BTreeMap;
use std::ops::Range;

use log::debug;
use ordered_float::OrderedFloat;

/// Sorts `values[range]` into non-decreasing order with a top-down merge sort.
///
/// The range is half-open. A range holding one element or fewer is already
/// sorted and returns immediately.
///
/// # Arguments
///
/// * `values` - Slice holding the range to sort
/// * `range` - Half-open index range inside `values`
///
/// # Panics
///
/// Panics if `range` reaches past the end of `values`.
pub fn merge_sort_range(values: &mut [f64], range: Range<usize>) {
    let Range { start, end } = range;
    if start + 1 >= end {
        return;
    }

    // Split at the midpoint and sort each half
    let mid = start + (end - start) / 2;
    merge_sort_range(values, start..mid);
    merge_sort_range(values, mid..end);
    merge(values, start, mid, end);
}

/// Sorts the whole slice with [`merge_sort_range`].
pub fn merge_sort(values: &mut [f64]) {
    merge_sort_range(values, 0..values.len());
}

/// Merges the sorted runs `values[start..mid]` and `values[mid..end]`.
fn merge(values: &mut [f64], start: usize, mid: usize, end: usize) {
    let mut merged = Vec::with_capacity(end - start);
    let (mut left, mut right) = (start, mid);

    // Take the smaller head; ties come from the left run
    while left < mid && right < end {
        if values[left] <= values[right] {
            merged.push(values[left]);
            left += 1;
        } else {
            merged.push(values[right]);
            right += 1;
        }
    }
    // One run is exhausted; copy what is left of the other
    merged.extend_from_slice(&values[left..mid]);
    merged.extend_from_slice(&values[right..end]);

    values[start..end].copy_from_slice(&merged);
}

/// Arithmetic mean of `values`, or `0.0` when empty.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of an already sorted slice, or `0.0` when empty.
///
/// For an even count this is the mean of the two middle elements.
pub fn median_of_sorted(sorted: &[f64]) -> f64 {
    let len = sorted.len();
    if len == 0 {
        return 0.0;
    }

    if len % 2 == 0 {
        (sorted[len / 2 - 1] + sorted[len / 2]) / 2.0
    } else {
        sorted[len / 2]
    }
}

/// Builds the ascending value → occurrence count map used by [`mode`].
pub fn frequencies(values: &[f64]) -> BTreeMap<OrderedFloat<f64>, usize> {
    let mut counts = BTreeMap::new();
    for &value in values {
        *counts.entry(OrderedFloat(value)).or_insert(0) += 1;
    }
    counts
}

/// Mode of `values`, or `0.0` when empty.
///
/// Values are scanned in ascending order. A strictly higher count restarts
/// the candidate set, an equal count joins it. The result is the mean of the
/// final candidate set.
pub fn mode(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    // Scan in ascending value order, tracking the highest count seen
    let mut max_count = 0;
    let mut candidates: Vec<f64> = Vec::new();
    for (value, count) in frequencies(values) {
        if count > max_count {
            max_count = count;
            candidates.clear();
            candidates.push(value.into_inner());
        } else if count == max_count {
            candidates.push(value.into_inner());
        }
    }

    // Ties are resolved by averaging
    mean(&candidates)
}

/// Snapshot of the statistics computed for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    /// Every dataset value in non-decreasing order
    pub sorted_values: Vec<f64>,
}

impl Summary {
    pub fn count(&self) -> usize {
        self.sorted_values.len()
    }
}

/// The consolidated values of every accepted source.
///
/// `sorted` records whether `values` is currently in non-decreasing order.
/// Appending clears it; [`Dataset::sort`] sets it and is a no-op while it
/// holds.
#[derive(Debug, Clone)]
pub struct Dataset {
    values: Vec<f64>,
    sorted: bool,
}

impl Dataset {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            sorted: true,
        }
    }

    /// Appends the values of one accepted source, keeping their order.
    pub fn extend_from_slice(&mut self, values: &[f64]) {
        if values.is_empty() {
            return;
        }
        self.values.extend_from_slice(values);
        self.sorted = false;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Current backing sequence, sorted or not.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Merge-sorts the backing sequence unless it is already sorted.
    pub fn sort(&mut self) {
        if self.sorted {
            return;
        }
        debug!("Merge-sorting {} values", self.values.len());
        merge_sort(&mut self.values);
        self.sorted = true;
    }

    /// Sorts if needed and returns the values in non-decreasing order.
    pub fn sorted_values(&mut self) -> &[f64] {
        self.sort();
        &self.values
    }

    pub fn mean(&self) -> f64 {
        mean(&self.values)
    }

    /// Sorts the dataset as a side effect, then takes the median.
    pub fn median(&mut self) -> f64 {
        median_of_sorted(self.sorted_values())
    }

    pub fn mode(&self) -> f64 {
        mode(&self.values)
    }

    /// Sorts the dataset and computes every statistic at once.
    pub fn summarize(&mut self) -> Summary {
        let median = self.median();
        Summary {
            mean: self.mean(),
            median,
            mode: self.mode(),
            sorted_values: self.values.clone(),
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<f64>> for Dataset {
    fn from(values: Vec<f64>) -> Self {
        let mut dataset = Dataset::new();
        dataset.extend_from_slice(&values);
        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn merge_sort_orders_values_with_duplicates() {
        let mut values = vec![3.0, -1.5, 2.0, 3.0, 0.0, -1.5, 10.0];
        merge_sort(&mut values);
        assert_eq!(values, vec![-1.5, -1.5, 0.0, 2.0, 3.0, 3.0, 10.0]);
    }

    #[test]
    fn merge_sort_handles_trivial_slices() {
        let mut empty: Vec<f64> = Vec::new();
        merge_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![4.2];
        merge_sort(&mut single);
        assert_eq!(single, vec![4.2]);
    }

    #[test]
    fn merge_sort_range_leaves_outside_untouched() {
        let mut values = vec![9.0, 5.0, 4.0, 3.0, 0.0];
        merge_sort_range(&mut values, 1..4);
        assert_eq!(values, vec![9.0, 3.0, 4.0, 5.0, 0.0]);

        // Empty and single-element ranges are no-ops
        merge_sort_range(&mut values, 2..2);
        merge_sort_range(&mut values, 4..5);
        assert_eq!(values, vec![9.0, 3.0, 4.0, 5.0, 0.0]);
    }

    #[test]
    fn empty_dataset_aggregates_are_zero() {
        let mut dataset = Dataset::new();
        assert_eq!(dataset.mean(), 0.0);
        assert_eq!(dataset.median(), 0.0);
        assert_eq!(dataset.mode(), 0.0);
    }

    #[test]
    fn median_for_odd_and_even_counts() {
        let mut odd = Dataset::from(vec![7.0, 1.0, 3.0]);
        assert_close(odd.median(), 3.0);

        let mut even = Dataset::from(vec![4.0, 1.0, 3.0, 2.0]);
        assert_close(even.median(), 2.5);
    }

    #[test]
    fn median_leaves_dataset_sorted() {
        let mut dataset = Dataset::from(vec![2.0, 9.0, 1.0]);
        assert!(!dataset.is_sorted());
        dataset.median();
        assert!(dataset.is_sorted());
        assert_eq!(dataset.values(), &[1.0, 2.0, 9.0]);
    }

    #[test]
    fn appending_clears_sorted_flag() {
        let mut dataset = Dataset::from(vec![1.0, 2.0]);
        dataset.sort();
        assert!(dataset.is_sorted());

        dataset.extend_from_slice(&[0.5]);
        assert!(!dataset.is_sorted());
        assert_eq!(dataset.sorted_values(), &[0.5, 1.0, 2.0]);

        // Appending nothing keeps the flag
        dataset.extend_from_slice(&[]);
        assert!(dataset.is_sorted());
    }

    #[test]
    fn mode_averages_two_way_tie() {
        assert_close(mode(&[1.0, 1.0, 2.0, 2.0, 3.0]), 1.5);
    }

    #[test]
    fn mode_single_winner() {
        assert_close(mode(&[5.0, 5.0, 5.0, 2.0, 2.0]), 5.0);
    }

    #[test]
    fn mode_merges_non_adjacent_ties() {
        // 1 and 9 both appear twice, 5 only once
        assert_close(mode(&[9.0, 1.0, 5.0, 1.0, 9.0]), 5.0);
    }

    #[test]
    fn mode_of_all_distinct_is_mean() {
        let values = [4.0, 2.0, 9.0];
        assert_close(mode(&values), mean(&values));
    }

    #[test]
    fn frequencies_are_ascending() {
        let counts = frequencies(&[3.0, 1.0, 3.0, 2.0]);
        let keys: Vec<f64> = counts.keys().map(|key| key.into_inner()).collect();
        assert_eq!(keys, vec![1.0, 2.0, 3.0]);
        assert_eq!(counts[&OrderedFloat(3.0)], 2);
    }

    #[test]
    fn mean_and_mode_do_not_reorder() {
        let dataset = Dataset::from(vec![3.0, 1.0, 2.0]);
        dataset.mean();
        dataset.mode();
        assert_eq!(dataset.values(), &[3.0, 1.0, 2.0]);
    }

    #[test]
    fn three_source_scenario() {
        let mut dataset = Dataset::new();
        dataset.extend_from_slice(&[3.0, 1.0, 2.0]);
        dataset.extend_from_slice(&[5.0]);
        dataset.extend_from_slice(&[4.0, 4.0]);

        let summary = dataset.summarize();
        assert_eq!(summary.sorted_values, vec![1.0, 2.0, 3.0, 4.0, 4.0, 5.0]);
        assert_eq!(summary.count(), 6);
        assert_close(summary.mean, 19.0 / 6.0);
        assert_close(summary.median, 3.5);
        assert_close(summary.mode, 4.0);
    }
}
