use alloc::vec::Vec;

use core::fmt;

use crate::Report;

/// Every statistic of a series, as produced by
/// [`Series::compute_all`](crate::Series::compute_all).
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<'a, T> {
    /// The values in supplied order
    pub data: &'a [T],
    /// Sum of all values
    pub total: T,
    /// Arithmetic mean
    pub mean: T,
    /// Median over the supplied order
    pub median: T,
    /// Median over the ascending values
    pub sorted_median: T,
    /// Largest value
    pub max: T,
    /// Positions of the largest value
    pub max_indices: Vec<usize>,
    /// Smallest value
    pub min: T,
    /// Positions of the smallest value
    pub min_indices: Vec<usize>,
    /// Largest minus smallest value
    pub range: T,
    /// Population variance
    pub variance: T,
    /// Population standard deviation
    pub std_dev: T,
    /// Most frequent values, ascending; empty when all values are distinct
    pub modes: Vec<T>,
    /// How often each mode occurs, 0 when there are no modes
    pub mode_repeat_count: usize,
}

impl<T: fmt::Display> fmt::Display for Summary<'_, T> {
    /// Renders the summary with the default [`Report`] layout
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Report::new().render(self))
    }
}
