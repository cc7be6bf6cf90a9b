use alloc::string::String;

use core::fmt;

/// Names a single statistic held in a [`Series`](crate::Series) register.
///
/// Used to ask whether a statistic has been computed and to say which
/// computation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    /// Sum of all values
    Total,
    /// Arithmetic mean
    Mean,
    /// Median over the values in their supplied order
    Median,
    /// Median over the ascending values
    SortedMedian,
    /// Maximum minus minimum
    Range,
    /// Population variance
    Variance,
    /// Population standard deviation
    StdDev,
    /// Largest value
    Max,
    /// Positions of the largest value
    MaxIndices,
    /// Smallest value
    Min,
    /// Positions of the smallest value
    MinIndices,
    /// Most frequent values and their repeat count
    Modes,
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Statistic::Total => "total",
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::SortedMedian => "sorted median",
            Statistic::Range => "range",
            Statistic::Variance => "variance",
            Statistic::StdDev => "standard deviation",
            Statistic::Max => "max",
            Statistic::MaxIndices => "max indices",
            Statistic::Min => "min",
            Statistic::MinIndices => "min indices",
            Statistic::Modes => "modes",
        };
        f.write_str(name)
    }
}

/// Errors produced while parsing input or computing statistics
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// A token of the input line is not a decimal number
    #[error("invalid number {token:?} at position {position}")]
    InvalidNumber {
        /// The offending token, as typed
        token: String,
        /// 1-based position of the token in the line
        position: usize,
    },

    /// There is nothing to compute statistics over
    #[error("no values to compute statistics over")]
    NoValues,

    /// A statistic was rejected for not being a finite number
    #[error("{statistic} is not a finite number")]
    NonFinite {
        /// The statistic that failed
        statistic: Statistic,
    },
}
