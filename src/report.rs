use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use core::fmt::Display;

use crate::Summary;

/// Column after which report lines are wrapped by default
pub const DEFAULT_WIDTH: usize = 40;

/// Digits after the decimal point by default
pub const DEFAULT_PRECISION: usize = 6;

/// Renders a [`Summary`] as a human-readable report.
///
/// One statistic per line, in a fixed order. Scalar statistics are printed
/// in fixed-point notation; the data, index and mode lists are wrapped with
/// [`wrap_line`].
///
/// # Examples
///
/// ```
/// # use series_statistics::{Report, Series};
/// let mut series = Series::new(vec![2.0, 4.0]).unwrap();
/// let summary = series.compute_all().unwrap();
/// let report = Report::new().with_precision(1).render(&summary);
/// assert!(report.starts_with("Data: [2 4]\nTotal: 6.0\nMean: 3.0\n"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    width: usize,
    precision: usize,
}

impl Report {
    /// Creates a report layout with the default width and precision
    pub const fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Sets the column after which list lines wrap
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the number of digits after the decimal point
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Returns the wrap column
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of digits after the decimal point
    pub const fn precision(&self) -> usize {
        self.precision
    }

    /// Renders the summary, one statistic per line, without a trailing
    /// newline
    ///
    /// # Arguments
    ///
    /// * `summary` - The computed statistics
    ///
    /// # Returns
    ///
    /// * `String` - The report
    pub fn render<T: Display>(&self, summary: &Summary<'_, T>) -> String {
        let w = self.width;
        let p = self.precision;
        // index and mode lines also count the newline that precedes them
        let lines = [
            wrap_line(&format!("Data: {}", list(summary.data)), w),
            format!("Total: {:.p$}", summary.total),
            format!("Mean: {:.p$}", summary.mean),
            format!("Median: {:.p$}", summary.median),
            format!("Sorted Median: {:.p$}", summary.sorted_median),
            format!("Max: {:.p$}", summary.max),
            wrap_from(&format!("Max Indices: {}", list(&summary.max_indices)), w, 1),
            format!("Min: {:.p$}", summary.min),
            wrap_from(&format!("Min Indices: {}", list(&summary.min_indices)), w, 1),
            format!("Variance: {:.p$}", summary.variance),
            format!("Standard Deviation: {:.p$}", summary.std_dev),
            wrap_from(&format!("Modes: {}", list(&summary.modes)), w, 1),
            format!("Mode Repeat Count: {}", summary.mode_repeat_count),
        ];
        lines.join("\n")
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

// `[a b c]`
fn list<D: Display>(items: &[D]) -> String {
    let items = items.iter().map(ToString::to_string).collect::<Vec<_>>();
    format!("[{}]", items.join(" "))
}

/// Breaks a line at whitespace once it runs past `width` characters
///
/// Walks the line counting characters. At a whitespace character, if the
/// count exceeds `width`, a newline and a two-space indent are inserted
/// before it and the count restarts at 2; the whitespace itself is kept.
/// Lines of at most `width` characters are returned unchanged.
///
/// # Arguments
///
/// * `line` - A single line of text
/// * `width` - The column after which to break
///
/// # Returns
///
/// * `String` - The wrapped text
///
/// # Examples
///
/// ```
/// # use series_statistics::wrap_line;
/// assert_eq!(wrap_line("aaaa bbbb cccc dddd eeee", 10), "aaaa bbbb cccc\n   dddd eeee");
/// assert_eq!(wrap_line("short", 10), "short");
/// ```
pub fn wrap_line(line: &str, width: usize) -> String {
    wrap_from(line, width, 0)
}

// `column` is the number of characters already counted before `line`
fn wrap_from(line: &str, width: usize, mut column: usize) -> String {
    if line.chars().count() + column <= width {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + 8);
    for c in line.chars() {
        if c.is_whitespace() && column > width {
            out.push_str("\n  ");
            column = 2;
        }
        out.push(c);
        column += 1;
    }
    out
}
