use num_traits::{Float, NumCast, ToPrimitive};
use ordered_float::PrimitiveFloat;

use alloc::vec::Vec;

use core::str::FromStr;

use crate::{
    FrequencyTable, Statistic, StatsError, Summary,
    helper::{median_of_slice, positions_of, sorted_copy, sum_of},
    parse_values,
};

/// The most frequent values of a series together with how often they occur.
///
/// Empty, with a repeat count of 0, when every value of the series is
/// distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct Modes<T> {
    values: Vec<T>,
    repeat_count: usize,
}

impl<T> Modes<T>
where
    T: Float + PrimitiveFloat,
{
    fn from_table(table: &FrequencyTable<T>) -> Self {
        if table.unique_count() == table.len() {
            return Self {
                values: Vec::new(),
                repeat_count: 0,
            };
        }
        let repeat_count = table.max_frequency();
        Self {
            values: table.values_with_frequency(repeat_count),
            repeat_count,
        }
    }

    /// Returns the modes in ascending order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns how often each mode occurs, 0 when there are no modes
    pub fn repeat_count(&self) -> usize {
        self.repeat_count
    }

    /// Returns whether the series has no modes
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Memoized results, one slot per statistic
#[derive(Debug, Clone)]
struct Register<T> {
    total: Option<T>,
    mean: Option<T>,
    median: Option<T>,
    sorted_median: Option<T>,
    range: Option<T>,
    variance: Option<T>,
    std_dev: Option<T>,
    max: Option<T>,
    max_indices: Option<Vec<usize>>,
    min: Option<T>,
    min_indices: Option<Vec<usize>>,
    modes: Option<Modes<T>>,
}

impl<T> Default for Register<T> {
    fn default() -> Self {
        Self {
            total: None,
            mean: None,
            median: None,
            sorted_median: None,
            range: None,
            variance: None,
            std_dev: None,
            max: None,
            max_indices: None,
            min: None,
            min_indices: None,
            modes: None,
        }
    }
}

/// A non-empty numeric series with lazily computed, memoized statistics.
///
/// The values are kept in the order they were supplied, alongside an
/// ascending copy made once at construction. Each statistic is computed the
/// first time it is asked for, together with whatever it depends on, and
/// stored; later calls return the stored result.
///
/// Non-finite results (overflow, NaN input) are stored like any other
/// value. Once an error is recorded with [`fail`](Self::fail), every
/// statistic returns that error instead of computing.
///
/// # Examples
///
/// ```
/// # use series_statistics::Series;
/// let mut series = Series::new(vec![4.0, 1.0, 3.0, 2.0]).unwrap();
/// assert_eq!(series.median(), Ok(2.0));
/// assert_eq!(series.sorted_median(), Ok(2.5));
/// assert_eq!(series.variance(), Ok(1.25));
///
/// assert!(Series::<f64>::new(vec![]).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Series<T> {
    /// Values in supplied order
    values: Vec<T>,
    /// Values in ascending order
    sorted: Vec<T>,
    /// Whether the element count is even
    is_even: bool,
    /// Element count divided by two
    middle_index: usize,
    /// First computation failure, if any
    error: Option<StatsError>,
    /// Computed results
    register: Register<T>,
}

impl<T> Series<T>
where
    T: Float + PrimitiveFloat + Default,
{
    /// Creates a series from the given values
    ///
    /// # Arguments
    ///
    /// * `values` - The values in their meaningful order
    ///
    /// # Returns
    ///
    /// * `Option<Self>` - The series, or `None` if `values` is empty
    pub fn new(values: Vec<T>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let len = values.len();
        tracing::debug!(len, "series created");
        Some(Self {
            sorted: sorted_copy(&values),
            values,
            is_even: len % 2 == 0,
            middle_index: len / 2,
            error: None,
            register: Register::default(),
        })
    }

    /// Creates a series from any primitive numbers, integers included
    ///
    /// # Arguments
    ///
    /// * `numbers` - The values in their meaningful order
    ///
    /// # Returns
    ///
    /// * `Option<Self>` - The series, or `None` if `numbers` is empty or a
    ///   number cannot be represented as `T`
    ///
    /// # Examples
    ///
    /// ```
    /// # use series_statistics::Series;
    /// let mut series = Series::<f64>::from_numbers([3_u8, 9, 3]).unwrap();
    /// assert_eq!(series.total(), Ok(15.0));
    ///
    /// let series = Series::<f64>::from_numbers([-2_i64, 7]).unwrap();
    /// assert_eq!(series.values(), &[-2.0, 7.0]);
    /// ```
    pub fn from_numbers<I, N>(numbers: I) -> Option<Self>
    where
        I: IntoIterator<Item = N>,
        N: ToPrimitive,
    {
        let values = numbers
            .into_iter()
            .map(<T as NumCast>::from)
            .collect::<Option<Vec<_>>>()?;
        Self::new(values)
    }

    /// Returns the number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the number of values is even
    pub const fn is_even(&self) -> bool {
        self.is_even
    }

    /// Returns the index the median is read from, `len / 2`
    pub const fn middle_index(&self) -> usize {
        self.middle_index
    }

    /// Returns the values in supplied order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the values in ascending order
    pub fn sorted_values(&self) -> &[T] {
        &self.sorted
    }

    /// Returns the recorded error, if a computation failed
    pub fn error(&self) -> Option<&StatsError> {
        self.error.as_ref()
    }

    /// Returns whether a computation failed
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    /// Checks that no computation has failed
    ///
    /// # Returns
    ///
    /// * `Result<(), StatsError>` - The recorded error, if any
    pub fn validate(&self) -> Result<(), StatsError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Returns whether `statistic` has been computed and stored
    pub fn is_computed(&self, statistic: Statistic) -> bool {
        let r = &self.register;
        match statistic {
            Statistic::Total => r.total.is_some(),
            Statistic::Mean => r.mean.is_some(),
            Statistic::Median => r.median.is_some(),
            Statistic::SortedMedian => r.sorted_median.is_some(),
            Statistic::Range => r.range.is_some(),
            Statistic::Variance => r.variance.is_some(),
            Statistic::StdDev => r.std_dev.is_some(),
            Statistic::Max => r.max.is_some(),
            Statistic::MaxIndices => r.max_indices.is_some(),
            Statistic::Min => r.min.is_some(),
            Statistic::MinIndices => r.min_indices.is_some(),
            Statistic::Modes => r.modes.is_some(),
        }
    }

    /// Records a failure; every later statistic request returns `err`
    ///
    /// Only the first recorded error is kept. Nothing in this crate records
    /// errors by itself: callers that reject some results, such as
    /// non-finite ones, use this to stop further computation.
    ///
    /// # Arguments
    ///
    /// * `err` - The failure to record
    ///
    /// # Returns
    ///
    /// * `StatsError` - The error now held by the series
    pub fn fail(&mut self, err: StatsError) -> StatsError {
        let err = self.error.get_or_insert(err).clone();
        tracing::warn!(%err, "series marked as failed");
        err
    }

    fn len_t(&self) -> T {
        <T as NumCast>::from(self.len()).unwrap_or_else(<T as Float>::nan)
    }

    /// Returns the sum of all values
    pub fn total(&mut self) -> Result<T, StatsError> {
        self.validate()?;
        if let Some(total) = self.register.total {
            return Ok(total);
        }

        let total = sum_of(self.values.iter().copied());
        self.register.total = Some(total);
        Ok(total)
    }

    /// Returns the arithmetic mean, computing the total first if needed
    pub fn mean(&mut self) -> Result<T, StatsError> {
        self.validate()?;
        if let Some(mean) = self.register.mean {
            return Ok(mean);
        }

        let total = self.total()?;
        let mean = total / self.len_t();
        self.register.mean = Some(mean);
        Ok(mean)
    }

    /// Returns the population variance, the mean of the squared deviations
    /// from the mean (divisor `len`, not `len - 1`)
    pub fn variance(&mut self) -> Result<T, StatsError> {
        self.validate()?;
        if let Some(variance) = self.register.variance {
            return Ok(variance);
        }

        let mean = self.mean()?;
        let sum_sq = sum_of(self.values.iter().map(|&v| (v - mean) * (v - mean)));
        let variance = sum_sq / self.len_t();
        self.register.variance = Some(variance);
        Ok(variance)
    }

    /// Returns the population standard deviation
    pub fn std_dev(&mut self) -> Result<T, StatsError> {
        self.validate()?;
        if let Some(std_dev) = self.register.std_dev {
            return Ok(std_dev);
        }

        let std_dev = Float::sqrt(self.variance()?);
        self.register.std_dev = Some(std_dev);
        Ok(std_dev)
    }

    /// Returns the largest value
    pub fn max(&mut self) -> Result<T, StatsError> {
        self.validate()?;
        let max = *self
            .register
            .max
            .get_or_insert(self.sorted[self.sorted.len() - 1]);
        Ok(max)
    }

    /// Returns the largest value and every position it occupies in the
    /// supplied order
    ///
    /// # Returns
    ///
    /// * `Result<(T, &[usize]), StatsError>` - The maximum and its indices
    pub fn max_with_indices(&mut self) -> Result<(T, &[usize]), StatsError> {
        let max = self.max()?;
        let values = &self.values;
        let indices: &[usize] = self.register.max_indices.get_or_insert_with(|| {
            if values.len() == 1 {
                vec![0]
            } else {
                positions_of(values, max)
            }
        });
        Ok((max, indices))
    }

    /// Returns the smallest value
    pub fn min(&mut self) -> Result<T, StatsError> {
        self.validate()?;
        let min = *self.register.min.get_or_insert(self.sorted[0]);
        Ok(min)
    }

    /// Returns the smallest value and every position it occupies in the
    /// supplied order
    ///
    /// # Returns
    ///
    /// * `Result<(T, &[usize]), StatsError>` - The minimum and its indices
    pub fn min_with_indices(&mut self) -> Result<(T, &[usize]), StatsError> {
        let min = self.min()?;
        let values = &self.values;
        let indices: &[usize] = self.register.min_indices.get_or_insert_with(|| {
            if values.len() == 1 {
                vec![0]
            } else {
                positions_of(values, min)
            }
        });
        Ok((min, indices))
    }

    /// Returns the largest value minus the smallest
    pub fn range(&mut self) -> Result<T, StatsError> {
        self.validate()?;
        if let Some(range) = self.register.range {
            return Ok(range);
        }

        let range = self.max()? - self.min()?;
        self.register.range = Some(range);
        Ok(range)
    }

    /// Returns the median of the values in their supplied order
    ///
    /// The value at [`middle_index`](Self::middle_index) for an odd count,
    /// otherwise the mean of the values at `middle_index` and
    /// `middle_index - 1`. No sorting takes place.
    pub fn median(&mut self) -> Result<T, StatsError> {
        self.validate()?;
        let values = &self.values;
        Ok(*self
            .register
            .median
            .get_or_insert_with(|| median_of_slice(values)))
    }

    /// Returns the median of the ascending values
    pub fn sorted_median(&mut self) -> Result<T, StatsError> {
        self.validate()?;
        let sorted = &self.sorted;
        Ok(*self
            .register
            .sorted_median
            .get_or_insert_with(|| median_of_slice(sorted)))
    }

    /// Returns the most frequent values and their repeat count
    ///
    /// # Examples
    ///
    /// ```
    /// # use series_statistics::Series;
    /// let mut series = Series::new(vec![1.0, 1.0, 2.0, 2.0, 3.0]).unwrap();
    /// let modes = series.modes().unwrap();
    /// assert_eq!(modes.values(), &[1.0, 2.0]);
    /// assert_eq!(modes.repeat_count(), 2);
    /// ```
    pub fn modes(&mut self) -> Result<&Modes<T>, StatsError> {
        self.validate()?;
        let values = &self.values;
        Ok(self.register.modes.get_or_insert_with(|| {
            Modes::from_table(&values.iter().copied().collect::<FrequencyTable<T>>())
        }))
    }

    /// Computes every statistic
    ///
    /// Runs total, standard deviation, variance, range, max with indices,
    /// min with indices, sorted median, median, mean and modes in that
    /// order; already stored results are reused.
    ///
    /// # Returns
    ///
    /// * `Result<Summary<'_, T>, StatsError>` - All results, or the first
    ///   error recorded in the series
    pub fn compute_all(&mut self) -> Result<Summary<'_, T>, StatsError> {
        self.validate()?;

        let total = self.total()?;
        let std_dev = self.std_dev()?;
        let variance = self.variance()?;
        let range = self.range()?;
        let (max, max_indices) = self.max_with_indices().map(|(v, ix)| (v, ix.to_vec()))?;
        let (min, min_indices) = self.min_with_indices().map(|(v, ix)| (v, ix.to_vec()))?;
        let sorted_median = self.sorted_median()?;
        let median = self.median()?;
        let mean = self.mean()?;
        let modes = self.modes()?.clone();

        tracing::debug!(len = self.len(), "computed all statistics");
        Ok(Summary {
            data: &self.values,
            total,
            mean,
            median,
            sorted_median,
            max,
            max_indices,
            min,
            min_indices,
            range,
            variance,
            std_dev,
            modes: modes.values,
            mode_repeat_count: modes.repeat_count,
        })
    }
}

impl<T> FromStr for Series<T>
where
    T: Float + PrimitiveFloat + Default + FromStr,
{
    type Err = StatsError;

    /// Parses a comma and/or whitespace separated line of numbers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_values(s)?).ok_or(StatsError::NoValues)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn series(values: &[f64]) -> Series<f64> {
        Series::new(values.to_vec()).unwrap()
    }

    #[test]
    fn empty_series_is_not_created() {
        assert!(Series::<f64>::new(Vec::new()).is_none());
        assert!(Series::<f64>::from_numbers(Vec::<i32>::new()).is_none());
        assert_eq!("".parse::<Series<f64>>().unwrap_err(), StatsError::NoValues);
    }

    #[test]
    fn construction_works() {
        let s = series(&[3.0, 1.0, 2.0, 5.0]);
        assert_eq!(s.len(), 4);
        assert!(s.is_even());
        assert_eq!(s.middle_index(), 2);
        assert_eq!(s.values(), &[3.0, 1.0, 2.0, 5.0]);
        assert_eq!(s.sorted_values(), &[1.0, 2.0, 3.0, 5.0]);

        let s = series(&[3.0, 1.0, 2.0]);
        assert!(!s.is_even());
        assert_eq!(s.middle_index(), 1);
    }

    #[test]
    fn from_numbers_works() {
        let s = Series::<f64>::from_numbers([1_u64, 2, 3]).unwrap();
        assert_eq!(s.values(), &[1.0, 2.0, 3.0]);
        let s = Series::<f64>::from_numbers([-1_i8, 0, 1]).unwrap();
        assert_eq!(s.values(), &[-1.0, 0.0, 1.0]);
        let s = Series::<f64>::from_numbers([7_usize]).unwrap();
        assert_eq!(s.values(), &[7.0]);
    }

    #[test]
    fn from_str_works() {
        let s: Series<f64> = "1, 2 3.5".parse().unwrap();
        assert_eq!(s.values(), &[1.0, 2.0, 3.5]);
        assert!(matches!(
            "1, b".parse::<Series<f64>>(),
            Err(StatsError::InvalidNumber { position: 2, .. })
        ));
    }

    #[test]
    fn total_is_order_independent() {
        let mut forward = series(&[1.5, 2.0, -3.25, 10.0]);
        let mut backward = series(&[10.0, -3.25, 2.0, 1.5]);
        assert_eq!(forward.total(), Ok(10.25));
        assert_eq!(backward.total(), Ok(10.25));
    }

    #[test]
    fn mean_works() {
        let mut s = series(&[1.0, 2.0, 4.0]);
        let total = s.total().unwrap();
        assert_eq!(s.mean().unwrap(), total / 3.0);
        assert_approx_eq!(s.mean().unwrap(), 7.0 / 3.0);
    }

    #[test]
    fn mean_computes_total_on_demand() {
        let mut s = series(&[2.0, 4.0]);
        assert!(!s.is_computed(Statistic::Total));
        assert_eq!(s.mean(), Ok(3.0));
        assert!(s.is_computed(Statistic::Total));
        assert!(s.is_computed(Statistic::Mean));
    }

    #[test]
    fn variance_uses_population_divisor() {
        let mut s = series(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_approx_eq!(s.variance().unwrap(), 4.0);
        assert_approx_eq!(s.std_dev().unwrap(), 2.0);

        let mut s = series(&[1.0, 2.0, 3.0, 4.0]);
        assert_approx_eq!(s.variance().unwrap(), 1.25);
    }

    #[test]
    fn std_dev_computes_chain_on_demand() {
        let mut s = series(&[1.0, 1.0, 2.0, 2.0, 3.0]);
        assert_approx_eq!(s.std_dev().unwrap(), 0.56_f64.sqrt());
        assert!(s.is_computed(Statistic::Variance));
        assert!(s.is_computed(Statistic::Mean));
        assert!(s.is_computed(Statistic::Total));
        assert!(!s.is_computed(Statistic::Range));
    }

    #[test]
    fn constant_series_has_no_spread() {
        let mut s = series(&[2.5, 2.5, 2.5]);
        assert_eq!(s.variance(), Ok(0.0));
        assert_eq!(s.std_dev(), Ok(0.0));
        assert_eq!(s.range(), Ok(0.0));
    }

    #[test]
    fn range_works() {
        let mut s = series(&[3.0, -2.0, 8.5, 1.0]);
        assert_eq!(s.range(), Ok(10.5));
        assert_eq!(s.range().unwrap(), s.max().unwrap() - s.min().unwrap());
    }

    #[test]
    fn extremes_with_indices_work() {
        let mut s = series(&[5.0, 1.0, 5.0, 3.0, 1.0, 2.0]);
        assert_eq!(s.max_with_indices().unwrap(), (5.0, &[0_usize, 2][..]));
        assert_eq!(s.min_with_indices().unwrap(), (1.0, &[1_usize, 4][..]));
        assert!(s.is_computed(Statistic::Max));
        assert!(s.is_computed(Statistic::Min));
        assert!(!s.is_computed(Statistic::Range));
    }

    #[test]
    fn min_marks_only_min() {
        let mut s = series(&[2.0, 1.0]);
        s.min().unwrap();
        assert!(s.is_computed(Statistic::Min));
        assert!(!s.is_computed(Statistic::Max));
    }

    #[test]
    fn single_value_series_works() {
        let mut s = series(&[-7.5]);
        assert_eq!(s.median(), Ok(-7.5));
        assert_eq!(s.sorted_median(), Ok(-7.5));
        assert_eq!(s.max_with_indices().unwrap(), (-7.5, &[0_usize][..]));
        assert_eq!(s.min_with_indices().unwrap(), (-7.5, &[0_usize][..]));
        assert_eq!(s.range(), Ok(0.0));
        assert_eq!(s.variance(), Ok(0.0));
        let modes = s.modes().unwrap();
        assert!(modes.is_empty());
        assert_eq!(modes.repeat_count(), 0);
    }

    #[test]
    fn odd_median_views_work() {
        let mut s = series(&[3.0, 1.0, 2.0]);
        assert_eq!(s.median(), Ok(1.0));
        assert_eq!(s.sorted_median(), Ok(2.0));
    }

    #[test]
    fn even_median_views_work() {
        let mut s = series(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(s.median(), Ok(2.0));
        assert_eq!(s.sorted_median(), Ok(2.5));
    }

    #[test]
    fn modes_work() {
        let mut s = series(&[2.0, 1.0, 2.0, 1.0, 3.0]);
        let modes = s.modes().unwrap();
        assert_eq!(modes.values(), &[1.0, 2.0]);
        assert_eq!(modes.repeat_count(), 2);

        let mut s = series(&[9.0, 4.0, 9.0, 9.0]);
        let modes = s.modes().unwrap();
        assert_eq!(modes.values(), &[9.0]);
        assert_eq!(modes.repeat_count(), 3);
    }

    #[test]
    fn distinct_values_have_no_modes() {
        let mut s = series(&[1.0, 2.0, 3.0]);
        let modes = s.modes().unwrap();
        assert!(modes.values().is_empty());
        assert_eq!(modes.repeat_count(), 0);
    }

    #[test]
    fn repeated_calls_return_stored_results() {
        let mut s = series(&[0.1, 0.7, 0.2, 0.9]);
        let first = s.std_dev().unwrap();
        assert!(s.is_computed(Statistic::StdDev));
        assert_eq!(s.std_dev().unwrap(), first);
        assert!(s.is_computed(Statistic::StdDev));

        let first = s.modes().unwrap().clone();
        assert_eq!(s.modes().unwrap(), &first);
    }

    #[test]
    fn compute_all_works() {
        let mut s = series(&[1.0, 1.0, 2.0, 2.0, 3.0]);
        let summary = s.compute_all().unwrap();
        assert_eq!(summary.data, &[1.0, 1.0, 2.0, 2.0, 3.0]);
        assert_eq!(summary.total, 9.0);
        assert_approx_eq!(summary.mean, 1.8);
        assert_eq!(summary.median, 2.0);
        assert_eq!(summary.sorted_median, 2.0);
        assert_eq!(summary.max, 3.0);
        assert_eq!(summary.max_indices, vec![4]);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.min_indices, vec![0, 1]);
        assert_eq!(summary.range, 2.0);
        assert_approx_eq!(summary.variance, 0.56);
        assert_approx_eq!(summary.std_dev, 0.56_f64.sqrt());
        assert_eq!(summary.modes, vec![1.0, 2.0]);
        assert_eq!(summary.mode_repeat_count, 2);
    }

    #[test]
    fn compute_all_fills_every_slot() {
        let mut s = series(&[6.0, 2.0]);
        s.compute_all().unwrap();
        [
            Statistic::Total,
            Statistic::Mean,
            Statistic::Median,
            Statistic::SortedMedian,
            Statistic::Range,
            Statistic::Variance,
            Statistic::StdDev,
            Statistic::Max,
            Statistic::MaxIndices,
            Statistic::Min,
            Statistic::MinIndices,
            Statistic::Modes,
        ]
        .into_iter()
        .for_each(|stat| assert!(s.is_computed(stat), "{stat} not computed"));
    }

    #[test]
    fn overflow_is_kept_as_a_value() {
        let mut s = series(&[1.0e308, 1.0e308]);
        let summary = s.compute_all().unwrap();
        assert_eq!(summary.total, f64::INFINITY);
        assert_eq!(summary.mean, f64::INFINITY);
        assert_eq!(summary.max, 1.0e308);
        assert!(!s.failed());
    }

    #[test]
    fn infinite_range_is_kept_as_a_value() {
        let mut s = series(&[f64::MAX, -f64::MAX]);
        assert_eq!(s.range(), Ok(f64::INFINITY));
        assert_eq!(s.total(), Ok(0.0));
        assert!(!s.failed());
    }

    #[test]
    fn nan_input_is_kept_as_a_value() {
        let mut s = Series::<f64>::from_numbers([1.0, f64::NAN]).unwrap();
        let summary = s.compute_all().unwrap();
        assert!(summary.total.is_nan());
        assert_eq!(summary.min, 1.0);
        assert!(!s.failed());
    }

    #[test]
    fn recorded_error_short_circuits() {
        let mut s = series(&[3.0, 1.0, 2.0]);
        assert_eq!(s.total(), Ok(6.0));
        assert!(s.validate().is_ok());

        let err = StatsError::NonFinite {
            statistic: Statistic::Variance,
        };
        assert_eq!(s.fail(err.clone()), err);
        assert!(s.failed());
        assert_eq!(s.error(), Some(&err));
        assert_eq!(s.validate(), Err(err.clone()));

        assert_eq!(s.total(), Err(err.clone()));
        assert_eq!(s.max(), Err(err.clone()));
        assert_eq!(s.median(), Err(err.clone()));
        assert_eq!(s.modes().unwrap_err(), err);
        assert_eq!(s.compute_all().unwrap_err(), err);
        assert!(s.is_computed(Statistic::Total));
        assert!(!s.is_computed(Statistic::Max));
    }

    #[test]
    fn first_recorded_error_wins() {
        let mut s = series(&[1.0]);
        s.fail(StatsError::NoValues);
        let kept = s.fail(StatsError::NonFinite {
            statistic: Statistic::Total,
        });
        assert_eq!(kept, StatsError::NoValues);
        assert_eq!(s.mean(), Err(StatsError::NoValues));
    }
}
