use num_traits::Float;
use ordered_float::{OrderedFloat, PrimitiveFloat};

use alloc::vec::Vec;

use crate::Kbn;

/// Returns the median of a slice taken in its current order
///
/// The middle element for odd lengths, the mean of the two middle elements
/// otherwise. Passing an ascending slice gives the usual median.
///
/// # Arguments
///
/// * `s` - A non-empty slice
///
/// # Returns
///
/// * `T` - The median
#[inline]
pub fn median_of_slice<T: Float>(s: &[T]) -> T {
    let len = s.len();
    let mid = len / 2;
    let _2 = T::one() + T::one();
    if len % 2 == 0 {
        (s[mid] + s[mid - 1]) / _2
    } else {
        s[mid]
    }
}

/// Returns the compensated (Kahan-Babuska-Neumaier) sum of the values
///
/// When the sum overflows, the compensation term turns into NaN; the plain
/// sum is returned instead so the result keeps the sign of the infinity.
///
/// # Arguments
///
/// * `values` - The values to add up
///
/// # Returns
///
/// * `T` - The sum
pub fn sum_of<T, I>(values: I) -> T
where
    T: Float + Default,
    I: Iterator<Item = T> + Clone,
{
    let mut sum = Kbn::<T>::default();
    values.clone().for_each(|v| sum += v);
    let total = sum.total();
    if total.is_nan() {
        values.fold(T::zero(), |acc, v| acc + v)
    } else {
        total
    }
}

/// Returns an ascending copy of the values, NaN last
///
/// # Arguments
///
/// * `values` - The values to sort
///
/// # Returns
///
/// * `Vec<T>` - The sorted copy
pub fn sorted_copy<T: Float + PrimitiveFloat>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort_by_key(|&v| OrderedFloat(v));
    sorted
}

/// Returns every index at which `target` occurs
///
/// # Arguments
///
/// * `values` - The values to scan
/// * `target` - The value to look for
///
/// # Returns
///
/// * `Vec<usize>` - Matching positions, ascending
pub fn positions_of<T: Float>(values: &[T], target: T) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v == target)
        .map(|(i, _)| i)
        .collect()
}
