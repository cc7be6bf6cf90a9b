use ahash::RandomState;
use hashbrown::HashMap;
use num_traits::Float;
use ordered_float::{OrderedFloat, PrimitiveFloat};

use alloc::vec::Vec;

/// Occurrence counts per distinct value of a series.
///
/// Values are keyed through [`OrderedFloat`], so `-0.0` and `0.0` count as
/// one value. The highest count seen so far is tracked on every push.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    /// Maps each value to its frequency count
    freq: HashMap<OrderedFloat<T>, usize, RandomState>,
    /// Highest frequency of any value
    max_freq: usize,
    /// Number of values pushed
    len: usize,
}

impl<T> FrequencyTable<T>
where
    T: Float + PrimitiveFloat,
{
    /// Creates an empty table
    pub fn new() -> Self {
        Self {
            freq: HashMap::with_hasher(RandomState::default()),
            max_freq: 0,
            len: 0,
        }
    }

    /// Counts one more occurrence of `value`
    ///
    /// # Arguments
    ///
    /// * `value` - The value to count
    pub fn push(&mut self, value: T) {
        let count = self.freq.entry(OrderedFloat(value)).or_insert(0);
        *count += 1;
        self.max_freq = self.max_freq.max(*count);
        self.len += 1;
    }

    /// Returns how often `value` was pushed
    pub fn frequency_of(&self, value: T) -> usize {
        self.freq.get(&OrderedFloat(value)).copied().unwrap_or(0)
    }

    /// Returns the highest frequency of any value, 0 when empty
    pub fn max_frequency(&self) -> usize {
        self.max_freq
    }

    /// Returns the number of distinct values
    pub fn unique_count(&self) -> usize {
        self.freq.len()
    }

    /// Returns the number of values pushed
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether nothing was pushed yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns every value seen exactly `count` times, in ascending order
    ///
    /// # Arguments
    ///
    /// * `count` - The frequency to match
    ///
    /// # Returns
    ///
    /// * `Vec<T>` - Matching values, ascending; empty if none match
    pub fn values_with_frequency(&self, count: usize) -> Vec<T> {
        let mut values = self
            .freq
            .iter()
            .filter(|&(_, &c)| c == count)
            .map(|(&v, _)| v)
            .collect::<Vec<_>>();
        values.sort_unstable();
        values.into_iter().map(|v| v.0).collect()
    }
}

impl<T> Default for FrequencyTable<T>
where
    T: Float + PrimitiveFloat,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for FrequencyTable<T>
where
    T: Float + PrimitiveFloat,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        iter.into_iter().for_each(|v| table.push(v));
        table
    }
}
