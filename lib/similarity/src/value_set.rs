//! Distinct-value sets for the set-based metrics
//!
//! Ochiai, Jaccard and Dice ignore positions and compare the sets of distinct
//! values present in each vector. Membership is exact floating point equality
//! with no tolerance: `0.0` and `-0.0` are one element, and a NaN equals
//! nothing, itself included. Each NaN is therefore its own element and never
//! part of an intersection.

use ahash::AHashSet;
use ordered_float::OrderedFloat;

/// The distinct values of a vector
#[derive(Debug, Clone, Default)]
pub struct ValueSet {
    values: AHashSet<OrderedFloat<f64>>,
    /// NaNs are kept out of `values`, where `OrderedFloat` would merge them
    nan_count: usize,
}

impl ValueSet {
    pub fn from_slice(data: &[f64]) -> Self {
        data.iter().copied().collect()
    }

    /// Number of distinct values, each NaN counted separately
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len() + self.nan_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Always false for NaN
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        !value.is_nan() && self.values.contains(&OrderedFloat(value))
    }

    #[inline]
    pub fn insert(&mut self, value: f64) {
        if value.is_nan() {
            self.nan_count += 1;
        } else {
            self.values.insert(OrderedFloat(value));
        }
    }

    /// |self ∩ other|, NaNs never included
    pub fn intersection_len(&self, other: &ValueSet) -> usize {
        // Probe the larger set with the smaller one
        let (small, large) = if self.values.len() <= other.values.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .values
            .iter()
            .filter(|v| large.values.contains(*v))
            .count()
    }

    /// |self ∪ other|
    pub fn union_len(&self, other: &ValueSet) -> usize {
        self.len() + other.len() - self.intersection_len(other)
    }
}

impl FromIterator<f64> for ValueSet {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut set = Self::default();
        for value in iter {
            set.insert(value);
        }
        set
    }
}
