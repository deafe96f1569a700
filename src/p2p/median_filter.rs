//! Sliding-window median
//!
//! Keeps the most recent `capacity` samples in arrival order plus a sorted
//! copy for median lookup.

use std::collections::VecDeque;

/// Types the filter can average without overflowing
pub trait Sample: Copy + PartialOrd {
    /// Mean of `a` and `b`, rounded toward zero for integers
    fn midpoint(a: Self, b: Self) -> Self;
}

// the sum is taken in a wider type, so the mean always fits back
macro_rules! impl_integer_sample {
    ($($t:ty => $wide:ty),*) => {
        $(impl Sample for $t {
            fn midpoint(a: Self, b: Self) -> Self {
                ((a as $wide + b as $wide) / 2) as $t
            }
        })*
    };
}

impl_integer_sample!(i32 => i64, i64 => i128, u32 => u64, u64 => u128);

impl Sample for f64 {
    fn midpoint(a: Self, b: Self) -> Self {
        a / 2.0 + b / 2.0
    }
}

/// Bounded FIFO window reporting the median of its samples
#[derive(Debug, Clone)]
pub struct MedianFilter<T> {
    capacity: usize,
    samples: VecDeque<T>,
    sorted: Vec<T>,
}

impl<T: Sample> MedianFilter<T> {
    /// Create a filter seeded with `initial`; capacity is at least one
    pub fn new(capacity: usize, initial: T) -> Self {
        let capacity = capacity.max(1);
        let mut samples = VecDeque::with_capacity(capacity);
        samples.push_back(initial);

        Self {
            capacity,
            samples,
            sorted: vec![initial],
        }
    }

    /// Add a sample, evicting the oldest one when the window is full
    pub fn input(&mut self, value: T) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);

        self.sorted = self.samples.iter().copied().collect();
        self.sorted
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    }

    /// Middle sample, or the mean of the two middle samples for even counts
    pub fn median(&self) -> T {
        let n = self.sorted.len();
        if n % 2 == 1 {
            self.sorted[n / 2]
        } else {
            T::midpoint(self.sorted[n / 2 - 1], self.sorted[n / 2])
        }
    }

    /// Samples in ascending order
    pub fn sorted(&self) -> &[T] {
        &self.sorted
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Never true; the filter always holds its seed or later samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
