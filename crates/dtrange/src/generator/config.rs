// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::cmp::Ordering;
use std::fmt::Display;

use dtrange_core::{
    time::{TimeDelta, TimePoint},
    TimeVariable,
};
use num_traits::NumCast;
use rand::Rng;

use super::err::{InvalidProbabilityError, RangeGenConfigBuildError};

/// Configuration for seeded pseudo-random range generation.
///
/// Start points are drawn uniformly from `[start_min, start_max]`, target
/// lengths from `[min_len, max_len]` and step magnitudes from
/// `[min_step, max_step]` (always positive; the sign is decided separately
/// with `descending_probability`).
#[derive(Debug, Clone, PartialEq)]
pub struct RangeGenConfig<T: TimeVariable> {
    pub(crate) start_min: TimePoint<T>,
    pub(crate) start_max: TimePoint<T>,
    pub(crate) min_len: usize,
    pub(crate) max_len: usize,
    pub(crate) min_step: TimeDelta<T>,
    pub(crate) max_step: TimeDelta<T>,
    pub(crate) descending_probability: f64,
    pub(crate) seed: u64,
}

impl<T: TimeVariable + NumCast> Default for RangeGenConfig<T> {
    fn default() -> Self {
        #[inline]
        fn to_t<T: TimeVariable + NumCast>(v: i64) -> T {
            NumCast::from(v).unwrap()
        }

        Self {
            start_min: TimePoint::new(to_t(-10_000)),
            start_max: TimePoint::new(to_t(10_000)),
            min_len: 0,
            max_len: 64,
            min_step: TimeDelta::new(to_t(1)),
            max_step: TimeDelta::new(to_t(10)),
            descending_probability: 0.5,
            seed: 42,
        }
    }
}

impl<T: TimeVariable> RangeGenConfig<T> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        unord_start_min: TimePoint<T>,
        unord_start_max: TimePoint<T>,
        unord_min_len: usize,
        unord_max_len: usize,
        unord_min_step: TimeDelta<T>,
        unord_max_step: TimeDelta<T>,
        descending_probability: f64,
        seed: u64,
    ) -> Result<Self, RangeGenConfigBuildError<T>> {
        let (start_min, start_max) = match unord_start_min.cmp(&unord_start_max) {
            Ordering::Greater => (unord_start_max, unord_start_min),
            _ => (unord_start_min, unord_start_max),
        };
        let (min_len, max_len) = if unord_min_len > unord_max_len {
            (unord_max_len, unord_min_len)
        } else {
            (unord_min_len, unord_max_len)
        };
        let (min_step, max_step) = match unord_min_step.cmp(&unord_max_step) {
            Ordering::Greater => (unord_max_step, unord_min_step),
            _ => (unord_min_step, unord_max_step),
        };

        if !min_step.is_positive() {
            return Err(RangeGenConfigBuildError::NonPositiveStepMagnitude(min_step));
        }
        if !(0.0..=1.0).contains(&descending_probability) {
            return Err(InvalidProbabilityError::new(descending_probability).into());
        }

        Ok(Self {
            start_min,
            start_max,
            min_len,
            max_len,
            min_step,
            max_step,
            descending_probability,
            seed,
        })
    }

    #[inline]
    pub fn start_min(&self) -> TimePoint<T> {
        self.start_min
    }
    #[inline]
    pub fn start_max(&self) -> TimePoint<T> {
        self.start_max
    }
    #[inline]
    pub fn min_len(&self) -> usize {
        self.min_len
    }
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }
    #[inline]
    pub fn min_step(&self) -> TimeDelta<T> {
        self.min_step
    }
    #[inline]
    pub fn max_step(&self) -> TimeDelta<T> {
        self.max_step
    }
    #[inline]
    pub fn descending_probability(&self) -> f64 {
        self.descending_probability
    }
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<T: TimeVariable> Display for RangeGenConfig<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RangeGenConfig {{ \
             start_min: {}, start_max: {}, min_len: {}, max_len: {}, \
             min_step: {}, max_step: {}, descending_probability: {:.4}, seed: {} \
             }}",
            self.start_min,
            self.start_max,
            self.min_len,
            self.max_len,
            self.min_step,
            self.max_step,
            self.descending_probability,
            self.seed
        )
    }
}

/// Builder for `RangeGenConfig`.
pub struct RangeGenConfigBuilder<T: TimeVariable> {
    start_min: TimePoint<T>,
    start_max: TimePoint<T>,
    min_len: usize,
    max_len: usize,
    min_step: TimeDelta<T>,
    max_step: TimeDelta<T>,
    descending_probability: f64,
    seed: u64,
}

impl<T: TimeVariable + NumCast> Default for RangeGenConfigBuilder<T> {
    fn default() -> Self {
        let defaults = RangeGenConfig::default();
        Self {
            start_min: defaults.start_min,
            start_max: defaults.start_max,
            min_len: defaults.min_len,
            max_len: defaults.max_len,
            min_step: defaults.min_step,
            max_step: defaults.max_step,
            descending_probability: defaults.descending_probability,
            seed: rand::rng().random(),
        }
    }
}

impl<T: TimeVariable + NumCast> RangeGenConfigBuilder<T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_bounds(mut self, min: TimePoint<T>, max: TimePoint<T>) -> Self {
        self.start_min = min;
        self.start_max = max;
        self
    }
    pub fn len_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_len = min;
        self.max_len = max;
        self
    }
    pub fn step_bounds(mut self, min: TimeDelta<T>, max: TimeDelta<T>) -> Self {
        self.min_step = min;
        self.max_step = max;
        self
    }
    #[inline]
    pub fn descending_probability(mut self, v: f64) -> Self {
        self.descending_probability = v;
        self
    }
    pub fn random_seed(mut self) -> Self {
        self.seed = rand::rng().random();
        self
    }
    #[inline]
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    pub fn build(self) -> Result<RangeGenConfig<T>, RangeGenConfigBuildError<T>> {
        RangeGenConfig::new(
            self.start_min,
            self.start_max,
            self.min_len,
            self.max_len,
            self.min_step,
            self.max_step,
            self.descending_probability,
            self.seed,
        )
    }
}
