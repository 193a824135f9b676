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

//! Seeded pseudo-random generation of datetime ranges for tests and
//! benchmarks.

mod config;
mod err;

pub use config::{RangeGenConfig, RangeGenConfigBuilder};
pub use err::{InvalidProbabilityError, RangeGenConfigBuildError};

use crate::range::DatetimeRange;
use dtrange_core::{
    time::{TimeDelta, TimePoint},
    TimeVariable,
};
use num_traits::SaturatingMul;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use rand_distr::{uniform::SampleUniform, Distribution, Uniform};

/// Deterministic generator of datetime ranges.
///
/// Two generators built from equal configurations produce identical
/// sequences. Ranges are sampled start-first: the stop is derived from a
/// target length, saturating at the domain edges, so the realized length may
/// fall short of the target near `T::MIN`/`T::MAX`.
pub struct RangeGenerator<T>
where
    T: TimeVariable + SampleUniform + SaturatingMul,
{
    config: RangeGenConfig<T>,
    rng: SmallRng,
    start_distribution: Uniform<T>,
    step_distribution: Uniform<T>,
    length_distribution: Uniform<usize>,
}

impl<T> From<RangeGenConfig<T>> for RangeGenerator<T>
where
    T: TimeVariable + SampleUniform + SaturatingMul,
{
    fn from(config: RangeGenConfig<T>) -> Self {
        Self::new(config)
    }
}

impl<T> RangeGenerator<T>
where
    T: TimeVariable + SampleUniform + SaturatingMul,
{
    pub fn new(config: RangeGenConfig<T>) -> Self {
        let seed = config.seed();
        Self {
            start_distribution: Uniform::new_inclusive(
                config.start_min.value(),
                config.start_max.value(),
            )
            .expect("valid [start_min, start_max]"),
            step_distribution: Uniform::new_inclusive(
                config.min_step.value(),
                config.max_step.value(),
            )
            .expect("valid [min_step, max_step]"),
            length_distribution: Uniform::new_inclusive(config.min_len, config.max_len)
                .expect("valid [min_len, max_len]"),
            rng: SmallRng::seed_from_u64(seed),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &RangeGenConfig<T> {
        &self.config
    }

    /// Samples a single range within the configured bounds.
    pub fn sample_range(&mut self) -> DatetimeRange<T> {
        let start = TimePoint::new(self.start_distribution.sample(&mut self.rng));
        let step = self.sample_step();
        let target_len = self.length_distribution.sample(&mut self.rng);
        self.realize(start, step, target_len)
    }

    /// Samples two ranges that are guaranteed to intersect without error:
    /// same direction, one step an integer multiple of the other, and the
    /// second start shifted from the first by whole steps.
    pub fn sample_compatible_pair(&mut self) -> (DatetimeRange<T>, DatetimeRange<T>) {
        let first = self.sample_range();
        let factor = T::from(self.rng.random_range(1..=3u32)).expect("small factor fits T");
        let step = first.step().checked_mul(factor).unwrap_or(first.step());
        let offset_steps = T::from(self.rng.random_range(0..=4u32)).expect("small offset fits T");
        let shift = first.step().saturating_mul(offset_steps);
        let start = first.start().checked_add(shift).unwrap_or(first.start());
        let target_len = self.length_distribution.sample(&mut self.rng);
        let second = self.realize(start, step, target_len);
        (first, second)
    }

    /// Picks a uniformly random element of `range`, `None` when empty.
    pub fn sample_member(&mut self, range: &DatetimeRange<T>) -> Option<TimePoint<T>> {
        if range.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..range.len());
        range.get(index as isize).ok()
    }

    fn sample_step(&mut self) -> TimeDelta<T> {
        let magnitude = TimeDelta::new(self.step_distribution.sample(&mut self.rng));
        if self.rng.random_bool(self.config.descending_probability) {
            // Magnitudes are positive, so negation cannot overflow.
            -magnitude
        } else {
            magnitude
        }
    }

    fn realize(
        &self,
        start: TimePoint<T>,
        step: TimeDelta<T>,
        target_len: usize,
    ) -> DatetimeRange<T> {
        let count = T::from(target_len).unwrap_or_else(T::max_value);
        let span = step.saturating_mul(count);
        let stop = start.checked_add(span).unwrap_or(start);
        DatetimeRange::new(start, stop, step).expect("sampled step magnitude is at least one")
    }
}
