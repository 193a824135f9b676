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

//! An arithmetic progression of time points with range-like and set-like
//! semantics.
//!
//! [`DatetimeRange`] has a `start` (inclusive), a `stop` (exclusive) and a
//! non-zero `step`, like the classic integer range, and additionally supports
//! set algebra on a best-effort basis: not every pair of ranges can be
//! intersected or merged, but membership testing and all combining operations
//! run in O(1) without materializing elements.

use crate::err::{
    IncompatibleDirectionError, IncompatibleStepError, IndexOutOfRangeError, RangeError,
};
use dtrange_core::{
    time::{TimeDelta, TimePoint},
    TimeVariable,
};
use std::cmp::{max, min};
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

/// Traversal direction of a range, derived from the sign of its step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeDirection {
    Ascending,
    Descending,
}

impl RangeDirection {
    #[inline]
    fn of<T: TimeVariable>(step: TimeDelta<T>) -> Self {
        if step.is_positive() {
            RangeDirection::Ascending
        } else {
            RangeDirection::Descending
        }
    }
}

impl Display for RangeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeDirection::Ascending => write!(f, "ascending"),
            RangeDirection::Descending => write!(f, "descending"),
        }
    }
}

/// An immutable arithmetic progression of time points.
///
/// The progression starts at `start`, advances by `step` and stops strictly
/// before `stop`. A negative step makes the range descending; `stop` is never
/// a member. The number of elements is `max(0, floor((stop - start) / step))`,
/// computed once at construction.
///
/// Two ranges are equal when they contain exactly the same time points in the
/// same order, which tolerates different `stop` values describing the same
/// realized sequence.
///
/// # Examples
///
/// ```
/// use dtrange::range::DatetimeRange;
/// use dtrange_core::time::{TimeDelta, TimePoint};
///
/// let range = DatetimeRange::new(TimePoint::new(0i64), TimePoint::new(10), TimeDelta::new(2))?;
/// assert_eq!(range.len(), 5);
/// assert!(range.contains(TimePoint::new(6)));
/// assert!(!range.contains(TimePoint::new(10)));
/// # Ok::<(), dtrange::err::RangeError<i64>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DatetimeRange<T: TimeVariable> {
    start: TimePoint<T>,
    stop: TimePoint<T>,
    step: TimeDelta<T>,
    len: usize,
    direction: RangeDirection,
}

impl<T: TimeVariable> DatetimeRange<T> {
    /// Creates a range from `start` (inclusive) to `stop` (exclusive) with
    /// the given step.
    ///
    /// Any combination of boundaries is accepted; boundaries ordered against
    /// the step's direction simply yield an empty range. Fails with
    /// [`RangeError::InvalidStep`] when `step` is zero and with
    /// [`RangeError::ArithmeticOverflow`] when `stop - start` leaves the tick
    /// domain.
    pub fn new(
        start: TimePoint<T>,
        stop: TimePoint<T>,
        step: TimeDelta<T>,
    ) -> Result<Self, RangeError<T>> {
        if step.is_zero() {
            return Err(RangeError::InvalidStep);
        }
        let span = stop
            .checked_delta_since(start)
            .ok_or(RangeError::ArithmeticOverflow)?;
        let steps = span
            .div_floor(step)
            .ok_or(RangeError::ArithmeticOverflow)?;
        let len = if steps <= T::zero() {
            0
        } else {
            steps.to_usize().ok_or(RangeError::ArithmeticOverflow)?
        };
        Ok(Self {
            start,
            stop,
            step,
            len,
            direction: RangeDirection::of(step),
        })
    }

    /// Left boundary (inclusive) of the range.
    #[inline]
    pub fn start(&self) -> TimePoint<T> {
        self.start
    }

    /// Right boundary (exclusive) of the range.
    #[inline]
    pub fn stop(&self) -> TimePoint<T> {
        self.stop
    }

    /// Increment between two consecutive elements.
    #[inline]
    pub fn step(&self) -> TimeDelta<T> {
        self.step
    }

    /// Number of elements in the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the range ascends or descends, derived from the step's sign.
    #[inline]
    pub fn direction(&self) -> RangeDirection {
        self.direction
    }

    /// The final element of the range, `None` when the range is empty.
    #[inline]
    pub fn last(&self) -> Option<TimePoint<T>> {
        if self.len == 0 {
            None
        } else {
            Some(self.last_element())
        }
    }

    // Caller must ensure the range is non-empty. The result lies strictly
    // between start and stop, so the arithmetic cannot overflow.
    fn last_element(&self) -> TimePoint<T> {
        let i = T::from(self.len - 1).expect("length was derived from a T-valued quotient");
        self.start + self.step * i
    }

    /// Returns the element at `index`, counting from the end for negative
    /// indices (`-1` is the last element).
    ///
    /// Fails with [`RangeError::IndexOutOfRange`] outside `[-len, len)`.
    pub fn get(&self, index: isize) -> Result<TimePoint<T>, RangeError<T>> {
        let len = self.len as isize;
        let resolved = if index < 0 { index + len } else { index };
        if resolved < 0 || resolved >= len {
            return Err(IndexOutOfRangeError::new(index, self.len).into());
        }
        let i = T::from(resolved).ok_or(RangeError::ArithmeticOverflow)?;
        let offset = self
            .step
            .checked_mul(i)
            .ok_or(RangeError::ArithmeticOverflow)?;
        self.start
            .checked_add(offset)
            .ok_or(RangeError::ArithmeticOverflow)
    }

    /// A lazy, restartable traversal of the range's elements.
    ///
    /// Each call yields an independent iterator; the range holds no cursor.
    #[inline]
    pub fn iter(&self) -> DatetimeRangeIter<T> {
        DatetimeRangeIter {
            next: self.start,
            step: self.step,
            remaining: self.len,
        }
    }

    /// The same elements in the opposite traversal order.
    ///
    /// For a non-empty range the result starts at the original's last element
    /// and steps by `-step` down to (and including) the original `start`.
    /// Fails with [`RangeError::ArithmeticOverflow`] when `start - step`
    /// leaves the tick domain.
    pub fn reversed(&self) -> Result<Self, RangeError<T>> {
        let step = self
            .step
            .checked_neg()
            .ok_or(RangeError::ArithmeticOverflow)?;
        let stop = self
            .start
            .checked_sub(self.step)
            .ok_or(RangeError::ArithmeticOverflow)?;
        let start = if self.len == 0 {
            stop
        } else {
            self.last_element()
        };
        Self::new(start, stop, step)
    }

    /// O(1) membership test.
    ///
    /// `at` is a member when it lies inside the half-open interval appropriate
    /// to the direction and its offset from `start` is an exact multiple of
    /// the step. `stop` is never a member; an empty range contains nothing.
    pub fn contains(&self, at: TimePoint<T>) -> bool {
        let inside = match self.direction {
            RangeDirection::Ascending => self.start <= at && at < self.stop,
            RangeDirection::Descending => self.start >= at && at > self.stop,
        };
        if !inside {
            return false;
        }
        // `at` lies between start and stop, so the offset fits the domain.
        (at - self.start).is_multiple_of(self.step)
    }

    // Orders two steps by magnitude, largest first. Safe at T::MIN.
    #[inline]
    fn by_magnitude(a: TimeDelta<T>, b: TimeDelta<T>) -> (TimeDelta<T>, TimeDelta<T>) {
        if a.abs_cmp(b).is_lt() {
            (b, a)
        } else {
            (a, b)
        }
    }

    /// Intersection of two like-direction ranges.
    ///
    /// Fails with [`RangeError::IncompatibleDirection`] when one range
    /// ascends and the other descends, and with
    /// [`RangeError::IncompatibleStep`] unless one step is an exact multiple
    /// of the other. The result covers the tighter-bounding interval at the
    /// coarser step and may be empty, which is a valid outcome rather than an
    /// error.
    pub fn intersect(&self, other: &Self) -> Result<Self, RangeError<T>> {
        if self.direction != other.direction {
            return Err(IncompatibleDirectionError::new(self.direction, other.direction).into());
        }
        let (coarse, fine) = Self::by_magnitude(self.step, other.step);
        if !coarse.is_multiple_of(fine) {
            return Err(IncompatibleStepError::new(self.step, other.step).into());
        }
        match self.direction {
            RangeDirection::Ascending => Self::new(
                max(self.start, other.start),
                min(self.stop, other.stop),
                max(self.step, other.step),
            ),
            RangeDirection::Descending => Self::new(
                min(self.start, other.start),
                max(self.stop, other.stop),
                min(self.step, other.step),
            ),
        }
    }

    /// Whether the two ranges share no element.
    ///
    /// Structurally incompatible ranges (different directions, or steps that
    /// are not multiples of one another) cannot share elements and are
    /// reported as disjoint rather than as an error.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        match self.intersect(other) {
            Ok(common) => common.is_empty(),
            Err(_) => true,
        }
    }

    /// Merges two ranges into one covering both.
    ///
    /// Fails with [`RangeError::IncompatibleStep`] unless one step magnitude
    /// evenly divides the other. Ranges with different steps must share both
    /// boundaries exactly ([`RangeError::MisalignedBoundaries`] otherwise)
    /// and merge to the finer step; ranges with equal steps must overlap or
    /// touch ([`RangeError::NonContiguous`] otherwise) and merge to the
    /// combined span.
    pub fn union(&self, other: &Self) -> Result<Self, RangeError<T>> {
        let (coarse, fine) = Self::by_magnitude(self.step, other.step);
        if !coarse.is_multiple_of(fine) {
            return Err(IncompatibleStepError::new(self.step, other.step).into());
        }
        if self.step != other.step {
            if self.start != other.start || self.stop != other.stop {
                return Err(RangeError::MisalignedBoundaries);
            }
            return Self::new(self.start, self.stop, fine);
        }
        let contiguous = match self.direction {
            RangeDirection::Ascending => {
                min(self.stop, other.stop) >= max(self.start, other.start)
            }
            RangeDirection::Descending => {
                min(self.start, other.start) >= max(self.stop, other.stop)
            }
        };
        if !contiguous {
            return Err(RangeError::NonContiguous);
        }
        match self.direction {
            RangeDirection::Ascending => Self::new(
                min(self.start, other.start),
                max(self.stop, other.stop),
                self.step,
            ),
            RangeDirection::Descending => Self::new(
                max(self.start, other.start),
                min(self.stop, other.stop),
                self.step,
            ),
        }
    }

    /// Subset-or-equal: whether every element of `self` is in `other`.
    ///
    /// Defined as `(self ∪ other) == other`. Pairs whose union is undefined
    /// are not subsets, so this predicate is total and never fails. The
    /// containment relation is a partial order; no strict comparison
    /// operators are derived from it.
    pub fn is_subset_or_equal(&self, other: &Self) -> bool {
        match self.union(other) {
            Ok(merged) => merged == *other,
            Err(_) => false,
        }
    }

    /// Removes the elements of `other` from `self`.
    ///
    /// The subtrahend is first clipped to `self`; a disjoint subtrahend
    /// leaves `self` unchanged. With equal steps, only a prefix or suffix can
    /// be removed ([`RangeError::WouldCreateSparseRange`] for a middle
    /// chunk). With different steps, a single-element overlap at either edge
    /// is peeled off; larger overlaps are supported only when the clipped
    /// subtrahend's step is exactly double this range's step and the
    /// boundaries align ([`RangeError::MisalignedSubtraction`] otherwise).
    pub fn difference(&self, other: &Self) -> Result<Self, RangeError<T>> {
        let clipped = other.intersect(self)?;
        if clipped.is_empty() {
            return Ok(*self);
        }

        if self.step == clipped.step {
            if self.start == clipped.start {
                return Self::new(clipped.stop, self.stop, self.step);
            }
            if self.stop == clipped.stop {
                return Self::new(self.start, clipped.start, self.step);
            }
            return Err(RangeError::WouldCreateSparseRange);
        }

        // A non-empty overlap implies self is non-empty.
        let tail = self.last_element();
        let clipped_tail = clipped.last_element();

        if self.start == clipped_tail {
            let start = self
                .start
                .checked_add(self.step)
                .ok_or(RangeError::ArithmeticOverflow)?;
            return Self::new(start, self.stop, self.step);
        }
        if tail == clipped.start {
            return Self::new(self.start, tail, self.step);
        }

        let two = T::one() + T::one();
        match self.step.checked_mul(two) {
            Some(doubled) if doubled == clipped.step => {}
            _ => return Err(RangeError::MisalignedSubtraction),
        }

        if self.start == clipped.start && tail == clipped_tail {
            let start = self
                .start
                .checked_add(self.step)
                .ok_or(RangeError::ArithmeticOverflow)?;
            return Self::new(start, tail, clipped.step);
        }
        if self.start.checked_add(self.step) == Some(clipped.start)
            && clipped_tail.checked_add(self.step) == Some(tail)
        {
            return Self::new(self.start, self.stop, clipped.step);
        }
        Err(RangeError::MisalignedSubtraction)
    }

    /// Elements in exactly one of the two ranges: `(a − b) ∪ (b − a)`.
    ///
    /// Inherits every failure mode of both differences and the final union.
    pub fn symmetric_difference(&self, other: &Self) -> Result<Self, RangeError<T>> {
        self.difference(other)?.union(&other.difference(self)?)
    }
}

impl<T: TimeVariable> PartialEq for DatetimeRange<T> {
    /// Element-set equality: two ranges are equal when they realize the same
    /// sequence of time points, regardless of how their `stop` is phrased.
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        match self.len {
            0 => true,
            1 => self.start == other.start,
            _ => self.start == other.start && self.last_element() == other.last_element(),
        }
    }
}

impl<T: TimeVariable> Eq for DatetimeRange<T> {}

impl<T: TimeVariable> Hash for DatetimeRange<T> {
    /// Hashes the realized element set, consistent with [`PartialEq`]: a
    /// constant for empty ranges, the start for singletons, and the
    /// start/last/step triple otherwise.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.len {
            0 => {
                0u8.hash(state);
            }
            1 => {
                1u8.hash(state);
                self.start.hash(state);
            }
            _ => {
                2u8.hash(state);
                self.start.hash(state);
                self.last_element().hash(state);
                self.step.hash(state);
            }
        }
    }
}

impl<T: TimeVariable> Display for DatetimeRange<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}) step {}", self.start, self.stop, self.step)
    }
}

/// Iterator over the elements of a [`DatetimeRange`].
#[derive(Debug, Clone)]
pub struct DatetimeRangeIter<T: TimeVariable> {
    next: TimePoint<T>,
    step: TimeDelta<T>,
    remaining: usize,
}

impl<T: TimeVariable> Iterator for DatetimeRangeIter<T> {
    type Item = TimePoint<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            // Another element exists below stop, so this cannot overflow.
            match self.next.checked_add(self.step) {
                Some(n) => self.next = n,
                None => self.remaining = 0,
            }
        }
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: TimeVariable> ExactSizeIterator for DatetimeRangeIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T: TimeVariable> FusedIterator for DatetimeRangeIter<T> {}

impl<T: TimeVariable> IntoIterator for DatetimeRange<T> {
    type Item = TimePoint<T>;
    type IntoIter = DatetimeRangeIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: TimeVariable> IntoIterator for &DatetimeRange<T> {
    type Item = TimePoint<T>;
    type IntoIter = DatetimeRangeIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn tp(v: i64) -> TimePoint<i64> {
        TimePoint::new(v)
    }

    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }

    fn range(start: i64, stop: i64, step: i64) -> DatetimeRange<i64> {
        DatetimeRange::new(tp(start), tp(stop), td(step)).expect("valid range")
    }

    fn elements(r: &DatetimeRange<i64>) -> Vec<i64> {
        r.iter().map(TimePoint::value).collect()
    }

    fn hash_of(r: &DatetimeRange<i64>) -> u64 {
        let mut hasher = DefaultHasher::new();
        r.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_zero_step_is_rejected() {
        assert_eq!(
            DatetimeRange::new(tp(0), tp(10), td(0)),
            Err(RangeError::InvalidStep)
        );
    }

    #[test]
    fn test_construction_overflow_propagates() {
        assert_eq!(
            DatetimeRange::new(tp(i64::MIN), tp(i64::MAX), td(1)),
            Err(RangeError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_empty_ranges() {
        assert!(range(0, 0, 1).is_empty());
        assert!(range(10, 0, 1).is_empty());
        assert!(range(0, 10, -1).is_empty());
        assert_eq!(range(0, 0, 1).len(), 0);
    }

    #[test]
    fn test_length_uses_floor_division() {
        assert_eq!(range(0, 5, 1).len(), 5);
        assert_eq!(range(0, 5, 2).len(), 2);
        assert_eq!(range(0, 10, 3).len(), 3);
        assert_eq!(range(10, 0, -2).len(), 5);
    }

    #[test]
    fn test_ascending_elements() {
        let r = range(0, 10, 2);
        assert_eq!(elements(&r), vec![0, 2, 4, 6, 8]);
        assert_eq!(r.direction(), RangeDirection::Ascending);
    }

    #[test]
    fn test_descending_elements() {
        let r = range(10, 0, -2);
        assert_eq!(elements(&r), vec![10, 8, 6, 4, 2]);
        assert_eq!(r.direction(), RangeDirection::Descending);
    }

    #[test]
    fn test_get_matches_start_plus_index_times_step() {
        let r = range(3, 20, 4);
        for (i, at) in r.iter().enumerate() {
            assert_eq!(r.get(i as isize), Ok(at));
            assert_eq!(at.value(), 3 + (i as i64) * 4);
        }
        assert_eq!(r.get(0), Ok(r.start()));
        assert_eq!(r.get(r.len() as isize - 1), Ok(r.last().unwrap()));
    }

    #[test]
    fn test_negative_indexing() {
        let r = range(0, 10, 2);
        assert_eq!(r.get(-1), Ok(tp(8)));
        assert_eq!(r.get(-5), Ok(tp(0)));
        for k in 1..=r.len() as isize {
            assert_eq!(r.get(-k), r.get(r.len() as isize - k));
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let r = range(0, 10, 2);
        let err = r.get(5).unwrap_err();
        match err {
            RangeError::IndexOutOfRange(e) => {
                assert_eq!(e.index(), 5);
                assert_eq!(e.len(), 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(r.get(-6).is_err());
        assert!(range(0, 0, 1).get(0).is_err());
    }

    #[test]
    fn test_iteration_is_restartable() {
        let r = range(0, 6, 2);
        assert_eq!(elements(&r), vec![0, 2, 4]);
        assert_eq!(elements(&r), vec![0, 2, 4]);
        let it = r.iter();
        assert_eq!(it.len(), 3);
    }

    #[test]
    fn test_iteration_near_domain_edge() {
        let r = range(i64::MAX - 2, i64::MAX, 1);
        assert_eq!(elements(&r), vec![i64::MAX - 2, i64::MAX - 1]);
    }

    #[test]
    fn test_contains_members_and_non_members() {
        let r = range(0, 10, 2);
        for at in r.iter() {
            assert!(r.contains(at));
        }
        assert!(!r.contains(tp(3)));
        assert!(!r.contains(tp(10)));
        assert!(!r.contains(tp(-2)));
        assert!(!r.contains(tp(11)));
    }

    #[test]
    fn test_contains_on_descending_range() {
        let r = range(10, 0, -2);
        assert!(r.contains(tp(10)));
        assert!(r.contains(tp(4)));
        assert!(!r.contains(tp(5)));
        assert!(!r.contains(tp(0)));
        assert!(!r.contains(tp(12)));
    }

    #[test]
    fn test_empty_range_contains_nothing() {
        let r = range(5, 5, 1);
        assert!(!r.contains(tp(5)));
        assert!(!r.contains(tp(4)));
        let r = range(10, 0, 1);
        assert!(!r.contains(tp(5)));
    }

    #[test]
    fn test_stop_is_never_a_member() {
        for r in [range(0, 10, 2), range(0, 9, 3), range(10, 0, -5)] {
            assert!(!r.contains(r.stop()));
        }
    }

    #[test]
    fn test_reversed_round_trip() {
        let r = range(0, 10, 2);
        let rev = r.reversed().unwrap();
        assert_eq!(rev.len(), r.len());
        assert_eq!(rev.step(), td(-2));
        assert_eq!(rev.get(0), Ok(r.last().unwrap()));
        assert_eq!(rev.get(-1), Ok(r.start()));
        assert_eq!(rev.reversed().unwrap(), r);
    }

    #[test]
    fn test_reversed_with_unaligned_stop() {
        // stop is not one step past the last element
        let r = range(0, 5, 2);
        assert_eq!(elements(&r), vec![0, 2]);
        let rev = r.reversed().unwrap();
        assert_eq!(elements(&rev), vec![2, 0]);
        assert_eq!(rev.reversed().unwrap(), r);
    }

    #[test]
    fn test_reversed_empty_stays_empty() {
        let rev = range(5, 5, 1).reversed().unwrap();
        assert!(rev.is_empty());
        assert_eq!(rev.step(), td(-1));
    }

    #[test]
    fn test_reversed_at_domain_maximum_succeeds() {
        let r = range(i64::MAX - 1, i64::MAX, 1);
        let rev = r.reversed().unwrap();
        assert_eq!(elements(&rev), vec![i64::MAX - 1]);
    }

    #[test]
    fn test_reversed_at_domain_minimum_overflows() {
        let r = range(i64::MIN, i64::MIN + 1, 1);
        assert_eq!(r.reversed(), Err(RangeError::ArithmeticOverflow));
    }

    #[test]
    fn test_empty_ranges_are_equal_regardless_of_fields() {
        assert_eq!(range(0, 0, 1), range(100, 50, 7));
        assert_eq!(range(0, 10, -1), range(5, 5, 3));
        assert_eq!(hash_of(&range(0, 0, 1)), hash_of(&range(100, 50, 7)));
    }

    #[test]
    fn test_singleton_equality_ignores_step_and_stop() {
        let a = range(4, 9, 5);
        let b = range(4, 7, 3);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(range(4, 9, 5), range(5, 10, 5));
    }

    #[test]
    fn test_equality_tolerates_different_stop() {
        let a = range(0, 10, 3);
        let b = range(0, 11, 3);
        assert_eq!(elements(&a), elements(&b));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_unequal_ranges() {
        assert_ne!(range(0, 10, 1), range(0, 10, 2));
        assert_ne!(range(0, 10, 1), range(1, 10, 1));
        assert_ne!(range(0, 10, 1), range(0, 12, 1));
    }

    #[test]
    fn test_intersection_of_overlapping_ranges() {
        let a = range(0, 5, 1);
        let b = range(2, 10, 1);
        assert_eq!(a.intersect(&b), Ok(range(2, 5, 1)));
        assert_eq!(b.intersect(&a), Ok(range(2, 5, 1)));
    }

    #[test]
    fn test_self_intersection_is_identity() {
        for r in [range(0, 10, 2), range(10, 0, -3), range(5, 5, 1)] {
            assert_eq!(r.intersect(&r), Ok(r));
        }
    }

    #[test]
    fn test_intersection_takes_coarser_step() {
        let a = range(0, 12, 2);
        let b = range(0, 12, 4);
        let common = a.intersect(&b).unwrap();
        assert_eq!(common.step(), td(4));
        assert_eq!(elements(&common), vec![0, 4, 8]);
    }

    #[test]
    fn test_intersection_of_descending_ranges() {
        let a = range(10, 0, -1);
        let b = range(8, 2, -2);
        let common = a.intersect(&b).unwrap();
        assert_eq!(elements(&common), vec![8, 6, 4]);
    }

    #[test]
    fn test_intersection_with_opposite_directions_fails() {
        let a = range(0, 10, 1);
        let b = range(10, 0, -1);
        assert!(matches!(
            a.intersect(&b),
            Err(RangeError::IncompatibleDirection(_))
        ));
    }

    #[test]
    fn test_intersection_with_incompatible_steps_fails() {
        let a = range(0, 12, 2);
        let b = range(0, 12, 3);
        assert!(matches!(
            a.intersect(&b),
            Err(RangeError::IncompatibleStep(_))
        ));
    }

    #[test]
    fn test_intersection_of_disjoint_ranges_is_empty_not_error() {
        let a = range(0, 5, 1);
        let b = range(20, 30, 1);
        let common = a.intersect(&b).unwrap();
        assert!(common.is_empty());
    }

    #[test]
    fn test_disjointness() {
        assert!(range(0, 5, 1).is_disjoint(&range(20, 30, 1)));
        assert!(!range(0, 5, 1).is_disjoint(&range(3, 8, 1)));
    }

    #[test]
    fn test_incompatible_ranges_are_reported_disjoint() {
        assert!(range(0, 10, 1).is_disjoint(&range(10, 0, -1)));
        assert!(range(0, 12, 2).is_disjoint(&range(0, 12, 3)));
    }

    #[test]
    fn test_union_of_same_bounds_takes_finer_step() {
        let a = range(0, 10, 2);
        let b = range(0, 10, 4);
        assert_eq!(a.union(&b), Ok(range(0, 10, 2)));
        assert_eq!(b.union(&a), Ok(range(0, 10, 2)));
    }

    #[test]
    fn test_union_with_different_steps_requires_matching_bounds() {
        let a = range(0, 10, 2);
        let b = range(0, 12, 4);
        assert_eq!(a.union(&b), Err(RangeError::MisalignedBoundaries));
    }

    #[test]
    fn test_union_with_incompatible_steps_fails() {
        let a = range(0, 12, 2);
        let b = range(0, 12, 5);
        assert!(matches!(a.union(&b), Err(RangeError::IncompatibleStep(_))));
    }

    #[test]
    fn test_union_of_overlapping_ranges() {
        let a = range(0, 6, 1);
        let b = range(4, 10, 1);
        assert_eq!(a.union(&b), Ok(range(0, 10, 1)));
    }

    #[test]
    fn test_union_of_touching_ranges() {
        let a = range(0, 5, 1);
        let b = range(5, 10, 1);
        assert_eq!(a.union(&b), Ok(range(0, 10, 1)));
    }

    #[test]
    fn test_union_of_non_contiguous_ranges_fails() {
        let a = range(0, 10, 1);
        let b = range(20, 30, 1);
        assert_eq!(a.union(&b), Err(RangeError::NonContiguous));
    }

    #[test]
    fn test_union_of_descending_ranges() {
        let a = range(10, 5, -1);
        let b = range(6, 0, -1);
        assert_eq!(a.union(&b), Ok(range(10, 0, -1)));
        let far = range(3, 0, -1);
        assert_eq!(range(10, 8, -1).union(&far), Err(RangeError::NonContiguous));
    }

    #[test]
    fn test_subset_or_equal() {
        let inner = range(2, 5, 1);
        let outer = range(0, 10, 1);
        assert!(inner.is_subset_or_equal(&outer));
        assert!(!outer.is_subset_or_equal(&inner));
        assert!(outer.is_subset_or_equal(&outer));
    }

    #[test]
    fn test_subset_with_coarser_step() {
        let coarse = range(0, 10, 2);
        let fine = range(0, 10, 1);
        assert!(coarse.is_subset_or_equal(&fine));
        assert!(!fine.is_subset_or_equal(&coarse));
    }

    #[test]
    fn test_subset_never_fails_on_incompatible_ranges() {
        assert!(!range(0, 10, 1).is_subset_or_equal(&range(20, 30, 1)));
        assert!(!range(0, 12, 2).is_subset_or_equal(&range(0, 12, 5)));
        assert!(!range(0, 10, 1).is_subset_or_equal(&range(10, 0, -1)));
    }

    #[test]
    fn test_difference_removes_prefix() {
        let a = range(0, 10, 1);
        let b = range(0, 5, 1);
        assert_eq!(a.difference(&b), Ok(range(5, 10, 1)));
    }

    #[test]
    fn test_difference_removes_suffix() {
        let a = range(0, 10, 1);
        let b = range(5, 10, 1);
        assert_eq!(a.difference(&b), Ok(range(0, 5, 1)));
    }

    #[test]
    fn test_difference_with_disjoint_subtrahend_is_identity() {
        let a = range(0, 10, 1);
        let b = range(20, 30, 1);
        assert_eq!(a.difference(&b), Ok(a));
    }

    #[test]
    fn test_difference_of_middle_chunk_fails() {
        let a = range(0, 10, 1);
        let b = range(3, 7, 1);
        assert_eq!(a.difference(&b), Err(RangeError::WouldCreateSparseRange));
    }

    #[test]
    fn test_difference_of_everything_is_empty() {
        let a = range(0, 10, 2);
        let b = range(0, 10, 1);
        let left = a.difference(&b).unwrap();
        assert!(left.is_empty());
    }

    #[test]
    fn test_difference_peels_single_element_overlap_at_start() {
        let a = range(0, 10, 1);
        let b = range(-4, 2, 2);
        // clipped overlap is the single element 0, the first element of a
        assert_eq!(a.difference(&b), Ok(range(1, 10, 1)));
    }

    #[test]
    fn test_difference_with_offset_double_step() {
        let a = range(0, 7, 1);
        let b = range(1, 7, 2);
        // removes 1, 3, 5; keeps a's span at the coarser step
        assert_eq!(a.difference(&b), Ok(range(0, 7, 2)));
    }

    #[test]
    fn test_difference_with_misaligned_double_step_fails() {
        let a = range(0, 10, 1);
        let b = range(2, 8, 2);
        assert_eq!(a.difference(&b), Err(RangeError::MisalignedSubtraction));
    }

    #[test]
    fn test_difference_propagates_direction_mismatch() {
        let a = range(0, 10, 1);
        let b = range(10, 0, -1);
        assert!(matches!(
            a.difference(&b),
            Err(RangeError::IncompatibleDirection(_))
        ));
    }

    #[test]
    fn test_symmetric_difference() {
        let a = range(0, 10, 1);
        let b = range(0, 5, 1);
        assert_eq!(a.symmetric_difference(&b), Ok(range(5, 10, 1)));
        assert_eq!(b.symmetric_difference(&a), Ok(range(5, 10, 1)));
    }

    #[test]
    fn test_symmetric_difference_propagates_failures() {
        let a = range(0, 10, 1);
        let b = range(3, 7, 1);
        assert_eq!(
            a.symmetric_difference(&b),
            Err(RangeError::WouldCreateSparseRange)
        );
    }

    #[test]
    fn test_display() {
        let r = range(0, 10, 2);
        assert_eq!(
            format!("{r}"),
            "[TimePoint(0), TimePoint(10)) step TimeDelta(2)"
        );
    }

    #[test]
    fn test_ranges_dedup_in_hash_set() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(range(0, 10, 3));
        set.insert(range(0, 11, 3));
        set.insert(range(7, 7, 1));
        set.insert(range(3, 1, 5));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_into_iterator() {
        let r = range(0, 6, 2);
        let by_value: Vec<i64> = r.into_iter().map(TimePoint::value).collect();
        let by_ref: Vec<i64> = (&r).into_iter().map(TimePoint::value).collect();
        assert_eq!(by_value, vec![0, 2, 4]);
        assert_eq!(by_ref, by_value);
    }
}
