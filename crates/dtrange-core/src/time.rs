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

//! Time points and durations over signed integer ticks.
//!
//! A [`TimePoint<T>`] names an instant; a [`TimeDelta<T>`] is the signed
//! distance between two instants. Subtracting two points yields a delta,
//! adding a delta to a point yields a point. Beyond the usual arithmetic,
//! [`TimeDelta`] carries the division-like operations range algebra is built
//! from: [`TimeDelta::div_floor`], [`TimeDelta::is_multiple_of`] and
//! [`TimeDelta::abs_cmp`], all of which stay well-defined at `T::MIN` where a
//! naive `abs()` would overflow.

use num_traits::{PrimInt, SaturatingMul, Signed, Zero};
use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{Add, Mul, Neg, Sub};

/// A point in time, measured in ticks of `T` from an arbitrary epoch.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimePoint<T: PrimInt>(T);

/// A signed duration measured in ticks of `T`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeDelta<T: PrimInt + Signed>(T);

impl<T: PrimInt> TimePoint<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        TimePoint(value)
    }

    #[inline]
    pub fn zero() -> Self {
        TimePoint(T::zero())
    }

    #[inline]
    pub const fn value(self) -> T {
        self.0
    }
}

impl<T: PrimInt + Signed> TimePoint<T> {
    /// Adds a duration, returning `None` on overflow.
    #[inline]
    pub fn checked_add(self, delta: TimeDelta<T>) -> Option<Self> {
        self.0.checked_add(&delta.0).map(TimePoint)
    }

    /// Subtracts a duration, returning `None` on underflow.
    #[inline]
    pub fn checked_sub(self, delta: TimeDelta<T>) -> Option<Self> {
        self.0.checked_sub(&delta.0).map(TimePoint)
    }

    /// The signed distance from `earlier` to `self`, or `None` if the
    /// difference exceeds the tick domain.
    #[inline]
    pub fn checked_delta_since(self, earlier: TimePoint<T>) -> Option<TimeDelta<T>> {
        self.0.checked_sub(&earlier.0).map(TimeDelta)
    }

    #[inline]
    pub fn saturating_add(self, delta: TimeDelta<T>) -> Self {
        TimePoint(self.0.saturating_add(delta.0))
    }

    #[inline]
    pub fn saturating_sub(self, delta: TimeDelta<T>) -> Self {
        TimePoint(self.0.saturating_sub(delta.0))
    }
}

impl<T: PrimInt> Default for TimePoint<T> {
    #[inline]
    fn default() -> Self {
        TimePoint(T::zero())
    }
}

impl<T: PrimInt> From<T> for TimePoint<T> {
    #[inline]
    fn from(v: T) -> Self {
        TimePoint(v)
    }
}

impl<T: PrimInt + Display> Display for TimePoint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimePoint({})", self.0)
    }
}

impl<T: PrimInt + Signed> TimeDelta<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    #[inline]
    pub fn zero() -> Self {
        Self(T::zero())
    }

    #[inline]
    pub const fn value(self) -> T {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0.is_positive()
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(&rhs.0).map(TimeDelta)
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(&rhs.0).map(TimeDelta)
    }

    /// Negates the duration, returning `None` when the magnitude of `T::MIN`
    /// has no positive counterpart.
    #[inline]
    pub fn checked_neg(self) -> Option<Self> {
        T::zero().checked_sub(&self.0).map(TimeDelta)
    }

    /// The absolute duration, `None` at `T::MIN`.
    #[inline]
    pub fn checked_abs(self) -> Option<Self> {
        if self.0 < T::zero() {
            self.checked_neg()
        } else {
            Some(self)
        }
    }

    #[inline]
    pub fn checked_mul(self, rhs: T) -> Option<Self> {
        self.0.checked_mul(&rhs).map(TimeDelta)
    }

    #[inline]
    pub fn saturating_mul(self, rhs: T) -> Self
    where
        T: SaturatingMul,
    {
        TimeDelta(self.0.saturating_mul(&rhs))
    }

    /// Compares the magnitudes of two durations without computing either
    /// absolute value, so `T::MIN` orders correctly as the largest magnitude.
    pub fn abs_cmp(self, other: Self) -> Ordering {
        match (self.checked_abs(), other.checked_abs()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.0.cmp(&b.0),
        }
    }

    /// Floor division by another duration, yielding a tick count.
    ///
    /// Rounds toward negative infinity, matching the semantics range length
    /// computation is specified against. Returns `None` when `rhs` is zero or
    /// when the quotient does not fit `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dtrange_core::time::TimeDelta;
    ///
    /// assert_eq!(TimeDelta::new(5i64).div_floor(TimeDelta::new(2)), Some(2));
    /// assert_eq!(TimeDelta::new(-5i64).div_floor(TimeDelta::new(2)), Some(-3));
    /// assert_eq!(TimeDelta::new(5i64).div_floor(TimeDelta::new(-2)), Some(-3));
    /// assert_eq!(TimeDelta::new(-5i64).div_floor(TimeDelta::new(-2)), Some(2));
    /// assert_eq!(TimeDelta::new(5i64).div_floor(TimeDelta::new(0)), None);
    /// ```
    pub fn div_floor(self, rhs: Self) -> Option<T> {
        if rhs.is_zero() {
            return None;
        }
        let quotient = self.0.checked_div(&rhs.0)?;
        let remainder = self.0 - quotient * rhs.0;
        if remainder.is_zero() || (remainder < T::zero()) == (rhs.0 < T::zero()) {
            Some(quotient)
        } else {
            quotient.checked_sub(&T::one())
        }
    }

    /// Whether `self` is an exact integer multiple of `rhs`.
    ///
    /// Sign-agnostic: `6` is a multiple of `-3`. A zero `rhs` divides only a
    /// zero `self`.
    pub fn is_multiple_of(self, rhs: Self) -> bool {
        if rhs.is_zero() {
            return self.is_zero();
        }
        // Unit divisors divide everything; this also sidesteps the one
        // remainder that can overflow (T::MIN % -1).
        if rhs.0 == T::one() || rhs.0 == T::zero() - T::one() {
            return true;
        }
        (self.0 % rhs.0).is_zero()
    }
}

impl<T: PrimInt + Signed> Default for TimeDelta<T> {
    #[inline]
    fn default() -> Self {
        TimeDelta::zero()
    }
}

impl<T: PrimInt + Signed> From<T> for TimeDelta<T> {
    #[inline]
    fn from(v: T) -> Self {
        TimeDelta(v)
    }
}

impl<T: PrimInt + Signed + Display> Display for TimeDelta<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeDelta({})", self.0)
    }
}

impl<T: PrimInt + Signed> Add<TimeDelta<T>> for TimePoint<T> {
    type Output = TimePoint<T>;

    #[inline]
    fn add(self, rhs: TimeDelta<T>) -> Self::Output {
        TimePoint(
            self.0
                .checked_add(&rhs.0)
                .expect("overflow in TimePoint + TimeDelta"),
        )
    }
}

impl<T: PrimInt + Signed> Sub<TimeDelta<T>> for TimePoint<T> {
    type Output = TimePoint<T>;

    #[inline]
    fn sub(self, rhs: TimeDelta<T>) -> Self::Output {
        TimePoint(
            self.0
                .checked_sub(&rhs.0)
                .expect("underflow in TimePoint - TimeDelta"),
        )
    }
}

impl<T: PrimInt + Signed> Sub<TimePoint<T>> for TimePoint<T> {
    type Output = TimeDelta<T>;

    #[inline]
    fn sub(self, rhs: TimePoint<T>) -> Self::Output {
        TimeDelta(
            self.0
                .checked_sub(&rhs.0)
                .expect("underflow in TimePoint - TimePoint"),
        )
    }
}

impl<T: PrimInt + Signed> Add for TimeDelta<T> {
    type Output = TimeDelta<T>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        TimeDelta(
            self.0
                .checked_add(&rhs.0)
                .expect("overflow in TimeDelta + TimeDelta"),
        )
    }
}

impl<T: PrimInt + Signed> Sub for TimeDelta<T> {
    type Output = TimeDelta<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        TimeDelta(
            self.0
                .checked_sub(&rhs.0)
                .expect("underflow in TimeDelta - TimeDelta"),
        )
    }
}

impl<T: PrimInt + Signed> Neg for TimeDelta<T> {
    type Output = TimeDelta<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("underflow in -TimeDelta")
    }
}

impl<T: PrimInt + Signed> Mul<T> for TimeDelta<T> {
    type Output = TimeDelta<T>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        TimeDelta(
            self.0
                .checked_mul(&rhs)
                .expect("overflow in TimeDelta * scalar"),
        )
    }
}

impl<T: PrimInt + Signed> Zero for TimeDelta<T> {
    #[inline]
    fn zero() -> Self {
        TimeDelta(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}
