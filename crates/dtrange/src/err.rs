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

//! Error taxonomy for datetime range construction, indexing and set algebra.
//!
//! Every failure is caller-recoverable; no range operation panics on invalid
//! input. The variants mirror the preconditions of the individual operations:
//! construction rejects a zero step, indexing rejects positions outside
//! `[-len, len)`, and intersection/union/difference reject structurally
//! incompatible operands.

use crate::range::RangeDirection;
use dtrange_core::{time::TimeDelta, TimeVariable};
use std::fmt::Display;

/// A sequence index outside `[-len, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexOutOfRangeError {
    index: isize,
    len: usize,
}

impl IndexOutOfRangeError {
    #[inline]
    pub fn new(index: isize, len: usize) -> Self {
        Self { index, len }
    }

    #[inline]
    pub fn index(&self) -> isize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
}

impl Display for IndexOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "index {} out of range for a range of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfRangeError {}

/// Two ranges whose traversal directions differ cannot be intersected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IncompatibleDirectionError {
    left: RangeDirection,
    right: RangeDirection,
}

impl IncompatibleDirectionError {
    #[inline]
    pub fn new(left: RangeDirection, right: RangeDirection) -> Self {
        Self { left, right }
    }

    #[inline]
    pub fn left(&self) -> RangeDirection {
        self.left
    }

    #[inline]
    pub fn right(&self) -> RangeDirection {
        self.right
    }
}

impl Display for IncompatibleDirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cannot combine a {} range with a {} range",
            self.left, self.right
        )
    }
}

impl std::error::Error for IncompatibleDirectionError {}

/// Two ranges whose steps are not integer multiples of one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IncompatibleStepError<T: TimeVariable> {
    left: TimeDelta<T>,
    right: TimeDelta<T>,
}

impl<T: TimeVariable> IncompatibleStepError<T> {
    #[inline]
    pub fn new(left: TimeDelta<T>, right: TimeDelta<T>) -> Self {
        Self { left, right }
    }

    #[inline]
    pub fn left(&self) -> TimeDelta<T> {
        self.left
    }

    #[inline]
    pub fn right(&self) -> TimeDelta<T> {
        self.right
    }
}

impl<T: TimeVariable> Display for IncompatibleStepError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "steps {} and {} are not multiples of one another",
            self.left, self.right
        )
    }
}

impl<T: TimeVariable> std::error::Error for IncompatibleStepError<T> {}

/// Any failure a datetime range operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeError<T: TimeVariable> {
    /// The step passed at construction was zero.
    InvalidStep,
    /// Time point or duration arithmetic left the tick domain.
    ArithmeticOverflow,
    /// A sequence index outside `[-len, len)`.
    IndexOutOfRange(IndexOutOfRangeError),
    /// Intersection of an ascending with a descending range.
    IncompatibleDirection(IncompatibleDirectionError),
    /// Steps are not integer multiples of one another.
    IncompatibleStep(IncompatibleStepError<T>),
    /// Union of ranges with different steps whose boundaries do not match.
    MisalignedBoundaries,
    /// Union of same-step ranges that neither overlap nor touch.
    NonContiguous,
    /// Difference that would punch a hole into the middle of a range.
    WouldCreateSparseRange,
    /// Difference of different-step ranges whose boundaries are not
    /// sufficiently aligned.
    MisalignedSubtraction,
}

impl<T: TimeVariable> Display for RangeError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeError::InvalidStep => write!(f, "step must be non-zero"),
            RangeError::ArithmeticOverflow => {
                write!(f, "time arithmetic overflowed the tick domain")
            }
            RangeError::IndexOutOfRange(e) => write!(f, "{e}"),
            RangeError::IncompatibleDirection(e) => write!(f, "{e}"),
            RangeError::IncompatibleStep(e) => write!(f, "{e}"),
            RangeError::MisalignedBoundaries => write!(
                f,
                "cannot merge ranges whose steps differ and whose boundaries do not match"
            ),
            RangeError::NonContiguous => {
                write!(f, "cannot merge non-overlapping, non-contiguous ranges")
            }
            RangeError::WouldCreateSparseRange => {
                write!(f, "the result would not be a single arithmetic progression")
            }
            RangeError::MisalignedSubtraction => write!(
                f,
                "cannot subtract ranges with different steps unless the subtrahend's step \
                 doubles the minuend's and their boundaries align"
            ),
        }
    }
}

impl<T: TimeVariable> std::error::Error for RangeError<T> {}

impl<T: TimeVariable> From<IndexOutOfRangeError> for RangeError<T> {
    fn from(err: IndexOutOfRangeError) -> Self {
        Self::IndexOutOfRange(err)
    }
}

impl<T: TimeVariable> From<IncompatibleDirectionError> for RangeError<T> {
    fn from(err: IncompatibleDirectionError) -> Self {
        Self::IncompatibleDirection(err)
    }
}

impl<T: TimeVariable> From<IncompatibleStepError<T>> for RangeError<T> {
    fn from(err: IncompatibleStepError<T>) -> Self {
        Self::IncompatibleStep(err)
    }
}
