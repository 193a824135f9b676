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

//! # Datetime Ranges (`dtrange`)
//!
//! This crate provides [`range::DatetimeRange`], an immutable arithmetic
//! progression of time points defined by an inclusive `start`, an exclusive
//! `stop` and a non-zero signed `step`. It builds on the checked time
//! primitives of the `dtrange-core` crate.
//!
//! A range behaves simultaneously as
//!
//! - an ordered, indexable, reversible **sequence** of time points
//!   ([`range::DatetimeRange::len`], [`range::DatetimeRange::get`],
//!   [`range::DatetimeRange::iter`], [`range::DatetimeRange::reversed`]), and
//! - a mathematical **set** of time points ([`range::DatetimeRange::contains`],
//!   [`range::DatetimeRange::intersect`], [`range::DatetimeRange::union`],
//!   [`range::DatetimeRange::difference`],
//!   [`range::DatetimeRange::symmetric_difference`],
//!   [`range::DatetimeRange::is_subset_or_equal`],
//!   [`range::DatetimeRange::is_disjoint`]).
//!
//! Membership and the algebra run in O(1) without materializing elements; not
//! every pair of ranges can be intersected or merged, and each precondition
//! violation is reported through the [`err::RangeError`] taxonomy instead of
//! a panic.
//!
//! The [`generator`] module provides seeded pseudo-random range generation
//! for tests and benchmarks.

pub mod err;
pub mod generator;
pub mod range;
