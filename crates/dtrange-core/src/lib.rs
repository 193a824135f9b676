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

//! # Time Primitives (`dtrange-core`)
//!
//! This crate provides the foundational value types for datetime range
//! arithmetic:
//!
//! - [`time::TimePoint<T>`]: a specific point in time, measured in ticks of a
//!   signed primitive integer.
//! - [`time::TimeDelta<T>`]: a signed duration, the difference between two
//!   time points.
//!
//! The newtypes enforce correctness at compile time (two `TimePoint`s cannot
//! be added, a `TimeDelta` cannot be compared against a `TimePoint`), and all
//! arithmetic is available in checked form so that overflow at the domain
//! edges surfaces as a recoverable condition instead of silent wrap-around.

use num_traits::{PrimInt, Signed};
use std::fmt::{Debug, Display};
use std::hash::Hash;

pub mod time;

/// The bounds a tick primitive must satisfy to back a datetime range.
pub trait TimeVariable: PrimInt + Signed + Hash + Send + Sync + Debug + Display {}
impl<T> TimeVariable for T where T: PrimInt + Signed + Hash + Send + Sync + Debug + Display {}
