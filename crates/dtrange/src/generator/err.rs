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

use std::fmt::Display;

use dtrange_core::{time::TimeDelta, TimeVariable};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidProbabilityError {
    value: f64,
}

impl InvalidProbabilityError {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Display for InvalidProbabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "InvalidProbabilityError: {} is not within [0, 1]",
            self.value
        )
    }
}

impl std::error::Error for InvalidProbabilityError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeGenConfigBuildError<T: TimeVariable> {
    InvalidProbability(InvalidProbabilityError),
    NonPositiveStepMagnitude(TimeDelta<T>),
}

impl<T: TimeVariable> Display for RangeGenConfigBuildError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use RangeGenConfigBuildError::*;
        match self {
            InvalidProbability(e) => write!(f, "{}", e),
            NonPositiveStepMagnitude(step) => {
                write!(f, "step magnitude bound {} must be positive", step)
            }
        }
    }
}

impl<T: TimeVariable> From<InvalidProbabilityError> for RangeGenConfigBuildError<T> {
    fn from(err: InvalidProbabilityError) -> Self {
        Self::InvalidProbability(err)
    }
}

impl<T: TimeVariable> std::error::Error for RangeGenConfigBuildError<T> {}
