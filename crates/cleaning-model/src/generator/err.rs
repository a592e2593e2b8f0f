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

use cleaning_core::length::Length;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvertedDimensionRangeError {
    min: Length,
    max: Length,
}

impl InvertedDimensionRangeError {
    pub fn new(min: Length, max: Length) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> Length {
        self.min
    }

    pub fn max(&self) -> Length {
        self.max
    }
}

impl Display for InvertedDimensionRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "InvertedDimensionRangeError: min dimension {} exceeds max dimension {}",
            self.min, self.max
        )
    }
}

impl std::error::Error for InvertedDimensionRangeError {}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkloadGenConfigBuildError {
    InvertedDimensionRange(InvertedDimensionRangeError),
    MissingRoomCount,
    MissingLogCount,
    ZeroRoomCount,
    ZeroMinDimension,
    NonPositiveMeanGap,
    OrphanFractionOutOfRange(f64),
}

impl Display for WorkloadGenConfigBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use WorkloadGenConfigBuildError::*;
        match self {
            InvertedDimensionRange(e) => write!(f, "{}", e),
            MissingRoomCount => write!(f, "Missing room_count"),
            MissingLogCount => write!(f, "Missing log_count"),
            ZeroRoomCount => write!(f, "room_count must be greater than 0"),
            ZeroMinDimension => write!(f, "min_dimension must be greater than 0"),
            NonPositiveMeanGap => write!(f, "mean_gap must be greater than 0"),
            OrphanFractionOutOfRange(v) => {
                write!(f, "orphan_fraction must lie in [0, 1], got {}", v)
            }
        }
    }
}

impl From<InvertedDimensionRangeError> for WorkloadGenConfigBuildError {
    fn from(err: InvertedDimensionRangeError) -> Self {
        Self::InvertedDimensionRange(err)
    }
}

impl std::error::Error for WorkloadGenConfigBuildError {}
