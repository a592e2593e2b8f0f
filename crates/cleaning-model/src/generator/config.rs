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

use cleaning_core::{
    TimeVariable,
    length::Length,
    time::{TimeDelta, TimePoint},
};
use num_traits::NumCast;
use rand::Rng;

use super::err::{InvertedDimensionRangeError, WorkloadGenConfigBuildError};

/// Configuration for synthetic cleaning workloads.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadGenConfig<T: TimeVariable> {
    pub(crate) room_count: usize,
    pub(crate) min_dimension: Length,
    pub(crate) max_dimension: Length,
    pub(crate) log_count: usize,
    pub(crate) horizon_start: TimePoint<T>,
    pub(crate) mean_gap: TimeDelta<T>,
    pub(crate) orphan_fraction: f64,
    pub(crate) seed: u64,
}

impl<T: TimeVariable> Default for WorkloadGenConfig<T> {
    fn default() -> Self {
        // 2021-05-01 00:00:00 UTC, roughly an hour between cleanings.
        let start: T = NumCast::from(1_619_827_200i64).unwrap_or_else(T::zero);
        let gap: T = NumCast::from(3_600i64).unwrap_or_else(T::one);
        Self {
            room_count: 12,
            min_dimension: Length::new(6),
            max_dimension: Length::new(30),
            log_count: 200,
            horizon_start: TimePoint::new(start),
            mean_gap: TimeDelta::new(gap),
            orphan_fraction: 0.02,
            seed: 42,
        }
    }
}

impl<T: TimeVariable> WorkloadGenConfig<T> {
    #[inline]
    pub fn room_count(&self) -> usize {
        self.room_count
    }

    #[inline]
    pub fn min_dimension(&self) -> Length {
        self.min_dimension
    }

    #[inline]
    pub fn max_dimension(&self) -> Length {
        self.max_dimension
    }

    #[inline]
    pub fn log_count(&self) -> usize {
        self.log_count
    }

    #[inline]
    pub fn horizon_start(&self) -> TimePoint<T> {
        self.horizon_start
    }

    #[inline]
    pub fn mean_gap(&self) -> TimeDelta<T> {
        self.mean_gap
    }

    #[inline]
    pub fn orphan_fraction(&self) -> f64 {
        self.orphan_fraction
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<T: TimeVariable> Display for WorkloadGenConfig<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WorkloadGenConfig {{ rooms: {}, dims: {}..={}, logs: {}, start: {}, mean_gap: {}, orphans: {:.3}, seed: {} }}",
            self.room_count,
            self.min_dimension.value(),
            self.max_dimension.value(),
            self.log_count,
            self.horizon_start,
            self.mean_gap,
            self.orphan_fraction,
            self.seed
        )
    }
}

/// Builder for [`WorkloadGenConfig`]. `room_count` and `log_count` are
/// mandatory; everything else falls back to the defaults.
#[derive(Debug, Clone)]
pub struct WorkloadGenConfigBuilder<T: TimeVariable> {
    room_count: Option<usize>,
    log_count: Option<usize>,
    base: WorkloadGenConfig<T>,
}

impl<T: TimeVariable> Default for WorkloadGenConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeVariable> WorkloadGenConfigBuilder<T> {
    pub fn new() -> Self {
        Self {
            room_count: None,
            log_count: None,
            base: WorkloadGenConfig::default(),
        }
    }

    pub fn room_count(mut self, v: usize) -> Self {
        self.room_count = Some(v);
        self
    }

    pub fn log_count(mut self, v: usize) -> Self {
        self.log_count = Some(v);
        self
    }

    pub fn dimension_range(mut self, min: Length, max: Length) -> Self {
        self.base.min_dimension = min;
        self.base.max_dimension = max;
        self
    }

    pub fn horizon_start(mut self, v: TimePoint<T>) -> Self {
        self.base.horizon_start = v;
        self
    }

    pub fn mean_gap(mut self, v: TimeDelta<T>) -> Self {
        self.base.mean_gap = v;
        self
    }

    pub fn orphan_fraction(mut self, v: f64) -> Self {
        self.base.orphan_fraction = v;
        self
    }

    pub fn seed(mut self, v: u64) -> Self {
        self.base.seed = v;
        self
    }

    pub fn random_seed(mut self) -> Self {
        self.base.seed = rand::rng().random();
        self
    }

    pub fn build(self) -> Result<WorkloadGenConfig<T>, WorkloadGenConfigBuildError> {
        use WorkloadGenConfigBuildError::*;

        let room_count = self.room_count.ok_or(MissingRoomCount)?;
        let log_count = self.log_count.ok_or(MissingLogCount)?;
        if room_count == 0 {
            return Err(ZeroRoomCount);
        }
        let base = self.base;
        if base.min_dimension.is_zero() {
            return Err(ZeroMinDimension);
        }
        if base.min_dimension > base.max_dimension {
            return Err(
                InvertedDimensionRangeError::new(base.min_dimension, base.max_dimension).into(),
            );
        }
        if base.mean_gap.is_negative() || base.mean_gap.is_zero() {
            return Err(NonPositiveMeanGap);
        }
        if !(0.0..=1.0).contains(&base.orphan_fraction) {
            return Err(OrphanFractionOutOfRange(base.orphan_fraction));
        }

        Ok(WorkloadGenConfig {
            room_count,
            log_count,
            ..base
        })
    }
}
