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

//! Seeded synthetic workloads: a room set plus a cleaning log over it.
//!
//! Cleanings arrive as a Poisson process starting at the configured horizon,
//! so the gap between consecutive timestamps is exponentially distributed
//! around `mean_gap` (gaps may round to zero, giving equal timestamps). Each
//! cleaning picks a room uniformly; with probability `orphan_fraction` it is
//! logged against a room that does not exist. Both output arrays are shuffled,
//! so consumers cannot rely on input order.

mod config;
mod err;

pub use config::{WorkloadGenConfig, WorkloadGenConfigBuilder};
pub use err::{InvertedDimensionRangeError, WorkloadGenConfigBuildError};

use crate::{
    id::RoomId,
    log::{LogEntry, Percent},
    room::Room,
};
use cleaning_core::{
    TimeVariable,
    length::Length,
    time::{TimeDelta, TimePoint},
};
use num_traits::NumCast;
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use rand_distr::{Distribution, Exp, Uniform};
use tracing::debug;

const ROOM_NAMES: [&str; 16] = [
    "Living Room",
    "Dining Room",
    "Kitchen",
    "Office",
    "Foyer",
    "Guest Bedroom",
    "Guest Bathroom",
    "Master Bedroom",
    "Master Bathroom",
    "Hallway",
    "Laundry",
    "Den",
    "Library",
    "Nursery",
    "Pantry",
    "Sunroom",
];

/// Identifier of the `index`-th generated room. The first sixteen rooms get
/// plain names; later ones reuse them with a numeric suffix.
fn room_name(index: usize) -> RoomId {
    let base = ROOM_NAMES[index % ROOM_NAMES.len()];
    match index / ROOM_NAMES.len() {
        0 => RoomId::new(base),
        round => RoomId::new(format!("{} {}", base, round + 1)),
    }
}

/// Identifier that sorts right after `room` but matches no generated room.
fn orphan_name(room: &RoomId) -> RoomId {
    RoomId::new(format!("{} Annex", room))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload<T: TimeVariable> {
    rooms: Vec<Room>,
    logs: Vec<LogEntry<T>>,
}

impl<T: TimeVariable> Workload<T> {
    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[inline]
    pub fn logs(&self) -> &[LogEntry<T>] {
        &self.logs
    }

    /// Earliest and latest log timestamps, if any.
    pub fn time_span(&self) -> Option<(TimePoint<T>, TimePoint<T>)> {
        let first = self.logs.iter().map(LogEntry::timestamp).min()?;
        let last = self.logs.iter().map(LogEntry::timestamp).max()?;
        Some((first, last))
    }

    #[inline]
    pub fn into_parts(self) -> (Vec<Room>, Vec<LogEntry<T>>) {
        (self.rooms, self.logs)
    }
}

pub struct WorkloadGenerator<T: TimeVariable> {
    config: WorkloadGenConfig<T>,
    rng: SmallRng,
    dimension_distribution: Uniform<u32>,
    gap_distribution: Exp<f64>,
}

impl<T: TimeVariable> From<WorkloadGenConfig<T>> for WorkloadGenerator<T> {
    fn from(config: WorkloadGenConfig<T>) -> Self {
        Self::new(config)
    }
}

impl<T: TimeVariable> WorkloadGenerator<T> {
    pub fn new(config: WorkloadGenConfig<T>) -> Self {
        let mean_gap = config
            .mean_gap
            .value()
            .to_f64()
            .unwrap_or(1.0)
            .max(f64::MIN_POSITIVE);
        Self {
            dimension_distribution: Uniform::new_inclusive(
                config.min_dimension.value(),
                config.max_dimension.value(),
            )
            .expect("valid [min_dimension, max_dimension]"),
            gap_distribution: Exp::new(1.0 / mean_gap).expect("positive mean gap"),
            rng: SmallRng::seed_from_u64(config.seed),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &WorkloadGenConfig<T> {
        &self.config
    }

    fn generate_rooms(&mut self) -> Vec<Room> {
        (0..self.config.room_count)
            .filter_map(|i| {
                let length = Length::new(self.dimension_distribution.sample(&mut self.rng));
                let width = Length::new(self.dimension_distribution.sample(&mut self.rng));
                // Dimensions are drawn from a range starting above zero.
                Room::try_new(room_name(i), length, width).ok()
            })
            .collect()
    }

    fn sample_gap(&mut self) -> TimeDelta<T> {
        let gap = self.gap_distribution.sample(&mut self.rng).round();
        TimeDelta::new(NumCast::from(gap).unwrap_or_else(T::zero))
    }

    fn sample_percent(&mut self) -> Percent {
        Percent::new(self.rng.random_range(0..=100u8)).unwrap_or(Percent::FULL)
    }

    fn generate_logs(&mut self, rooms: &[Room]) -> Vec<LogEntry<T>> {
        let mut logs = Vec::with_capacity(self.config.log_count);
        if rooms.is_empty() {
            return logs;
        }
        let mut now = self.config.horizon_start;
        for _ in 0..self.config.log_count {
            now = now.saturating_add(self.sample_gap());
            let room = rooms[self.rng.random_range(0..rooms.len())].id();
            let room_id = if self.rng.random_bool(self.config.orphan_fraction) {
                orphan_name(room)
            } else {
                room.clone()
            };
            let percent = self.sample_percent();
            logs.push(LogEntry::new(room_id, now, percent));
        }
        logs
    }

    /// Produces the next workload. Successive calls on one generator yield
    /// different workloads; generators built from equal configs yield equal
    /// sequences of workloads.
    pub fn generate(&mut self) -> Workload<T> {
        let mut rooms = self.generate_rooms();
        let mut logs = self.generate_logs(&rooms);
        rooms.shuffle(&mut self.rng);
        logs.shuffle(&mut self.rng);

        debug!(
            rooms = rooms.len(),
            logs = logs.len(),
            seed = self.config.seed,
            "Generated workload"
        );
        Workload { rooms, logs }
    }
}
