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

//! # Cleaning Model (`cleaning-model`)
//!
//! The records a cleaning log is made of, built on the typed primitives of
//! `cleaning-core`:
//!
//! - **`RoomId`**: the unique, naturally ordered name of a room.
//! - **`Room`**: a room with its floor dimensions; its area is what a
//!   cleaning pass covers.
//! - **`LogEntry<T>`**: one cleaning pass of a room at a point in time,
//!   with the share of the floor that was covered.
//!
//! Constructors validate their input (`Room::try_new`, `LogEntry::try_new`),
//! so downstream engines only ever see well-formed records. The [`cmp`]
//! module holds the orderings the engines sort by, and [`generator`] builds
//! seeded synthetic workloads for tests, benchmarks and the driver binary.

pub mod cmp;
pub mod err;
pub mod generator;
pub mod id;
pub mod log;
pub mod room;

pub mod prelude {
    pub use crate::cmp::{logs_by_room_then_time_desc, logs_by_time_desc, rooms_by_id};
    pub use crate::err::{PercentOutOfRangeError, ZeroDimensionError};
    pub use crate::generator::{
        Workload, WorkloadGenConfig, WorkloadGenConfigBuildError, WorkloadGenConfigBuilder,
        WorkloadGenerator,
    };
    pub use crate::id::RoomId;
    pub use crate::log::{LogEntry, Percent};
    pub use crate::room::Room;
}
