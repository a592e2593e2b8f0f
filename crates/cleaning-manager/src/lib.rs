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

//! # Cleaning Manager (`cleaning-manager`)
//!
//! The engines that turn a room set and a cleaning log into answers:
//!
//! - **Grouping** ([`manager::CleaningManager::group_by_room`]): every room
//!   bound to its cleanings, most recent first.
//! - **Coverage** ([`manager::CleaningManager::coverage_since`]): square
//!   footage vacuumed since a cutoff, and the remaining capacity of a vacuum
//!   bag ([`manager::BAG_CAPACITY`]).
//! - **Reports** ([`report::ReportManager`]): frequency ranking, per-room
//!   cleaning history and the vacuum bag report, as text or structured data.
//!
//! Containers and sorters are picked once through [`config::ManagerConfig`];
//! every backend combination produces the same answers.

pub mod config;
pub mod err;
pub mod manager;
pub mod report;
pub mod timefmt;

pub mod prelude {
    pub use crate::config::{ManagerConfig, RoomSortStrategy};
    pub use crate::err::{DuplicateRoomError, InvalidTimestampError, ManagerBuildError, ReportError};
    pub use crate::manager::{BAG_CAPACITY, CleaningManager, RoomCoverage, RoomLogs};
    pub use crate::report::{ReportManager, RoomFrequency};
    pub use crate::timefmt::{TIMESTAMP_FORMAT, format_timestamp, parse_timestamp};
}
