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

//! Human-readable reports over a [`CleaningManager`].
//!
//! Report texts are fixed formats consumed by line-oriented front ends;
//! indentation is three spaces per level.

use cleaning_core::TimeVariable;
use cleaning_dsa::{list::IndexedList, map::Map};
use cleaning_model::{id::RoomId, log::LogEntry};
use std::fmt::{Display, Write};
use tracing::{debug, instrument};

use crate::{
    err::ReportError,
    manager::CleaningManager,
    timefmt::{format_timestamp, parse_timestamp},
};

const NO_ROOMS_CLEANED: &str = "No rooms have been cleaned.";

/// How often one room has been cleaned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomFrequency {
    room_id: RoomId,
    cleanings: usize,
}

impl RoomFrequency {
    #[inline]
    pub fn new(room_id: RoomId, cleanings: usize) -> Self {
        Self { room_id, cleanings }
    }

    #[inline]
    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    #[inline]
    pub fn cleanings(&self) -> usize {
        self.cleanings
    }
}

impl Display for RoomFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} has been cleaned {} times", self.room_id, self.cleanings)
    }
}

pub struct ReportManager<T: TimeVariable> {
    manager: CleaningManager<T>,
}

impl<T: TimeVariable> From<CleaningManager<T>> for ReportManager<T> {
    fn from(manager: CleaningManager<T>) -> Self {
        Self::new(manager)
    }
}

impl<T: TimeVariable> ReportManager<T> {
    #[inline]
    pub fn new(manager: CleaningManager<T>) -> Self {
        Self { manager }
    }

    #[inline]
    pub fn manager(&self) -> &CleaningManager<T> {
        &self.manager
    }

    #[inline]
    pub fn manager_mut(&mut self) -> &mut CleaningManager<T> {
        &mut self.manager
    }

    #[inline]
    pub fn into_inner(self) -> CleaningManager<T> {
        self.manager
    }

    /// Every room with its cleaning count, most cleaned first and ties broken
    /// by ascending identifier.
    #[instrument(level = "debug", skip_all)]
    pub fn frequency_ranking(&mut self) -> Vec<RoomFrequency> {
        let groups = self.manager.group_by_room();
        let mut ranking: Vec<RoomFrequency> = groups
            .iter()
            .map(|(id, cleanings)| RoomFrequency::new(id.clone(), cleanings.len()))
            .collect();
        self.manager.factory().sort_comparison(&mut ranking, |a, b| {
            b.cleanings
                .cmp(&a.cleanings)
                .then_with(|| a.room_id.cmp(&b.room_id))
        });
        ranking
    }

    /// The `count` most cleaned rooms. A `count` above the number of rooms
    /// lists every room.
    pub fn frequency_report(&mut self, count: usize) -> Result<String, ReportError> {
        if count == 0 {
            return Err(ReportError::NonPositiveRoomCount);
        }
        let ranking = self.frequency_ranking();
        let mut report = String::from("Frequency of Cleanings [");
        for entry in ranking.iter().take(count) {
            let _ = write!(report, "\n   {}", entry);
        }
        report.push_str("\n]");
        Ok(report)
    }

    /// Every room in ascending order with its cleanings, most recent first.
    #[instrument(level = "debug", skip_all)]
    pub fn room_report(&mut self) -> String {
        let groups = self.manager.group_by_room();
        let mut rooms: Vec<(&RoomId, Vec<&LogEntry<T>>)> = groups
            .iter()
            .map(|(id, cleanings)| (id, cleanings.iter().collect()))
            .collect();
        // Unordered map backends iterate in insertion order.
        self.manager
            .factory()
            .sort_comparison(&mut rooms, |a, b| a.0.cmp(b.0));

        if rooms.iter().all(|(_, cleanings)| cleanings.is_empty()) {
            return NO_ROOMS_CLEANED.to_owned();
        }

        let mut report = String::from("Room Report [");
        for (id, cleanings) in &rooms {
            let _ = write!(report, "\n   {} was cleaned on [\n", id);
            if cleanings.is_empty() {
                report.push_str("      (never cleaned)\n");
            }
            for entry in cleanings {
                let _ = writeln!(report, "      {}", format_timestamp(entry.timestamp()));
            }
            report.push_str("   ]");
        }
        report.push_str("\n]");
        report
    }

    /// Remaining capacity of a bag replaced at `timestamp`
    /// (`MM/dd/yyyy HH:mm:ss`).
    pub fn vacuum_bag_report(&mut self, timestamp: &str) -> Result<String, ReportError> {
        let replaced = parse_timestamp::<T>(timestamp)?;
        let remaining = self.manager.next_replacement(replaced);
        debug!(remaining = remaining.value(), "Computed bag capacity");

        let status = if remaining.is_negative() {
            "   Bag is overdue for replacement!".to_owned()
        } else {
            format!("   Bag is due for replacement in {} SQ FT", remaining.value())
        };
        Ok(format!(
            "Vacuum Bag Report (last replaced {}) [\n{}\n]",
            timestamp, status
        ))
    }
}
