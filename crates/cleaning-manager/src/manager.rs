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

use cleaning_core::{TimeVariable, area::Area, time::TimePoint};
use cleaning_dsa::{
    factory::DsaFactory,
    list::{IndexedList, Sequence},
    map::{AnyMap, Map},
};
use cleaning_model::{
    cmp::{logs_by_room_then_time_desc, rooms_by_id},
    id::RoomId,
    log::LogEntry,
    room::Room,
};
use std::{cmp::Ordering, fmt::Display};
use tracing::{debug, instrument, trace};

use crate::{
    config::{ManagerConfig, RoomSortStrategy},
    err::{DuplicateRoomError, ManagerBuildError},
};

/// Square footage a vacuum bag holds before it must be replaced.
pub const BAG_CAPACITY: Area = Area::new(5280);

/// Every room bound to its cleanings, most recent first.
pub type RoomLogs<T> = AnyMap<RoomId, Sequence<LogEntry<T>>>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomCoverage {
    room_id: RoomId,
    area: Area,
}

impl RoomCoverage {
    #[inline]
    pub fn new(room_id: RoomId, area: Area) -> Self {
        Self { room_id, area }
    }

    #[inline]
    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    #[inline]
    pub fn area(&self) -> Area {
        self.area
    }
}

impl Display for RoomCoverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} SQ FT", self.room_id, self.area.value())
    }
}

/// Area of `room` vacuumed at or after `cutoff`, given its cleanings most
/// recent first.
fn covered_since<T: TimeVariable>(
    room: &Room,
    cleanings: &Sequence<LogEntry<T>>,
    cutoff: TimePoint<T>,
) -> Area {
    let area = room.area();
    cleanings
        .iter()
        .take_while(|entry| entry.timestamp().is_at_or_after(cutoff))
        .map(|entry| area.percent_of(entry.percent().value()))
        .sum()
}

/// Owns a room set and a cleaning log and answers coverage queries over them.
///
/// Queries re-sort the owned arrays in place and rebuild the grouping from
/// scratch, which is why they take `&mut self`; nothing is cached between
/// calls.
#[derive(Debug, Clone)]
pub struct CleaningManager<T: TimeVariable> {
    rooms: Vec<Room>,
    logs: Vec<LogEntry<T>>,
    factory: DsaFactory,
    room_sort: RoomSortStrategy,
}

impl<T: TimeVariable> CleaningManager<T> {
    /// Takes ownership of validated rooms and logs. Fails if the configuration
    /// is invalid or two rooms share an identifier.
    pub fn new(
        rooms: Vec<Room>,
        logs: Vec<LogEntry<T>>,
        config: ManagerConfig,
    ) -> Result<Self, ManagerBuildError> {
        let factory = config.factory()?;
        let mut manager = Self {
            rooms,
            logs,
            factory,
            room_sort: config.room_sort,
        };
        manager.sort_rooms();
        if let Some(pair) = manager.rooms.windows(2).find(|w| w[0].id() == w[1].id()) {
            return Err(DuplicateRoomError::new(pair[0].id().clone()).into());
        }
        debug!(
            rooms = manager.rooms.len(),
            logs = manager.logs.len(),
            map = %factory.map_kind(),
            sequence = %factory.sequence_kind(),
            "Created cleaning manager"
        );
        Ok(manager)
    }

    /// Same as [`CleaningManager::new`] with [`ManagerConfig::default`].
    pub fn with_defaults(
        rooms: Vec<Room>,
        logs: Vec<LogEntry<T>>,
    ) -> Result<Self, ManagerBuildError> {
        Self::new(rooms, logs, ManagerConfig::default())
    }

    /// Rooms in their current order (ascending by identifier after any query).
    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[inline]
    pub fn logs(&self) -> &[LogEntry<T>] {
        &self.logs
    }

    #[inline]
    pub fn factory(&self) -> &DsaFactory {
        &self.factory
    }

    fn sort_rooms(&mut self) {
        match self.room_sort {
            RoomSortStrategy::Comparison => {
                self.factory.sort_comparison(&mut self.rooms, rooms_by_id)
            }
            RoomSortStrategy::NonComparison => self.factory.sort_non_comparison(&mut self.rooms),
        }
    }

    fn sort_logs(&mut self) {
        self.factory
            .sort_comparison(&mut self.logs, logs_by_room_then_time_desc);
    }

    /// Binds every room to the cleanings logged against it, most recent first.
    /// Entries naming an unknown room are dropped.
    #[instrument(level = "debug", skip_all, fields(rooms = self.rooms.len(), logs = self.logs.len()))]
    pub fn group_by_room(&mut self) -> RoomLogs<T> {
        self.sort_rooms();
        self.sort_logs();

        let mut groups: RoomLogs<T> = self.factory.new_map();
        let mut cursor = 0;
        let mut orphans = 0usize;
        for room in &self.rooms {
            let mut cleanings = self.factory.new_sequence();
            while let Some(entry) = self.logs.get(cursor) {
                match entry.room_id().cmp(room.id()) {
                    Ordering::Less => orphans += 1,
                    Ordering::Equal => cleanings.add_last(entry.clone()),
                    Ordering::Greater => break,
                }
                cursor += 1;
            }
            trace!(room = %room.id(), cleanings = cleanings.len(), "Grouped room");
            groups.put(room.id().clone(), cleanings);
        }
        orphans += self.logs.len() - cursor;

        if orphans > 0 {
            debug!(orphans, "Dropped log entries naming unknown rooms");
        }
        groups
    }

    /// Per-room area vacuumed at or after `cutoff`, ascending by room.
    #[instrument(level = "debug", skip_all, fields(cutoff = %cutoff.value()))]
    pub fn coverage_by_room(&mut self, cutoff: TimePoint<T>) -> Vec<RoomCoverage> {
        let groups = self.group_by_room();
        self.rooms
            .iter()
            .map(|room| {
                let area = groups
                    .get(room.id())
                    .map_or(Area::zero(), |cleanings| covered_since(room, cleanings, cutoff));
                RoomCoverage::new(room.id().clone(), area)
            })
            .collect()
    }

    /// Total area vacuumed at or after `cutoff`.
    #[instrument(level = "debug", skip_all, fields(cutoff = %cutoff.value()))]
    pub fn coverage_since(&mut self, cutoff: TimePoint<T>) -> Area {
        let groups = self.group_by_room();
        let total: Area = self
            .rooms
            .iter()
            .filter_map(|room| {
                groups
                    .get(room.id())
                    .map(|cleanings| covered_since(room, cleanings, cutoff))
            })
            .sum();
        debug!(total = total.value(), "Computed coverage");
        total
    }

    /// Capacity left in a bag replaced at `cutoff`. Negative once the bag is
    /// overdue.
    #[inline]
    pub fn next_replacement(&mut self, cutoff: TimePoint<T>) -> Area {
        BAG_CAPACITY - self.coverage_since(cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleaning_core::length::Length;
    use cleaning_dsa::{list::SequenceKind, map::MapKind};

    fn room(id: &str, l: u32, w: u32) -> Room {
        Room::try_new(id, Length::new(l), Length::new(w)).unwrap()
    }

    fn log(id: &str, t: i64, p: u8) -> LogEntry<i64> {
        LogEntry::try_new(id, TimePoint::new(t), p).unwrap()
    }

    fn scenario(config: ManagerConfig) -> CleaningManager<i64> {
        CleaningManager::new(
            vec![room("Office", 10, 10), room("Kitchen", 20, 15)],
            vec![log("Office", 100, 50), log("Office", 200, 100)],
            config,
        )
        .unwrap()
    }

    fn timestamps(groups: &RoomLogs<i64>, id: &str) -> Vec<i64> {
        groups
            .get(&RoomId::new(id))
            .unwrap()
            .iter()
            .map(|e| e.timestamp().value())
            .collect()
    }

    #[test]
    fn test_scenario_grouping() {
        let mut m = scenario(ManagerConfig::default());
        let groups = m.group_by_room();
        assert_eq!(groups.len(), 2);
        assert_eq!(timestamps(&groups, "Office"), vec![200, 100]);
        assert!(timestamps(&groups, "Kitchen").is_empty());
    }

    #[test]
    fn test_scenario_coverage() {
        let mut m = scenario(ManagerConfig::default());
        assert_eq!(m.coverage_since(TimePoint::new(150)), Area::new(100));
        assert_eq!(m.coverage_since(TimePoint::new(50)), Area::new(150));
        assert_eq!(m.coverage_since(TimePoint::new(201)), Area::zero());
        assert_eq!(m.next_replacement(TimePoint::new(50)), Area::new(5130));
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let mut m = scenario(ManagerConfig::default());
        assert_eq!(m.coverage_since(TimePoint::new(200)), Area::new(100));
        assert_eq!(m.coverage_since(TimePoint::new(100)), Area::new(150));
    }

    #[test]
    fn test_coverage_by_room_sums_to_total() {
        let mut m = scenario(ManagerConfig::default());
        let per_room = m.coverage_by_room(TimePoint::new(50));
        let ids: Vec<&str> = per_room.iter().map(|c| c.room_id().as_str()).collect();
        assert_eq!(ids, vec!["Kitchen", "Office"]);
        assert_eq!(per_room[0].area(), Area::zero());
        assert_eq!(per_room[1].area(), Area::new(150));
        assert_eq!(per_room[1].to_string(), "Office: 150 SQ FT");
        let total: Area = per_room.iter().map(RoomCoverage::area).sum();
        assert_eq!(total, m.coverage_since(TimePoint::new(50)));
    }

    #[test]
    fn test_overdue_bag_goes_negative() {
        let mut m = CleaningManager::with_defaults(
            vec![room("Gym", 100, 60)],
            vec![log("Gym", 10, 100)],
        )
        .unwrap();
        assert_eq!(m.next_replacement(TimePoint::new(0)), Area::new(-720));
    }

    #[test]
    fn test_largest_rooms_do_not_overflow() {
        let side = u32::MAX;
        let full = Area::new(i128::from(side) * i128::from(side));
        let mut m = CleaningManager::with_defaults(
            vec![room("Hangar", side, side), room("Depot", 2_000_000_000, 2_000_000_000)],
            vec![log("Hangar", 10, 100), log("Depot", 20, 100), log("Hangar", 30, 100)],
        )
        .unwrap();
        let depot = Area::new(4_000_000_000_000_000_000);
        assert_eq!(m.coverage_since(TimePoint::new(20)), full + depot);
        assert_eq!(m.coverage_since(TimePoint::new(0)), full + full + depot);
        assert_eq!(
            m.next_replacement(TimePoint::new(30)),
            BAG_CAPACITY - full
        );
        assert!(m.next_replacement(TimePoint::new(30)).is_negative());
    }

    #[test]
    fn test_truncates_per_entry() {
        // 7 * 3 = 21 square feet; 50% twice is 10 + 10, not 21.
        let mut m = CleaningManager::with_defaults(
            vec![room("Closet", 7, 3)],
            vec![log("Closet", 1, 50), log("Closet", 2, 50)],
        )
        .unwrap();
        assert_eq!(m.coverage_since(TimePoint::new(0)), Area::new(20));
    }

    #[test]
    fn test_orphans_before_between_and_after_rooms_are_dropped() {
        let mut m = CleaningManager::with_defaults(
            vec![room("Den", 1, 1), room("Office", 1, 1)],
            vec![
                log("Attic", 5, 100),
                log("Den", 1, 100),
                log("Kitchen", 4, 100),
                log("Office", 2, 100),
                log("Zen Garden", 3, 100),
            ],
        )
        .unwrap();
        let groups = m.group_by_room();
        assert_eq!(timestamps(&groups, "Den"), vec![1]);
        assert_eq!(timestamps(&groups, "Office"), vec![2]);
        assert_eq!(groups.get(&RoomId::new("Attic")), None);
        assert_eq!(m.logs().len(), 5, "orphans stay in the log array");
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let mut m = CleaningManager::with_defaults(
            vec![room("Den", 10, 10)],
            vec![log("Den", 7, 10), log("Den", 7, 20), log("Den", 9, 30)],
        )
        .unwrap();
        let groups = m.group_by_room();
        let percents: Vec<u8> = groups
            .get(&RoomId::new("Den"))
            .unwrap()
            .iter()
            .map(|e| e.percent().value())
            .collect();
        assert_eq!(percents, vec![30, 10, 20]);
    }

    #[test]
    fn test_duplicate_rooms_rejected() {
        let err = CleaningManager::<i64>::with_defaults(
            vec![room("Office", 1, 1), room("Den", 1, 1), room("Office", 2, 2)],
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ManagerBuildError::DuplicateRoom(DuplicateRoomError::new(RoomId::new("Office")))
        );
    }

    #[test]
    fn test_empty_inputs() {
        let mut m = CleaningManager::<i64>::with_defaults(Vec::new(), Vec::new()).unwrap();
        assert!(m.group_by_room().is_empty());
        assert_eq!(m.coverage_since(TimePoint::new(0)), Area::zero());
        assert_eq!(m.next_replacement(TimePoint::new(0)), BAG_CAPACITY);
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let mut m = scenario(ManagerConfig::default());
        let first = m.group_by_room();
        let second = m.group_by_room();
        assert_eq!(first.len(), second.len());
        for (k, v) in first.iter() {
            assert_eq!(second.get(k), Some(v));
        }
    }

    #[test]
    fn test_every_backend_agrees_on_scenario() {
        for map in MapKind::ALL {
            for sequence in SequenceKind::ALL {
                for room_sort in [RoomSortStrategy::Comparison, RoomSortStrategy::NonComparison] {
                    let config = ManagerConfig {
                        sequence,
                        room_sort,
                        ..ManagerConfig::with_map(map)
                    };
                    let mut m = scenario(config);
                    assert_eq!(m.coverage_since(TimePoint::new(150)), Area::new(100), "{config}");
                    assert_eq!(m.next_replacement(TimePoint::new(50)), Area::new(5130), "{config}");
                    let ids: Vec<&str> = m.rooms().iter().map(|r| r.id().as_str()).collect();
                    assert_eq!(ids, vec!["Kitchen", "Office"], "{config}");
                }
            }
        }
    }
}
