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

//! Orderings the engines sort records by.
//!
//! Plain functions rather than comparator objects; pass them straight to a
//! comparison sorter.

use num_traits::PrimInt;
use std::cmp::Ordering;

use crate::{log::LogEntry, room::Room};

/// Ascending by room identifier.
#[inline]
pub fn rooms_by_id(a: &Room, b: &Room) -> Ordering {
    a.id().cmp(b.id())
}

/// Most recent first.
#[inline]
pub fn logs_by_time_desc<T: PrimInt>(a: &LogEntry<T>, b: &LogEntry<T>) -> Ordering {
    b.timestamp().cmp(&a.timestamp())
}

/// Ascending by room identifier, most recent first within a room.
#[inline]
pub fn logs_by_room_then_time_desc<T: PrimInt>(a: &LogEntry<T>, b: &LogEntry<T>) -> Ordering {
    a.room_id()
        .cmp(b.room_id())
        .then_with(|| logs_by_time_desc(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleaning_core::{length::Length, time::TimePoint};

    fn entry(room: &str, t: i64) -> LogEntry<i64> {
        LogEntry::try_new(room, TimePoint::new(t), 100).unwrap()
    }

    #[test]
    fn test_rooms_by_id() {
        let a = Room::try_new("Foyer", Length::new(1), Length::new(1)).unwrap();
        let b = Room::try_new("Office", Length::new(1), Length::new(1)).unwrap();
        assert_eq!(rooms_by_id(&a, &b), Ordering::Less);
        assert_eq!(rooms_by_id(&b, &a), Ordering::Greater);
        assert_eq!(rooms_by_id(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_logs_by_room_then_time_desc() {
        let mut logs = vec![
            entry("Office", 100),
            entry("Kitchen", 5),
            entry("Office", 200),
            entry("Kitchen", 7),
        ];
        logs.sort_by(logs_by_room_then_time_desc);
        let keys: Vec<(&str, i64)> = logs
            .iter()
            .map(|e| (e.room_id().as_str(), e.timestamp().value()))
            .collect();
        assert_eq!(
            keys,
            vec![("Kitchen", 7), ("Kitchen", 5), ("Office", 200), ("Office", 100)]
        );
    }

    #[test]
    fn test_equal_timestamps_compare_equal() {
        let a = entry("Den", 3);
        let b = LogEntry::try_new("Den", TimePoint::new(3), 10).unwrap();
        assert_eq!(logs_by_room_then_time_desc(&a, &b), Ordering::Equal);
        assert_eq!(logs_by_time_desc(&a, &b), Ordering::Equal);
    }
}
