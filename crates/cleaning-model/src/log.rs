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

use cleaning_core::time::TimePoint;
use num_traits::PrimInt;
use std::fmt::Display;

use crate::{err::PercentOutOfRangeError, id::RoomId};

/// Share of a floor covered by one cleaning pass, `0..=100`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percent(u8);

impl Percent {
    pub const FULL: Percent = Percent(100);

    #[inline]
    pub fn new(value: u8) -> Result<Self, PercentOutOfRangeError> {
        if value > 100 {
            return Err(PercentOutOfRangeError::new(value));
        }
        Ok(Percent(value))
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Percent {
    type Error = PercentOutOfRangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Percent::new(value)
    }
}

/// One cleaning pass of a room.
///
/// The room identifier is not checked against any room set; entries naming
/// an unknown room are carried along and ignored when grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogEntry<T: PrimInt> {
    room_id: RoomId,
    timestamp: TimePoint<T>,
    percent: Percent,
}

impl<T: PrimInt> LogEntry<T> {
    #[inline]
    pub fn new(room_id: impl Into<RoomId>, timestamp: TimePoint<T>, percent: Percent) -> Self {
        Self {
            room_id: room_id.into(),
            timestamp,
            percent,
        }
    }

    pub fn try_new(
        room_id: impl Into<RoomId>,
        timestamp: TimePoint<T>,
        percent: u8,
    ) -> Result<Self, PercentOutOfRangeError> {
        Ok(Self::new(room_id, timestamp, Percent::new(percent)?))
    }

    #[inline]
    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    #[inline]
    pub fn timestamp(&self) -> TimePoint<T> {
        self.timestamp
    }

    #[inline]
    pub fn percent(&self) -> Percent {
        self.percent
    }
}

impl<T: PrimInt + Display> Display for LogEntry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry({} @ {}, {})",
            self.room_id,
            self.timestamp.value(),
            self.percent
        )
    }
}
