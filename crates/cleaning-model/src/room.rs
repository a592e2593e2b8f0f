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

use cleaning_core::{area::Area, length::Length};
use cleaning_dsa::sort::RadixKey;
use std::fmt::Display;

use crate::{err::ZeroDimensionError, id::RoomId};

/// A room with its floor dimensions in feet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Room {
    id: RoomId,
    length: Length,
    width: Length,
}

impl Room {
    /// Creates a room, rejecting a zero length or width.
    pub fn try_new(
        id: impl Into<RoomId>,
        length: Length,
        width: Length,
    ) -> Result<Self, ZeroDimensionError> {
        let id = id.into();
        if length.is_zero() || width.is_zero() {
            return Err(ZeroDimensionError::new(id, length, width));
        }
        Ok(Self { id, length, width })
    }

    #[inline]
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    #[inline]
    pub fn length(&self) -> Length {
        self.length
    }

    #[inline]
    pub fn width(&self) -> Length {
        self.width
    }

    #[inline]
    pub fn area(&self) -> Area {
        self.length * self.width
    }
}

impl Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room({}, {}x{})",
            self.id,
            self.length.value(),
            self.width.value()
        )
    }
}

impl RadixKey for Room {
    #[inline]
    fn radix_key(&self) -> &[u8] {
        self.id.radix_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_length_times_width() {
        let room = Room::try_new("Kitchen", Length::new(20), Length::new(15)).unwrap();
        assert_eq!(room.area(), Area::new(300));
        assert_eq!(room.id().as_str(), "Kitchen");
        assert_eq!(room.to_string(), "Room(Kitchen, 20x15)");
    }

    #[test]
    fn test_area_of_largest_room() {
        let room = Room::try_new("Hangar", Length::new(u32::MAX), Length::new(u32::MAX)).unwrap();
        assert_eq!(room.area(), Area::new(i128::from(u32::MAX) * i128::from(u32::MAX)));
        assert_eq!(room.area().percent_of(100), room.area());
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        let err = Room::try_new("Closet", Length::new(0), Length::new(3)).unwrap_err();
        assert_eq!(err.room_id().as_str(), "Closet");
        assert!(Room::try_new("Closet", Length::new(3), Length::zero()).is_err());
    }

    #[test]
    fn test_radix_key_is_id() {
        let room = Room::try_new("Foyer", Length::new(1), Length::new(1)).unwrap();
        assert_eq!(room.radix_key(), b"Foyer");
    }
}
