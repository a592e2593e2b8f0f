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

use crate::id::RoomId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroDimensionError {
    room_id: RoomId,
    length: Length,
    width: Length,
}

impl ZeroDimensionError {
    pub fn new(room_id: RoomId, length: Length, width: Length) -> Self {
        Self {
            room_id,
            length,
            width,
        }
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn width(&self) -> Length {
        self.width
    }
}

impl Display for ZeroDimensionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room '{}' must have a positive length and width, got {} x {}",
            self.room_id, self.length, self.width
        )
    }
}

impl std::error::Error for ZeroDimensionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentOutOfRangeError {
    value: u8,
}

impl PercentOutOfRangeError {
    pub fn new(value: u8) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}

impl Display for PercentOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Percent completed must lie in 0..=100, got {}",
            self.value
        )
    }
}

impl std::error::Error for PercentOutOfRangeError {}
