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

use cleaning_dsa::err::DsaConfigError;
use cleaning_model::id::RoomId;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRoomError {
    room_id: RoomId,
}

impl DuplicateRoomError {
    pub fn new(room_id: RoomId) -> Self {
        Self { room_id }
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }
}

impl Display for DuplicateRoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room '{}' appears more than once", self.room_id)
    }
}

impl std::error::Error for DuplicateRoomError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerBuildError {
    Config(DsaConfigError),
    DuplicateRoom(DuplicateRoomError),
}

impl Display for ManagerBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManagerBuildError::Config(e) => write!(f, "{}", e),
            ManagerBuildError::DuplicateRoom(e) => write!(f, "{}", e),
        }
    }
}

impl From<DsaConfigError> for ManagerBuildError {
    fn from(err: DsaConfigError) -> Self {
        ManagerBuildError::Config(err)
    }
}

impl From<DuplicateRoomError> for ManagerBuildError {
    fn from(err: DuplicateRoomError) -> Self {
        ManagerBuildError::DuplicateRoom(err)
    }
}

impl std::error::Error for ManagerBuildError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTimestampError {
    input: String,
}

impl InvalidTimestampError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for InvalidTimestampError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date & time must be in the format: MM/DD/YYYY HH:MM:SS")
    }
}

impl std::error::Error for InvalidTimestampError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    NonPositiveRoomCount,
    InvalidTimestamp(InvalidTimestampError),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::NonPositiveRoomCount => write!(f, "Number of rooms must be greater than 0."),
            ReportError::InvalidTimestamp(e) => write!(f, "{}", e),
        }
    }
}

impl From<InvalidTimestampError> for ReportError {
    fn from(err: InvalidTimestampError) -> Self {
        ReportError::InvalidTimestamp(err)
    }
}

impl std::error::Error for ReportError {}
