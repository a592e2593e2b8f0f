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

//! Rendering and parsing of timestamps as `MM/dd/yyyy HH:mm:ss`.
//!
//! Timestamps are read as Unix seconds in UTC.

use chrono::{DateTime, NaiveDateTime};
use cleaning_core::{TimeVariable, time::TimePoint};
use num_traits::NumCast;

use crate::err::InvalidTimestampError;

pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

pub fn parse_timestamp<T: TimeVariable>(input: &str) -> Result<TimePoint<T>, InvalidTimestampError> {
    let parsed = NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT)
        .map_err(|_| InvalidTimestampError::new(input))?;
    let seconds: T =
        NumCast::from(parsed.and_utc().timestamp()).ok_or_else(|| InvalidTimestampError::new(input))?;
    Ok(TimePoint::new(seconds))
}

/// Formats `timestamp`; values outside chrono's range fall back to the raw
/// number of seconds.
pub fn format_timestamp<T: TimeVariable>(timestamp: TimePoint<T>) -> String {
    timestamp
        .value()
        .to_i64()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| timestamp.value().to_string())
}
