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

//! # Cleaning Core (`cleaning-core`)
//!
//! Foundational, type-safe primitives shared by every crate of the cleaning log
//! engine. The crate deliberately knows nothing about rooms, logs or containers;
//! it only fixes the vocabulary in which those are expressed.
//!
//! - **Time**: [`time::TimePoint`] marks the instant a cleaning happened,
//!   [`time::TimeDelta`] the distance between two instants.
//! - **Space**: [`length::Length`] is one side of a room, [`area::Area`] the
//!   square footage derived from two of them.
//!
//! Distinct newtypes keep the arithmetic honest at compile time: a `Length`
//! times a `Length` is an `Area`, and two `TimePoint`s cannot be added.

use num_traits::{PrimInt, Signed, Zero};
use std::fmt::{Debug, Display};

pub mod area;
pub mod length;
pub mod time;

pub trait TimeVariable: PrimInt + Signed + Zero + Send + Sync + Debug + Display {}
impl<T> TimeVariable for T where T: PrimInt + Signed + Zero + Send + Sync + Debug + Display {}
