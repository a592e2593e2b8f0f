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

use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Sub},
};

/// Square footage.
///
/// Signed so that a remaining bag capacity can drop below zero once a bag is
/// overdue for replacement. Backed by `i128` so that the product of two `u32`
/// sides, scaled by a percentage, always fits.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Area(i128);

impl Area {
    #[inline]
    pub const fn new(value: i128) -> Self {
        Area(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Area(0)
    }

    #[inline]
    pub const fn value(self) -> i128 {
        self.0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// The share of `self` covered by `percent` percent, truncated towards zero.
    ///
    /// ```
    /// use cleaning_core::area::Area;
    ///
    /// assert_eq!(Area::new(300).percent_of(33), Area::new(99));
    /// assert_eq!(Area::new(7).percent_of(50), Area::new(3));
    /// ```
    #[inline]
    pub fn percent_of(self, percent: u8) -> Self {
        let scaled = self
            .0
            .checked_mul(i128::from(percent))
            .expect("overflow in Area * percent");
        Area(scaled / 100)
    }
}

impl Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Area({})", self.0)
    }
}

impl From<i128> for Area {
    #[inline]
    fn from(v: i128) -> Self {
        Area(v)
    }
}

impl Add for Area {
    type Output = Area;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Area(self.0.checked_add(rhs.0).expect("overflow in Area + Area"))
    }
}

impl Sub for Area {
    type Output = Area;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Area(self.0.checked_sub(rhs.0).expect("underflow in Area - Area"))
    }
}

impl Sum for Area {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Area::zero(), |a, b| a + b)
    }
}

impl<'a> Sum<&'a Area> for Area {
    #[inline]
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Area::zero(), |a, b| a + *b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_display() {
        assert_eq!(format!("{}", Area::new(5280)), "Area(5280)");
    }

    #[test]
    fn test_area_percent_truncates() {
        assert_eq!(Area::new(100).percent_of(50), Area::new(50));
        assert_eq!(Area::new(100).percent_of(100), Area::new(100));
        assert_eq!(Area::new(99).percent_of(51), Area::new(50));
        assert_eq!(Area::new(100).percent_of(0), Area::zero());
    }

    #[test]
    fn test_area_percent_of_largest_room() {
        let largest = Area::new(i128::from(u32::MAX) * i128::from(u32::MAX));
        assert_eq!(largest.percent_of(100), largest);
        assert_eq!(largest.percent_of(50), Area::new(largest.value() / 2));
    }

    #[test]
    fn test_area_arithmetic_and_sign() {
        let cap = Area::new(5280);
        let used = Area::new(5300);
        let remaining = cap - used;
        assert_eq!(remaining, Area::new(-20));
        assert!(remaining.is_negative());
        assert_eq!(remaining + Area::new(30), Area::new(10));
    }

    #[test]
    fn test_area_sum() {
        let parts = [Area::new(1), Area::new(2), Area::new(3)];
        let by_ref: Area = parts.iter().sum();
        let by_val: Area = parts.into_iter().sum();
        assert_eq!(by_ref, Area::new(6));
        assert_eq!(by_val, Area::new(6));
    }

    #[test]
    #[should_panic(expected = "overflow in Area + Area")]
    fn test_area_add_overflow_panics() {
        let _ = Area::new(i128::MAX) + Area::new(1);
    }
}
