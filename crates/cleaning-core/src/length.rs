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

use crate::area::Area;
use std::ops::Mul;

/// One side of a rectangular room, in feet.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Length(u32);

impl std::fmt::Display for Length {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Length({})", self.0)
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(v: u32) -> Self {
        Length(v)
    }
}

impl Length {
    #[inline]
    pub const fn new(v: u32) -> Self {
        Length(v)
    }

    #[inline]
    pub const fn zero() -> Self {
        Length(0)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Mul for Length {
    type Output = Area;

    #[inline]
    fn mul(self, rhs: Length) -> Self::Output {
        Area::new(i128::from(self.0) * i128::from(rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_creation_and_display() {
        let l = Length::new(12);
        assert_eq!(l.value(), 12);
        assert_eq!(format!("{}", l), "Length(12)");
        assert!(Length::zero().is_zero());
        assert!(!l.is_zero());
    }

    #[test]
    fn test_length_times_length_is_area() {
        assert_eq!(Length::new(20) * Length::new(15), Area::new(300));
    }

    #[test]
    fn test_length_product_does_not_overflow() {
        let side = Length::new(u32::MAX);
        assert_eq!((side * side).value(), 18_446_744_065_119_617_025);
    }
}
