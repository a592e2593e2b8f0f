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

//! Sorting algorithms.
//!
//! Comparison sorters take a caller-supplied comparator and are **stable**:
//! callers rely on stability when a comparator only orders part of a record.
//! Non-comparison sorters read a byte key from each element through
//! [`RadixKey`] and never compare whole elements.
//!
//! Elements are only ever swapped, never cloned: insertion sort swaps
//! neighbours directly, the others compute a permutation of indices first and
//! then apply it in place.

pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;

use crate::{
    err::{KindCategory, UnsupportedKindError},
    normalize_kind_name,
};
use std::{cmp::Ordering, fmt::Display, str::FromStr};

/// Exposes the byte string a non-comparison sorter orders by.
///
/// Byte strings are ordered lexicographically, a proper prefix sorting
/// before any extension of it.
pub trait RadixKey {
    fn radix_key(&self) -> &[u8];
}

impl RadixKey for str {
    #[inline]
    fn radix_key(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl RadixKey for String {
    #[inline]
    fn radix_key(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl RadixKey for [u8] {
    #[inline]
    fn radix_key(&self) -> &[u8] {
        self
    }
}

impl<T: RadixKey + ?Sized> RadixKey for &T {
    #[inline]
    fn radix_key(&self) -> &[u8] {
        (**self).radix_key()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComparisonSortKind {
    #[default]
    MergeSort,
    InsertionSort,
}

impl ComparisonSortKind {
    pub const ALL: [ComparisonSortKind; 2] =
        [ComparisonSortKind::MergeSort, ComparisonSortKind::InsertionSort];

    #[inline]
    pub fn sort_by<E, F>(self, data: &mut [E], cmp: F)
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        match self {
            ComparisonSortKind::MergeSort => merge::merge_sort_by(data, cmp),
            ComparisonSortKind::InsertionSort => insertion::insertion_sort_by(data, cmp),
        }
    }
}

impl Display for ComparisonSortKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparisonSortKind::MergeSort => write!(f, "merge-sort"),
            ComparisonSortKind::InsertionSort => write!(f, "insertion-sort"),
        }
    }
}

impl FromStr for ComparisonSortKind {
    type Err = UnsupportedKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_kind_name(s).as_str() {
            "merge" | "mergesort" => Ok(ComparisonSortKind::MergeSort),
            "insertion" | "insertionsort" => Ok(ComparisonSortKind::InsertionSort),
            _ => Err(UnsupportedKindError::new(KindCategory::ComparisonSort, s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NonComparisonSortKind {
    Radix,
    #[default]
    Quicksort,
}

impl NonComparisonSortKind {
    pub const ALL: [NonComparisonSortKind; 2] =
        [NonComparisonSortKind::Radix, NonComparisonSortKind::Quicksort];

    #[inline]
    pub fn sort<E: RadixKey>(self, data: &mut [E]) {
        match self {
            NonComparisonSortKind::Radix => radix::radix_sort(data),
            NonComparisonSortKind::Quicksort => quick::radix_quicksort(data),
        }
    }
}

impl Display for NonComparisonSortKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NonComparisonSortKind::Radix => write!(f, "radix"),
            NonComparisonSortKind::Quicksort => write!(f, "quicksort"),
        }
    }
}

impl FromStr for NonComparisonSortKind {
    type Err = UnsupportedKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_kind_name(s).as_str() {
            "radix" | "radixsort" | "lsdradix" => Ok(NonComparisonSortKind::Radix),
            "quick" | "quicksort" | "radixquicksort" => Ok(NonComparisonSortKind::Quicksort),
            _ => Err(UnsupportedKindError::new(KindCategory::NonComparisonSort, s)),
        }
    }
}

/// Rearranges `data` so that position `k` receives the element previously at
/// `order[k]`. `order` must be a permutation of `0..data.len()`; it is
/// consumed as scratch space.
pub(crate) fn apply_permutation<E>(data: &mut [E], order: &mut [usize]) {
    debug_assert_eq!(data.len(), order.len());
    for start in 0..order.len() {
        if order[start] == start {
            continue;
        }
        // `data[pos]` holds the element originally at `start` throughout the cycle.
        let mut pos = start;
        loop {
            let next = order[pos];
            order[pos] = pos;
            if next == start {
                break;
            }
            data.swap(pos, next);
            pos = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_apply_permutation() {
        let mut data = vec!['a', 'b', 'c', 'd'];
        let mut order = vec![2, 0, 3, 1];
        apply_permutation(&mut data, &mut order);
        assert_eq!(data, vec!['c', 'a', 'd', 'b']);
    }

    #[test]
    fn test_apply_identity_permutation() {
        let mut data = vec![1, 2, 3];
        let mut order = vec![0, 1, 2];
        apply_permutation(&mut data, &mut order);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_comparison_kinds_are_stable() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xBEEF);
        let base: Vec<(u8, usize)> = (0..400).map(|i| (rng.random_range(0..10), i)).collect();
        let mut expected = base.clone();
        expected.sort_by(|a, b| a.0.cmp(&b.0));
        for kind in ComparisonSortKind::ALL {
            let mut data = base.clone();
            kind.sort_by(&mut data, |a, b| a.0.cmp(&b.0));
            assert_eq!(data, expected, "{kind} is not stable");
        }
    }

    #[test]
    fn test_non_comparison_kinds_match_lexicographic_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xFACE);
        let alphabet = b"abcAB -";
        let base: Vec<String> = (0..300)
            .map(|_| {
                let len = rng.random_range(0..6);
                (0..len)
                    .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
                    .collect()
            })
            .collect();
        let mut expected = base.clone();
        expected.sort();
        for kind in NonComparisonSortKind::ALL {
            let mut data = base.clone();
            kind.sort(&mut data);
            assert_eq!(data, expected, "{kind}");
        }
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("MERGESORT".parse(), Ok(ComparisonSortKind::MergeSort));
        assert_eq!("insertion-sort".parse(), Ok(ComparisonSortKind::InsertionSort));
        assert_eq!("QUICKSORT".parse(), Ok(NonComparisonSortKind::Quicksort));
        assert_eq!("radix".parse(), Ok(NonComparisonSortKind::Radix));
        for kind in ComparisonSortKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
        for kind in NonComparisonSortKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
        let err = "heapsort".parse::<ComparisonSortKind>().unwrap_err();
        assert_eq!(err.category(), KindCategory::ComparisonSort);
        let err = "bucket".parse::<NonComparisonSortKind>().unwrap_err();
        assert_eq!(err.category(), KindCategory::NonComparisonSort);
    }
}
