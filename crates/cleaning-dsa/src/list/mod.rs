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

//! Positional sequences.
//!
//! Two interchangeable backends implement [`IndexedList`]: a contiguous
//! [`ArrayBasedList`] and a doubly-linked [`LinkedList`]. Callers usually hold
//! the tagged [`Sequence`] produced by the factory and never learn which one
//! they got.

pub mod array;
pub mod linked;

use crate::{
    err::{KindCategory, UnsupportedKindError},
    normalize_kind_name,
};
use std::{fmt::Display, str::FromStr};

pub use array::ArrayBasedList;
pub use linked::{LinkedList, LinkedListIter};

pub trait IndexedList<T> {
    type Iter<'a>: Iterator<Item = &'a T> + 'a
    where
        Self: 'a,
        T: 'a;

    fn add_first(&mut self, value: T);

    fn add_last(&mut self, value: T);

    /// Positional read; `None` past the end.
    fn get(&self, index: usize) -> Option<&T>;

    fn len(&self) -> usize;

    fn iter(&self) -> Self::Iter<'_>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn first(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline]
    fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SequenceKind {
    #[default]
    ArrayBased,
    Linked,
}

impl SequenceKind {
    pub const ALL: [SequenceKind; 2] = [SequenceKind::ArrayBased, SequenceKind::Linked];

    #[inline]
    pub fn create<T>(self) -> Sequence<T> {
        match self {
            SequenceKind::ArrayBased => Sequence::ArrayBased(ArrayBasedList::new()),
            SequenceKind::Linked => Sequence::Linked(LinkedList::new()),
        }
    }
}

impl Display for SequenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceKind::ArrayBased => write!(f, "array-based"),
            SequenceKind::Linked => write!(f, "linked"),
        }
    }
}

impl FromStr for SequenceKind {
    type Err = UnsupportedKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_kind_name(s).as_str() {
            "array" | "arraybased" | "arraybasedlist" => Ok(SequenceKind::ArrayBased),
            "linked" | "linkedlist" | "doublylinkedlist" => Ok(SequenceKind::Linked),
            _ => Err(UnsupportedKindError::new(KindCategory::Sequence, s)),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Sequence<T> {
    ArrayBased(ArrayBasedList<T>),
    Linked(LinkedList<T>),
}

impl<T> Sequence<T> {
    #[inline]
    pub fn kind(&self) -> SequenceKind {
        match self {
            Sequence::ArrayBased(_) => SequenceKind::ArrayBased,
            Sequence::Linked(_) => SequenceKind::Linked,
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        SequenceKind::default().create()
    }
}

pub enum SequenceIter<'a, T> {
    ArrayBased(std::slice::Iter<'a, T>),
    Linked(LinkedListIter<'a, T>),
}

impl<'a, T> Iterator for SequenceIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SequenceIter::ArrayBased(it) => it.next(),
            SequenceIter::Linked(it) => it.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            SequenceIter::ArrayBased(it) => it.size_hint(),
            SequenceIter::Linked(it) => it.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for SequenceIter<'_, T> {}

impl<T> IndexedList<T> for Sequence<T> {
    type Iter<'a>
        = SequenceIter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn add_first(&mut self, value: T) {
        match self {
            Sequence::ArrayBased(l) => l.add_first(value),
            Sequence::Linked(l) => l.add_first(value),
        }
    }

    #[inline]
    fn add_last(&mut self, value: T) {
        match self {
            Sequence::ArrayBased(l) => l.add_last(value),
            Sequence::Linked(l) => l.add_last(value),
        }
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        match self {
            Sequence::ArrayBased(l) => l.get(index),
            Sequence::Linked(l) => l.get(index),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        match self {
            Sequence::ArrayBased(l) => l.len(),
            Sequence::Linked(l) => l.len(),
        }
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        match self {
            Sequence::ArrayBased(l) => SequenceIter::ArrayBased(l.iter()),
            Sequence::Linked(l) => SequenceIter::Linked(l.iter()),
        }
    }
}

/// Equality is by content, so an array-based and a linked sequence holding the
/// same elements in the same order compare equal.
impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.add_last(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(kind: SequenceKind, values: &[i32]) -> Sequence<i32> {
        let mut s = kind.create();
        s.extend(values.iter().copied());
        s
    }

    #[test]
    fn test_kinds_behave_identically() {
        for kind in SequenceKind::ALL {
            let mut s: Sequence<i32> = kind.create();
            assert!(s.is_empty());
            assert_eq!(s.first(), None);
            assert_eq!(s.last(), None);

            s.add_last(2);
            s.add_last(3);
            s.add_first(1);

            assert_eq!(s.kind(), kind);
            assert_eq!(s.len(), 3);
            assert_eq!(s.get(0), Some(&1));
            assert_eq!(s.get(1), Some(&2));
            assert_eq!(s.get(2), Some(&3));
            assert_eq!(s.get(3), None);
            assert_eq!(s.first(), Some(&1));
            assert_eq!(s.last(), Some(&3));
            assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
            assert_eq!(s.iter().len(), 3);
        }
    }

    #[test]
    fn test_equality_across_kinds() {
        let a = filled(SequenceKind::ArrayBased, &[5, 4, 3]);
        let b = filled(SequenceKind::Linked, &[5, 4, 3]);
        let c = filled(SequenceKind::Linked, &[5, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("ArrayBasedList".parse(), Ok(SequenceKind::ArrayBased));
        assert_eq!("array-based".parse(), Ok(SequenceKind::ArrayBased));
        assert_eq!("linked_list".parse(), Ok(SequenceKind::Linked));
        let err = "ring".parse::<SequenceKind>().unwrap_err();
        assert_eq!(err.category(), KindCategory::Sequence);
        assert_eq!(err.name(), "ring");
    }

    #[test]
    fn test_kind_display_round_trips() {
        for kind in SequenceKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }
}
