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

//! Associative maps.
//!
//! Three backends implement [`Map`]:
//!
//! - [`UnorderedLinkedMap`]: a singly-linked association list. Linear lookups,
//!   no ordering guarantee on iteration.
//! - [`SearchTableMap`]: a sorted array searched by bisection. Iterates in
//!   ascending key order.
//! - [`SkipListMap`]: a probabilistic ordered structure with expected
//!   logarithmic search and insert. Iterates in ascending key order.
//!
//! All three hold the same logical content for the same sequence of `put`s;
//! only iteration order and complexity differ. Code that needs a particular
//! order must sort the entries itself.

pub mod linked;
pub mod search_table;
pub mod skiplist;

use crate::{
    err::{KeyNotFoundError, KindCategory, UnsupportedKindError},
    normalize_kind_name,
};
use std::{fmt::Display, str::FromStr};

pub use linked::{UnorderedLinkedMap, UnorderedLinkedMapIter};
pub use search_table::{SearchTableMap, SearchTableMapIter};
pub use skiplist::{SkipListConfig, SkipListMap, SkipListMapIter};

pub trait Map<K, V> {
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)> + 'a
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn get(&self, key: &K) -> Option<&V>;

    /// Binds `value` to `key`, returning the value it replaced, if any.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    fn len(&self) -> usize;

    fn iter(&self) -> Self::Iter<'_>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    fn try_get(&self, key: &K) -> Result<&V, KeyNotFoundError<K>>
    where
        K: Clone,
    {
        self.get(key)
            .ok_or_else(|| KeyNotFoundError::new(key.clone()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapKind {
    UnorderedLinked,
    SearchTable,
    #[default]
    SkipList,
}

impl MapKind {
    pub const ALL: [MapKind; 3] = [MapKind::UnorderedLinked, MapKind::SearchTable, MapKind::SkipList];

    /// Whether iteration yields keys in ascending order.
    #[inline]
    pub fn is_ordered(self) -> bool {
        !matches!(self, MapKind::UnorderedLinked)
    }

    #[inline]
    pub fn create<K: Ord, V>(self, skip_list: SkipListConfig) -> AnyMap<K, V> {
        match self {
            MapKind::UnorderedLinked => AnyMap::UnorderedLinked(UnorderedLinkedMap::new()),
            MapKind::SearchTable => AnyMap::SearchTable(SearchTableMap::new()),
            MapKind::SkipList => AnyMap::SkipList(SkipListMap::new(skip_list)),
        }
    }
}

impl Display for MapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapKind::UnorderedLinked => write!(f, "unordered-linked"),
            MapKind::SearchTable => write!(f, "search-table"),
            MapKind::SkipList => write!(f, "skip-list"),
        }
    }
}

impl FromStr for MapKind {
    type Err = UnsupportedKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_kind_name(s).as_str() {
            "unorderedlinked" | "unorderedlinkedmap" => Ok(MapKind::UnorderedLinked),
            "searchtable" | "searchtablemap" => Ok(MapKind::SearchTable),
            "skiplist" | "skiplistmap" => Ok(MapKind::SkipList),
            _ => Err(UnsupportedKindError::new(KindCategory::Map, s)),
        }
    }
}

#[derive(Debug)]
pub enum AnyMap<K, V> {
    UnorderedLinked(UnorderedLinkedMap<K, V>),
    SearchTable(SearchTableMap<K, V>),
    SkipList(SkipListMap<K, V>),
}

impl<K, V> AnyMap<K, V> {
    #[inline]
    pub fn kind(&self) -> MapKind {
        match self {
            AnyMap::UnorderedLinked(_) => MapKind::UnorderedLinked,
            AnyMap::SearchTable(_) => MapKind::SearchTable,
            AnyMap::SkipList(_) => MapKind::SkipList,
        }
    }
}

pub enum AnyMapIter<'a, K, V> {
    UnorderedLinked(UnorderedLinkedMapIter<'a, K, V>),
    SearchTable(SearchTableMapIter<'a, K, V>),
    SkipList(SkipListMapIter<'a, K, V>),
}

impl<'a, K, V> Iterator for AnyMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            AnyMapIter::UnorderedLinked(it) => it.next(),
            AnyMapIter::SearchTable(it) => it.next(),
            AnyMapIter::SkipList(it) => it.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            AnyMapIter::UnorderedLinked(it) => it.size_hint(),
            AnyMapIter::SearchTable(it) => it.size_hint(),
            AnyMapIter::SkipList(it) => it.size_hint(),
        }
    }
}

impl<K: Ord, V> Map<K, V> for AnyMap<K, V> {
    type Iter<'a>
        = AnyMapIter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        match self {
            AnyMap::UnorderedLinked(m) => m.get(key),
            AnyMap::SearchTable(m) => m.get(key),
            AnyMap::SkipList(m) => m.get(key),
        }
    }

    #[inline]
    fn put(&mut self, key: K, value: V) -> Option<V> {
        match self {
            AnyMap::UnorderedLinked(m) => m.put(key, value),
            AnyMap::SearchTable(m) => m.put(key, value),
            AnyMap::SkipList(m) => m.put(key, value),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        match self {
            AnyMap::UnorderedLinked(m) => m.len(),
            AnyMap::SearchTable(m) => m.len(),
            AnyMap::SkipList(m) => m.len(),
        }
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        match self {
            AnyMap::UnorderedLinked(m) => AnyMapIter::UnorderedLinked(m.iter()),
            AnyMap::SearchTable(m) => AnyMapIter::SearchTable(m.iter()),
            AnyMap::SkipList(m) => AnyMapIter::SkipList(m.iter()),
        }
    }
}
