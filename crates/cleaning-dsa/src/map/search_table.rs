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

use super::Map;
use std::fmt::Debug;

/// Sorted array of entries located by binary search.
///
/// Lookups are `O(log n)`; inserting a new key shifts the tail and is `O(n)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SearchTableMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for SearchTableMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> SearchTableMap<K, V> {
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Ord, V> SearchTableMap<K, V> {
    #[inline]
    fn locate(&self, key: &K) -> Result<usize, usize> {
        self.entries.binary_search_by(|(k, _)| k.cmp(key))
    }
}

impl<K: Debug, V: Debug> Debug for SearchTableMap<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K: Ord, V> Map<K, V> for SearchTableMap<K, V> {
    type Iter<'a>
        = SearchTableMapIter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        self.locate(key).ok().map(|i| &self.entries[i].1)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.locate(&key) {
            Ok(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            Err(i) => {
                self.entries.insert(i, (key, value));
                None
            }
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        SearchTableMapIter {
            inner: self.entries.iter(),
        }
    }
}

pub struct SearchTableMapIter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for SearchTableMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_stay_sorted() {
        let mut m = SearchTableMap::new();
        for k in ["Office", "Foyer", "Kitchen", "Dining Room", "Foyer"] {
            m.put(k, k.len());
        }
        let keys: Vec<&str> = m.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["Dining Room", "Foyer", "Kitchen", "Office"]);
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn test_put_replaces_existing() {
        let mut m = SearchTableMap::new();
        assert_eq!(m.put(7, "a"), None);
        assert_eq!(m.put(7, "b"), Some("a"));
        assert_eq!(m.get(&7), Some(&"b"));
        assert_eq!(m.get(&8), None);
    }
}
