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

struct Node<K, V> {
    key: K,
    value: V,
    next: Option<Box<Node<K, V>>>,
}

/// Association list. New keys are pushed at the front, so iteration yields
/// the most recently inserted key first.
pub struct UnorderedLinkedMap<K, V> {
    head: Option<Box<Node<K, V>>>,
    len: usize,
}

impl<K, V> Default for UnorderedLinkedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> UnorderedLinkedMap<K, V> {
    #[inline]
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }
}

impl<K, V> Drop for UnorderedLinkedMap<K, V> {
    // Unlink iteratively; the default recursive drop would overflow the stack
    // on long lists.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<K: Debug, V: Debug> Debug for UnorderedLinkedMap<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter_entries()).finish()
    }
}

impl<K, V> UnorderedLinkedMap<K, V> {
    #[inline]
    fn iter_entries(&self) -> UnorderedLinkedMapIter<'_, K, V> {
        UnorderedLinkedMapIter {
            cursor: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<K: Eq, V> Map<K, V> for UnorderedLinkedMap<K, V> {
    type Iter<'a>
        = UnorderedLinkedMapIter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn get(&self, key: &K) -> Option<&V> {
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            if node.key == *key {
                return Some(&node.value);
            }
            cur = node.next.as_deref();
        }
        None
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            if node.key == key {
                return Some(std::mem::replace(&mut node.value, value));
            }
            cur = node.next.as_deref_mut();
        }
        let old_head = self.head.take();
        self.head = Some(Box::new(Node {
            key,
            value,
            next: old_head,
        }));
        self.len += 1;
        None
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.iter_entries()
    }
}

pub struct UnorderedLinkedMapIter<'a, K, V> {
    cursor: Option<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for UnorderedLinkedMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_replace() {
        let mut m = UnorderedLinkedMap::new();
        assert!(m.is_empty());
        assert_eq!(m.put("Foyer", 1), None);
        assert_eq!(m.put("Office", 2), None);
        assert_eq!(m.put("Foyer", 3), Some(1));
        assert_eq!(m.len(), 2);
        assert_eq!(m.get(&"Foyer"), Some(&3));
        assert_eq!(m.get(&"Office"), Some(&2));
        assert_eq!(m.get(&"Kitchen"), None);
    }

    #[test]
    fn test_iteration_is_most_recent_insert_first() {
        let mut m = UnorderedLinkedMap::new();
        m.put(1, 'a');
        m.put(2, 'b');
        m.put(3, 'c');
        m.put(2, 'z');
        let keys: Vec<i32> = m.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![3, 2, 1]);
        assert_eq!(m.iter().size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_long_list_drops_without_recursion() {
        let mut m = UnorderedLinkedMap::new();
        let mut cur = None;
        // Bypass the O(n) duplicate check to build a deep list quickly.
        for i in 0..200_000u32 {
            cur = Some(Box::new(Node {
                key: i,
                value: (),
                next: cur,
            }));
        }
        m.head = cur;
        m.len = 200_000;
        assert_eq!(m.len(), 200_000);
        drop(m);
    }

    #[test]
    fn test_debug_lists_entries() {
        let mut m = UnorderedLinkedMap::new();
        m.put(1, "one");
        assert_eq!(format!("{:?}", m), "{1: \"one\"}");
    }
}
