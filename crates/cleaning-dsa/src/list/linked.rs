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

use super::IndexedList;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly-linked sequence.
///
/// Nodes live in an arena and refer to each other by index, so there are no
/// cyclic owning pointers. Nothing is ever unlinked, which keeps the arena dense.
/// Positional reads walk from whichever end is closer.
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    #[inline]
    fn node_at(&self, index: usize) -> Option<usize> {
        let len = self.nodes.len();
        if index >= len {
            return None;
        }
        if index < len / 2 {
            let mut cur = self.head;
            for _ in 0..index {
                cur = cur.and_then(|i| self.nodes[i].next);
            }
            cur
        } else {
            let mut cur = self.tail;
            for _ in 0..(len - 1 - index) {
                cur = cur.and_then(|i| self.nodes[i].prev);
            }
            cur
        }
    }
}

impl<T> IndexedList<T> for LinkedList<T> {
    type Iter<'a>
        = LinkedListIter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add_first(&mut self, value: T) {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old) => self.nodes[old].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    fn add_last(&mut self, value: T) {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old) => self.nodes[old].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(|i| &self.nodes[i].value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        LinkedListIter {
            list: self,
            cursor: self.head,
            remaining: self.nodes.len(),
        }
    }

    #[inline]
    fn first(&self) -> Option<&T> {
        self.head.map(|i| &self.nodes[i].value)
    }

    #[inline]
    fn last(&self) -> Option<&T> {
        self.tail.map(|i| &self.nodes[i].value)
    }
}

pub struct LinkedListIter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedListIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = &self.list.nodes[idx];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedListIter<'_, T> {}

impl<T> std::iter::FusedIterator for LinkedListIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let l: LinkedList<u8> = LinkedList::new();
        assert!(l.is_empty());
        assert_eq!(l.first(), None);
        assert_eq!(l.last(), None);
        assert_eq!(l.get(0), None);
        assert_eq!(l.iter().next(), None);
    }

    #[test]
    fn test_mixed_insertion_keeps_order() {
        let mut l = LinkedList::new();
        l.add_last(3);
        l.add_first(2);
        l.add_last(4);
        l.add_first(1);
        l.add_last(5);
        assert_eq!(l.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        for i in 0..5 {
            assert_eq!(l.get(i), Some(&(i as i32 + 1)), "index {i}");
        }
        assert_eq!(l.first(), Some(&1));
        assert_eq!(l.last(), Some(&5));
    }

    #[test]
    fn test_get_walks_from_both_ends() {
        let mut l = LinkedList::new();
        for v in 0..101 {
            l.add_last(v);
        }
        assert_eq!(l.get(3), Some(&3));
        assert_eq!(l.get(50), Some(&50));
        assert_eq!(l.get(97), Some(&97));
        assert_eq!(l.get(100), Some(&100));
        assert_eq!(l.get(101), None);
    }

    #[test]
    fn test_iter_size_hint_is_exact() {
        let mut l = LinkedList::new();
        l.add_last("a");
        l.add_last("b");
        let mut it = l.iter();
        assert_eq!(it.len(), 2);
        it.next();
        assert_eq!(it.len(), 1);
        it.next();
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
    }
}
