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

//! Skip list map.
//!
//! A skip list keeps its keys in a sorted singly-linked "express lane" tower:
//! level 0 links every node, and each higher level links a random subset of
//! the level below. Every inserted node is promoted one level further with
//! probability 1/2, which gives expected `O(log n)` search and insert without
//! any rebalancing.
//!
//! Nodes are stored in an arena (`Vec`) and refer to their successors by
//! index. Each node owns exactly its own forward links, one per level it
//! participates in; no back links are kept since only forward traversal is
//! ever needed.

use super::Map;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::{cmp::Ordering, fmt::Debug};

/// Highest tower a skip list may be configured with.
pub const SKIP_LIST_LEVEL_LIMIT: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkipListConfig {
    pub max_level: usize,
    pub seed: u64,
}

impl Default for SkipListConfig {
    fn default() -> Self {
        Self {
            max_level: 16,
            seed: 0x5C1F_F00D,
        }
    }
}

#[derive(Debug, Clone)]
struct SkipNode<K, V> {
    key: K,
    value: V,
    forward: Vec<Option<usize>>,
}

#[derive(Clone)]
pub struct SkipListMap<K, V> {
    head: Vec<Option<usize>>,
    nodes: Vec<SkipNode<K, V>>,
    level: usize,
    rng: SmallRng,
}

impl<K, V> Default for SkipListMap<K, V> {
    fn default() -> Self {
        Self::new(SkipListConfig::default())
    }
}

impl<K, V> SkipListMap<K, V> {
    /// Creates an empty skip list. `config.max_level` is clamped into
    /// `1..=SKIP_LIST_LEVEL_LIMIT`.
    pub fn new(config: SkipListConfig) -> Self {
        let max_level = config.max_level.clamp(1, SKIP_LIST_LEVEL_LIMIT);
        Self {
            head: vec![None; max_level],
            nodes: Vec::new(),
            level: 1,
            rng: SmallRng::seed_from_u64(config.seed),
        }
    }

    #[inline]
    pub fn max_level(&self) -> usize {
        self.head.len()
    }

    /// Number of levels currently in use.
    #[inline]
    pub fn height(&self) -> usize {
        self.level
    }

    #[inline]
    fn forward_of(&self, at: Option<usize>, level: usize) -> Option<usize> {
        match at {
            None => self.head[level],
            Some(i) => self.nodes[i].forward[level],
        }
    }

    #[inline]
    fn set_forward(&mut self, at: Option<usize>, level: usize, to: Option<usize>) {
        match at {
            None => self.head[level] = to,
            Some(i) => self.nodes[i].forward[level] = to,
        }
    }

    fn random_level(&mut self) -> usize {
        let mut level = 1;
        while level < self.max_level() && self.rng.random_bool(0.5) {
            level += 1;
        }
        level
    }
}

impl<K: Debug, V: Debug> Debug for SkipListMap<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = SkipListMapIter {
            map: self,
            cursor: self.head[0],
            remaining: self.nodes.len(),
        };
        f.debug_map().entries(entries).finish()
    }
}

impl<K: Ord, V> Map<K, V> for SkipListMap<K, V> {
    type Iter<'a>
        = SkipListMapIter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn get(&self, key: &K) -> Option<&V> {
        // `None` stands for the head sentinel.
        let mut cur: Option<usize> = None;
        for level in (0..self.level).rev() {
            while let Some(next) = self.forward_of(cur, level) {
                match self.nodes[next].key.cmp(key) {
                    Ordering::Less => cur = Some(next),
                    Ordering::Equal => return Some(&self.nodes[next].value),
                    Ordering::Greater => break,
                }
            }
        }
        None
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        let mut update: Vec<Option<usize>> = vec![None; self.max_level()];
        let mut cur: Option<usize> = None;
        for level in (0..self.level).rev() {
            while let Some(next) = self.forward_of(cur, level) {
                if self.nodes[next].key < key {
                    cur = Some(next);
                } else {
                    break;
                }
            }
            update[level] = cur;
        }

        if let Some(candidate) = self.forward_of(cur, 0)
            && self.nodes[candidate].key == key
        {
            return Some(std::mem::replace(&mut self.nodes[candidate].value, value));
        }

        // Levels above the current height start at the head, which `update`
        // already encodes as `None`.
        let node_level = self.random_level();
        if node_level > self.level {
            self.level = node_level;
        }

        let idx = self.nodes.len();
        let forward: Vec<Option<usize>> = (0..node_level)
            .map(|level| self.forward_of(update[level], level))
            .collect();
        self.nodes.push(SkipNode {
            key,
            value,
            forward,
        });
        for (level, &pred) in update.iter().enumerate().take(node_level) {
            self.set_forward(pred, level, Some(idx));
        }
        None
    }

    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        SkipListMapIter {
            map: self,
            cursor: self.head[0],
            remaining: self.nodes.len(),
        }
    }
}

pub struct SkipListMapIter<'a, K, V> {
    map: &'a SkipListMap<K, V>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for SkipListMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = &self.map.nodes[idx];
        self.cursor = node.forward[0];
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
    use rand::seq::SliceRandom;
    use rand_chacha::ChaCha8Rng;

    fn check_towers<K: Ord, V>(m: &SkipListMap<K, V>) {
        for level in 0..m.max_level() {
            let mut cur = m.head[level];
            let mut prev: Option<&K> = None;
            while let Some(i) = cur {
                let node = &m.nodes[i];
                assert!(node.forward.len() > level, "node linked above its height");
                if let Some(p) = prev {
                    assert!(p < &node.key, "level {level} out of order");
                }
                prev = Some(&node.key);
                cur = node.forward[level];
            }
            if level >= m.height() {
                assert!(m.head[level].is_none(), "unused level {level} is linked");
            }
        }
    }

    #[test]
    fn test_empty() {
        let m: SkipListMap<u32, u32> = SkipListMap::default();
        assert!(m.is_empty());
        assert_eq!(m.get(&1), None);
        assert_eq!(m.iter().next(), None);
        assert_eq!(m.height(), 1);
    }

    #[test]
    fn test_shuffled_inserts_iterate_sorted() {
        let mut keys: Vec<u32> = (0..2_000).collect();
        keys.shuffle(&mut ChaCha8Rng::seed_from_u64(7));

        let mut m = SkipListMap::default();
        for &k in &keys {
            assert_eq!(m.put(k, k * 2), None);
        }
        check_towers(&m);
        assert_eq!(m.len(), 2_000);
        let iterated: Vec<u32> = m.iter().map(|(k, _)| *k).collect();
        assert_eq!(iterated, (0..2_000).collect::<Vec<_>>());
        for k in 0..2_000 {
            assert_eq!(m.get(&k), Some(&(k * 2)));
        }
        assert_eq!(m.get(&2_000), None);
        assert!(m.height() > 1, "2000 inserts should promote at least once");
        assert!(m.height() <= m.max_level());
    }

    #[test]
    fn test_put_replaces_value_without_growing() {
        let mut m = SkipListMap::default();
        m.put("Office", 1);
        m.put("Kitchen", 2);
        assert_eq!(m.put("Office", 3), Some(1));
        assert_eq!(m.len(), 2);
        assert_eq!(m.get(&"Office"), Some(&3));
        check_towers(&m);
    }

    #[test]
    fn test_single_level_degenerates_to_sorted_list() {
        let mut m = SkipListMap::new(SkipListConfig {
            max_level: 1,
            seed: 1,
        });
        for k in [5, 1, 4, 2, 3] {
            m.put(k, ());
        }
        assert_eq!(m.height(), 1);
        assert_eq!(m.iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        check_towers(&m);
    }

    #[test]
    fn test_max_level_is_clamped() {
        let m: SkipListMap<u8, u8> = SkipListMap::new(SkipListConfig {
            max_level: 1_000,
            seed: 0,
        });
        assert_eq!(m.max_level(), SKIP_LIST_LEVEL_LIMIT);
        let m: SkipListMap<u8, u8> = SkipListMap::new(SkipListConfig {
            max_level: 0,
            seed: 0,
        });
        assert_eq!(m.max_level(), 1);
    }

    #[test]
    fn test_same_seed_builds_same_towers() {
        let cfg = SkipListConfig {
            max_level: 12,
            seed: 99,
        };
        let mut a = SkipListMap::new(cfg);
        let mut b = SkipListMap::new(cfg);
        for k in 0..300u32 {
            a.put(k, ());
            b.put(k, ());
        }
        let heights = |m: &SkipListMap<u32, ()>| {
            m.nodes.iter().map(|n| n.forward.len()).collect::<Vec<_>>()
        };
        assert_eq!(heights(&a), heights(&b));
    }

    #[test]
    fn test_debug_is_ordered_map() {
        let mut m = SkipListMap::default();
        m.put(2, 'b');
        m.put(1, 'a');
        assert_eq!(format!("{:?}", m), "{1: 'a', 2: 'b'}");
    }
}
