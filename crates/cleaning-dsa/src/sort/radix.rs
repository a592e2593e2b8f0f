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

use super::{RadixKey, apply_permutation};

/// Bucket 0 marks "key already ended", buckets 1..=256 the byte values.
const BUCKETS: usize = 257;

#[inline]
fn bucket_of(key: &[u8], pos: usize) -> usize {
    key.get(pos).map_or(0, |&b| b as usize + 1)
}

/// Stable least-significant-digit radix sort over [`RadixKey`] bytes.
///
/// Runs one counting pass per byte position of the longest key, from the last
/// position to the first. Shorter keys fall into the "ended" bucket, which
/// orders a prefix before its extensions.
pub fn radix_sort<E: RadixKey>(data: &mut [E]) {
    let n = data.len();
    if n < 2 {
        return;
    }
    let width = data.iter().map(|e| e.radix_key().len()).max().unwrap_or(0);
    let mut order: Vec<usize> = (0..n).collect();
    let mut scratch = vec![0usize; n];
    let mut counts = [0usize; BUCKETS + 1];

    for pos in (0..width).rev() {
        counts.fill(0);
        for &i in &order {
            counts[bucket_of(data[i].radix_key(), pos) + 1] += 1;
        }
        for b in 0..BUCKETS {
            counts[b + 1] += counts[b];
        }
        for &i in &order {
            let b = bucket_of(data[i].radix_key(), pos);
            scratch[counts[b]] = i;
            counts[b] += 1;
        }
        std::mem::swap(&mut order, &mut scratch);
    }
    apply_permutation(data, &mut order);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_room_names() {
        let mut v = vec![
            "Office",
            "Living Room",
            "Guest Bedroom",
            "Kitchen",
            "Guest Bathroom",
            "Foyer",
            "Dining Room",
        ];
        radix_sort(&mut v);
        assert_eq!(
            v,
            vec![
                "Dining Room",
                "Foyer",
                "Guest Bathroom",
                "Guest Bedroom",
                "Kitchen",
                "Living Room",
                "Office",
            ]
        );
    }

    #[test]
    fn test_prefix_sorts_first() {
        let mut v = vec!["abc".to_string(), "ab".to_string(), "".to_string(), "b".to_string()];
        radix_sort(&mut v);
        assert_eq!(v, vec!["", "ab", "abc", "b"]);
    }

    #[test]
    fn test_is_stable_for_equal_keys() {
        struct Tagged(&'static str, u8);
        impl RadixKey for Tagged {
            fn radix_key(&self) -> &[u8] {
                self.0.as_bytes()
            }
        }
        let mut v = vec![Tagged("b", 0), Tagged("a", 1), Tagged("b", 2), Tagged("a", 3)];
        radix_sort(&mut v);
        let tags: Vec<u8> = v.iter().map(|t| t.1).collect();
        assert_eq!(tags, vec![1, 3, 0, 2]);
    }
}
