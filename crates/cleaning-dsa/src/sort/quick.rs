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

/// Byte at `depth`, or `-1` once the key has ended.
#[inline]
fn byte_at<E: RadixKey>(data: &[E], i: usize, depth: usize) -> i16 {
    data[i].radix_key().get(depth).map_or(-1, |&b| b as i16)
}

/// Three-way radix quicksort (multikey quicksort).
///
/// Partitions on a single byte of the key at a time into `<`, `=` and `>`
/// groups and only advances to the next byte inside the `=` group. Not
/// stable; use it for keys that are unique or where the relative order of
/// equal keys does not matter.
pub fn radix_quicksort<E: RadixKey>(data: &mut [E]) {
    let n = data.len();
    if n < 2 {
        return;
    }
    let mut order: Vec<usize> = (0..n).collect();
    partition(data, &mut order, 0);
    apply_permutation(data, &mut order);
}

fn partition<E: RadixKey>(data: &[E], idx: &mut [usize], depth: usize) {
    if idx.len() < 2 {
        return;
    }
    let pivot = byte_at(data, idx[idx.len() / 2], depth);
    let (mut lt, mut i, mut gt) = (0, 0, idx.len());
    while i < gt {
        let c = byte_at(data, idx[i], depth);
        if c < pivot {
            idx.swap(lt, i);
            lt += 1;
            i += 1;
        } else if c > pivot {
            gt -= 1;
            idx.swap(i, gt);
        } else {
            i += 1;
        }
    }
    partition(data, &mut idx[..lt], depth);
    if pivot >= 0 {
        partition(data, &mut idx[lt..gt], depth + 1);
    }
    partition(data, &mut idx[gt..], depth);
}
