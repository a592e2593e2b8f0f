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

use super::apply_permutation;
use std::cmp::Ordering;

/// Stable top-down merge sort.
///
/// Sorts a permutation of indices with an auxiliary buffer of the same length
/// and then moves the elements into place. `O(n log n)` comparisons.
pub fn merge_sort_by<E, F>(data: &mut [E], mut cmp: F)
where
    F: FnMut(&E, &E) -> Ordering,
{
    let n = data.len();
    if n < 2 {
        return;
    }
    let mut order: Vec<usize> = (0..n).collect();
    let mut scratch = vec![0usize; n];
    sort_indices(data, &mut order, &mut scratch, &mut cmp);
    apply_permutation(data, &mut order);
}

fn sort_indices<E, F>(data: &[E], idx: &mut [usize], buf: &mut [usize], cmp: &mut F)
where
    F: FnMut(&E, &E) -> Ordering,
{
    let n = idx.len();
    if n < 2 {
        return;
    }
    let mid = n / 2;
    {
        let (left, right) = idx.split_at_mut(mid);
        let (buf_left, buf_right) = buf.split_at_mut(mid);
        sort_indices(data, left, buf_left, cmp);
        sort_indices(data, right, buf_right, cmp);
    }

    // Already in order: nothing to merge.
    if cmp(&data[idx[mid]], &data[idx[mid - 1]]) != Ordering::Less {
        return;
    }

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < n {
        // Take from the right run only when strictly smaller; ties keep the
        // left element first.
        if cmp(&data[idx[j]], &data[idx[i]]) == Ordering::Less {
            buf[k] = idx[j];
            j += 1;
        } else {
            buf[k] = idx[i];
            i += 1;
        }
        k += 1;
    }
    let rest_left = mid - i;
    buf[k..k + rest_left].copy_from_slice(&idx[i..mid]);
    k += rest_left;
    let rest_right = n - j;
    buf[k..k + rest_right].copy_from_slice(&idx[j..n]);
    idx.copy_from_slice(&buf[..n]);
}
