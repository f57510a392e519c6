//! Iterative bottom-up merge sort.
//!
//! A first pass orders adjacent pairs in place. Every following pass merges neighbouring runs of
//! `run_len` elements into runs of `2 * run_len`, reading from one of the slice and a full size
//! buffer and writing into the other, then swapping the roles for the next pass. The last window of
//! a pass may have a shortened or empty second run, the latter is copied through unchanged.
//!
//! Stable.

use std::cmp::{self, Ordering};
use std::mem;
use std::ptr;

use crate::stable::merge::merge;

sort_impl!("bottom_up_mergesort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by_is_less_eq(v, |a, b| a.le(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_is_less_eq(v, |a, b| compare(a, b) != Ordering::Greater);
}

/// Sorts `v` ascending, where `is_less_eq(a, b)` returns true if `a` may precede `b`.
///
/// Returns `v` to allow chaining.
pub fn sort_by_is_less_eq<T, F>(v: &mut [T], mut is_less_eq: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> bool,
{
    log::trace!("bottom-up mergesort len: {}", v.len());

    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return v;
    }

    merge_sort(v, &mut is_less_eq);
    v
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn merge_sort<T, F>(v: &mut [T], is_less_eq: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for pair in v.chunks_exact_mut(2) {
        if !is_less_eq(&pair[0], &pair[1]) {
            pair.swap(0, 1);
        }
    }

    let mut run_count = len.div_ceil(2);
    if run_count < 2 {
        return;
    }

    // Only ever used as scratch space, its length stays 0 so it never drops any values.
    let mut buf = Vec::<T>::with_capacity(len);

    // Declared after `buf` so it is dropped, and copies the values back, before the buffer is freed.
    let mut passes = MergePasses {
        v: v.as_mut_ptr(),
        buf: buf.as_mut_ptr(),
        len,
        src_is_buf: false,
        merged: 0,
    };

    let mut run_len = 2;
    while run_count > 1 {
        log::trace!("bottom-up merge pass run_len: {run_len} run_count: {run_count}");

        let (src, dst) = passes.src_and_dst();

        let mut start = 0;
        while start < len {
            let mid = cmp::min(start.saturating_add(run_len), len);
            let end = cmp::min(start.saturating_add(run_len * 2), len);

            // SAFETY: `src` and `dst` are the slice and the buffer, both `len` long and disjoint.
            // `src[merged..]` holds the live values, start == merged and end <= len.
            unsafe {
                merge(src, dst, start, mid, end, is_less_eq);
            }

            passes.merged = end;
            start = end;
        }

        passes.finish_pass();
        run_count = run_count.div_ceil(2);
        run_len *= 2;
    }

    // If the last pass wrote into the buffer, dropping `passes` copies the result back into `v`.
}

/// Tracks which of the slice and the buffer owns which values across the merge passes.
///
/// Invariant: `dst[..merged]` and `src[merged..]` together hold every value exactly once. When
/// dropped, including during unwinding from a panicking comparison, it moves all values into the
/// slice.
struct MergePasses<T> {
    v: *mut T,
    buf: *mut T,
    len: usize,
    src_is_buf: bool,
    merged: usize,
}

impl<T> MergePasses<T> {
    fn src_and_dst(&self) -> (*const T, *mut T) {
        if self.src_is_buf {
            (self.buf as *const T, self.v)
        } else {
            (self.v as *const T, self.buf)
        }
    }

    fn finish_pass(&mut self) {
        debug_assert_eq!(self.merged, self.len);

        self.src_is_buf = !self.src_is_buf;
        self.merged = 0;
    }
}

impl<T> Drop for MergePasses<T> {
    fn drop(&mut self) {
        // SAFETY: See the type invariant. Both regions are `len` long and disjoint.
        unsafe {
            if self.src_is_buf {
                // Writing into the slice, the unmerged rest still lives in the buffer.
                let rest = self.len - self.merged;
                ptr::copy_nonoverlapping(self.buf.add(self.merged), self.v.add(self.merged), rest);
            } else {
                // Writing into the buffer, the unmerged rest already lives in the slice.
                ptr::copy_nonoverlapping(self.buf, self.v, self.merged);
            }
        }
    }
}
