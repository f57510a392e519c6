//! Recursive top-down merge sort.
//!
//! Each merge copies only the first of the two runs into the buffer and merges it against the
//! second run, which stays in place. The buffer therefore never needs more than the first half of
//! the input, and second run elements that are already larger than everything left in the buffer
//! are never moved.
//!
//! Stable.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

sort_impl!("top_down_mergesort_stable");

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
    let len = v.len();
    log::trace!("top-down mergesort len: {len}");

    if mem::size_of::<T>() == 0 || len < 2 {
        return v;
    }

    // Only ever used as scratch space, its length stays 0 so it never drops any values.
    let mut buf = Vec::<T>::with_capacity(first_run_len(len));
    merge_sort(v, buf.as_mut_ptr(), &mut is_less_eq);

    v
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Splitting `[lo, hi]` at `(lo + hi) / 2` puts the middle element into the first run, so the
/// first run is the larger one for odd lengths.
#[inline]
fn first_run_len(len: usize) -> usize {
    len - len / 2
}

fn merge_sort<T, F>(v: &mut [T], buf: *mut T, is_less_eq: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = first_run_len(len);
    merge_sort(&mut v[..mid], buf, is_less_eq);
    merge_sort(&mut v[mid..], buf, is_less_eq);

    // SAFETY: `buf` has room for first_run_len of the full input, which bounds `mid` at every
    // level of the recursion, and it is a separate allocation. 0 < mid < len.
    unsafe {
        merge_first_run_buffered(v, mid, buf, is_less_eq);
    }
}

/// Merges the ordered runs `v[..mid]` and `v[mid..]` in place, using `buf` for the first run.
///
/// # Safety
///
/// `buf` must be valid for writes of `mid` elements and must not overlap `v`. `0 < mid < v.len()`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
unsafe fn merge_first_run_buffered<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less_eq: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let v_ptr = v.as_mut_ptr();

    // SAFETY: See function safety section.
    unsafe {
        ptr::copy_nonoverlapping(v_ptr, buf, mid);
    }

    let mut hole = MergeHole {
        buf,
        start: 0,
        end: mid,
        dst: v_ptr,
    };

    // The hole `dst..dst + (end - start)` always lies in front of `right`, so writing into it
    // never clobbers an unread element of the second run.
    let mut right = mid;
    while hole.start < hole.end && right < len {
        // SAFETY: start < end keeps the buffer read in bounds, right < len the slice read, and the
        // hole is non-empty so `dst` points before `right`.
        unsafe {
            let left_elem = buf.add(hole.start);
            let right_elem = v_ptr.add(right);

            if is_less_eq(&*left_elem, &*right_elem) {
                ptr::copy_nonoverlapping(left_elem, hole.dst, 1);
                hole.start += 1;
            } else {
                ptr::copy_nonoverlapping(right_elem, hole.dst, 1);
                right += 1;
            }
            hole.dst = hole.dst.add(1);
        }
    }

    // If the second run ran out, `hole` moves the rest of the buffer into place when dropped. If
    // the buffer ran out, the rest of the second run already is where it belongs.
}

/// Values of the first run that still live in the buffer.
///
/// On drop, also when `is_less_eq` panics, copies `buf[start..end]` into `dst`, which fills the
/// gap they left in the slice exactly.
struct MergeHole<T> {
    buf: *mut T,
    start: usize,
    end: usize,
    dst: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: buf[start..end] are initialized and `dst` has exactly `end - start` free slots.
        unsafe {
            let len = self.end - self.start;
            ptr::copy_nonoverlapping(self.buf.add(self.start), self.dst, len);
        }
    }
}
