//! Recursive quicksort with Lomuto partitioning.
//!
//! Regions of [`MEDIAN_OF_THREE_THRESHOLD`] or more elements pick their pivot as the median of the
//! first, middle and last element, smaller regions use the last element directly. After
//! partitioning, the smaller side is sorted recursively and the larger side is handled by the
//! enclosing loop, which keeps the stack depth at O(log n) regardless of pivot quality.
//!
//! Not stable.

use std::cmp::Ordering;
use std::mem;

sort_impl!("quicksort_unstable");

/// Regions shorter than this use the last element as pivot, the three extra comparisons don't pay
/// off at that size.
pub const MEDIAN_OF_THREE_THRESHOLD: usize = 6;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by_is_less(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_is_less(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` ascending, where `is_less(a, b)` returns true if `a` must precede `b`.
///
/// Returns `v` to allow chaining.
pub fn sort_by_is_less<T, F>(v: &mut [T], mut is_less: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> bool,
{
    log::trace!("quicksort len: {}", v.len());

    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return v;
    }

    quicksort(v, &mut is_less);
    v
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        if len >= MEDIAN_OF_THREE_THRESHOLD {
            median_of_three_to_last(v, is_less);
        }

        let mid = partition(v, is_less);

        let (left, right) = mem::take(&mut v).split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() <= right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Orders the first, middle and last element so that the median of the three ends up last.
///
/// Requires `v.len() >= 2`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn median_of_three_to_last<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let lo = 0;
    let hi = v.len() - 1;
    let mid = hi / 2;

    if is_less(&v[mid], &v[lo]) {
        v.swap(mid, lo);
    }
    if is_less(&v[hi], &v[lo]) {
        v.swap(hi, lo);
    }
    if is_less(&v[mid], &v[hi]) {
        v.swap(mid, hi);
    }
}

/// Partitions `v` around its last element and returns the final position of that element.
///
/// Every element before the returned index is less than the pivot, every element after it is not.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let pivot_pos = v.len() - 1;
    let (rest, pivot) = v.split_at_mut(pivot_pos);

    let lt_count = lomuto_partition(rest, &pivot[0], is_less);

    // Place the pivot between the two partitions.
    v.swap(lt_count, pivot_pos);

    lt_count
}

fn lomuto_partition<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    let mut l = 0;
    for r in 0..len {
        if is_less(&v[r], pivot) {
            v.swap(l, r);
            l += 1;
        }
    }

    l
}
