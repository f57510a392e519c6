//! Comparison and key based sorting algorithms behind one calling contract.
//!
//! - [`unstable::quicksort`]: in-place, Lomuto partition with median-of-three pivots.
//! - [`stable::top_down_mergesort`]: recursive, buffer of half the input.
//! - [`stable::bottom_up_mergesort`]: iterative, full size buffer, alternating passes.
//! - [`other::counting_sort`]: key based, returns a new `Vec`.
//!
//! The in-place sorts expose `sort`, `sort_by` and a predicate based entry point, and implement
//! [`Sort`] through a `SortImpl` type so they can be swapped for one another.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub use sort_test_tools::Sort;

pub mod other;
pub mod stable;
pub mod unstable;
