pub mod bottom_up_mergesort;
pub mod top_down_mergesort;

mod merge;
