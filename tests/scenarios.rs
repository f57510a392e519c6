//! Behaviour of the predicate based entry points that the generic suite, which only goes through
//! `Sort::sort` and `Sort::sort_by`, doesn't reach.

use sort_suite::other::counting_sort;
use sort_suite::stable::{bottom_up_mergesort, top_down_mergesort};
use sort_suite::unstable::quicksort;
use sort_suite::Sort;

use sort_test_tools::patterns;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn all_sorted_ascending(v: &[i32]) -> [Vec<i32>; 4] {
    let mut quick = v.to_vec();
    quicksort::sort_by_is_less(&mut quick, |a, b| a < b);

    let mut top_down = v.to_vec();
    top_down_mergesort::sort_by_is_less_eq(&mut top_down, |a, b| a <= b);

    let mut bottom_up = v.to_vec();
    bottom_up_mergesort::sort_by_is_less_eq(&mut bottom_up, |a, b| a <= b);

    let counting = counting_sort::sort_by_key(v, |x| *x);

    [quick, top_down, bottom_up, counting]
}

#[test]
fn descending_five() {
    init_logging();

    for sorted in all_sorted_ascending(&[5, 4, 3, 2, 1]) {
        assert_eq!(sorted, [1, 2, 3, 4, 5]);
    }
}

#[test]
fn empty_and_single() {
    init_logging();

    for sorted in all_sorted_ascending(&[]) {
        assert!(sorted.is_empty());
    }

    for sorted in all_sorted_ascending(&[-7]) {
        assert_eq!(sorted, [-7]);
    }
}

#[test]
fn stable_sorts_keep_tie_order() {
    init_logging();

    // [3, 1, 3, 2, 1] tagged with input position.
    let input = [(3, 0), (1, 1), (3, 2), (2, 3), (1, 4)];
    let expected = [(1, 1), (1, 4), (2, 3), (3, 0), (3, 2)];

    let mut top_down = input;
    top_down_mergesort::sort_by_is_less_eq(&mut top_down, |a, b| a.0 <= b.0);
    assert_eq!(top_down, expected);

    let mut bottom_up = input;
    bottom_up_mergesort::sort_by_is_less_eq(&mut bottom_up, |a, b| a.0 <= b.0);
    assert_eq!(bottom_up, expected);

    assert_eq!(counting_sort::sort_by_key(&input, |e| e.0), expected);
}

#[test]
fn quicksort_below_and_at_median_threshold() {
    init_logging();

    let threshold = quicksort::MEDIAN_OF_THREE_THRESHOLD;
    assert_eq!(threshold, 6);

    for len in [threshold - 1, threshold, threshold + 1] {
        for input in [
            patterns::descending(len),
            patterns::ascending(len),
            patterns::all_equal(len),
            vec![2, 9, 2, 1, 9, 0, 4][..len].to_vec(),
        ] {
            let mut expected = input.clone();
            expected.sort();

            let mut v = input;
            quicksort::sort_by_is_less(&mut v, |a, b| a < b);
            assert_eq!(v, expected);
        }
    }
}

#[test]
fn bottom_up_non_power_of_two_lengths() {
    init_logging();

    for len in [3, 5, 6, 7, 9, 11, 13, 17, 31, 33, 63, 65, 127, 129, 1000] {
        let input = patterns::random_uniform(len, -20..=20);

        let mut expected = input.clone();
        expected.sort();

        let mut v = input;
        bottom_up_mergesort::sort_by_is_less_eq(&mut v, |a, b| a <= b);
        assert_eq!(v, expected, "len: {len}");
    }
}

#[test]
fn bottom_up_seven_keeps_every_element() {
    init_logging();

    // Unique heap values, a lost or duplicated element would show up as a double free or a
    // mismatch.
    let input: Vec<String> = ["g", "e", "a", "f", "c", "b", "d"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut v = input.clone();
    bottom_up_mergesort::sort_by_is_less_eq(&mut v, |a, b| a <= b);
    assert_eq!(v, ["a", "b", "c", "d", "e", "f", "g"]);
}

#[test]
fn descending_predicate() {
    init_logging();

    // The predicates define the order, nothing assumes ascending values.
    let input = patterns::random_uniform(100, 0..=50);

    let mut expected = input.clone();
    expected.sort_by(|a, b| b.cmp(a));

    let mut quick = input.clone();
    quicksort::sort_by_is_less(&mut quick, |a, b| a > b);
    assert_eq!(quick, expected);

    let mut top_down = input.clone();
    top_down_mergesort::sort_by_is_less_eq(&mut top_down, |a, b| a >= b);
    assert_eq!(top_down, expected);

    let mut bottom_up = input.clone();
    bottom_up_mergesort::sort_by_is_less_eq(&mut bottom_up, |a, b| a >= b);
    assert_eq!(bottom_up, expected);

    assert_eq!(counting_sort::sort_by_key(&input, |x| -x), expected);
}

#[test]
fn chaining() {
    init_logging();

    let mut v = vec![3, 1, 2];
    let first = quicksort::sort_by_is_less(&mut v, |a, b| a < b)[0];
    assert_eq!(first, 1);

    let mut v = vec![3, 1, 2];
    let last = *bottom_up_mergesort::sort_by_is_less_eq(&mut v, |a, b| a <= b)
        .last()
        .unwrap();
    assert_eq!(last, 3);

    let mut v = vec![3, 1, 2];
    let len = top_down_mergesort::sort_by_is_less_eq(&mut v, |a, b| a <= b).len();
    assert_eq!(len, 3);
}

#[test]
fn sort_impl_names() {
    assert!(quicksort::SortImpl::name().contains("unstable"));
    assert!(!top_down_mergesort::SortImpl::name().contains("unstable"));
    assert!(!bottom_up_mergesort::SortImpl::name().contains("unstable"));
}

#[test]
fn interchangeable_through_sort_trait() {
    init_logging();

    fn sort_with<S: Sort>(mut v: Vec<i32>) -> Vec<i32> {
        S::sort(&mut v);
        v
    }

    let input = patterns::random(500);
    let mut expected = input.clone();
    expected.sort();

    assert_eq!(sort_with::<quicksort::SortImpl>(input.clone()), expected);
    assert_eq!(sort_with::<top_down_mergesort::SortImpl>(input.clone()), expected);
    assert_eq!(sort_with::<bottom_up_mergesort::SortImpl>(input), expected);
}

#[test]
fn merge_sorts_stay_within_n_log_n_comparisons() {
    init_logging();

    for len in 1..=300usize {
        let ceil_log2 = (usize::BITS - (len - 1).leading_zeros()) as usize;
        let bound = len * ceil_log2;

        for input in [patterns::random(len), patterns::descending(len), patterns::pipe_organ(len)] {
            let mut top_down = input.clone();
            let mut comparisons = 0;
            top_down_mergesort::sort_by_is_less_eq(&mut top_down, |a, b| {
                comparisons += 1;
                a <= b
            });
            assert!(comparisons <= bound, "top-down len {len}: {comparisons} > {bound}");

            let mut bottom_up = input;
            let mut comparisons = 0;
            bottom_up_mergesort::sort_by_is_less_eq(&mut bottom_up, |a, b| {
                comparisons += 1;
                a <= b
            });
            assert!(comparisons <= bound, "bottom-up len {len}: {comparisons} > {bound}");
        }
    }
}
