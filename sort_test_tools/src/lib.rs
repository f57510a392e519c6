/// Uniform calling contract shared by every in-place sort in the workspace.
///
/// Implementations whose `name` contains "unstable" are exempt from the stability tests.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
pub mod test_types;
