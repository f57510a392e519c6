//! Counting sort over sparse keys.
//!
//! Counts occurrences per key in an ordered map, so only keys that actually occur take up space,
//! turns the counts into output offsets in ascending key order and then assigns every element the
//! next offset of its key in input order. O(n + k log k) for k distinct keys, stable, and the
//! input is never modified.

use std::collections::BTreeMap;

/// Returns a sorted copy of `v`, using every element as its own key.
#[inline]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Clone + Ord,
{
    sort_by_key(v, |elem| elem.clone())
}

/// Returns a copy of `v` ordered by `key_of`, keeping elements with equal keys in input order.
///
/// `key_of` is called exactly once per element, in input order. Counting and placing both use
/// that one key, so a `key_of` that would answer differently on a second call can't make the
/// two passes disagree.
pub fn sort_by_key<T, K, F>(v: &[T], key_of: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    log::trace!("counting sort len: {}", v.len());

    let keys: Vec<K> = v.iter().map(key_of).collect();

    let mut offsets = BTreeMap::<&K, usize>::new();
    for key in &keys {
        *offsets.entry(key).or_insert(0) += 1;
    }

    let mut offset = 0;
    for slot in offsets.values_mut() {
        let count = *slot;
        *slot = offset;
        offset += count;
    }
    log::trace!("counting sort distinct keys: {}", offsets.len());

    // `sources[pos]` is the index of the element that goes to output position `pos`.
    let mut sources = vec![0; v.len()];
    for (idx, key) in keys.iter().enumerate() {
        match offsets.get_mut(key) {
            Some(next) => {
                sources[*next] = idx;
                *next += 1;
            }
            None => unreachable!("every key was counted above"),
        }
    }

    sources.into_iter().map(|idx| v[idx].clone()).collect()
}
