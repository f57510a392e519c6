use std::ptr;

/// Merges the ordered runs `src[p..q]` and `src[q..r]` into `dst[p..r]`.
///
/// On equal elements the one from the first run is taken first, which is what keeps the merge
/// sorts stable. A tail window with an empty second run (`q == r`) is copied over without calling
/// `is_less_eq` at all.
///
/// Values are copied bitwise, `src[p..r]` is left untouched. Which of the two regions owns the
/// values afterwards is up to the caller.
///
/// # Safety
///
/// `p <= q <= r`. `src` and `dst` must both be valid for `r` elements and must not overlap, and
/// `src[p..r]` must be initialized.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) unsafe fn merge<T, F>(
    src: *const T,
    dst: *mut T,
    p: usize,
    q: usize,
    r: usize,
    is_less_eq: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(p <= q && q <= r);

    let mut i = p;
    let mut j = q;
    let mut k = p;

    // SAFETY: i < q and j < r keep both reads inside src[p..r], k < r keeps the write inside
    // dst[p..r]. The caller guarantees both regions are valid and disjoint.
    unsafe {
        while i < q && j < r {
            if is_less_eq(&*src.add(i), &*src.add(j)) {
                ptr::copy_nonoverlapping(src.add(i), dst.add(k), 1);
                i += 1;
            } else {
                ptr::copy_nonoverlapping(src.add(j), dst.add(k), 1);
                j += 1;
            }
            k += 1;
        }

        // At most one of the runs has elements left.
        ptr::copy_nonoverlapping(src.add(i), dst.add(k), q - i);
        k += q - i;
        ptr::copy_nonoverlapping(src.add(j), dst.add(k), r - j);
    }
}
