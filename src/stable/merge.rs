use std::cmp::{self, Ordering};

use crate::observer::{ProgressObserver, Trace};

sort_impl!("bottom_up_merge_sort");

/// Sorts the slice with a bottom-up merge sort.
///
/// Stable and *O*(*n* \* log(*n*)) worst-case. Allocates a scratch buffer of `v.len()` elements,
/// use [`sort_observed`] to supply one instead.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Copy,
{
    let mut work = v.to_vec();
    sort_observed(v, &mut work, &mut |a: &T, b: &T| a.lt(b), None);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut work = v.to_vec();
    sort_observed(
        v,
        &mut work,
        &mut |a: &T, b: &T| compare(a, b) == Ordering::Less,
        None,
    );
}

/// Merges runs of width 1, 2, 4, ... into `work` and copies `work` back into `v` after every
/// width, until a single run spans the whole slice.
///
/// The contents of `work` on entry don't matter. The initial state and the state after the first
/// width are both reported as pass 0, later widths as 1, 2, ...
///
/// # Panics
///
/// Panics if `work` is shorter than `v`.
pub fn sort_observed<T, F>(
    v: &mut [T],
    work: &mut [T],
    is_less: &mut F,
    observer: Option<&mut dyn ProgressObserver<T>>,
) where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(
        work.len() >= len,
        "merge sort needs a scratch buffer of at least {len} elements, got {}",
        work.len()
    );
    let work = &mut work[..len];

    let mut trace = Trace::new(observer);
    trace.peek(v);

    let mut width = 1;
    while width < len {
        let mut left = 0;
        while left < len {
            // The last block can be short, or hold only a left run that gets copied through.
            let mid = cmp::min(left.saturating_add(width), len);
            let end = cmp::min(left.saturating_add(2 * width), len);
            merge(v, left, mid, end, work, is_less);
            left = end;
        }

        v.copy_from_slice(work);
        trace.emit(v);

        width *= 2;
    }
}

/// Merges `v[left..mid]` and `v[mid..end]` into `work[left..end]`.
///
/// Ties take the left head first, that's what keeps the sort stable.
fn merge<T, F>(v: &[T], left: usize, mid: usize, end: usize, work: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let mut i = left;
    let mut j = mid;

    for slot in &mut work[left..end] {
        if i < mid && (j >= end || !is_less(&v[j], &v[i])) {
            *slot = v[i];
            i += 1;
        } else {
            *slot = v[j];
            j += 1;
        }
    }
}
