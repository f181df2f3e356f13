use std::cmp::Ordering;

use crate::observer::{ProgressObserver, Trace};

sort_impl!("selection_sort");

/// Sorts the slice with selection sort.
///
/// Unstable, in-place, *O*(*n*^2) comparisons for every input but only *O*(*n*) swaps.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_observed(v, &mut |a: &T, b: &T| a.lt(b), None);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_observed(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less, None);
}

/// For every position `i` finds the minimum of `v[i..]` and swaps it into place.
///
/// Reports one pass per position, `v.len()` in total.
pub fn sort_observed<T, F>(
    v: &mut [T],
    is_less: &mut F,
    observer: Option<&mut dyn ProgressObserver<T>>,
) where
    F: FnMut(&T, &T) -> bool,
{
    let mut trace = Trace::new(observer);
    let len = v.len();

    for i in 0..len {
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        v.swap(i, min);
        trace.emit(v);
    }
}
