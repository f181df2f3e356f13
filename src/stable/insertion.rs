use std::cmp::Ordering;

use crate::observer::{ProgressObserver, Trace};

sort_impl!("insertion_sort");

/// Sorts the slice with insertion sort.
///
/// Stable, in-place, *O*(*n*^2) worst-case and *O*(*n*) for already sorted input.
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

/// Grows a sorted prefix one element at a time, shifting the new element left while its
/// predecessor is greater.
///
/// Pass 0 is the untouched input, pass `i` the state after `v[i]` was inserted into `v[..i]`.
pub fn sort_observed<T, F>(
    v: &mut [T],
    is_less: &mut F,
    observer: Option<&mut dyn ProgressObserver<T>>,
) where
    F: FnMut(&T, &T) -> bool,
{
    let mut trace = Trace::new(observer);
    trace.emit(v);

    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j - 1, j);
            j -= 1;
        }

        trace.emit(v);
    }
}
