use std::cmp::Ordering;

use crate::observer::{ProgressObserver, Trace};

sort_impl!("bubble_sort");

/// Sorts the slice with bubble sort.
///
/// Stable, in-place, *O*(*n*^2) worst-case and *O*(*n*) for already sorted input, which needs
/// exactly one pass.
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

/// Scans adjacent pairs left to right and swaps every pair that is out of order, until a full
/// scan swaps nothing.
///
/// Every scan is a pass, including the final one that only confirms the order. Pass indices start
/// at 0.
pub fn sort_observed<T, F>(
    v: &mut [T],
    is_less: &mut F,
    observer: Option<&mut dyn ProgressObserver<T>>,
) where
    F: FnMut(&T, &T) -> bool,
{
    let mut trace = Trace::new(observer);

    loop {
        let mut swapped = false;

        for i in 1..v.len() {
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
                swapped = true;
            }
        }

        trace.emit(v);

        if !swapped {
            break;
        }
    }
}
