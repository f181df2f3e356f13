use std::cmp::Ordering;

use crate::observer::{ProgressObserver, Trace};

sort_impl!("hoare_quicksort");

/// Sorts the slice with a recursive quicksort, middle element pivot and Hoare partitioning.
///
/// Unstable, in-place, *O*(*n* \* log(*n*)) on average. The middle pivot avoids the quadratic case
/// for sorted and reverse sorted input, crafted inputs can still hit it.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Copy,
{
    sort_observed(v, &mut |a: &T, b: &T| a.lt(b), None);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_observed(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less, None);
}

/// Sorts `v`, reporting once per partition step.
///
/// Every snapshot is the whole of `v`, not just the range being partitioned, and the pass index
/// counts partition steps across the entire recursion. Both start over on the next call.
pub fn sort_observed<T, F>(
    v: &mut [T],
    is_less: &mut F,
    observer: Option<&mut dyn ProgressObserver<T>>,
) where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let mut trace = Trace::new(observer);
    let len = v.len();
    quicksort(v, 0, len, is_less, &mut trace);
}

/// Sorts `v[start..start + len]`.
///
/// Works on index bounds into the full slice so the observer can always be shown all of it.
fn quicksort<T, F>(v: &mut [T], start: usize, len: usize, is_less: &mut F, trace: &mut Trace<T>)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    if len < 2 {
        return;
    }

    let split = partition(&mut v[start..start + len], is_less);
    trace.emit(v);

    quicksort(v, start, split, is_less, trace);
    quicksort(v, start + split, len - split, is_less, trace);
}

/// Partitions `v` around its middle element and returns the split point `i`.
///
/// On return every element of `v[..i]` is `<=` the pivot and every element of `v[i..]` is `>=`
/// it, with `0 < i < v.len()` so both sides are strictly shorter. `v.len()` must be at least 2.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    // The pivot value is copied out, swaps may move the element it was taken from.
    let pivot = v[v.len() / 2];

    let mut i = 0;
    let mut j = v.len() - 1;

    loop {
        // Strict comparisons on both sides, elements equal to the pivot stop either scan. Those
        // stops are also what keep both scans inside the slice without a bounds check of their
        // own.
        while is_less(&v[i], &pivot) {
            i += 1;
        }

        while is_less(&pivot, &v[j]) {
            j -= 1;
        }

        if i >= j {
            return i;
        }

        v.swap(i, j);
        i += 1;
        j -= 1;
    }
}
