use std::cmp::Ordering;

/// Elements are `Copy` because the merge and quick sorts move values through scratch and pivot
/// storage by value. Everything sorted here is integers or integer-tagged pairs.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Copy;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Copy,
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
pub mod tests;

#[doc(hidden)]
pub use paste;
