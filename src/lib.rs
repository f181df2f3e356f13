//! Five classic in-memory sorts over integers, each able to report its progress pass by pass, plus
//! the harness that traces or times them on a fixed 64 element dataset.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Copy,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Copy,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod cli;
pub mod error;
pub mod fixture;
pub mod harness;
pub mod observer;
pub mod stable;
pub mod strategy;
pub mod unstable;

pub use error::{Error, Result};
pub use observer::{DumpProgress, PassLog, ProgressObserver};
pub use strategy::{SortFn, Strategy};
