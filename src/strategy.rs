use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::observer::ProgressObserver;
use crate::stable::{bubble, insertion, merge};
use crate::unstable::{quick, selection};

/// Common entry point of every strategy: the data, a scratch buffer of at least the same length
/// and the optional observer.
///
/// Only merge sort touches the scratch buffer.
pub type SortFn = fn(&mut [i32], &mut [i32], Option<&mut dyn ProgressObserver<i32>>);

/// Runtime selectable sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Bubble,
        Strategy::Selection,
        Strategy::Insertion,
        Strategy::Merge,
        Strategy::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bubble => "bubble",
            Strategy::Selection => "selection",
            Strategy::Insertion => "insertion",
            Strategy::Merge => "merge",
            Strategy::Quick => "quick",
        }
    }

    pub fn is_stable(self) -> bool {
        matches!(self, Strategy::Bubble | Strategy::Insertion | Strategy::Merge)
    }

    pub fn entry(self) -> SortFn {
        match self {
            Strategy::Bubble => run_bubble,
            Strategy::Selection => run_selection,
            Strategy::Insertion => run_insertion,
            Strategy::Merge => run_merge,
            Strategy::Quick => run_quick,
        }
    }

    /// Sorts `data` in non-descending order, allocating merge sort's scratch buffer if needed.
    pub fn sort(self, data: &mut [i32], observer: Option<&mut dyn ProgressObserver<i32>>) {
        let mut work = match self {
            Strategy::Merge => vec![0; data.len()],
            _ => Vec::new(),
        };

        (self.entry())(data, &mut work, observer);
    }

    /// Like [`Strategy::sort`], with a caller owned scratch buffer so repeated runs don't
    /// allocate.
    ///
    /// # Panics
    ///
    /// Panics if `work` is shorter than `data`.
    pub fn sort_with_buffer(
        self,
        data: &mut [i32],
        work: &mut [i32],
        observer: Option<&mut dyn ProgressObserver<i32>>,
    ) {
        assert!(
            work.len() >= data.len(),
            "scratch buffer of {} elements is too short for {} elements",
            work.len(),
            data.len()
        );

        (self.entry())(data, work, observer);
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    /// Accepts `merge`, `Merge`, `merge_sort` and `mergesort` alike.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower
            .strip_suffix("_sort")
            .or_else(|| lower.strip_suffix("sort"))
            .unwrap_or(&lower);

        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| Error::UnknownStrategy(s.to_owned()))
    }
}

fn less(a: &i32, b: &i32) -> bool {
    a < b
}

fn run_bubble(
    data: &mut [i32],
    _work: &mut [i32],
    observer: Option<&mut dyn ProgressObserver<i32>>,
) {
    bubble::sort_observed(data, &mut less, observer);
}

fn run_selection(
    data: &mut [i32],
    _work: &mut [i32],
    observer: Option<&mut dyn ProgressObserver<i32>>,
) {
    selection::sort_observed(data, &mut less, observer);
}

fn run_insertion(
    data: &mut [i32],
    _work: &mut [i32],
    observer: Option<&mut dyn ProgressObserver<i32>>,
) {
    insertion::sort_observed(data, &mut less, observer);
}

fn run_merge(
    data: &mut [i32],
    work: &mut [i32],
    observer: Option<&mut dyn ProgressObserver<i32>>,
) {
    merge::sort_observed(data, work, &mut less, observer);
}

fn run_quick(
    data: &mut [i32],
    _work: &mut [i32],
    observer: Option<&mut dyn ProgressObserver<i32>>,
) {
    quick::sort_observed(data, &mut less, observer);
}
