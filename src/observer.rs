//! Pass-by-pass observation of a running sort.
//!
//! Every strategy accepts an `Option<&mut dyn ProgressObserver<T>>`. Passing `None` turns tracing
//! off for that call, there is no global switch.

use std::fmt::Display;
use std::io::{self, Write};

/// Receives the state of the slice after each pass of a sort.
///
/// What counts as a pass depends on the strategy. `snapshot` is only borrowed for the duration of
/// the call, the sort keeps mutating it afterwards.
pub trait ProgressObserver<T> {
    fn on_pass(&mut self, pass: usize, snapshot: &[T]);
}

impl<T, F> ProgressObserver<T> for F
where
    F: FnMut(usize, &[T]),
{
    fn on_pass(&mut self, pass: usize, snapshot: &[T]) {
        self(pass, snapshot);
    }
}

/// Keeps a copy of every reported pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassLog<T> {
    passes: Vec<(usize, Vec<T>)>,
}

impl<T> PassLog<T> {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Pass indices in the order they were reported.
    pub fn indices(&self) -> Vec<usize> {
        self.passes.iter().map(|(pass, _)| *pass).collect()
    }

    pub fn snapshots(&self) -> impl Iterator<Item = &[T]> {
        self.passes.iter().map(|(_, snapshot)| snapshot.as_slice())
    }

    pub fn last(&self) -> Option<&[T]> {
        self.passes.last().map(|(_, snapshot)| snapshot.as_slice())
    }

    pub fn into_inner(self) -> Vec<(usize, Vec<T>)> {
        self.passes
    }
}

impl<T> Default for PassLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ProgressObserver<T> for PassLog<T> {
    fn on_pass(&mut self, pass: usize, snapshot: &[T]) {
        self.passes.push((pass, snapshot.to_vec()));
    }
}

/// Writes one line per pass: the right aligned pass index, then every value followed by `", "`.
///
/// ```text
///   0: 3, 5, 1, 8,
/// ```
///
/// The first write error is kept and every later pass is dropped, [`DumpProgress::finish`] hands
/// it back.
pub struct DumpProgress<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> DumpProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn write_pass<T: Display>(&mut self, pass: usize, snapshot: &[T]) -> io::Result<()> {
        write!(self.out, "{pass:>3}: ")?;
        for value in snapshot {
            write!(self.out, "{value}, ")?;
        }
        writeln!(self.out)
    }
}

impl<T: Display, W: Write> ProgressObserver<T> for DumpProgress<W> {
    fn on_pass(&mut self, pass: usize, snapshot: &[T]) {
        if self.error.is_some() {
            return;
        }

        tracing::trace!(pass, len = snapshot.len(), "dumping pass");

        if let Err(err) = self.write_pass(pass, snapshot) {
            self.error = Some(err);
        }
    }
}

/// Pass counter plus the optional observer, owned by one top-level sort call.
///
/// Recursive strategies thread a `&mut Trace` through every level so the numbering keeps running
/// across the whole call and starts over at 0 on the next one.
pub(crate) struct Trace<'a, T> {
    observer: Option<&'a mut dyn ProgressObserver<T>>,
    pass: usize,
}

impl<'a, T> Trace<'a, T> {
    pub(crate) fn new(observer: Option<&'a mut dyn ProgressObserver<T>>) -> Self {
        Self { observer, pass: 0 }
    }

    /// Reports `snapshot` under the current pass index and advances it.
    pub(crate) fn emit(&mut self, snapshot: &[T]) {
        self.peek(snapshot);
        self.pass += 1;
    }

    /// Reports `snapshot` under the current pass index without advancing it.
    pub(crate) fn peek(&mut self, snapshot: &[T]) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_pass(self.pass, snapshot);
        }
    }
}
