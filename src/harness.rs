//! Drives one strategy over the fixture, either once with every pass dumped or many times with
//! the sort call timed.

use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::fixture::TEST_DATA;
use crate::observer::DumpProgress;
use crate::strategy::Strategy;

pub const DEFAULT_TRIALS: u32 = 1_000_000;

/// Sorts a copy of the fixture once, writing every pass to `out`, then a blank line.
pub fn show_progress<W: Write>(strategy: Strategy, out: W) -> Result<W> {
    show_progress_on(strategy, &TEST_DATA, out)
}

pub fn show_progress_on<W: Write>(strategy: Strategy, input: &[i32], out: W) -> Result<W> {
    debug!(%strategy, len = input.len(), "showing progress");

    let mut data = input.to_vec();
    let mut dump = DumpProgress::new(out);
    strategy.sort(&mut data, Some(&mut dump));

    let mut out = dump.finish()?;
    writeln!(out)?;

    Ok(out)
}

/// Outcome of [`time_trials`]. Always covers at least one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingReport {
    strategy: Strategy,
    trials: u32,
    total: Duration,
}

impl TimingReport {
    pub fn new(strategy: Strategy, trials: u32, total: Duration) -> Result<Self> {
        if trials == 0 {
            return Err(Error::NoTrials);
        }

        Ok(Self {
            strategy,
            trials,
            total,
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Sum over all trials of the time spent inside the sort call only.
    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn mean(&self) -> Duration {
        self.total / self.trials
    }

    pub fn mean_micros(&self) -> f64 {
        self.total.as_secs_f64() * 1_000_000.0 / f64::from(self.trials)
    }

    /// Writes `Time taken was <mean>us` and a newline.
    pub fn write_summary<W: Write>(&self, mut out: W) -> Result<()> {
        write!(out, "Time taken was {:.6}us", self.mean_micros())?;
        writeln!(out)?;
        Ok(())
    }
}

/// Sorts a fresh copy of the fixture `trials` times and sums the time spent sorting.
pub fn time_trials(strategy: Strategy, trials: u32) -> Result<TimingReport> {
    time_trials_on(strategy, &TEST_DATA, trials)
}

pub fn time_trials_on(strategy: Strategy, input: &[i32], trials: u32) -> Result<TimingReport> {
    if trials == 0 {
        return Err(Error::NoTrials);
    }

    debug!(%strategy, len = input.len(), trials, "timing");

    let entry = strategy.entry();
    let mut data = input.to_vec();
    let mut work = vec![0; input.len()];
    let mut total = Duration::ZERO;

    for _ in 0..trials {
        data.copy_from_slice(input);

        let start = Instant::now();
        entry(&mut data, &mut work, None);
        total += start.elapsed();

        black_box(&data);
    }

    let report = TimingReport::new(strategy, trials, total)?;
    info!(
        %strategy,
        trials,
        mean_us = report.mean_micros(),
        "timing finished"
    );

    Ok(report)
}
