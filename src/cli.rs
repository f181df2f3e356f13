//! Command line front end of `sort_trace`.

use std::io::Write;

use clap::{Parser, ValueEnum};

use crate::error::Result;
use crate::harness::{self, DEFAULT_TRIALS};
use crate::strategy::Strategy;

#[derive(Debug, Parser)]
#[command(name = "sort_trace")]
#[command(about = "Show the passes of a sorting algorithm, or time it")]
pub struct Args {
    /// Strategy to run: bubble, selection, insertion, merge or quick
    #[arg(default_value = "bubble")]
    pub strategy: Strategy,

    /// Dump every pass, or time repeated runs
    #[arg(short, long, value_enum, default_value_t = Mode::Progress)]
    pub mode: Mode,

    /// Number of timed runs
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: u32,

    /// Run every strategy in turn, ignoring the positional one
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Progress,
    Timing,
}

impl Args {
    pub fn strategies(&self) -> Vec<Strategy> {
        if self.all {
            Strategy::ALL.to_vec()
        } else {
            vec![self.strategy]
        }
    }
}

/// Runs what `args` asks for, writing the dumps or timing lines to `out`.
///
/// With `--all` every strategy's output is preceded by a `<name>:` header line.
pub fn run<W: Write>(args: &Args, mut out: W) -> Result<W> {
    for strategy in args.strategies() {
        if args.all {
            writeln!(out, "{strategy}:")?;
        }

        match args.mode {
            Mode::Progress => {
                harness::show_progress(strategy, &mut out)?;
            }
            Mode::Timing => {
                harness::time_trials(strategy, args.trials)?.write_summary(&mut out)?;
            }
        }
    }

    out.flush()?;

    Ok(out)
}
