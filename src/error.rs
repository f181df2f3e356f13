use std::io;

use thiserror::Error;

/// Errors from the harness and the command line front end.
///
/// The sorts themselves cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown sort strategy `{0}`, expected one of: bubble, selection, insertion, merge, quick")]
    UnknownStrategy(String),
    #[error("timing needs at least one trial")]
    NoTrials,
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
