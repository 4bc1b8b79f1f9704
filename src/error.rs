use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Reasons a command cannot be rendered as a single wire line.
///
/// The wire format has no escaping rule, so a field that would break framing
/// is rejected outright rather than silently mangled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("command token {0:?} is not a valid wire token")]
    InvalidToken(String),
    #[error("argument {index} contains the field separator ';'")]
    SeparatorInField { index: usize },
    #[error("argument {index} contains a newline")]
    NewlineInField { index: usize },
    #[error("encoded line is {len} bytes, atomic write bound is {max}")]
    LineTooLong { len: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("encoding: {0}")]
    Encoding(#[from] EncodeError),
    /// No explicit channel was given and no `command_file` directive could be
    /// discovered from the daemon's main configuration.
    #[error("command channel unresolved: no explicit path and no command_file directive found")]
    ChannelUnresolved,
    /// The resolved channel path could not be opened for writing.
    #[error("command channel {} unavailable: {source}", path.display())]
    ChannelUnavailable { path: PathBuf, source: io::Error },
    /// The bounded wait for a reader on a named pipe expired.
    #[error("timed out after {waited:?} waiting for a reader on pipe {}", path.display())]
    ChannelTimeout { path: PathBuf, waited: Duration },
    /// The OS write failed or accepted only part of the line. A partial write
    /// is never reported as success.
    #[error("write to command channel {} failed: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("unknown command token {0:?}")]
    UnknownCommand(String),
    #[error("{token} takes {expected} arguments, got {given}")]
    ArityMismatch {
        token: &'static str,
        expected: usize,
        given: usize,
    },
    #[error("{token} argument {index} ({name}) must be {kind}")]
    KindMismatch {
        token: &'static str,
        index: usize,
        name: &'static str,
        kind: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
