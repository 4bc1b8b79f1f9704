//! Scoped writes to the external command channel.
//!
//! The channel is shared, externally-controlled state: the daemon owns it,
//! recreates it across restarts, and other processes append to it
//! concurrently. The writer therefore opens the path fresh for every line,
//! writes the whole line with one syscall, and closes the handle on every
//! exit path. Lines are kept within the platform's atomic pipe-write bound so
//! concurrent writers can interleave lines but never split one.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crate::error::{EncodeError, Error, Result};

/// Largest line written as one atomic operation.
///
/// POSIX guarantees pipe writes up to `PIPE_BUF` bytes are not interleaved
/// with other writers. Longer lines are rejected before any I/O.
#[cfg(unix)]
pub const MAX_LINE_BYTES: usize = libc::PIPE_BUF;
#[cfg(not(unix))]
pub const MAX_LINE_BYTES: usize = 4096;

/// Poll interval while waiting for a pipe reader to appear.
#[cfg(unix)]
const PIPE_PROBE_INTERVAL: Duration = Duration::from_millis(25);

/// Appends one encoded line to the channel at `path`.
///
/// Regular files are opened for append and created if missing. Named pipes
/// are opened write-only; with no reader attached the open blocks, so
/// `pipe_wait` bounds that wait and expiry fails with
/// [`Error::ChannelTimeout`]. A short write is reported as [`Error::Write`],
/// never as success, and is not retried.
pub fn write_line(path: &Path, line: &str, pipe_wait: Option<Duration>) -> Result<()> {
    if line.len() > MAX_LINE_BYTES {
        return Err(Error::Encoding(EncodeError::LineTooLong {
            len: line.len(),
            max: MAX_LINE_BYTES,
        }));
    }
    let mut channel = open_channel(path, pipe_wait)?;
    let written = channel.write(line.as_bytes()).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    if written != line.len() {
        return Err(Error::Write {
            path: path.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short write: {written} of {} bytes", line.len()),
            ),
        });
    }
    channel.flush().map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn open_channel(path: &Path, pipe_wait: Option<Duration>) -> Result<File> {
    if is_fifo(path) {
        return platform::open_fifo(path, pipe_wait);
    }
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|source| Error::ChannelUnavailable {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(unix)]
fn is_fifo(path: &Path) -> bool {
    use std::os::unix::fs::FileTypeExt;
    std::fs::metadata(path)
        .map(|meta| meta.file_type().is_fifo())
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_fifo(_path: &Path) -> bool {
    false
}

#[cfg(unix)]
mod platform {
    use std::ffi::CString;
    use std::fs::File;
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::io::FromRawFd;
    use std::path::Path;
    use std::time::{Duration, Instant};

    use super::{blocking_pipe_open, Error, Result, PIPE_PROBE_INTERVAL};

    /// Opens a FIFO for writing, optionally bounding the wait for a reader.
    ///
    /// A write-only open of a reader-less FIFO blocks indefinitely, so the
    /// bounded path probes with `O_NONBLOCK` instead: `ENXIO` means no reader
    /// yet, anything else is a real failure. Once a reader is attached the
    /// descriptor is flipped back to blocking so the write itself cannot
    /// short-circuit with `EAGAIN`.
    pub fn open_fifo(path: &Path, pipe_wait: Option<Duration>) -> Result<File> {
        let Some(bound) = pipe_wait else {
            return blocking_pipe_open(path);
        };
        let cpath = CString::new(path.as_os_str().as_bytes()).map_err(|_| {
            Error::ChannelUnavailable {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "channel path contains NUL",
                ),
            }
        })?;
        let start = Instant::now();
        loop {
            let fd = unsafe {
                libc::open(
                    cpath.as_ptr(),
                    libc::O_WRONLY | libc::O_NONBLOCK | libc::O_CLOEXEC,
                )
            };
            if fd >= 0 {
                let file = unsafe { File::from_raw_fd(fd) };
                set_blocking(fd).map_err(|source| Error::ChannelUnavailable {
                    path: path.to_path_buf(),
                    source,
                })?;
                return Ok(file);
            }
            let err = std::io::Error::last_os_error();
            if err.raw_os_error() != Some(libc::ENXIO) {
                return Err(Error::ChannelUnavailable {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
            let waited = start.elapsed();
            if waited >= bound {
                return Err(Error::ChannelTimeout {
                    path: path.to_path_buf(),
                    waited,
                });
            }
            std::thread::sleep(PIPE_PROBE_INTERVAL.min(bound - waited));
        }
    }

    /// Drops `O_NONBLOCK` from an already-open descriptor. A descriptor left
    /// non-blocking would turn a full pipe into a spurious write failure, so
    /// a failed `fcntl` is an error, not a fallback.
    pub(super) fn set_blocking(fd: libc::c_int) -> std::io::Result<()> {
        let flags = unsafe { libc::fcntl(fd, libc::F_GETFL) };
        if flags < 0 {
            return Err(std::io::Error::last_os_error());
        }
        let res = unsafe { libc::fcntl(fd, libc::F_SETFL, flags & !libc::O_NONBLOCK) };
        if res < 0 {
            return Err(std::io::Error::last_os_error());
        }
        Ok(())
    }
}

#[cfg(not(unix))]
mod platform {
    use std::fs::File;
    use std::path::Path;
    use std::time::Duration;

    use super::{blocking_pipe_open, Result};

    pub fn open_fifo(path: &Path, _pipe_wait: Option<Duration>) -> Result<File> {
        blocking_pipe_open(path)
    }
}

fn blocking_pipe_open(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|source| Error::ChannelUnavailable {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_line_is_rejected_before_io() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cmd");
        let line = format!("[1] X;{}\n", "a".repeat(MAX_LINE_BYTES));
        let err = write_line(&path, &line, None).unwrap_err();
        assert!(matches!(
            err,
            Error::Encoding(EncodeError::LineTooLong { .. })
        ));
        assert!(!path.exists(), "rejected line must not touch the channel");
    }

    #[test]
    fn append_creates_regular_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cmd");
        write_line(&path, "[1] RESTART_PROGRAM\n", None).expect("first write");
        write_line(&path, "[2] SHUTDOWN_PROGRAM\n", None).expect("second write");
        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "[1] RESTART_PROGRAM\n[2] SHUTDOWN_PROGRAM\n");
    }

    #[cfg(unix)]
    #[test]
    fn set_blocking_succeeds_on_a_live_descriptor() {
        use std::os::unix::io::AsRawFd;
        let file = tempfile::tempfile().expect("tempfile");
        platform::set_blocking(file.as_raw_fd()).expect("live descriptor");
    }

    #[cfg(unix)]
    #[test]
    fn set_blocking_reports_a_dead_descriptor() {
        let err = platform::set_blocking(-1).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::EBADF));
    }

    #[cfg(unix)]
    #[test]
    fn unwritable_path_maps_to_channel_unavailable() {
        let err = write_line(Path::new("/nonexistent-dir/nagios.cmd"), "[1] X\n", None)
            .unwrap_err();
        assert!(matches!(err, Error::ChannelUnavailable { .. }));
    }
}
