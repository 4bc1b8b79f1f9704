#![cfg(unix)]

use std::ffi::CString;
use std::io::Read;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::time::{Duration, Instant};

use extcmd::{Command, Dispatcher, Error};
use tempfile::tempdir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn mkfifo(path: &Path) {
    let cpath = CString::new(path.as_os_str().as_bytes()).expect("fifo path");
    let res = unsafe { libc::mkfifo(cpath.as_ptr(), 0o600) };
    assert_eq!(res, 0, "mkfifo failed: {}", std::io::Error::last_os_error());
}

#[test]
fn readerless_pipe_times_out_within_the_bound() {
    init_logging();
    let dir = tempdir().expect("tempdir");
    let fifo = dir.path().join("nagios.cmd");
    mkfifo(&fifo);

    let dispatcher = Dispatcher::new().pipe_wait(Duration::from_secs(1));
    let cmd = Command::new("RESTART_PROGRAM").at(1).via(&fifo);

    let start = Instant::now();
    let result = dispatcher.dispatch(&cmd);
    let elapsed = start.elapsed();

    match result {
        Err(Error::ChannelTimeout { waited, .. }) => {
            assert!(waited >= Duration::from_secs(1));
        }
        other => panic!("expected ChannelTimeout, got {other:?}"),
    }
    assert!(
        elapsed < Duration::from_secs(3),
        "timeout took {elapsed:?}, should be ~1s"
    );
}

#[test]
fn pipe_with_reader_receives_the_line() {
    init_logging();
    let dir = tempdir().expect("tempdir");
    let fifo = dir.path().join("nagios.cmd");
    mkfifo(&fifo);

    let reader_path = fifo.clone();
    let reader = std::thread::spawn(move || {
        // Blocks until a writer opens the other end.
        let mut file = std::fs::File::open(reader_path).expect("open read end");
        let mut contents = String::new();
        file.read_to_string(&mut contents).expect("read line");
        contents
    });

    let dispatcher = Dispatcher::new().pipe_wait(Duration::from_secs(5));
    let cmd = Command::new("SHUTDOWN_PROGRAM").at(1700000000).via(&fifo);
    dispatcher.dispatch(&cmd).expect("dispatch to pipe");

    let received = reader.join().expect("reader thread");
    assert_eq!(received, "[1700000000] SHUTDOWN_PROGRAM\n");
}
