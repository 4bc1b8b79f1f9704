//! Typed external-command dispatch for Nagios-compatible monitoring daemons.
//!
//! A monitoring daemon polls an external command channel (a file or named
//! pipe) for operator-issued commands, one line each:
//!
//! ```text
//! [<unix_timestamp>] <COMMAND_NAME>[;<field1>;...;<fieldN>]\n
//! ```
//!
//! This crate encodes commands into that wire format, resolves the channel
//! (an explicit path, or the `command_file` directive discovered from the
//! daemon's main configuration), and appends lines safely while other
//! processes write to the same channel. A declarative catalog of the daemon's
//! command set provides one typed helper per command, plus a generic
//! dispatch-by-name path validated against the same table.
//!
//! ```no_run
//! use extcmd::Dispatcher;
//!
//! let dispatcher = Dispatcher::new();
//! dispatcher.schedule_host_downtime(
//!     "web01", 1700000000, 1700003600, true, 0, 0, "alice", "kernel upgrade",
//! )?;
//! dispatcher.process_service_check_result("web01", "http", 0, "HTTP OK")?;
//! # Ok::<(), extcmd::Error>(())
//! ```

pub mod catalog;
pub mod channel;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod encode;
pub mod error;
pub mod resolve;
pub mod schema;

pub use command::{Arg, Command};
pub use dispatch::Dispatcher;
pub use error::{EncodeError, Error, Result};
pub use resolve::ChannelResolver;
