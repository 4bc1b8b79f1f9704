//! Command values as they exist for the span of one dispatch call.

use std::fmt;
use std::path::{Path, PathBuf};

/// One positional command field, tagged by kind.
///
/// Each tag has exactly one on-wire rendering: integers as plain decimal,
/// flags as `0`/`1` (never `true`/`false`), text passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Integer(i64),
    Text(String),
    Flag(bool),
}

impl Arg {
    /// Canonical on-wire form of the field, as defined by the `Display` impl.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Integer(v) => write!(f, "{v}"),
            Arg::Text(v) => f.write_str(v),
            Arg::Flag(v) => f.write_str(if *v { "1" } else { "0" }),
        }
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Integer(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Integer(i64::from(value))
    }
}

impl From<u32> for Arg {
    fn from(value: u32) -> Self {
        Arg::Integer(i64::from(value))
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Flag(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

/// Timestamp sentinel meaning "stamp with the wall clock at encode time".
pub const NOW: u64 = 0;

/// A single external command, built and consumed within one dispatch call.
///
/// `timestamp` defaults to [`NOW`]; callers can pin it with [`Command::at`]
/// to backdate or replay deterministically. `channel` overrides the resolved
/// destination for this command only.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    timestamp: u64,
    args: Vec<Arg>,
    channel: Option<PathBuf>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timestamp: NOW,
            args: Vec::new(),
            channel: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = Arg>,
    {
        self.args.extend(args);
        self
    }

    /// Pins the command timestamp to a fixed epoch second.
    pub fn at(mut self, epoch: u64) -> Self {
        self.timestamp = epoch;
        self
    }

    /// Sends this command to an explicit channel, bypassing resolution.
    pub fn via(mut self, path: impl Into<PathBuf>) -> Self {
        self.channel = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn arguments(&self) -> &[Arg] {
        &self.args
    }

    pub fn channel(&self) -> Option<&Path> {
        self.channel.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_rendering_is_canonical() {
        assert_eq!(Arg::Integer(42).render(), "42");
        assert_eq!(Arg::Integer(-7).render(), "-7");
        assert_eq!(Arg::Flag(true).render(), "1");
        assert_eq!(Arg::Flag(false).render(), "0");
        assert_eq!(Arg::Text("web01".into()).render(), "web01");
    }

    #[test]
    fn render_and_display_are_identical() {
        let args = [
            Arg::Integer(42),
            Arg::Integer(-7),
            Arg::Flag(true),
            Arg::Flag(false),
            Arg::Text("web01".into()),
        ];
        for arg in &args {
            assert_eq!(arg.render(), format!("{arg}"));
        }
    }

    #[test]
    fn builder_preserves_argument_order() {
        let cmd = Command::new("SCHEDULE_HOST_DOWNTIME")
            .arg("host1")
            .arg(100)
            .arg(true);
        let rendered: Vec<String> = cmd.arguments().iter().map(Arg::render).collect();
        assert_eq!(rendered, vec!["host1", "100", "1"]);
    }

    #[test]
    fn timestamp_defaults_to_now_sentinel() {
        assert_eq!(Command::new("RESTART_PROGRAM").timestamp(), NOW);
        assert_eq!(Command::new("RESTART_PROGRAM").at(1700000000).timestamp(), 1700000000);
    }
}
