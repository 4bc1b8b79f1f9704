//! Directive lookup against the daemon's main configuration file.
//!
//! The main config is a flat `directive=value` file (comments start with `#`).
//! This is deliberately not a parser for the daemon's object-configuration
//! language; the dispatch core only ever needs a handful of directives, most
//! importantly `command_file`.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directive naming the external command channel.
pub const COMMAND_FILE: &str = "command_file";

/// Directive saying whether the daemon accepts external commands at all.
pub const CHECK_EXTERNAL_COMMANDS: &str = "check_external_commands";

/// Environment override for the main config location.
pub const CONFIG_ENV: &str = "NAGIOS_CFG_FILE";

/// Conventional install locations, probed in order.
pub const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "/etc/nagios/nagios.cfg",
    "/etc/nagios4/nagios.cfg",
    "/etc/nagios3/nagios.cfg",
    "/usr/local/nagios/etc/nagios.cfg",
];

/// Returns the main config path: the environment override if set, else the
/// first conventional location that exists.
pub fn locate_main_config() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    DEFAULT_CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Parsed main-config directives, in file order.
#[derive(Debug, Clone)]
pub struct MainConfig {
    directives: Vec<(String, String)>,
}

impl MainConfig {
    pub fn load(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    pub fn parse(contents: &str) -> Self {
        let mut directives = Vec::new();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some((name, value)) = line.split_once('=') {
                directives.push((name.trim().to_string(), value.trim().to_string()));
            }
        }
        Self { directives }
    }

    /// Last assignment wins, matching how the daemon reads its config
    /// top-to-bottom and overwrites earlier values.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.directives
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All assignments in file order, for repeatable directives like
    /// `cfg_file`.
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.directives
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Boolean directives are `0`/`1` on disk.
    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.value(name)? {
            "1" => Some(true),
            "0" => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# main configuration
log_file=/var/log/nagios/nagios.log
cfg_file=/etc/nagios/objects/commands.cfg
cfg_file=/etc/nagios/objects/templates.cfg

check_external_commands=1
command_file = /var/spool/nagios/rw/nagios.cmd
";

    #[test]
    fn parses_directives_and_trims_whitespace() {
        let cfg = MainConfig::parse(SAMPLE);
        assert_eq!(cfg.value(COMMAND_FILE), Some("/var/spool/nagios/rw/nagios.cmd"));
        assert_eq!(cfg.flag(CHECK_EXTERNAL_COMMANDS), Some(true));
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let cfg = MainConfig::parse("# command_file=/nope\n\ncommand_file=/real\n");
        assert_eq!(cfg.value(COMMAND_FILE), Some("/real"));
    }

    #[test]
    fn last_assignment_wins() {
        let cfg = MainConfig::parse("command_file=/old\ncommand_file=/new\n");
        assert_eq!(cfg.value(COMMAND_FILE), Some("/new"));
    }

    #[test]
    fn repeatable_directives_keep_file_order() {
        let cfg = MainConfig::parse(SAMPLE);
        let files: Vec<&str> = cfg.values("cfg_file").collect();
        assert_eq!(
            files,
            vec![
                "/etc/nagios/objects/commands.cfg",
                "/etc/nagios/objects/templates.cfg"
            ]
        );
    }

    #[test]
    fn missing_directive_is_none() {
        let cfg = MainConfig::parse(SAMPLE);
        assert_eq!(cfg.value("status_file"), None);
        assert_eq!(cfg.flag("use_syslog"), None);
    }
}
