//! Destination resolution for dispatched commands.
//!
//! The resolver is a caller-owned object, not a hidden process global. It
//! caches the discovered `command_file` path because the daemon's main config
//! does not move at runtime; the channel behind that path may still be
//! recreated across daemon restarts, which is why resolution hands back a
//! path and never an open handle.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::config::{self, MainConfig};
use crate::error::{Error, Result};
use crate::schema;

/// Where the resolver finds the daemon's main configuration.
#[derive(Debug, Clone, Default)]
enum ConfigSource {
    /// Probe the environment override and conventional install locations.
    #[default]
    Discover,
    /// Use exactly this main config file.
    Explicit(PathBuf),
}

/// Resolves the external command channel for each dispatch.
///
/// Resolution order: explicit per-call override, then the cached or
/// freshly-discovered `command_file` directive. A path is never fabricated;
/// with nothing discoverable the resolver fails with
/// [`Error::ChannelUnresolved`].
#[derive(Debug, Default)]
pub struct ChannelResolver {
    source: ConfigSource,
    cached: Mutex<Option<PathBuf>>,
}

impl ChannelResolver {
    /// Resolver that discovers the main config from conventional locations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver pinned to a specific main config file.
    pub fn with_config(path: impl Into<PathBuf>) -> Self {
        Self {
            source: ConfigSource::Explicit(path.into()),
            cached: Mutex::new(None),
        }
    }

    /// Resolves the destination for one command.
    ///
    /// An explicit path is returned unchanged and bypasses the cache;
    /// existence is deferred to write time. Otherwise the cached discovery is
    /// used, populated on first success from the `command_file` directive.
    pub fn resolve(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Ok(guard) = self.cached.lock() {
            if let Some(path) = guard.as_ref() {
                return Ok(path.clone());
            }
        }
        let path = self.discover()?;
        if let Ok(mut guard) = self.cached.lock() {
            *guard = Some(path.clone());
        }
        Ok(path)
    }

    /// Drops the cached discovery so the next resolution re-reads the config.
    pub fn invalidate(&self) {
        if let Ok(mut guard) = self.cached.lock() {
            *guard = None;
        }
    }

    fn discover(&self) -> Result<PathBuf> {
        let config_path = match &self.source {
            ConfigSource::Explicit(path) => path.clone(),
            ConfigSource::Discover => {
                config::locate_main_config().ok_or(Error::ChannelUnresolved)?
            }
        };
        let main = match MainConfig::load(&config_path) {
            Ok(main) => main,
            Err(err) => {
                log::warn!(
                    "cannot read main config {}: {err}",
                    config_path.display()
                );
                return Err(Error::ChannelUnresolved);
            }
        };
        if main.flag(config::CHECK_EXTERNAL_COMMANDS) == Some(false) {
            log::warn!(
                "{} is disabled in {}; the daemon will ignore dispatched commands",
                config::CHECK_EXTERNAL_COMMANDS,
                config_path.display()
            );
        }
        // The directive registry is the authority on the directive's name.
        let directive = schema::directive(config::COMMAND_FILE).ok_or(Error::ChannelUnresolved)?;
        let value = main.value(directive.name).ok_or(Error::ChannelUnresolved)?;
        log::debug!("resolved command channel {value} from {}", config_path.display());
        Ok(PathBuf::from(value))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nagios.cfg");
        let mut file = std::fs::File::create(&path).expect("create config");
        file.write_all(contents.as_bytes()).expect("write config");
        (dir, path)
    }

    #[test]
    fn explicit_path_bypasses_discovery() {
        let resolver = ChannelResolver::with_config("/nonexistent/nagios.cfg");
        let resolved = resolver
            .resolve(Some(Path::new("/tmp/test.cmd")))
            .expect("explicit resolve");
        assert_eq!(resolved, PathBuf::from("/tmp/test.cmd"));
    }

    #[test]
    fn discovers_command_file_directive() {
        let (_dir, cfg) = write_config("check_external_commands=1\ncommand_file=/var/run/nagios.cmd\n");
        let resolver = ChannelResolver::with_config(&cfg);
        let resolved = resolver.resolve(None).expect("resolve");
        assert_eq!(resolved, PathBuf::from("/var/run/nagios.cmd"));
    }

    #[test]
    fn cache_survives_config_deletion_until_invalidated() {
        let (dir, cfg) = write_config("command_file=/var/run/nagios.cmd\n");
        let resolver = ChannelResolver::with_config(&cfg);
        resolver.resolve(None).expect("first resolve");
        drop(dir);
        let cached = resolver.resolve(None).expect("cached resolve");
        assert_eq!(cached, PathBuf::from("/var/run/nagios.cmd"));
        resolver.invalidate();
        assert!(matches!(
            resolver.resolve(None),
            Err(Error::ChannelUnresolved)
        ));
    }

    #[test]
    fn missing_directive_is_unresolved() {
        let (_dir, cfg) = write_config("log_file=/var/log/nagios.log\n");
        let resolver = ChannelResolver::with_config(&cfg);
        assert!(matches!(
            resolver.resolve(None),
            Err(Error::ChannelUnresolved)
        ));
    }

    #[test]
    fn unreadable_config_is_unresolved() {
        let resolver = ChannelResolver::with_config("/nonexistent/nagios.cfg");
        assert!(matches!(
            resolver.resolve(None),
            Err(Error::ChannelUnresolved)
        ));
    }
}
