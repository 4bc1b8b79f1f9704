//! Dispatch glue: resolve, encode, write.

use std::time::Duration;

use crate::channel;
use crate::command::Command;
use crate::encode::encode;
use crate::error::Result;
use crate::resolve::ChannelResolver;

/// Sends commands to the daemon's external command channel.
///
/// Each dispatch is stateless: resolve the destination, encode the line,
/// write it. A failure at any stage aborts without attempting later stages
/// and surfaces that stage's error unwrapped, so an encoding problem is
/// distinguishable from a channel problem. The dispatcher holds no open
/// handles between calls.
#[derive(Debug, Default)]
pub struct Dispatcher {
    resolver: ChannelResolver,
    pipe_wait: Option<Duration>,
}

impl Dispatcher {
    /// Dispatcher that discovers the channel from the daemon's main config.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(resolver: ChannelResolver) -> Self {
        Self {
            resolver,
            pipe_wait: None,
        }
    }

    /// Bounds the wait for a reader when the channel is a named pipe.
    ///
    /// Off by default: deployments keep the daemon (the reader) alive, and a
    /// blocking open is the historical behavior. With a bound set, dispatch
    /// fails with [`crate::Error::ChannelTimeout`] instead of hanging.
    pub fn pipe_wait(mut self, bound: Duration) -> Self {
        self.pipe_wait = Some(bound);
        self
    }

    pub fn resolver(&self) -> &ChannelResolver {
        &self.resolver
    }

    /// Dispatches one command.
    pub fn dispatch(&self, command: &Command) -> Result<()> {
        let path = self.resolver.resolve(command.channel())?;
        let line = encode(command.name(), command.timestamp(), command.arguments())?;
        channel::write_line(&path, &line, self.pipe_wait)?;
        log::debug!("dispatched {} to {}", command.name(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn encoding_failure_does_not_touch_the_channel() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cmd");
        let dispatcher = Dispatcher::new();
        let cmd = Command::new("ADD_HOST_COMMENT")
            .arg("bad;field")
            .via(&path);
        assert!(matches!(dispatcher.dispatch(&cmd), Err(Error::Encoding(_))));
        assert!(!path.exists());
    }

    #[test]
    fn unresolved_channel_fails_before_encoding() {
        let resolver = ChannelResolver::with_config("/nonexistent/nagios.cfg");
        let dispatcher = Dispatcher::with_resolver(resolver);
        let cmd = Command::new("RESTART_PROGRAM");
        assert!(matches!(
            dispatcher.dispatch(&cmd),
            Err(Error::ChannelUnresolved)
        ));
    }
}
