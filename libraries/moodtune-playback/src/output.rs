//! Platform audio output.
//!
//! The preview player only ever talks to these traits; the system
//! implementation hands the preview URL to an external command-line player.

use crate::error::{PlaybackError, Result};
use std::process::{Child, Command, Stdio};
use tracing::{debug, warn};

/// Creates audio handles for preview URLs.
pub trait AudioOutput: Send + Sync {
    /// Prepare (but do not start) playback of `url`.
    fn create(&self, url: &str) -> Box<dyn AudioHandle>;
}

/// One audio element. Dropping it releases the underlying resource.
pub trait AudioHandle: Send {
    /// Start playback.
    ///
    /// An error means the host blocked playback; a later user-initiated
    /// call may succeed.
    fn play(&mut self) -> Result<()>;

    /// Stop playback and release the resource.
    fn stop(&mut self);

    /// Playback reached the end of the clip on its own.
    fn is_finished(&mut self) -> bool;
}

/// Plays previews by spawning an external player per clip.
#[derive(Debug, Clone)]
pub struct SystemPlayerOutput {
    program: String,
    args: Vec<String>,
}

impl SystemPlayerOutput {
    /// Parse a whitespace-separated player command, e.g.
    /// `ffplay -nodisp -autoexit -loglevel quiet`. The URL is appended as
    /// the last argument.
    pub fn from_command(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| PlaybackError::InvalidCommand(command.to_string()))?;

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl AudioOutput for SystemPlayerOutput {
    fn create(&self, url: &str) -> Box<dyn AudioHandle> {
        Box::new(ProcessHandle {
            program: self.program.clone(),
            args: self.args.clone(),
            url: url.to_string(),
            child: None,
        })
    }
}

struct ProcessHandle {
    program: String,
    args: Vec<String>,
    url: String,
    child: Option<Child>,
}

impl AudioHandle for ProcessHandle {
    fn play(&mut self) -> Result<()> {
        if self.child.is_some() {
            return Ok(());
        }

        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(&self.url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PlaybackError::AutoplayBlocked(format!("{}: {}", self.program, e)))?;

        debug!(program = %self.program, pid = child.id(), "Preview player started");
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                debug!(error = %e, "Preview player already exited");
            }
            if let Err(e) = child.wait() {
                warn!(error = %e, "Failed to reap preview player");
            }
        }
    }

    fn is_finished(&mut self) -> bool {
        match self.child.as_mut().map(Child::try_wait) {
            Some(Ok(Some(_))) => true,
            Some(Ok(None)) | None => false,
            Some(Err(e)) => {
                warn!(error = %e, "Failed to poll preview player");
                true
            }
        }
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_player_command() {
        let output = SystemPlayerOutput::from_command("ffplay -nodisp -autoexit").unwrap();
        assert_eq!(output.program(), "ffplay");
        assert_eq!(output.args(), ["-nodisp", "-autoexit"]);
    }

    #[test]
    fn empty_command_is_rejected() {
        assert!(matches!(
            SystemPlayerOutput::from_command("   "),
            Err(PlaybackError::InvalidCommand(_))
        ));
    }

    #[test]
    fn missing_player_reports_blocked() {
        let output = SystemPlayerOutput::from_command("moodtune-no-such-player-binary").unwrap();
        let mut handle = output.create("https://example.com/clip.m4a");

        assert!(matches!(handle.play(), Err(PlaybackError::AutoplayBlocked(_))));
        assert!(!handle.is_finished());
    }
}
