//! # Screen Control
//!
//! Clearing the terminal is delegated to the platform's own command
//! (`clear` on POSIX, `cmd /c cls` on Windows). The child inherits our
//! stdout/stderr so its escape sequences reach the real terminal.
//!
//! Clearing is cosmetic: failures are logged and swallowed, never returned.

use log::{debug, error};
use std::process::{Command, Stdio};

/// Something that can wipe the visible terminal contents.
pub trait Screen {
    fn clear(&mut self);
}

/// Which external command clears the display on this platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearCommand {
    /// `clear`
    Posix,
    /// `cmd /c cls`
    Windows,
}

impl ClearCommand {
    /// Picks the variant for the platform we were compiled for.
    pub fn detect() -> Self {
        if cfg!(windows) {
            ClearCommand::Windows
        } else {
            ClearCommand::Posix
        }
    }

    pub fn program(self) -> &'static str {
        match self {
            ClearCommand::Posix => "clear",
            ClearCommand::Windows => "cmd",
        }
    }

    pub fn args(self) -> &'static [&'static str] {
        match self {
            ClearCommand::Posix => &[],
            ClearCommand::Windows => &["/c", "cls"],
        }
    }
}

/// Clears the screen by running an external command and waiting for it.
#[derive(Debug, Clone)]
pub struct SystemScreen {
    program: String,
    args: Vec<String>,
}

impl SystemScreen {
    /// Uses the clear command detected for the current platform.
    pub fn detect() -> Self {
        Self::from_command(ClearCommand::detect())
    }

    pub fn from_command(command: ClearCommand) -> Self {
        Self::with_command(command.program(), command.args())
    }

    /// Runs an arbitrary program instead, e.g. `tput clear`.
    pub fn with_command<S: AsRef<str>>(program: &str, args: &[S]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SystemScreen {
    fn default() -> Self {
        Self::detect()
    }
}

impl Screen for SystemScreen {
    fn clear(&mut self) {
        debug!("Clearing screen with `{}`", self.program);
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match status {
            Ok(status) if status.success() => {}
            Ok(status) => error!("`{}` exited with {}", self.program, status),
            Err(e) => error!("Failed to run `{}`: {}", self.program, e),
        }
    }
}

/// A screen that never clears. For piped or non-interactive hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScreen;

impl Screen for NoopScreen {
    fn clear(&mut self) {}
}
