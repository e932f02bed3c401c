use crate::domain::models::ToolEntry;
use anyhow::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The command ran in the foreground and has exited.
    Completed { success: bool },
    /// The command was spawned in the background and left running.
    Detached,
}

/// Runs registry commands for the search table.
#[cfg_attr(test, mockall::automock)]
pub trait Launcher {
    /// Whether the executable named by the command line can be found on `PATH`.
    fn is_available(&self, command: &str) -> bool;

    /// Runs the entry's command, waiting for it only when `foreground` is set.
    fn launch(&self, entry: &ToolEntry) -> Result<LaunchOutcome>;
}

/// Where the panel helper should open a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Pane,
    Window,
}

impl Placement {
    pub const ALL: [Placement; 2] = [Placement::Pane, Placement::Window];

    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Placement::Pane => "--pane",
            Placement::Window => "--window",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Placement::Pane => "pane",
            Placement::Window => "window",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opens panel programs through the external multiplexer helper.
#[cfg_attr(test, mockall::automock)]
pub trait PaneOpener {
    fn open(&self, program: &str, placement: Placement) -> Result<()>;
}

/// First whitespace-separated token of a command line, used for the `PATH` check.
#[must_use]
pub fn command_base(command: &str) -> Option<&str> {
    command.split_whitespace().next()
}
