use crate::domain::launcher::{command_base, LaunchOutcome, Launcher, PaneOpener, Placement};
use crate::domain::models::ToolEntry;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

const SHELL: &str = "sh";

/// Runs registry commands through `sh -c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellLauncher;

impl ShellLauncher {
    fn shell_command(command: &str) -> Command {
        let mut cmd = Command::new(SHELL);
        cmd.arg("-c").arg(command);
        cmd
    }
}

impl Launcher for ShellLauncher {
    fn is_available(&self, command: &str) -> bool {
        command_base(command).is_some_and(|base| which::which(base).is_ok())
    }

    fn launch(&self, entry: &ToolEntry) -> Result<LaunchOutcome> {
        let mut cmd = Self::shell_command(&entry.command);

        if entry.foreground {
            tracing::info!(tool = %entry.name, "running in foreground");
            let status = cmd
                .status()
                .with_context(|| format!("Failed to run '{}'", entry.command))?;
            Ok(LaunchOutcome::Completed {
                success: status.success(),
            })
        } else {
            tracing::info!(tool = %entry.name, "spawning in background");
            #[cfg(unix)]
            {
                use std::os::unix::process::CommandExt;
                cmd.process_group(0);
            }
            // The child is deliberately not waited on.
            let child = cmd
                .spawn()
                .with_context(|| format!("Failed to spawn '{}'", entry.command))?;
            tracing::debug!(pid = child.id(), "detached");
            Ok(LaunchOutcome::Detached)
        }
    }
}

/// Delegates panel launches to the multiplexer helper script:
/// `<script> --pane <name>` or `<script> --window <name>`.
#[derive(Debug, Clone)]
pub struct ScriptLauncher {
    script: PathBuf,
}

impl ScriptLauncher {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl PaneOpener for ScriptLauncher {
    fn open(&self, program: &str, placement: Placement) -> Result<()> {
        tracing::info!(program, %placement, "opening through helper script");
        let status = Command::new(&self.script)
            .arg(placement.flag())
            .arg(program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("Failed to run {}", self.script.display()))?;

        if status.success() {
            Ok(())
        } else {
            anyhow::bail!(
                "{} {} {program} exited with {status}",
                self.script.display(),
                placement.flag()
            )
        }
    }
}
