//! Scoped ownership of terminal modes.
//!
//! Raw mode is always released by a guard's `Drop`, so every exit path
//! (early return, `?`, panic unwinding) restores the previous configuration.

use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Switches the controlling terminal in and out of raw mode.
#[cfg_attr(test, mockall::automock)]
pub trait RawMode {
    fn enable(&self) -> io::Result<()>;
    fn disable(&self) -> io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermRawMode;

impl RawMode for CrosstermRawMode {
    fn enable(&self) -> io::Result<()> {
        enable_raw_mode()
    }

    fn disable(&self) -> io::Result<()> {
        disable_raw_mode()
    }
}

/// Holds raw mode for its lifetime.
pub struct RawModeGuard<'a, M: RawMode + ?Sized> {
    mode: &'a M,
}

impl<'a, M: RawMode + ?Sized> RawModeGuard<'a, M> {
    pub fn acquire(mode: &'a M) -> io::Result<Self> {
        mode.enable()?;
        Ok(Self { mode })
    }
}

impl<M: RawMode + ?Sized> Drop for RawModeGuard<'_, M> {
    fn drop(&mut self) {
        if let Err(e) = self.mode.disable() {
            tracing::error!(error = %e, "failed to restore terminal mode");
        }
    }
}

/// Full-screen session: raw mode, alternate screen and hidden cursor.
pub struct TuiSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TuiSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restores the terminal; later calls and the eventual drop are no-ops.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        run_restore_steps(
            &CrosstermRawMode,
            &mut self.terminal,
            |terminal| execute!(terminal.backend_mut(), LeaveAlternateScreen),
            |terminal| terminal.show_cursor(),
        )
    }
}

/// Runs every restore step even when an earlier one fails, reporting the first error.
fn run_restore_steps<M: RawMode + ?Sized, T>(
    raw_mode: &M,
    target: &mut T,
    leave_screen: impl FnOnce(&mut T) -> io::Result<()>,
    show_cursor: impl FnOnce(&mut T) -> io::Result<()>,
) -> Result<()> {
    let results = [raw_mode.disable(), leave_screen(target), show_cursor(target)];
    for result in results {
        result?;
    }
    Ok(())
}

impl Drop for TuiSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::error!(error = %e, "failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen before the default panic output.
pub fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        original_hook(panic_info);
    }));
}
