//! Ctrl-C outside a key read.
//!
//! While a key is being read the terminal is in raw mode and Ctrl-C arrives
//! as byte `0x03`. At any other time (rendering, or while the helper script
//! runs) it arrives as `SIGINT`, which must end the panel the same way.

use crate::terminal::{CrosstermRawMode, RawMode};
use anyhow::{Context, Result};
use std::io::{self, Write};

pub const INTERRUPT_MESSAGE: &str = "Error: User interrupt";
pub const INTERRUPT_EXIT_CODE: i32 = 1;

/// Installs the process-wide `SIGINT` handler.
pub fn install_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        let code = report_interrupt(&CrosstermRawMode, &mut io::stderr());
        std::process::exit(code);
    })
    .context("Failed to set Ctrl+C handler")
}

/// Leaves raw mode, prints the interrupt message and returns the exit status.
pub fn report_interrupt<M: RawMode + ?Sized, W: Write>(raw_mode: &M, err: &mut W) -> i32 {
    if let Err(e) = raw_mode.disable() {
        tracing::warn!(error = %e, "failed to restore terminal mode");
    }
    let _ = writeln!(err, "{INTERRUPT_MESSAGE}");
    tracing::info!("interrupted by signal");
    INTERRUPT_EXIT_CODE
}
