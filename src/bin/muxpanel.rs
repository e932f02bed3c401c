use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use muxlaunch::app::cli::PanelCli;
use muxlaunch::app::decoder::InputDecoder;
use muxlaunch::app::logging;
use muxlaunch::app::settings::{self, Settings};
use muxlaunch::infrastructure::{config, process::ScriptLauncher};
use muxlaunch::panel::interrupt::{self, INTERRUPT_MESSAGE};
use muxlaunch::panel::{PanelExit, PanelSession};
use muxlaunch::terminal::CrosstermRawMode;

fn main() -> ExitCode {
    let cli = PanelCli::parse();
    let (settings, settings_error) = Settings::load_or_default();

    let log_path = cli
        .log_file
        .as_deref()
        .or(settings.log_file.as_deref())
        .map(settings::expand_home)
        .or_else(|| logging::default_log_path("muxpanel"));
    logging::init(log_path.as_deref(), cli.verbose);
    if let Some(err) = &settings_error {
        err.log();
    }

    match run(cli, settings) {
        Ok(PanelExit::Cancelled) => ExitCode::SUCCESS,
        Ok(PanelExit::Interrupted) => {
            eprintln!("{INTERRUPT_MESSAGE}");
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "exiting");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: PanelCli, settings: Settings) -> Result<PanelExit> {
    interrupt::install_handler()?;

    let script = cli
        .script
        .as_deref()
        .map(settings::expand_home)
        .unwrap_or_else(|| settings.panel_script());
    if !script.exists() {
        anyhow::bail!("Missing script: {}", script.display());
    }

    let menu_path = cli
        .menu
        .as_deref()
        .map(settings::expand_home)
        .unwrap_or_else(|| settings.panel_file());
    let menu = config::load_menu(&menu_path)?;

    let opener = ScriptLauncher::new(script);
    let mut session = PanelSession {
        menu: &menu,
        decoder: InputDecoder::new(io::stdin().lock()),
        out: io::stdout(),
        raw_mode: &CrosstermRawMode,
        opener: &opener,
    };
    let exit = session.run()?;
    tracing::debug!(?exit, "panel closed");
    Ok(exit)
}
