use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use muxlaunch::app::cli::SearchCli;
use muxlaunch::app::r#loop::{run_loop, SessionExit};
use muxlaunch::app::settings::{self, Settings};
use muxlaunch::app::{logging, state::SearchState};
use muxlaunch::domain::launcher::Launcher;
use muxlaunch::infrastructure::{config, process::ShellLauncher};
use muxlaunch::terminal::{setup_panic_hook, TuiSession};
use muxlaunch::theme::Theme;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = SearchCli::parse();
    let (settings, settings_error) = Settings::load_or_default();

    let log_path = cli
        .log_file
        .as_deref()
        .or(settings.log_file.as_deref())
        .map(settings::expand_home)
        .or_else(|| logging::default_log_path("muxlaunch"));
    logging::init(log_path.as_deref(), cli.verbose);
    if let Some(err) = &settings_error {
        err.log();
    }

    match run(cli, settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "exiting");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: SearchCli, settings: Settings) -> Result<()> {
    // Load configuration BEFORE terminal setup so a bad file
    // never leaves the terminal in raw mode.
    let config_path = cli
        .config
        .as_deref()
        .map(settings::expand_home)
        .unwrap_or_else(|| settings.programs_file());
    let registry = config::load_tool_registry(&config_path)?;

    let limit = cli.limit.map_or_else(
        || settings.match_limit(),
        |limit| settings::clamp_limit(usize::from(limit)),
    );
    let state = SearchState::new(&registry, limit)
        .with_theme(Theme::from_palette_type(settings.theme));
    let launcher = ShellLauncher;

    setup_panic_hook();
    let mut session = TuiSession::enter()?;
    let exit = run_loop(session.terminal_mut(), state, &launcher).await;
    session.restore()?;

    match exit? {
        SessionExit::Interrupted => Ok(()),
        SessionExit::Launch(entry) => {
            let outcome = launcher.launch(&entry)?;
            tracing::info!(tool = %entry.name, ?outcome, "launched");
            Ok(())
        }
    }
}
