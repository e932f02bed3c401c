use crate::app::{
    action::Action, command::Command, input::map_event_to_action, reducer, state::SearchState, ui,
};
use crate::domain::launcher::{command_base, Launcher};
use crate::domain::models::ToolEntry;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;

const POLL_RATE: Duration = Duration::from_millis(100);

/// How a search session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionExit {
    Interrupted,
    /// The user picked a tool whose executable is on `PATH`.
    Launch(ToolEntry),
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: SearchState<'_>,
    launcher: &dyn Launcher,
) -> Result<SessionExit> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    let reader = tokio::task::spawn_blocking(move || {
        // Stop reading once the session is over so a launched command owns stdin.
        while !event_tx.is_closed() {
            match event::poll(POLL_RATE) {
                Ok(false) => {}
                Ok(true) => {
                    let evt = event::read();
                    let failed = evt.is_err();
                    if event_tx.blocking_send(evt).is_err() || failed {
                        break;
                    }
                }
                Err(e) => {
                    let _ = event_tx.blocking_send(Err(e));
                    break;
                }
            }
        }
    });

    let result = run_loop_with_events(terminal, state, launcher, event_rx).await;
    reader.await?;
    result
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut state: SearchState<'_>,
    launcher: &dyn Launcher,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<SessionExit> {
    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &state);
        })?;

        // --- 2. Event Handling ---
        let Some(res) = event_rx.recv().await else {
            tracing::debug!("input closed");
            return Ok(SessionExit::Interrupted);
        };
        let Some(action) = map_event_to_action(res?, &state) else {
            continue;
        };

        // --- 3. Update (Reducer) ---
        let command = reducer::update(&mut state, action);

        if state.should_quit {
            tracing::debug!("interrupted");
            return Ok(SessionExit::Interrupted);
        }

        if let Some(Command::Launch(name)) = command {
            let registry = state.registry;
            let Some(entry) = registry.get(&name.0) else {
                continue;
            };
            if launcher.is_available(&entry.command) {
                return Ok(SessionExit::Launch(entry.clone()));
            }

            let base = command_base(&entry.command)
                .unwrap_or_default()
                .to_string();
            tracing::warn!(tool = %entry.name, command = %base, "executable not found");
            reducer::update(&mut state, Action::CommandNotFound(base));
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
