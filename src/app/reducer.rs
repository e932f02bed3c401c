use super::{
    action::Action,
    command::Command,
    state::{ErrorState, SearchState},
};

pub fn update(state: &mut SearchState<'_>, action: Action) -> Option<Command> {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Resize(_, _) => {}

        // --- Query Editing ---
        Action::InsertChar(c) => {
            state.last_error = None;
            state.query.push(c);
            state.refresh_matches();
        }
        Action::DeleteChar => {
            state.last_error = None;
            if state.query.pop().is_some() {
                state.refresh_matches();
            }
        }

        // --- Selection ---
        Action::SelectIndex(position) => {
            state.last_error = None;
            if let Some(entry) = state.entry_at(position) {
                return Some(Command::Launch(entry.name.clone()));
            }
        }

        // --- Launch Results ---
        Action::CommandNotFound(base) => {
            state.last_error = Some(ErrorState::new(format!(
                "Error: Command '{base}' not found in PATH."
            )));
        }
    }
    None
}
