use crate::app::{action::Action, decoder::KeyInput, state::SearchState};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translates a crossterm key event into the decoder's vocabulary.
pub fn map_key_event(key: KeyEvent) -> Option<KeyInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(KeyInput::Interrupt),
            KeyCode::Char('h') => Some(KeyInput::Backspace),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Enter => Some(KeyInput::Confirm),
        KeyCode::Esc => Some(KeyInput::Cancel),
        KeyCode::Backspace | KeyCode::Delete => Some(KeyInput::Backspace),
        KeyCode::Char(c) if !c.is_control() => Some(KeyInput::from_char(c)),
        _ => None,
    }
}

/// Maps a terminal event to a search-table action.
///
/// A digit that numbers a displayed row selects it; any other digit is typed
/// into the query like an ordinary character.
pub fn map_event_to_action(event: Event, state: &SearchState<'_>) -> Option<Action> {
    match event {
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(key) => match map_key_event(key)? {
            KeyInput::Interrupt => Some(Action::Quit),
            KeyInput::Backspace => Some(Action::DeleteChar),
            KeyInput::Digit(n) if state.match_at(usize::from(n)).is_some() => {
                Some(Action::SelectIndex(usize::from(n)))
            }
            other => other.as_char().map(Action::InsertChar),
        },
        _ => None,
    }
}
