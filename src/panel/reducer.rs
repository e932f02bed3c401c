use super::state::{step_left, step_right, NavigationState, PanelMode};
use crate::app::decoder::KeyInput;
use crate::domain::launcher::Placement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    /// Open the menu item at `position` (1-based).
    Launch { position: usize, placement: Placement },
    /// The user backed out of the main menu.
    Exit,
    Interrupt,
}

pub fn update(state: &mut NavigationState, key: KeyInput) -> Transition {
    if key == KeyInput::Interrupt {
        return Transition::Interrupt;
    }

    match state.mode {
        PanelMode::Main => match key {
            KeyInput::Left => {
                state.selected_program = step_left(state.selected_program);
                Transition::Stay
            }
            KeyInput::Right => {
                state.selected_program = step_right(state.selected_program, state.item_count());
                Transition::Stay
            }
            KeyInput::Confirm => {
                state.mode = PanelMode::Submenu;
                Transition::Stay
            }
            KeyInput::Cancel => Transition::Exit,
            KeyInput::Digit(n) => {
                let position = usize::from(n);
                if (1..=state.item_count()).contains(&position) {
                    Transition::Launch {
                        position,
                        placement: Placement::Pane,
                    }
                } else {
                    Transition::Stay
                }
            }
            _ => Transition::Stay,
        },
        PanelMode::Submenu => match key {
            KeyInput::Left => {
                state.selected_placement = step_left(state.selected_placement);
                Transition::Stay
            }
            KeyInput::Right => {
                state.selected_placement =
                    step_right(state.selected_placement, Placement::ALL.len());
                Transition::Stay
            }
            KeyInput::Confirm => {
                state.mode = PanelMode::Main;
                Transition::Launch {
                    position: state.selected_program,
                    placement: state.placement(),
                }
            }
            KeyInput::Cancel => {
                state.mode = PanelMode::Main;
                Transition::Stay
            }
            _ => Transition::Stay,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_clamps_at_first_item() {
        let mut state = NavigationState::new(3);
        for _ in 0..5 {
            assert_eq!(update(&mut state, KeyInput::Left), Transition::Stay);
            assert_eq!(state.selected_program, 1);
        }
    }

    #[test]
    fn test_right_clamps_at_last_item() {
        let mut state = NavigationState::new(3);
        for _ in 0..5 {
            update(&mut state, KeyInput::Right);
        }
        assert_eq!(state.selected_program, 3);
        update(&mut state, KeyInput::Left);
        assert_eq!(state.selected_program, 2);
    }

    #[test]
    fn test_single_item_menu() {
        let mut state = NavigationState::new(1);
        update(&mut state, KeyInput::Right);
        update(&mut state, KeyInput::Left);
        assert_eq!(state.selected_program, 1);
    }

    #[test]
    fn test_digit_launches_in_pane_and_stays_in_main() {
        let mut state = NavigationState::new(3);
        assert_eq!(
            update(&mut state, KeyInput::Digit(2)),
            Transition::Launch {
                position: 2,
                placement: Placement::Pane
            }
        );
        assert_eq!(state.mode, PanelMode::Main);
        assert_eq!(state.selected_program, 1);
    }

    #[test]
    fn test_invalid_digits_are_ignored() {
        let mut state = NavigationState::new(3);
        assert_eq!(update(&mut state, KeyInput::Digit(0)), Transition::Stay);
        assert_eq!(update(&mut state, KeyInput::Digit(4)), Transition::Stay);
        assert_eq!(update(&mut state, KeyInput::Char('x')), Transition::Stay);
    }

    #[test]
    fn test_submenu_flow() {
        let mut state = NavigationState::new(3);
        update(&mut state, KeyInput::Right);
        assert_eq!(update(&mut state, KeyInput::Confirm), Transition::Stay);
        assert_eq!(state.mode, PanelMode::Submenu);

        for _ in 0..3 {
            update(&mut state, KeyInput::Right);
        }
        assert_eq!(state.placement(), Placement::Window);

        assert_eq!(
            update(&mut state, KeyInput::Confirm),
            Transition::Launch {
                position: 2,
                placement: Placement::Window
            }
        );
        assert_eq!(state.mode, PanelMode::Main);
    }

    #[test]
    fn test_submenu_remembers_last_placement() {
        let mut state = NavigationState::new(2);
        update(&mut state, KeyInput::Confirm);
        update(&mut state, KeyInput::Right);
        update(&mut state, KeyInput::Cancel);
        assert_eq!(state.mode, PanelMode::Main);
        update(&mut state, KeyInput::Confirm);
        assert_eq!(state.placement(), Placement::Window);
        update(&mut state, KeyInput::Left);
        update(&mut state, KeyInput::Left);
        assert_eq!(state.placement(), Placement::Pane);
    }

    #[test]
    fn test_submenu_ignores_digits() {
        let mut state = NavigationState::new(3);
        update(&mut state, KeyInput::Confirm);
        assert_eq!(update(&mut state, KeyInput::Digit(1)), Transition::Stay);
        assert_eq!(state.mode, PanelMode::Submenu);
    }

    #[test]
    fn test_cancel_in_main_exits() {
        let mut state = NavigationState::new(3);
        assert_eq!(update(&mut state, KeyInput::Cancel), Transition::Exit);
    }

    #[test]
    fn test_interrupt_from_either_mode() {
        let mut state = NavigationState::new(3);
        assert_eq!(update(&mut state, KeyInput::Interrupt), Transition::Interrupt);
        update(&mut state, KeyInput::Confirm);
        assert_eq!(update(&mut state, KeyInput::Interrupt), Transition::Interrupt);
    }
}
