use super::state::{NavigationState, PanelMode};
use crate::domain::launcher::Placement;
use crate::domain::models::Menu;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

pub const EXIT_MESSAGE: &str = "Exiting program...";

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Draws the current menu line: the program list, or the placement choice
/// prefixed with the selected program's name.
pub fn draw<W: Write>(out: &mut W, menu: &Menu, state: &NavigationState) -> io::Result<()> {
    clear_screen(out)?;
    match state.mode {
        PanelMode::Main => selection_line(out, menu.names(), state.selected_program)?,
        PanelMode::Submenu => {
            if let Some(item) = menu.get(state.selected_program) {
                queue!(out, Print(format!("{}: ", item.name)))?;
            }
            selection_line(
                out,
                Placement::ALL.iter().map(|p| p.label()),
                state.selected_placement,
            )?;
        }
    }
    out.flush()
}

pub fn draw_exit<W: Write>(out: &mut W) -> io::Result<()> {
    clear_screen(out)?;
    queue!(out, Print(EXIT_MESSAGE), Print("\r\n"))?;
    out.flush()
}

/// `[name]` per item; the selected item is upper-cased and green.
fn selection_line<'a, W: Write>(
    out: &mut W,
    names: impl Iterator<Item = &'a str>,
    selected: usize,
) -> io::Result<()> {
    for (i, name) in names.enumerate() {
        if i > 0 {
            queue!(out, Print(" "))?;
        }
        if i + 1 == selected {
            queue!(
                out,
                SetForegroundColor(Color::Green),
                Print(format!("[{}]", name.to_uppercase())),
                ResetColor
            )?;
        } else {
            queue!(out, Print(format!("[{name}]")))?;
        }
    }
    Ok(())
}
