use ratatui::style::{Modifier, Style};
use serde::Deserialize;

pub mod nord;
pub mod palette;

pub use palette::{Palette, CLASSIC};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub title: Style,
    pub search: Style,

    pub border: Style,
    pub table_header: Style,
    pub index: Style,
    pub tool_name: Style,
    pub name_match: Style,
    pub command: Style,

    pub prompt: Style,
    pub timestamp: Style,
    pub status_error: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    Classic,
    Nord,
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Classic => Self::from_palette(&CLASSIC),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            title: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            search: Style::default().fg(p.green),

            border: Style::default().fg(p.cyan),
            table_header: Style::default().fg(p.cyan).add_modifier(Modifier::BOLD),
            index: Style::default().fg(p.yellow),
            tool_name: Style::default().fg(p.text),
            name_match: Style::default().fg(p.red).add_modifier(Modifier::BOLD),
            command: Style::default().fg(p.subtext),

            prompt: Style::default().fg(p.magenta),
            timestamp: Style::default().fg(p.subtext).add_modifier(Modifier::DIM),
            status_error: Style::default().fg(p.red).add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::Classic)
    }
}
