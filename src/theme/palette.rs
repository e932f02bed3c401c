use ratatui::style::Color;

pub struct Palette {
    pub text: Color,
    pub subtext: Color,
    pub green: Color,
    pub cyan: Color,
    pub yellow: Color,
    pub red: Color,
    pub magenta: Color,
}

/// The terminal's own sixteen-colour set, so the table follows the user's scheme.
pub const CLASSIC: Palette = Palette {
    text: Color::Reset,
    subtext: Color::Gray,
    green: Color::Green,
    cyan: Color::Cyan,
    yellow: Color::Yellow,
    red: Color::Red,
    magenta: Color::Magenta,
};
