use super::palette::Palette;
use ratatui::style::Color;

pub const NORD: Palette = Palette {
    text: Color::Rgb(236, 239, 244),
    subtext: Color::Rgb(216, 222, 233),
    green: Color::Rgb(163, 190, 140),
    cyan: Color::Rgb(136, 192, 208),
    yellow: Color::Rgb(235, 203, 139),
    red: Color::Rgb(191, 97, 106),
    magenta: Color::Rgb(180, 142, 173),
};
