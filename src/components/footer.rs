use crate::app::state::ErrorState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const PROMPT: &str = "Enter number to execute, type to search, or press Backspace to delete";

pub struct Footer<'a> {
    pub error: Option<&'a ErrorState>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(Span::styled(PROMPT, self.theme.prompt))];

        if let Some(err) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(err.message.as_str(), self.theme.status_error),
                Span::styled(
                    format!("  [{}]", err.timestamp.format("%H:%M:%S")),
                    self.theme.timestamp,
                ),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
