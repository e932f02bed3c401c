use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub query: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                "Tool Search (Press Ctrl+C to exit)",
                self.theme.title,
            )),
            Line::from(vec![
                Span::styled("Current search: ", self.theme.search),
                Span::styled(self.query, self.theme.search),
            ]),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}
