use crate::domain::matcher::highlight_span;
use crate::domain::models::{Match, ToolRegistry};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

pub const INDEX_WIDTH: u16 = 6;
pub const NAME_WIDTH: u16 = 20;
pub const COMMAND_WIDTH: u16 = 40;

pub struct ToolTable<'a> {
    pub matches: &'a [Match],
    pub registry: &'a ToolRegistry,
    pub query: &'a str,
    pub theme: &'a Theme,
}

impl ToolTable<'_> {
    /// Rows the table needs: borders, header, one line per match.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.matches.len() as u16 + 3
    }
}

impl Widget for ToolTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["Index", "Tool Name", "Command"]).style(self.theme.table_header);

        let rows = self.matches.iter().enumerate().map(|(i, m)| {
            let command = self
                .registry
                .get(&m.name)
                .map(|entry| truncate(&entry.command, COMMAND_WIDTH))
                .unwrap_or_default();
            let name = truncate(&m.name, NAME_WIDTH);

            Row::new([
                Cell::from(Span::styled(format!("{})", i + 1), self.theme.index)),
                Cell::from(highlighted(
                    name,
                    self.query,
                    self.theme.tool_name,
                    self.theme.name_match,
                )),
                Cell::from(Span::styled(command.to_string(), self.theme.command)),
            ])
        });

        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(self.theme.border);

        Table::new(
            rows,
            [
                Constraint::Length(INDEX_WIDTH),
                Constraint::Length(NAME_WIDTH),
                Constraint::Length(COMMAND_WIDTH),
            ],
        )
        .header(header)
        .block(block)
        .render(area, buf);
    }
}

/// Splits `text` around the first case-insensitive occurrence of `query`.
pub fn highlighted<'t>(text: &'t str, query: &str, base: Style, accent: Style) -> Line<'t> {
    match highlight_span(text, query) {
        Some(range) => Line::from(vec![
            Span::styled(&text[..range.start], base),
            Span::styled(&text[range.clone()], accent),
            Span::styled(&text[range.end..], base),
        ]),
        None => Line::from(Span::styled(text, base)),
    }
}

fn truncate(text: &str, width: u16) -> &str {
    match text.char_indices().nth(usize::from(width)) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
