use crate::app::state::SearchState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::tool_table::ToolTable;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub table: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, table_height: u16) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title + search
            Constraint::Length(1),            // Spacer
            Constraint::Length(table_height), // Table
            Constraint::Length(1),            // Spacer
            Constraint::Min(0),               // Prompt + error
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        table: chunks[2],
        footer: chunks[4],
    }
}

pub fn draw(f: &mut Frame, state: &SearchState<'_>) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = &state.theme;
    let table = ToolTable {
        matches: &state.matches,
        registry: state.registry,
        query: &state.query,
        theme,
    };
    let layout = get_layout(f.area(), table.height());

    f.render_widget(
        Header {
            query: &state.query,
            theme,
        },
        layout.header,
    );
    f.render_widget(table, layout.table);
    f.render_widget(
        Footer {
            error: state.last_error.as_ref(),
            theme,
        },
        layout.footer,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ErrorState;
    use crate::domain::models::{ToolEntry, ToolName, ToolRegistry};
    use ratatui::{backend::TestBackend, Terminal};

    fn registry() -> ToolRegistry {
        ToolRegistry::new((1..=12).map(|i| ToolEntry {
            name: ToolName(format!("tool{i:02}")),
            command: format!("run-tool {i}"),
            foreground: true,
        }))
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draw_shows_at_most_nine_rows() {
        let registry = registry();
        let state = SearchState::new(&registry, 9);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &state)).unwrap();

        let screen = screen(&terminal);
        assert!(screen.contains("Current search:"));
        assert!(screen.contains("9)"));
        assert!(!screen.contains("10)"));
        assert!(screen.contains("tool09"));
        assert!(!screen.contains("tool10"));
        assert!(screen.contains("Enter number to execute"));
    }

    #[test]
    fn test_draw_shows_error() {
        let registry = registry();
        let mut state = SearchState::new(&registry, 9);
        state.last_error = Some(ErrorState::new("Error: Command 'run-tool' not found in PATH."));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &state)).unwrap();
        assert!(screen(&terminal).contains("Command 'run-tool' not found"));
    }

    #[test]
    fn test_draw_survives_tiny_terminals() {
        let registry = registry();
        let mut state = SearchState::new(&registry, 9);
        state.last_error = Some(ErrorState::new("Error: something long enough to wrap"));
        for width in 0..30 {
            for height in 0..20 {
                let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
                terminal.draw(|f| draw(f, &state)).unwrap();
            }
        }
    }
}
