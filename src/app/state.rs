use crate::domain::matcher::top_matches;
use crate::domain::models::{Match, ToolEntry, ToolRegistry};
use crate::theme::Theme;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl ErrorState {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now(),
        }
    }
}

/// State of one search-table session.
///
/// `matches` is derived from `query` and is recomputed after every edit.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<'a> {
    pub registry: &'a ToolRegistry,
    pub query: String,
    pub matches: Vec<Match>,
    pub limit: usize,
    pub last_error: Option<ErrorState>,
    pub should_quit: bool,
    pub theme: Theme,
}

impl<'a> SearchState<'a> {
    #[must_use]
    pub fn new(registry: &'a ToolRegistry, limit: usize) -> Self {
        let mut state = Self {
            registry,
            query: String::new(),
            matches: Vec::new(),
            limit,
            last_error: None,
            should_quit: false,
            theme: Theme::default(),
        };
        state.refresh_matches();
        state
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn refresh_matches(&mut self) {
        self.matches = top_matches(&self.query, self.registry.names(), self.limit);
    }

    /// The displayed match at 1-based `position`.
    #[must_use]
    pub fn match_at(&self, position: usize) -> Option<&Match> {
        position.checked_sub(1).and_then(|i| self.matches.get(i))
    }

    #[must_use]
    pub fn entry_at(&self, position: usize) -> Option<&'a ToolEntry> {
        let registry = self.registry;
        self.match_at(position)
            .and_then(|m| registry.get(&m.name))
    }
}
