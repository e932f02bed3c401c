use std::collections::BTreeMap;
use std::fmt;

pub const EXACT_MATCH_SCORE: u32 = 100;
pub const SUBSTRING_MATCH_SCORE: u32 = 50;

/// Results are bound to the single-digit selection keys 1-9.
pub const DEFAULT_MATCH_LIMIT: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ToolName(pub String);

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolEntry {
    pub name: ToolName,
    pub command: String,
    pub foreground: bool,
}

/// The configured set of launchable tools, keyed by display name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, ToolEntry>,
}

impl ToolRegistry {
    /// Builds a registry; a later entry with the same name replaces an earlier one.
    pub fn new(entries: impl IntoIterator<Item = ToolEntry>) -> Self {
        let tools = entries
            .into_iter()
            .map(|entry| (entry.name.0.clone(), entry))
            .collect();
        Self { tools }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.tools.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
}

/// Flat ordered list of panel entries, addressed by 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Returns `None` for an empty list, since a selection cursor needs at least one item.
    #[must_use]
    pub fn new(items: Vec<MenuItem>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Number of items; never zero.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Looks up an item by its 1-based position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&MenuItem> {
        position.checked_sub(1).and_then(|i| self.items.get(i))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub name: String,
    pub score: u32,
}

impl Match {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}
