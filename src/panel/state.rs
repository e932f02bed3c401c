use crate::domain::launcher::Placement;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanelMode {
    Main,    // Choosing a program
    Submenu, // Choosing pane or window for the chosen program
}

/// Cursor positions are 1-based and always within their list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub mode: PanelMode,
    pub selected_program: usize,
    pub selected_placement: usize,
    item_count: usize,
}

impl NavigationState {
    /// `item_count` must be at least one.
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            mode: PanelMode::Main,
            selected_program: 1,
            selected_placement: 1,
            item_count: item_count.max(1),
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        Placement::ALL[self.selected_placement - 1]
    }
}

/// Moves a 1-based cursor one step without wrapping.
#[must_use]
pub fn step_left(position: usize) -> usize {
    position.saturating_sub(1).max(1)
}

#[must_use]
pub fn step_right(position: usize, count: usize) -> usize {
    (position + 1).min(count)
}
