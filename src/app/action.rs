#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Resize(u16, u16),
    Quit,

    // --- Query Editing ---
    InsertChar(char),
    DeleteChar,

    // --- Selection ---
    SelectIndex(usize), // 1-based row of the displayed table

    // --- Launch Results ---
    CommandNotFound(String), // First token of the command that was not on PATH
}
