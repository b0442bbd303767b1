use crate::domain::models::Item;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,
    ToggleHelp,

    // --- Focus ---
    FocusInput,
    BlurInput,

    // --- Query editing ---
    QueryKey(KeyEvent),
    Backspace,

    // --- Selection ---
    SelectSuggestion(String),
    SelectHighlighted,
    HighlightNext,
    HighlightPrev,
    RemoveChip(String),

    // --- Deferred effects ---
    /// The blur grace delay elapsed; hides suggestions only if the ticket
    /// is still current.
    SuggestionHideElapsed(u64),

    // --- Async results ---
    CatalogLoaded(Result<Vec<Item>, String>),
}
