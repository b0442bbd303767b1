/// Side effects requested by the reducer and executed by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Load the catalog from the configured source.
    LoadCatalog,
    /// Start the blur grace delay; delivers `SuggestionHideElapsed` with
    /// the same ticket once it elapses.
    ScheduleSuggestionHide(u64),
}
