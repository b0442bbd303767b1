pub mod chip_input;
pub mod input;

pub use chip_input::ChipInputState;
pub use input::QueryField;

use super::config::AppConfig;
use super::keymap::KeyMap;
use crate::domain::filter;
use crate::domain::models::{Catalog, Item};
use crate::theme::{PaletteType, Theme};
use std::sync::Arc;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Input blurred; keys drive the app (quit, help, focus).
    Normal,
    /// Input focused; keys edit the query and walk the suggestions.
    Editing,
    /// Help overlay.
    Help,
}

pub struct AppState<'a> {
    pub should_quit: bool,
    pub mode: AppMode,

    // The static catalog, empty until the loader reports in.
    pub catalog: Catalog,
    pub catalog_loading: bool,
    pub catalog_origin: String,

    // The chip-input state machine.
    pub chip_input: ChipInputState<'a>,

    // Status line.
    pub last_error: Option<String>,
    pub status_message: Option<String>,

    pub keymap: Arc<KeyMap>,
    pub palette_type: PaletteType,
    pub theme: Theme,
    pub frame_count: u64,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let palette_type = config.palette.unwrap_or(PaletteType::CatppuccinMocha);
        Self {
            palette_type,
            theme: Theme::from_palette_type(palette_type),
            ..Default::default()
        }
    }

    /// The derived suggestion list for the current query and selection.
    #[must_use]
    pub fn suggestions(&self) -> Vec<&Item> {
        filter::suggestions(
            &self.catalog,
            &self.chip_input.chips,
            &self.chip_input.query(),
        )
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            catalog: Catalog::default(),
            catalog_loading: true,
            catalog_origin: String::new(),
            chip_input: ChipInputState::default(),
            last_error: None,
            status_message: None,
            keymap: Arc::new(KeyMap::new()),
            palette_type: PaletteType::CatppuccinMocha,
            theme: Theme::default(),
            frame_count: 0,
        }
    }
}
