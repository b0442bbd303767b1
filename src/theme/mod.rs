use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub input_text: Style,
    pub input_placeholder: Style,

    pub chip: Style,
    pub chip_armed: Style,
    pub chip_remove: Style,
    /// Accent styles avatars hash into, one per lane.
    pub avatar_lanes: Vec<Style>,

    pub list_item: Style,
    pub list_selected: Style,

    pub header_logo: Style,
    pub header_item: Style,
    pub header: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_error: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    CatppuccinMocha,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface1),
            border_focus: Style::default().fg(p.blue),

            input_text: Style::default().fg(p.text),
            input_placeholder: Style::default().fg(p.overlay).add_modifier(Modifier::DIM),

            chip: Style::default().bg(p.surface0).fg(p.text),
            chip_armed: Style::default()
                .bg(dim_color(p.red, 0.35))
                .fg(p.red)
                .add_modifier(Modifier::BOLD),
            chip_remove: Style::default().bg(p.surface0).fg(p.red),
            avatar_lanes: vec![
                Style::default().fg(p.red),
                Style::default().fg(p.green),
                Style::default().fg(p.yellow),
                Style::default().fg(p.blue),
                Style::default().fg(p.mauve),
                Style::default().fg(p.teal),
                Style::default().fg(p.peach),
            ],

            list_item: Style::default().fg(p.text),
            list_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header: Style::default().bg(p.base).fg(p.text),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext),

            dimmed: Style::default().fg(p.overlay).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
