use ratatui::style::Color;

/// Named color slots shared by every palette, Catppuccin-style.
pub struct Palette {
    pub base: Color,
    pub crust: Color,
    pub text: Color,
    pub subtext: Color,
    pub surface0: Color,
    pub surface1: Color,
    pub overlay: Color,
    pub blue: Color,
    pub teal: Color,
    pub green: Color,
    pub yellow: Color,
    pub peach: Color,
    pub red: Color,
    pub mauve: Color,
}

/// Scale an `Rgb` color's channels by `factor` (0.0 = black, 1.0 =
/// unchanged). Used to derive subtle background tints from palette
/// foreground colors. Non-Rgb variants are returned as-is.
#[must_use]
pub fn dim_color(c: Color, factor: f32) -> Color {
    if let Color::Rgb(r, g, b) = c {
        Color::Rgb(
            (f32::from(r) * factor) as u8,
            (f32::from(g) * factor) as u8,
            (f32::from(b) * factor) as u8,
        )
    } else {
        c
    }
}
