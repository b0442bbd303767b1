use crate::app::snapshot::{ChipView, Snapshot};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

const AVATAR: &str = "● ";
const REMOVE: &str = "✕";

/// Horizontal extent of one rendered chip, in columns relative to the
/// content origin. The remove glyph sits on the last column. Rendering and
/// mouse hit-testing both derive from this, so they cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipExtent {
    pub name: String,
    pub start: u16,
    pub width: u16,
}

#[must_use]
pub fn chip_extents(chips: &[ChipView]) -> Vec<ChipExtent> {
    let mut extents = Vec::with_capacity(chips.len());
    let mut x = 0u16;
    for chip in chips {
        // "● Name ✕" plus a one-column gap to the next chip.
        let width = 2 + chip.name.chars().count() as u16 + 2;
        extents.push(ChipExtent {
            name: chip.name.clone(),
            start: x,
            width,
        });
        x += width + 1;
    }
    extents
}

/// Maps a click at `rel_x` (columns from the content origin) to the chip
/// whose remove glyph was hit.
#[must_use]
pub fn remove_hit(chips: &[ChipView], rel_x: u16) -> Option<String> {
    chip_extents(chips)
        .into_iter()
        .find(|e| rel_x == e.start + e.width - 1)
        .map(|e| e.name)
}

/// Picks an accent lane for an avatar from its image reference, so the
/// same item always gets the same color.
#[must_use]
pub fn avatar_lane(image: &str, lanes: usize) -> usize {
    if lanes == 0 {
        return 0;
    }
    image
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize))
        % lanes
}

pub struct ChipRow<'a> {
    pub snapshot: &'a Snapshot,
    pub theme: &'a Theme,
}

impl Widget for ChipRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title(" Selected ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.snapshot.chips.is_empty() {
            let hint = Line::from(Span::styled("nothing selected", theme.dimmed));
            buf.set_line(inner.x, inner.y, &hint, inner.width);
            return;
        }

        let mut spans = Vec::new();
        for chip in &self.snapshot.chips {
            let body = if chip.armed {
                theme.chip_armed
            } else {
                theme.chip
            };
            let lane = avatar_lane(&chip.image, theme.avatar_lanes.len());
            let avatar = theme.avatar_lanes[lane].bg(
                body.bg.unwrap_or(ratatui::style::Color::Reset),
            );

            spans.push(Span::styled(AVATAR, avatar));
            spans.push(Span::styled(format!("{} ", chip.name), body));
            spans.push(Span::styled(
                REMOVE,
                if chip.armed { body } else { theme.chip_remove },
            ));
            spans.push(Span::raw(" "));
        }

        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}
