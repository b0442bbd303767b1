use crate::app::snapshot::Snapshot;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Widget},
};

use super::chips::avatar_lane;

/// The dropdown of catalog items matching the query and not yet selected.
/// Rows start one cell below the top border; the mouse mapper relies on
/// that offset.
pub struct SuggestionList<'a> {
    pub snapshot: &'a Snapshot,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title(" Suggestions ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme.border_focus
            } else {
                theme.border
            });
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if !self.snapshot.suggestions_visible {
            return;
        }

        if self.snapshot.suggestions.is_empty() {
            let line = Line::from(Span::styled("  no suggestions", theme.dimmed));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        let items: Vec<ListItem> = self
            .snapshot
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let selected = self.focused && i == self.snapshot.highlighted;
                let style = if selected {
                    theme.list_selected
                } else {
                    theme.list_item
                };
                let prefix = if selected { "> " } else { "  " };
                let lane = avatar_lane(&item.image, theme.avatar_lanes.len());

                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(
                        "● ",
                        if selected {
                            style
                        } else {
                            theme.avatar_lanes[lane]
                        },
                    ),
                    Span::styled(item.name.clone(), style),
                ]))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
