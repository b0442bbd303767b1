use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let status_span = if let Some(err) = &state.last_error {
            Span::styled(format!("  ERROR: {err}  "), theme.status_error)
        } else if state.catalog_loading {
            Span::styled("  LOADING  ", theme.status_info)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        if !state.catalog_origin.is_empty() {
            spans.push(Span::styled(
                format!(" {} ", state.catalog_origin),
                theme.header_item,
            ));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::styled(
            format!(" {} selected ", state.chip_input.chips.len()),
            theme.header_item,
        ));
        spans.push(Span::raw("  "));

        let hints: &[(&str, &str)] = match state.mode {
            AppMode::Normal => &[
                ("i", "search"),
                ("q", "quit"),
                ("?", "help"),
            ],
            AppMode::Editing => &[
                ("↑↓", "move"),
                ("⏎", "pick"),
                ("⌫⌫", "delete chip"),
                ("esc", "done"),
            ],
            AppMode::Help => &[("esc", "close")],
        };

        let available_width = area.width.saturating_sub(4) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for (key, desc) in hints {
            let key_str = format!(" {key} ");
            let desc_str = format!(" {desc} ");
            let item_width = key_str.len() + desc_str.len();
            if current_width + item_width + 1 > available_width {
                break;
            }
            spans.push(Span::styled(key_str, theme.footer_segment_key));
            spans.push(Span::styled(desc_str, theme.footer_segment_val));
            spans.push(Span::raw(" "));
            current_width += item_width + 1;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
