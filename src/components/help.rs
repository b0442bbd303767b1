use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let modal_area = centered_rect(50, 60, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP ", theme.header_logo),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focus);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let entries: &[(&str, &str)] = &[
            ("i / ⏎ / tab", "focus the search field"),
            ("type", "filter the catalog"),
            ("↑ / ↓", "move through suggestions"),
            ("⏎", "turn the highlighted item into a chip"),
            ("⌫", "on empty query: arm the last chip"),
            ("⌫ ⌫", "second press deletes the armed chip"),
            ("click ✕", "remove a chip directly"),
            ("esc / tab", "leave the search field"),
            ("q", "quit"),
        ];

        let mut lines = vec![Line::raw("")];
        for (key, desc) in entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), theme.footer_segment_key),
                Span::styled(format!("  {desc}"), theme.list_item),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
