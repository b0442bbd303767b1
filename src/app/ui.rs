use crate::app::snapshot::{self, Snapshot};
use crate::app::state::{AppMode, AppState};
use crate::components::chips::ChipRow;
use crate::components::footer::Footer;
use crate::components::help::HelpModal;
use crate::components::suggestions::SuggestionList;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

/// Fixed vertical split. The mouse mapper hit-tests against the same
/// rectangles, so this is the single source of truth for geometry.
pub struct AppLayout {
    pub header: Rect,
    pub chips: Rect,
    pub input: Rect,
    pub suggestions: Rect,
    pub footer: Rect,
}

#[must_use]
pub fn get_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Chips
            Constraint::Length(3), // Query input
            Constraint::Min(0),    // Suggestions
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: rows[0],
        chips: rows[1],
        input: rows[2],
        suggestions: rows[3],
        footer: rows[4],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = app_state.theme.clone();
    let layout = get_layout(f.area());
    let snapshot = snapshot::project(app_state);

    draw_header(f, layout.header, app_state);
    f.render_widget(
        ChipRow {
            snapshot: &snapshot,
            theme: &theme,
        },
        layout.chips,
    );
    draw_input(f, layout.input, app_state, &snapshot);
    f.render_widget(
        SuggestionList {
            snapshot: &snapshot,
            theme: &theme,
            focused: app_state.mode == AppMode::Editing,
        },
        layout.suggestions,
    );
    f.render_widget(
        Footer {
            state: app_state,
            theme: &theme,
        },
        layout.footer,
    );

    if app_state.mode == AppMode::Help {
        f.render_widget(HelpModal { theme: &theme }, f.area());
    }
}

fn draw_header(f: &mut Frame, area: Rect, app_state: &AppState) {
    let theme = &app_state.theme;
    let mut spans = vec![
        Span::styled(" CHIPPER ", theme.header_logo),
        Span::raw(" "),
    ];
    if !app_state.catalog_loading {
        spans.push(Span::styled(
            format!(" {} items ", app_state.catalog.len()),
            theme.header_item,
        ));
    }
    let line = Line::from(spans).style(theme.header);
    f.render_widget(
        ratatui::widgets::Paragraph::new(line).style(theme.header),
        area,
    );
}

fn draw_input(f: &mut Frame, area: Rect, app_state: &mut AppState, snapshot: &Snapshot) {
    let focused = app_state.mode == AppMode::Editing;
    let theme = app_state.theme.clone();

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            theme.border_focus
        } else {
            theme.border
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if snapshot.query.is_empty() && !focused {
        f.render_widget(
            ratatui::widgets::Paragraph::new(Span::styled(
                "Type to search...",
                theme.input_placeholder,
            )),
            inner,
        );
        return;
    }

    let field = &mut app_state.chip_input.field;
    field.set_style(theme.input_text);
    field.set_placeholder_text("Type to search...");
    field.set_placeholder_style(theme.input_placeholder);
    field.set_cursor_style(if focused {
        theme.input_text.add_modifier(ratatui::style::Modifier::REVERSED)
    } else {
        theme.input_text
    });
    f.render_widget(&*field, inner);
}
