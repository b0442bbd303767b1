use crate::app::{action::Action, snapshot, state::AppMode, state::AppState, ui};
use crate::components::chips;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

/// Translates a terminal event into an action based on the current mode.
/// No state is mutated here; this is the boundary between crossterm and
/// the reducer.
pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
    }

    match event {
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match app_state.mode {
        AppMode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
            _ => None,
        },
        AppMode::Normal => app_state.keymap.get_action(key),
        AppMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Tab => Some(Action::BlurInput),
            KeyCode::Enter => Some(Action::SelectHighlighted),
            KeyCode::Up => Some(Action::HighlightPrev),
            KeyCode::Down => Some(Action::HighlightNext),
            KeyCode::Backspace => Some(Action::Backspace),
            // Everything else edits the query.
            _ => Some(Action::QueryKey(key)),
        },
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area);

    match mouse.kind {
        MouseEventKind::ScrollUp if contains(layout.suggestions, mouse) => {
            Some(Action::HighlightPrev)
        }
        MouseEventKind::ScrollDown if contains(layout.suggestions, mouse) => {
            Some(Action::HighlightNext)
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let snapshot = snapshot::project(app_state);

            // A click inside the bordered chips row: only the ✕ glyph
            // removes, like the per-chip affordance it stands for.
            if contains_inner(layout.chips, mouse) {
                let rel_x = mouse.column - (layout.chips.x + 1);
                if let Some(name) = chips::remove_hit(&snapshot.chips, rel_x) {
                    return Some(Action::RemoveChip(name));
                }
                return None;
            }

            if contains(layout.input, mouse) {
                return Some(Action::FocusInput);
            }

            // Suggestion rows stay clickable whenever the list is shown,
            // including during the blur grace window.
            if snapshot.suggestions_visible && contains_inner(layout.suggestions, mouse) {
                let idx = (mouse.row - (layout.suggestions.y + 1)) as usize;
                if let Some(item) = snapshot.suggestions.get(idx) {
                    return Some(Action::SelectSuggestion(item.name.clone()));
                }
                return None;
            }

            // Clicking anywhere else blurs a focused input.
            if app_state.mode == AppMode::Editing {
                return Some(Action::BlurInput);
            }
            None
        }
        _ => None,
    }
}

fn contains(area: Rect, mouse: MouseEvent) -> bool {
    mouse.column >= area.x
        && mouse.column < area.x + area.width
        && mouse.row >= area.y
        && mouse.row < area.y + area.height
}

/// Like `contains`, but restricted to the content inside a one-cell border.
fn contains_inner(area: Rect, mouse: MouseEvent) -> bool {
    area.width > 2
        && area.height > 2
        && mouse.column > area.x
        && mouse.column < area.x + area.width - 1
        && mouse.row > area.y
        && mouse.row < area.y + area.height - 1
}
