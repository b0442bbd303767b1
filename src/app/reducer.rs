use super::{
    action::Action,
    command::Command,
    state::{AppMode, AppState},
};
use crate::domain::models::Catalog;

/// Applies one action to the state, optionally requesting a side effect.
/// All mutation of the chip input happens here, on the event-loop task;
/// transitions are total, with defensive no-ops instead of errors.
pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
        }
        Action::Resize(..) => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::ToggleHelp => {
            state.mode = match state.mode {
                AppMode::Help => AppMode::Normal,
                _ => AppMode::Help,
            };
        }

        Action::FocusInput => {
            state.mode = AppMode::Editing;
            state.chip_input.focus();
        }
        Action::BlurInput => {
            state.mode = AppMode::Normal;
            let ticket = state.chip_input.blur();
            return Some(Command::ScheduleSuggestionHide(ticket));
        }

        Action::QueryKey(key) => {
            // Backspace normally arrives as its own action; route it to the
            // arming rules anyway so the key can never slip past them.
            if key.code == crossterm::event::KeyCode::Backspace {
                state.chip_input.backspace();
            } else {
                state.chip_input.type_key(key);
            }
            clamp_highlight(state);
        }
        Action::Backspace => {
            state.chip_input.backspace();
            clamp_highlight(state);
        }

        Action::SelectSuggestion(name) => {
            select(state, &name);
        }
        Action::SelectHighlighted => {
            let name = state
                .suggestions()
                .get(state.chip_input.highlighted)
                .map(|item| item.name.clone());
            if let Some(name) = name {
                select(state, &name);
            }
        }
        Action::HighlightNext => {
            let len = state.suggestions().len();
            state.chip_input.highlight_next(len);
        }
        Action::HighlightPrev => {
            state.chip_input.highlight_prev();
        }
        Action::RemoveChip(name) => {
            state.chip_input.remove_chip(&name);
            clamp_highlight(state);
        }

        Action::SuggestionHideElapsed(ticket) => {
            state.chip_input.hide_if_current(ticket);
        }

        Action::CatalogLoaded(result) => {
            state.catalog_loading = false;
            match result {
                Ok(items) => {
                    state.catalog = Catalog::new(items);
                    state.status_message = Some(format!("{} items", state.catalog.len()));
                }
                Err(err) => {
                    // Degrade to an empty catalog; suggestions stay empty.
                    state.catalog = Catalog::default();
                    state.last_error = Some(err);
                }
            }
            clamp_highlight(state);
        }
    }
    None
}

fn select(state: &mut AppState, name: &str) {
    if state.chip_input.select(&state.catalog, name) {
        // A selection keeps the interaction going: refocus the input so
        // the recomputed list is ready for the next pick.
        state.mode = AppMode::Editing;
        state.chip_input.focus();
    }
}

fn clamp_highlight(state: &mut AppState) {
    let len = state.suggestions().len();
    state.chip_input.clamp_highlight(len);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Item;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn fruit_state() -> AppState<'static> {
        let mut state = AppState::default();
        update(
            &mut state,
            Action::CatalogLoaded(Ok(vec![
                Item::new("Apple", "img1"),
                Item::new("Banana", "img2"),
                Item::new("Avocado", "img3"),
            ])),
        );
        state
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            update(
                state,
                Action::QueryKey(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
    }

    fn suggestion_names(state: &AppState) -> Vec<String> {
        state
            .suggestions()
            .iter()
            .map(|i| i.name.clone())
            .collect()
    }

    #[test]
    fn end_to_end_type_then_click() {
        let mut state = fruit_state();
        update(&mut state, Action::FocusInput);

        // "Banana" contains an "a", so all three match.
        type_str(&mut state, "a");
        assert_eq!(suggestion_names(&state), vec!["Apple", "Banana", "Avocado"]);

        update(&mut state, Action::SelectSuggestion("Apple".to_string()));
        assert_eq!(state.chip_input.chips, vec!["Apple"]);
        assert_eq!(state.chip_input.query(), "");
        assert_eq!(suggestion_names(&state), vec!["Banana", "Avocado"]);
    }

    #[test]
    fn selected_item_never_reappears_in_suggestions() {
        let mut state = fruit_state();
        update(&mut state, Action::SelectSuggestion("Apple".to_string()));

        type_str(&mut state, "ap");
        assert!(suggestion_names(&state).iter().all(|n| n != "Apple"));
    }

    #[test]
    fn selection_append_order_survives_removal() {
        let mut state = fruit_state();
        update(&mut state, Action::SelectSuggestion("Apple".to_string()));
        update(&mut state, Action::RemoveChip("Apple".to_string()));
        update(&mut state, Action::SelectSuggestion("Banana".to_string()));

        assert_eq!(state.chip_input.chips, vec!["Banana"]);
    }

    #[test]
    fn two_step_delete_via_backspace() {
        let mut state = fruit_state();
        update(&mut state, Action::SelectSuggestion("Apple".to_string()));
        update(&mut state, Action::SelectSuggestion("Banana".to_string()));

        update(&mut state, Action::Backspace);
        assert_eq!(state.chip_input.armed_chip.as_deref(), Some("Banana"));
        assert_eq!(state.chip_input.chips, vec!["Apple", "Banana"]);

        update(&mut state, Action::Backspace);
        assert_eq!(state.chip_input.armed_chip, None);
        assert_eq!(state.chip_input.chips, vec!["Apple"]);
    }

    #[test]
    fn backspace_with_query_text_never_touches_chips() {
        let mut state = fruit_state();
        update(&mut state, Action::SelectSuggestion("Apple".to_string()));
        type_str(&mut state, "ba");

        update(&mut state, Action::Backspace);
        assert_eq!(state.chip_input.query(), "b");
        assert_eq!(state.chip_input.chips, vec!["Apple"]);
        assert_eq!(state.chip_input.armed_chip, None);
    }

    #[test]
    fn backspace_key_through_query_path_still_arms() {
        let mut state = fruit_state();
        update(&mut state, Action::SelectSuggestion("Apple".to_string()));

        // Defensive routing: a raw Backspace key event obeys the arming
        // rules even if it arrives as a QueryKey.
        update(
            &mut state,
            Action::QueryKey(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
        );
        assert_eq!(state.chip_input.armed_chip.as_deref(), Some("Apple"));
    }

    #[test]
    fn blur_schedules_hide_and_focus_invalidates_it() {
        let mut state = fruit_state();
        update(&mut state, Action::FocusInput);
        assert!(state.chip_input.suggestions_visible);

        let cmd = update(&mut state, Action::BlurInput);
        let Some(Command::ScheduleSuggestionHide(ticket)) = cmd else {
            panic!("expected a scheduled hide, got {cmd:?}");
        };
        // Still visible during the grace window.
        assert!(state.chip_input.suggestions_visible);

        update(&mut state, Action::FocusInput);
        update(&mut state, Action::SuggestionHideElapsed(ticket));
        assert!(state.chip_input.suggestions_visible);
    }

    #[test]
    fn hide_lands_when_blur_is_not_followed_by_anything() {
        let mut state = fruit_state();
        update(&mut state, Action::FocusInput);
        let Some(Command::ScheduleSuggestionHide(ticket)) =
            update(&mut state, Action::BlurInput)
        else {
            panic!("expected a scheduled hide");
        };

        update(&mut state, Action::SuggestionHideElapsed(ticket));
        assert!(!state.chip_input.suggestions_visible);
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn click_during_grace_window_selects_before_hide() {
        let mut state = fruit_state();
        update(&mut state, Action::FocusInput);
        let Some(Command::ScheduleSuggestionHide(ticket)) =
            update(&mut state, Action::BlurInput)
        else {
            panic!("expected a scheduled hide");
        };

        update(&mut state, Action::SelectSuggestion("Avocado".to_string()));
        update(&mut state, Action::SuggestionHideElapsed(ticket));

        assert_eq!(state.chip_input.chips, vec!["Avocado"]);
        assert!(state.chip_input.suggestions_visible);
        assert_eq!(state.mode, AppMode::Editing);
    }

    #[test]
    fn select_highlighted_walks_the_derived_list() {
        let mut state = fruit_state();
        update(&mut state, Action::FocusInput);

        update(&mut state, Action::HighlightNext);
        update(&mut state, Action::SelectHighlighted);
        assert_eq!(state.chip_input.chips, vec!["Banana"]);

        // Highlight reset after selection; next pick takes the new head.
        update(&mut state, Action::SelectHighlighted);
        assert_eq!(state.chip_input.chips, vec!["Banana", "Apple"]);
    }

    #[test]
    fn select_highlighted_with_no_suggestions_is_a_no_op() {
        let mut state = fruit_state();
        update(&mut state, Action::FocusInput);
        type_str(&mut state, "zzz");

        update(&mut state, Action::SelectHighlighted);
        assert!(state.chip_input.chips.is_empty());
    }

    #[test]
    fn highlight_clamps_when_query_narrows_the_list() {
        let mut state = fruit_state();
        update(&mut state, Action::FocusInput);
        update(&mut state, Action::HighlightNext);
        update(&mut state, Action::HighlightNext);
        assert_eq!(state.chip_input.highlighted, 2);

        type_str(&mut state, "avo"); // only Avocado matches now
        assert_eq!(state.chip_input.highlighted, 0);
    }

    #[test]
    fn catalog_load_failure_degrades_to_empty() {
        let mut state = AppState::default();
        update(
            &mut state,
            Action::CatalogLoaded(Err("no such file".to_string())),
        );

        assert!(!state.catalog_loading);
        assert!(state.catalog.is_empty());
        assert!(state.suggestions().is_empty());
        assert_eq!(state.last_error.as_deref(), Some("no such file"));
    }

    #[test]
    fn duplicate_catalog_names_collapse_on_load() {
        let mut state = AppState::default();
        update(
            &mut state,
            Action::CatalogLoaded(Ok(vec![
                Item::new("Apple", "img1"),
                Item::new("Apple", "img2"),
            ])),
        );
        assert_eq!(state.catalog.len(), 1);
    }

    #[test]
    fn help_toggles_from_normal_and_back() {
        let mut state = AppState::default();
        update(&mut state, Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Help);
        update(&mut state, Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Normal);
    }
}
