use super::state::AppState;
use crate::domain::models::Item;

/// One chip ready for display: the selected name joined with its catalog
/// image and whether it is armed for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipView {
    pub name: String,
    pub image: String,
    pub armed: bool,
}

/// Everything the widgets need for one frame. Derived from the state
/// record; widgets never reach back into `AppState`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub chips: Vec<ChipView>,
    pub query: String,
    pub suggestions: Vec<Item>,
    pub suggestions_visible: bool,
    pub armed_chip: Option<String>,
    pub highlighted: usize,
}

#[must_use]
pub fn project(state: &AppState) -> Snapshot {
    let chips = state
        .chip_input
        .chips
        .iter()
        .map(|name| ChipView {
            name: name.clone(),
            // Chips only enter the selection via the catalog, but a lookup
            // miss still renders (without an avatar) rather than panicking.
            image: state
                .catalog
                .get(name)
                .map(|item| item.image.clone())
                .unwrap_or_default(),
            armed: state.chip_input.armed_chip.as_deref() == Some(name.as_str()),
        })
        .collect();

    let suggestions: Vec<Item> = state.suggestions().into_iter().cloned().collect();
    let highlighted = state
        .chip_input
        .highlighted
        .min(suggestions.len().saturating_sub(1));

    Snapshot {
        chips,
        query: state.chip_input.query(),
        suggestions,
        suggestions_visible: state.chip_input.suggestions_visible,
        armed_chip: state.chip_input.armed_chip.clone(),
        highlighted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::reducer::update;
    use crate::domain::models::Item;

    #[test]
    fn chips_carry_their_catalog_image() {
        let mut state = AppState::default();
        update(
            &mut state,
            Action::CatalogLoaded(Ok(vec![
                Item::new("Apple", "img1"),
                Item::new("Banana", "img2"),
            ])),
        );
        update(&mut state, Action::SelectSuggestion("Apple".to_string()));
        update(&mut state, Action::Backspace); // arm Apple

        let snap = project(&state);
        assert_eq!(
            snap.chips,
            vec![ChipView {
                name: "Apple".to_string(),
                image: "img1".to_string(),
                armed: true,
            }]
        );
        assert_eq!(snap.armed_chip.as_deref(), Some("Apple"));
        let names: Vec<_> = snap.suggestions.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Banana"]);
    }

    #[test]
    fn projection_does_not_mutate_state() {
        let mut state = AppState::default();
        update(
            &mut state,
            Action::CatalogLoaded(Ok(vec![Item::new("Apple", "img1")])),
        );

        let before = state.chip_input.clone();
        let first = project(&state);
        let second = project(&state);
        assert_eq!(first, second);
        assert_eq!(state.chip_input, before);
    }
}
