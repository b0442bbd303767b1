use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Key bindings for Normal mode. Editing mode is handled directly in the
/// event mapper since almost every key there feeds the query field.
pub struct KeyMap {
    normal: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn new() -> Self {
        let mut normal = HashMap::new();

        normal.insert(key(KeyCode::Char('q')), Action::Quit);
        normal.insert(key(KeyCode::Char('?')), Action::ToggleHelp);
        normal.insert(key(KeyCode::Char('i')), Action::FocusInput);
        normal.insert(key(KeyCode::Char('/')), Action::FocusInput);
        normal.insert(key(KeyCode::Tab), Action::FocusInput);
        normal.insert(key(KeyCode::Enter), Action::FocusInput);

        Self { normal }
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.normal.get(&event).cloned()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}
