use super::input::QueryField;
use crate::domain::models::Catalog;
use crossterm::event::KeyEvent;

/// The chip-input control as one explicit state record. Every mutation goes
/// through a named transition below; the suggestion list is derived on
/// demand from (catalog, chips, query) and never stored here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChipInputState<'a> {
    /// The free-text search query.
    pub field: QueryField<'a>,
    /// Selected item names, insertion order, most recent last. No
    /// duplicates; every name exists in the catalog.
    pub chips: Vec<String>,
    /// At most one chip pending two-step Backspace deletion.
    pub armed_chip: Option<String>,
    /// True while the input has focus, plus the blur grace window.
    pub suggestions_visible: bool,
    /// Keyboard highlight into the current suggestion list.
    pub highlighted: usize,
    /// Generation counter for deferred hides. Bumped by focus, blur and
    /// selection; a scheduled hide only applies if its ticket still
    /// matches, so a stale timer can never clobber a newer focus.
    hide_epoch: u64,
}

impl ChipInputState<'_> {
    #[must_use]
    pub fn query(&self) -> String {
        self.field.text()
    }

    /// Input gained focus: suggestions show and any pending hide is void.
    pub fn focus(&mut self) {
        self.hide_epoch = self.hide_epoch.wrapping_add(1);
        self.suggestions_visible = true;
    }

    /// Input lost focus. Returns the ticket a deferred hide must present;
    /// visibility is untouched until that hide lands, so a selection click
    /// racing the blur still sees the list.
    #[must_use]
    pub fn blur(&mut self) -> u64 {
        self.hide_epoch = self.hide_epoch.wrapping_add(1);
        self.hide_epoch
    }

    /// Applies a deferred hide if nothing has invalidated it since.
    pub fn hide_if_current(&mut self, ticket: u64) {
        if self.hide_epoch == ticket {
            self.suggestions_visible = false;
        }
    }

    /// A plain keystroke into the query. Arming is untouched: only the
    /// Backspace rules and the explicit clears in `select`/`remove_chip`
    /// change it.
    pub fn type_key(&mut self, key: KeyEvent) {
        self.field.input(key);
    }

    /// Selects an item by name. Defensive no-op (returns false) when the
    /// name is unknown to the catalog or already a chip; the filter never
    /// offers those, but the transition stays total anyway.
    pub fn select(&mut self, catalog: &Catalog, name: &str) -> bool {
        if !catalog.contains(name) || self.chips.iter().any(|c| c.as_str() == name) {
            return false;
        }
        self.chips.push(name.to_string());
        self.field.clear();
        self.armed_chip = None;
        self.highlighted = 0;
        // A selection also voids any pending hide from a preceding blur.
        self.hide_epoch = self.hide_epoch.wrapping_add(1);
        true
    }

    /// Explicit pointer removal. Does not require arming; removing a chip
    /// that is not present is a no-op.
    pub fn remove_chip(&mut self, name: &str) {
        self.chips.retain(|c| c.as_str() != name);
        if self.armed_chip.as_deref() == Some(name) {
            self.armed_chip = None;
        }
    }

    /// The Backspace rules:
    /// - empty query, chips present, nothing armed: arm the last chip,
    ///   suppressing ordinary text editing;
    /// - empty query, a chip armed: remove it and disarm;
    /// - non-empty query: ordinary text deletion, arming untouched.
    pub fn backspace(&mut self) {
        if !self.field.is_empty() {
            self.field.delete_char();
            return;
        }
        match self.armed_chip.take() {
            Some(armed) => self.chips.retain(|c| c != &armed),
            None => self.armed_chip = self.chips.last().cloned(),
        }
    }

    /// Moves the keyboard highlight, clamped to the suggestion count.
    pub fn highlight_next(&mut self, len: usize) {
        if len > 0 {
            self.highlighted = (self.highlighted + 1).min(len - 1);
        }
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Re-clamps the highlight after the suggestion list shrank.
    pub fn clamp_highlight(&mut self, len: usize) {
        self.highlighted = self.highlighted.min(len.saturating_sub(1));
    }
}
