//! Row selection keyed by stringified row id.

use std::any::Any;

use log::debug;
use roster_states::State;
use ustr::Ustr;

/// Selected row ids in the order they were selected.
///
/// Only selected ids are stored, so deselecting drops the entry and the
/// summary never lists stale rows. Selection survives filtering: a row that
/// is filtered out of view stays selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Vec<Ustr>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s.as_str() == id)
    }

    /// Returns `true` if the selection changed.
    pub fn set_selected(&mut self, id: Ustr, selected: bool) -> bool {
        let pos = self.selected.iter().position(|s| *s == id);
        let changed = match (pos, selected) {
            (None, true) => {
                self.selected.push(id);
                true
            }
            (Some(pos), false) => {
                self.selected.remove(pos);
                true
            }
            _ => false,
        };
        if changed {
            debug!("Row {id} selected: {selected}, now {:?}", self.selected);
        }
        changed
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&mut self, id: Ustr) -> bool {
        let selected = !self.is_selected(&id);
        self.set_selected(id, selected);
        selected
    }

    pub fn select_all(&mut self, ids: impl IntoIterator<Item = Ustr>) {
        for id in ids {
            self.set_selected(id, true);
        }
    }

    pub fn deselect_all(&mut self, ids: impl IntoIterator<Item = Ustr>) {
        for id in ids {
            self.set_selected(id, false);
        }
    }

    /// `true` when `ids` is non-empty and every id in it is selected.
    pub fn all_selected<'a>(&self, ids: impl IntoIterator<Item = &'a Ustr>) -> bool {
        let mut any = false;
        for id in ids {
            if !self.is_selected(id) {
                return false;
            }
            any = true;
        }
        any
    }

    pub fn clear(&mut self) {
        if !self.selected.is_empty() {
            debug!("Clearing {} selected rows", self.selected.len());
        }
        self.selected.clear();
    }

    /// Selected ids, as shown in the summary list.
    pub fn summary(&self) -> &[Ustr] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl State for SelectionState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
