//! In-memory grid storage.
//!
//! [`GridStorage`] is the concrete [`GridSurface`] used by hosts that
//! keep their control tree in memory, and by every test in this crate as
//! the synthetic stand-in for the real widget tree. It supports the row
//! mutations the navigator's signals request: append, insert at an
//! index, and removal.

use slotmap::SlotMap;

use super::control::{Control, ControlId};
use super::surface::GridSurface;

/// A grid of rows of controls with focus tracking.
#[derive(Debug, Default)]
pub struct GridStorage {
    /// All live controls.
    controls: SlotMap<ControlId, Control>,
    /// Rows in document order; each row lists its controls in document
    /// order.
    rows: Vec<Vec<ControlId>>,
    /// The control holding input focus, if any.
    focused: Option<ControlId>,
}

impl GridStorage {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row of controls, returning their IDs in document order.
    pub fn push_row(&mut self, controls: &[Control]) -> Vec<ControlId> {
        let ids: Vec<ControlId> = controls.iter().map(|&c| self.controls.insert(c)).collect();
        self.rows.push(ids.clone());
        ids
    }

    /// Insert a row of controls before the given index, returning their
    /// IDs in document order.
    ///
    /// An index past the end appends.
    pub fn insert_row(&mut self, index: usize, controls: &[Control]) -> Vec<ControlId> {
        let ids: Vec<ControlId> = controls.iter().map(|&c| self.controls.insert(c)).collect();
        let at = index.min(self.rows.len());
        self.rows.insert(at, ids.clone());
        ids
    }

    /// Remove the row at the given index.
    ///
    /// Focus is cleared if the focused control was in the removed row.
    /// Out-of-range indices are ignored.
    pub fn remove_row(&mut self, index: usize) {
        if index >= self.rows.len() {
            return;
        }
        for id in self.rows.remove(index) {
            if self.focused == Some(id) {
                self.focused = None;
            }
            self.controls.remove(id);
        }
    }

    /// Clear input focus.
    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Update a control's description in place.
    ///
    /// Returns `false` if the control no longer exists.
    pub fn set_control(&mut self, id: ControlId, control: Control) -> bool {
        match self.controls.get_mut(id) {
            Some(slot) => {
                *slot = control;
                true
            }
            None => false,
        }
    }
}

impl GridSurface for GridStorage {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn controls_in_row(&self, row: usize) -> Vec<ControlId> {
        self.rows.get(row).cloned().unwrap_or_default()
    }

    fn control(&self, id: ControlId) -> Option<Control> {
        self.controls.get(id).copied()
    }

    fn focused(&self) -> Option<ControlId> {
        self.focused
    }

    fn focus(&mut self, id: ControlId) -> bool {
        if self.controls.contains_key(id) {
            self.focused = Some(id);
            true
        } else {
            false
        }
    }

    fn row_of(&self, id: ControlId) -> Option<usize> {
        self.rows.iter().position(|row| row.contains(&id))
    }
}
