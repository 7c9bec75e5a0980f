//! Document-level grid shortcuts: row mutation and 2-D cell navigation.
//!
//! All chords are primary-modifier based (Command on Mac-family hosts,
//! Control elsewhere):
//!
//! - `;` / `+` — insert a row (above the next position when a row is
//!   focused, appended otherwise)
//! - `-` — remove the focused row
//! - arrows — move focus between cells with wraparound in both
//!   dimensions
//!
//! The navigator persists no cursor. The focused-row index and the
//! data-row count are read through injected accessors on every event,
//! and the column position is recomputed from live focus state, so the
//! grid may be mutated between keystrokes without invalidating anything.
//! Failure is always a silent no-op: a missed keystroke must never take
//! down the editing session.

use horizon_datagrid_core::Signal;

use super::DispatchOutcome;
use super::bindings::ShortcutBindings;
use super::events::{Key, KeyPressEvent};
use super::modifier::PrimaryModifier;
use crate::grid::{GridSurface, cursor};

/// Sentinel value of the focused-row accessor meaning "no row focused".
pub const NO_FOCUSED_ROW: i32 = -1;

/// Accessor for the externally tracked focused-row index
/// ([`NO_FOCUSED_ROW`] when no row is focused).
pub type FocusedRowAccessor = Box<dyn Fn() -> i32 + Send + Sync>;

/// Accessor for the current data-row count, read fresh on every event.
pub type RowCountAccessor = Box<dyn Fn() -> usize + Send + Sync>;

/// Row-mutation requests emitted by the navigator.
///
/// The navigator never mutates the row collection itself; callers
/// connect slots that perform the edits. Arguments are validated before
/// emission (a remove is only requested for a focused row).
#[derive(Default)]
pub struct RowEditSignals {
    /// Append a row at the end (no row focused during insert chord).
    pub append_requested: Signal<()>,
    /// Insert a row at the carried index (focused row + 1).
    pub insert_requested: Signal<usize>,
    /// Remove the row at the carried index.
    pub remove_requested: Signal<usize>,
}

/// Document-scoped shortcut handler for the grid.
pub struct GridNavigator {
    modifier: PrimaryModifier,
    bindings: ShortcutBindings,
    focused_row: FocusedRowAccessor,
    data_rows: RowCountAccessor,
    /// Row-mutation requests; connect slots before registering.
    pub signals: RowEditSignals,
}

impl GridNavigator {
    /// Create a navigator with injected dependencies.
    pub fn new(
        modifier: PrimaryModifier,
        bindings: ShortcutBindings,
        focused_row: FocusedRowAccessor,
        data_rows: RowCountAccessor,
    ) -> Self {
        Self {
            modifier,
            bindings,
            focused_row,
            data_rows,
            signals: RowEditSignals::default(),
        }
    }

    /// The externally tracked focused row, if any.
    fn resolve_focused_row(&self) -> Option<usize> {
        let index = (self.focused_row)();
        (index >= 0).then_some(index as usize)
    }

    /// Handle one key press.
    ///
    /// Returns [`DispatchOutcome::Handled`] whenever a chord was
    /// recognized, including chords that resolve to a no-op (their
    /// default action is still suppressed).
    pub fn handle(
        &self,
        surface: &mut dyn GridSurface,
        event: &mut KeyPressEvent,
    ) -> DispatchOutcome {
        if event.is_composing || !self.modifier.is_held(&event.modifiers) {
            return DispatchOutcome::NotApplicable;
        }

        if let Some(ch) = event.key.as_char() {
            if self.bindings.is_insert_key(ch) {
                event.accept();
                event.stop_propagation();
                match self.resolve_focused_row() {
                    Some(row) => {
                        tracing::debug!(target: "horizon_datagrid::navigator", row, "insert row requested");
                        self.signals.insert_requested.emit(row + 1);
                    }
                    None => {
                        tracing::debug!(target: "horizon_datagrid::navigator", "append row requested");
                        self.signals.append_requested.emit(());
                    }
                }
                return DispatchOutcome::Handled;
            }

            if self.bindings.is_remove_key(ch) {
                event.accept();
                event.stop_propagation();
                if let Some(row) = self.resolve_focused_row() {
                    tracing::debug!(target: "horizon_datagrid::navigator", row, "remove row requested");
                    self.signals.remove_requested.emit(row);
                }
                return DispatchOutcome::Handled;
            }

            return DispatchOutcome::NotApplicable;
        }

        if event.key.is_arrow() {
            // Arrow chords always suppress the default action, even when
            // no movement results.
            event.accept();
            self.move_focus(surface, event.key);
            return DispatchOutcome::Handled;
        }

        DispatchOutcome::NotApplicable
    }

    /// Resolve the cursor and move focus for an arrow chord.
    ///
    /// Any unresolvable piece (no focused row, empty grid, focus not a
    /// candidate, short target row) swallows the chord without moving.
    fn move_focus(&self, surface: &mut dyn GridSurface, key: Key) {
        let Some(row) = self.resolve_focused_row() else {
            return;
        };
        let row_count = (self.data_rows)();
        if row_count == 0 {
            return;
        }

        let candidates = cursor::navigable_controls(surface, row);
        let focused = surface.focused();
        let Some(index) = focused.and_then(|id| candidates.iter().position(|&c| c == id)) else {
            return;
        };

        let row_above = (row + row_count - 1) % row_count;
        let row_below = (row + 1) % row_count;

        match key {
            Key::ArrowDown => {
                self.focus_at(surface, row_below, index);
            }
            Key::ArrowUp => {
                self.focus_at(surface, row_above, index);
            }
            Key::ArrowLeft => {
                if index > 0 {
                    surface.focus(candidates[index - 1]);
                } else {
                    // Wrap to the last candidate of the row above.
                    let targets = cursor::navigable_controls(surface, row_above);
                    if let Some(&last) = targets.last() {
                        surface.focus(last);
                    }
                }
            }
            Key::ArrowRight => {
                if index + 1 < candidates.len() {
                    surface.focus(candidates[index + 1]);
                } else {
                    // Wrap to the first candidate of the row below.
                    let targets = cursor::navigable_controls(surface, row_below);
                    if let Some(&first) = targets.first() {
                        surface.focus(first);
                    }
                }
            }
            _ => {}
        }
    }

    /// Focus the candidate at `index` in `row`, position-matched by raw
    /// index. Rows with fewer candidates swallow the move.
    fn focus_at(&self, surface: &mut dyn GridSurface, row: usize, index: usize) {
        let targets = cursor::navigable_controls(surface, row);
        if let Some(&target) = targets.get(index) {
            surface.focus(target);
        }
    }
}
