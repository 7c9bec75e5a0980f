//! The live control tree the navigation subsystem operates on.
//!
//! The subsystem never owns the grid. The host hands it a [`GridSurface`]
//! on every dispatch, and handlers query rows, controls, and focus state
//! fresh each time. Row count and candidate lists must never be cached
//! across events: row-mutation callbacks may have changed the grid since
//! the last keystroke, and the contract is to degrade to a no-op rather
//! than act on stale coordinates.
//!
//! [`GridStorage`](super::GridStorage) is a ready-made in-memory
//! implementation; hosts bridging to a real widget tree implement the
//! trait themselves.

use super::control::{Control, ControlId};

/// Access to the live grid: rows of controls in document order plus the
/// current focus state.
///
/// The trait is object-safe so handlers and listeners can share a
/// `&mut dyn GridSurface` during one dispatch.
pub trait GridSurface {
    /// Number of row containers currently in the grid, in document order.
    fn row_count(&self) -> usize;

    /// All controls inside the given row, in document order.
    ///
    /// Returns an empty list for an out-of-range row.
    fn controls_in_row(&self, row: usize) -> Vec<ControlId>;

    /// Look up a control's description.
    fn control(&self, id: ControlId) -> Option<Control>;

    /// The control that currently holds input focus, if any.
    fn focused(&self) -> Option<ControlId>;

    /// Move input focus to the given control.
    ///
    /// Returns `false` if the control no longer exists; focus is then
    /// unchanged.
    fn focus(&mut self, id: ControlId) -> bool;

    /// The row containing the given control, if it is in the grid.
    fn row_of(&self, id: ControlId) -> Option<usize>;
}
