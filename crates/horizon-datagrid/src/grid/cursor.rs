//! Focus-cursor resolution.
//!
//! The navigation subsystem persists no column coordinate. The cursor is
//! recomputed from live focus state on every event: which controls in a
//! row are candidates, and where the focused control sits among them.
//! Keeping this a pure per-event computation is what lets the grid
//! tolerate rows being inserted or removed between keystrokes.

use super::control::ControlId;
use super::surface::GridSurface;

/// The navigation candidates of a row, in document order.
///
/// Candidates are the controls for which
/// [`Control::is_navigable`](super::Control::is_navigable) holds,
/// collected at call time (never cached).
pub fn navigable_controls(surface: &dyn GridSurface, row: usize) -> Vec<ControlId> {
    surface
        .controls_in_row(row)
        .into_iter()
        .filter(|&id| surface.control(id).is_some_and(|c| c.is_navigable()))
        .collect()
}

/// Position of the focused control within a row's candidate list.
///
/// Returns `None` when nothing is focused, the focused control lives in
/// another row, or it is not a candidate (disabled, read-only, file).
pub fn focused_position(surface: &dyn GridSurface, row: usize) -> Option<usize> {
    let focused = surface.focused()?;
    navigable_controls(surface, row)
        .iter()
        .position(|&id| id == focused)
}
