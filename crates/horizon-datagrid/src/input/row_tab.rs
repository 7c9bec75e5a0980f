//! Intra-row confirm-key focus advance.
//!
//! Pressing the confirm key (Enter) while a candidate control inside a
//! row has focus moves focus to the next candidate in that row, wrapping
//! back to the first after the last. The handler moves focus only: it
//! does not accept the event, so whatever default the host attaches to
//! the confirm key (e.g. form submission) is not suppressed here.

use super::DispatchOutcome;
use super::events::{Key, KeyPressEvent};
use crate::grid::{GridSurface, cursor};

/// Handler for the confirm key inside a row container.
///
/// Stateless: the candidate set and the focused position are recomputed
/// from the surface on every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowTabHandler;

impl RowTabHandler {
    /// Create the handler.
    pub fn new() -> Self {
        Self
    }

    /// Handle one key press.
    ///
    /// Returns [`DispatchOutcome::Handled`] when focus was advanced.
    /// Composition keystrokes, non-confirm keys, and unresolvable focus
    /// positions are all [`DispatchOutcome::NotApplicable`].
    pub fn handle(
        &self,
        surface: &mut dyn GridSurface,
        event: &mut KeyPressEvent,
    ) -> DispatchOutcome {
        if event.is_composing || event.key != Key::Enter {
            return DispatchOutcome::NotApplicable;
        }

        let Some(focused) = surface.focused() else {
            return DispatchOutcome::NotApplicable;
        };
        let Some(row) = surface.row_of(focused) else {
            return DispatchOutcome::NotApplicable;
        };

        let candidates = cursor::navigable_controls(surface, row);
        if candidates.is_empty() {
            return DispatchOutcome::NotApplicable;
        }
        let Some(index) = candidates.iter().position(|&id| id == focused) else {
            // Focus sits on a non-candidate (e.g. read-only input).
            return DispatchOutcome::NotApplicable;
        };

        let next = candidates[(index + 1) % candidates.len()];
        tracing::trace!(
            target: "horizon_datagrid::row_tab",
            row,
            from = index,
            to = (index + 1) % candidates.len(),
            "advancing focus within row"
        );
        surface.focus(next);
        DispatchOutcome::Handled
    }
}
