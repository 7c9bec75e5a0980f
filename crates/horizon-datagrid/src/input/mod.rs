//! Keyboard input handling for the grid editor.
//!
//! Three cooperating pieces make the grid operable without a mouse:
//!
//! - [`PrimaryModifier`]: resolves, once per process, which modifier key
//!   carries shortcuts on this platform (Command on Mac-family hosts,
//!   Control elsewhere)
//! - [`RowTabHandler`]: Enter advances focus through a row's controls,
//!   wrapping to the first
//! - [`GridNavigator`]: primary-modifier chords for row insert/remove
//!   and 2-D cell navigation with wraparound
//!
//! [`GridShortcuts::register`] attaches both handlers to a
//! [`KeyEventHub`](crate::grid::KeyEventHub) and returns the single
//! [`ShortcutGuard`] disposer.
//!
//! Handlers report a [`DispatchOutcome`] instead of raising errors:
//! composing this subsystem with other key handlers must never let a
//! failure escape an event dispatch.

mod bindings;
mod events;
mod modifier;
mod navigator;
mod registration;
mod row_tab;


pub use bindings::ShortcutBindings;
pub use events::{EventBase, Key, KeyPressEvent, KeyboardModifiers};
pub use modifier::{PlatformInfo, PrimaryModifier};
pub use navigator::{
    FocusedRowAccessor, GridNavigator, NO_FOCUSED_ROW, RowCountAccessor, RowEditSignals,
};
pub use registration::{GridShortcuts, ShortcutGuard};
pub use row_tab::RowTabHandler;

/// How a handler resolved one key press.
///
/// Failures are silent no-ops by design; the outcome only tells callers
/// whether the press matched this handler's contract at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The press matched and was consumed (possibly as a guarded no-op).
    Handled,
    /// The press is not this handler's concern.
    NotApplicable,
}

impl DispatchOutcome {
    /// Check if the press was consumed.
    pub fn was_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}
