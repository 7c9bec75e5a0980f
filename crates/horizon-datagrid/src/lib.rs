//! Horizon Datagrid - keyboard-driven grid editing core.
//!
//! This crate implements the keyboard subsystem of a tabular catalog
//! editor: operating the grid without a mouse. It provides
//!
//! - intra-row focus advance on the confirm key, wrapping within the row
//! - primary-modifier arrow chords for 2-D cell navigation with
//!   wraparound in both dimensions
//! - primary-modifier chords requesting row insertion and removal
//! - the catalog row schema and its import/export collaborators
//!
//! The subsystem owns no UI. The host renders the grid, translates its
//! native key events into [`input::KeyPressEvent`], and feeds them to a
//! [`grid::KeyEventHub`]; focus moves and row-mutation requests flow
//! back through the injected [`grid::GridSurface`] and the navigator's
//! signals.
//!
//! # Example
//!
//! ```
//! use horizon_datagrid::grid::{Control, ControlKind, GridStorage, GridSurface, KeyEventHub};
//! use horizon_datagrid::input::{
//!     GridNavigator, GridShortcuts, Key, KeyPressEvent, KeyboardModifiers,
//!     PrimaryModifier, ShortcutBindings, NO_FOCUSED_ROW,
//! };
//!
//! // A one-row grid with two text inputs.
//! let mut grid = GridStorage::new();
//! let row = grid.push_row(&[
//!     Control::new(ControlKind::Text),
//!     Control::new(ControlKind::Text),
//! ]);
//! grid.focus(row[0]);
//!
//! // Wire the subsystem and register its listeners.
//! let navigator = GridNavigator::new(
//!     PrimaryModifier::for_host(),
//!     ShortcutBindings::default(),
//!     Box::new(|| NO_FOCUSED_ROW),
//!     Box::new(|| 1),
//! );
//! let shortcuts = GridShortcuts::new(navigator);
//! let hub = KeyEventHub::new();
//! let guard = shortcuts.register(&hub);
//!
//! // Enter advances focus within the row.
//! let mut event = KeyPressEvent::new(Key::Enter, KeyboardModifiers::NONE)
//!     .with_target(row[0]);
//! hub.dispatch(&mut grid, &mut event);
//! assert_eq!(grid.focused(), Some(row[1]));
//!
//! // The guard detaches both listeners; dropping it works too.
//! drop(guard);
//! ```

pub use horizon_datagrid_core::*;

pub mod grid;
pub mod input;
pub mod model;
pub mod prelude;
