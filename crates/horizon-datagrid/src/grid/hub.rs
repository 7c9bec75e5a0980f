//! Key-event hub: scoped listener registration and dispatch.
//!
//! The host owns exactly one [`KeyEventHub`] per editor view and feeds
//! every key press into [`KeyEventHub::dispatch`]. Components attach
//! listeners at one of two scopes:
//!
//! - [`ListenerScope::Grid`] — fires only when the event target is a
//!   control inside the grid (the row-container scope of the tab
//!   handler).
//! - [`ListenerScope::Document`] — fires for every key press (the
//!   document scope of the navigator's chords).
//!
//! Dispatch runs in bubbling order: grid-scoped listeners first, then
//! document-scoped ones. A listener that calls
//! [`stop_propagation`](crate::input::KeyPressEvent::stop_propagation)
//! halts dispatch of all subsequent listeners for that event.
//!
//! The hub handle is clonable; clones share one listener table. Listener
//! closures are snapshotted before invocation, so a listener may detach
//! itself or others mid-dispatch without deadlocking.

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use super::surface::GridSurface;
use crate::input::KeyPressEvent;

new_key_type! {
    /// A unique identifier for a registered key listener.
    pub struct ListenerId;
}

/// Where in the dispatch order a listener participates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerScope {
    /// Only key presses targeting a control inside the grid.
    Grid,
    /// Every key press reaching the document.
    Document,
}

/// A key listener: invoked with the live surface and the mutable event.
pub type KeyListener = dyn Fn(&mut dyn GridSurface, &mut KeyPressEvent) + Send + Sync;

struct ListenerEntry {
    scope: ListenerScope,
    callback: Arc<KeyListener>,
}

/// Clonable handle to a shared key-listener table.
#[derive(Clone, Default)]
pub struct KeyEventHub {
    listeners: Arc<Mutex<SlotMap<ListenerId, ListenerEntry>>>,
}

impl KeyEventHub {
    /// Create a hub with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener at the given scope.
    pub fn add_listener<F>(&self, scope: ListenerScope, callback: F) -> ListenerId
    where
        F: Fn(&mut dyn GridSurface, &mut KeyPressEvent) + Send + Sync + 'static,
    {
        self.listeners.lock().insert(ListenerEntry {
            scope,
            callback: Arc::new(callback),
        })
    }

    /// Detach a listener.
    ///
    /// Returns `true` if the listener was still attached.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.lock().remove(id).is_some()
    }

    /// Number of currently attached listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Dispatch one key press to the attached listeners.
    ///
    /// Grid-scoped listeners run first (bubbling order), and only when
    /// the event's target is a control currently in the grid. Dispatch
    /// stops as soon as a listener stops propagation.
    pub fn dispatch(&self, surface: &mut dyn GridSurface, event: &mut KeyPressEvent) {
        // Snapshot under the lock, invoke without it.
        let snapshot: Vec<(ListenerScope, Arc<KeyListener>)> = {
            let listeners = self.listeners.lock();
            listeners
                .iter()
                .map(|(_, entry)| (entry.scope, entry.callback.clone()))
                .collect()
        };

        let in_grid = event
            .target
            .is_some_and(|id| surface.control(id).is_some());

        tracing::trace!(
            target: "horizon_datagrid::hub",
            listeners = snapshot.len(),
            in_grid,
            "dispatching key press"
        );

        for scope in [ListenerScope::Grid, ListenerScope::Document] {
            for (listener_scope, callback) in &snapshot {
                if *listener_scope != scope {
                    continue;
                }
                if event.is_propagation_stopped() {
                    return;
                }
                if scope == ListenerScope::Grid && !in_grid {
                    continue;
                }
                (callback.as_ref())(surface, event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Control, ControlKind, GridStorage};
    use crate::input::{Key, KeyPressEvent, KeyboardModifiers};

    fn text() -> Control {
        Control::new(ControlKind::Text)
    }

    fn press(key: Key) -> KeyPressEvent {
        KeyPressEvent::new(key, KeyboardModifiers::NONE)
    }

    #[test]
    fn test_document_listener_fires_without_target() {
        let hub = KeyEventHub::new();
        let hits = Arc::new(Mutex::new(0));

        let hits_clone = hits.clone();
        hub.add_listener(ListenerScope::Document, move |_, _| {
            *hits_clone.lock() += 1;
        });

        let mut grid = GridStorage::new();
        let mut event = press(Key::Enter);
        hub.dispatch(&mut grid, &mut event);

        assert_eq!(*hits.lock(), 1);
    }

    #[test]
    fn test_grid_listener_requires_target_in_grid() {
        let hub = KeyEventHub::new();
        let hits = Arc::new(Mutex::new(0));

        let hits_clone = hits.clone();
        hub.add_listener(ListenerScope::Grid, move |_, _| {
            *hits_clone.lock() += 1;
        });

        let mut grid = GridStorage::new();
        let ids = grid.push_row(&[text()]);

        // No target: grid listener skipped.
        let mut event = press(Key::Enter);
        hub.dispatch(&mut grid, &mut event);
        assert_eq!(*hits.lock(), 0);

        // Target inside the grid: fires.
        let mut event = press(Key::Enter).with_target(ids[0]);
        hub.dispatch(&mut grid, &mut event);
        assert_eq!(*hits.lock(), 1);
    }

    #[test]
    fn test_grid_scope_dispatches_before_document_scope() {
        let hub = KeyEventHub::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let order_clone = order.clone();
        hub.add_listener(ListenerScope::Document, move |_, _| {
            order_clone.lock().push("document");
        });
        let order_clone = order.clone();
        hub.add_listener(ListenerScope::Grid, move |_, _| {
            order_clone.lock().push("grid");
        });

        let mut grid = GridStorage::new();
        let ids = grid.push_row(&[text()]);
        let mut event = press(Key::Enter).with_target(ids[0]);
        hub.dispatch(&mut grid, &mut event);

        assert_eq!(*order.lock(), vec!["grid", "document"]);
    }

    #[test]
    fn test_stop_propagation_halts_dispatch() {
        let hub = KeyEventHub::new();
        let hits = Arc::new(Mutex::new(0));

        hub.add_listener(ListenerScope::Document, |_, event| {
            event.stop_propagation();
        });
        let hits_clone = hits.clone();
        hub.add_listener(ListenerScope::Document, move |_, _| {
            *hits_clone.lock() += 1;
        });

        let mut grid = GridStorage::new();
        let mut event = press(Key::Enter);
        hub.dispatch(&mut grid, &mut event);

        assert_eq!(*hits.lock(), 0);
    }

    #[test]
    fn test_removed_listener_never_fires() {
        let hub = KeyEventHub::new();
        let hits = Arc::new(Mutex::new(0));

        let hits_clone = hits.clone();
        let id = hub.add_listener(ListenerScope::Document, move |_, _| {
            *hits_clone.lock() += 1;
        });

        assert!(hub.remove_listener(id));
        assert!(!hub.remove_listener(id));

        let mut grid = GridStorage::new();
        let mut event = press(Key::Enter);
        hub.dispatch(&mut grid, &mut event);

        assert_eq!(*hits.lock(), 0);
    }
}
