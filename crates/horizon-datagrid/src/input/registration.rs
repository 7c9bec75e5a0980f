//! Listener registration and disposal.
//!
//! [`GridShortcuts`] bundles the two handlers of the subsystem — the
//! intra-row tab handler and the grid navigator — and attaches them to a
//! [`KeyEventHub`] in one call. The returned [`ShortcutGuard`] is the
//! single disposer: it detaches both listeners, may be invoked any
//! number of times, and also runs on drop so the subsystem cannot leak
//! listeners across host remounts.

use std::sync::Arc;

use crate::grid::{KeyEventHub, ListenerId, ListenerScope};

use super::navigator::GridNavigator;
use super::row_tab::RowTabHandler;

/// The keyboard subsystem of one grid editor view.
pub struct GridShortcuts {
    row_tab: RowTabHandler,
    navigator: Arc<GridNavigator>,
}

impl GridShortcuts {
    /// Bundle the handlers.
    ///
    /// Connect slots to `navigator.signals` before or after registering;
    /// connections are independent of listener attachment.
    pub fn new(navigator: GridNavigator) -> Self {
        Self {
            row_tab: RowTabHandler::new(),
            navigator: Arc::new(navigator),
        }
    }

    /// The navigator, for connecting row-mutation slots.
    pub fn navigator(&self) -> &GridNavigator {
        &self.navigator
    }

    /// Attach both listeners to the hub.
    ///
    /// The tab handler listens at grid scope (keystrokes inside the row
    /// container); the navigator listens at document scope. Returns the
    /// guard that detaches both.
    pub fn register(&self, hub: &KeyEventHub) -> ShortcutGuard {
        let row_tab = self.row_tab;
        let tab_id = hub.add_listener(ListenerScope::Grid, move |surface, event| {
            let _ = row_tab.handle(surface, event);
        });

        let navigator = self.navigator.clone();
        let nav_id = hub.add_listener(ListenerScope::Document, move |surface, event| {
            let _ = navigator.handle(surface, event);
        });

        tracing::debug!(target: "horizon_datagrid::hub", "grid shortcuts registered");
        ShortcutGuard {
            hub: hub.clone(),
            ids: vec![tab_id, nav_id],
        }
    }
}

/// Disposer for a registered [`GridShortcuts`].
///
/// Detaches the listeners on [`dispose`](Self::dispose) or on drop.
/// Disposal is idempotent: a second call (or a drop after an explicit
/// call) is a no-op.
pub struct ShortcutGuard {
    hub: KeyEventHub,
    ids: Vec<ListenerId>,
}

impl ShortcutGuard {
    /// Detach all listeners this guard owns.
    pub fn dispose(&mut self) {
        for id in self.ids.drain(..) {
            self.hub.remove_listener(id);
        }
    }

    /// Whether the guard has already been disposed.
    pub fn is_disposed(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Drop for ShortcutGuard {
    fn drop(&mut self) {
        self.dispose();
    }
}
