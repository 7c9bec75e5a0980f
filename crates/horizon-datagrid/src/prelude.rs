//! Prelude module for Horizon Datagrid.
//!
//! This module re-exports the most commonly used types for convenient
//! importing:
//!
//! ```ignore
//! use horizon_datagrid::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use horizon_datagrid_core::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Grid Model
// ============================================================================

pub use crate::grid::{
    Control, ControlId, ControlKind, GridStorage, GridSurface, KeyEventHub, ListenerId,
    ListenerScope,
};

// ============================================================================
// Input Handling
// ============================================================================

pub use crate::input::{
    DispatchOutcome, GridNavigator, GridShortcuts, Key, KeyPressEvent, KeyboardModifiers,
    NO_FOCUSED_ROW, PlatformInfo, PrimaryModifier, RowEditSignals, RowTabHandler, ShortcutBindings,
    ShortcutGuard,
};

// ============================================================================
// Catalog Model
// ============================================================================

pub use crate::model::{
    CatalogRow, ModelError, ModelResult, RowTerms, TaxonomyTerm, export_catalog_csv,
    import_catalog_csv, sanitize_imported_rows,
};
