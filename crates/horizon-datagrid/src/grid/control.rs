//! Control identity and navigability.
//!
//! A grid is rendered by the host as rows of focusable form controls.
//! This module defines the minimal description of one control that the
//! navigation subsystem needs: what kind of control it is and whether it
//! can currently take part in keyboard navigation.

use slotmap::new_key_type;

new_key_type! {
    /// A unique identifier for a control in a grid surface.
    ///
    /// IDs are allocated by the host's [`GridSurface`](super::GridSurface)
    /// implementation and stay valid until the control is removed.
    pub struct ControlId;
}

/// The kind of form control occupying a cell slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Single-line text input.
    Text,
    /// Numeric input (price, stock, ...).
    Number,
    /// Date input.
    Date,
    /// Checkbox input.
    Checkbox,
    /// File picker input. Never a navigation candidate.
    File,
    /// Push button.
    Button,
}

/// A focusable control inside a grid row.
///
/// The navigation subsystem only reads these flags; the host owns the
/// actual widget and keeps this description in sync with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    /// The kind of control.
    pub kind: ControlKind,
    /// Whether the control is enabled.
    pub enabled: bool,
    /// Whether the control is read-only. Ignored for buttons.
    pub read_only: bool,
}

impl Control {
    /// Create an enabled, writable control of the given kind.
    pub fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            enabled: true,
            read_only: false,
        }
    }

    /// Builder-style disabled flag.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Builder-style read-only flag.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Whether this control is a navigation candidate.
    ///
    /// Candidates are enabled, non-read-only, non-file inputs and
    /// enabled buttons. File pickers are never candidates regardless of
    /// state.
    pub fn is_navigable(&self) -> bool {
        match self.kind {
            ControlKind::File => false,
            ControlKind::Button => self.enabled,
            _ => self.enabled && !self.read_only,
        }
    }
}
