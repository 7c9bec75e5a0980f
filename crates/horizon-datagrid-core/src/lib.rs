//! Core systems for Horizon Datagrid.
//!
//! This crate provides the foundational pieces shared by the datagrid
//! components:
//!
//! - **Signal/Slot System**: Type-safe callback registration used for the
//!   row-mutation hooks (append / insert / remove requests)
//! - **Logging**: `tracing` target constants for filtering datagrid
//!   subsystems
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_datagrid_core::Signal;
//!
//! // Create a signal that notifies with the affected row index
//! let row_removed = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = row_removed.connect(|&index| {
//!     println!("Row {} removed", index);
//! });
//!
//! // Emit the signal
//! row_removed.emit(3);
//!
//! // Disconnect when done
//! row_removed.disconnect(conn_id);
//! ```
//!
//! Unlike a general-purpose GUI event loop, everything here runs
//! synchronously on the caller's stack: the datagrid input subsystem is
//! specified as single-threaded and event-driven, so slots are always
//! invoked directly during `emit`.

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
