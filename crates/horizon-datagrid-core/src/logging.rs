//! Logging facilities for Horizon Datagrid.
//!
//! Horizon Datagrid uses the `tracing` crate for instrumentation. To see
//! logs, install a tracing subscriber in the host application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The constants below name the targets and spans each subsystem logs
//! under, so hosts can filter with `tracing` directives such as
//! `horizon_datagrid::navigator=trace`.

/// Span names used throughout Horizon Datagrid for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Key-event dispatch span.
    pub const DISPATCH: &str = "horizon_datagrid::dispatch";
    /// Signal emission span.
    pub const SIGNAL: &str = "horizon_datagrid::signal";
    /// Catalog import/sanitization span.
    pub const IMPORT: &str = "horizon_datagrid::import";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_datagrid_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_datagrid_core::signal";
    /// Key-event hub target.
    pub const HUB: &str = "horizon_datagrid::hub";
    /// Grid navigator target.
    pub const NAVIGATOR: &str = "horizon_datagrid::navigator";
    /// Intra-row tab handler target.
    pub const ROW_TAB: &str = "horizon_datagrid::row_tab";
    /// Catalog data model target.
    pub const MODEL: &str = "horizon_datagrid::model";
}
