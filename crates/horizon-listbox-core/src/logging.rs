//! Logging facilities for Horizon Listbox.
//!
//! Horizon Listbox uses the `tracing` crate for instrumentation and never
//! installs a subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_listbox=debug")
//!         .init();
//! }
//! ```
//!
//! # Levels
//!
//! - `error`: programmer errors, such as selecting an option that is not part
//!   of the list
//! - `warn`: rejected user-reachable operations, such as selecting a disabled
//!   option
//! - `debug`: recoveries, such as dropping focus from an option that was
//!   removed
//! - `trace`: every navigation, selection and emitted signal

/// Span names used throughout Horizon Listbox for tracing.
pub mod span_names {
    /// Keyboard dispatch span.
    pub const KEY_DISPATCH: &str = "horizon_listbox::key_dispatch";
    /// Selection span.
    pub const SELECT: &str = "horizon_listbox::select";
    /// Performance measurement span.
    pub const PERF: &str = "horizon_listbox::perf";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_listbox_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_listbox_core::signal";
    /// Attribute reflection target.
    pub const ATTRIBUTE: &str = "horizon_listbox_core::attribute";
    /// Element registry target.
    pub const REGISTRY: &str = "horizon_listbox_core::registry";
    /// Option list controller target.
    pub const CONTROLLER: &str = "horizon_listbox::controller";
    /// Keyboard dispatch target.
    pub const KEYBOARD: &str = "horizon_listbox::keyboard";
    /// Pointer dispatch target.
    pub const POINTER: &str = "horizon_listbox::pointer";
    /// Host component target.
    pub const HOST: &str = "horizon_listbox::host";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_listbox::perf", span_names::PERF, operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros that pin the target to
/// the core crate.
#[macro_export]
macro_rules! listbox_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "horizon_listbox_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! listbox_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "horizon_listbox_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! listbox_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "horizon_listbox_core", $($arg)*)
    };
}
