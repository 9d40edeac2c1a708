//! Core systems for Horizon Listbox.
//!
//! This crate provides the plumbing shared by the Horizon Listbox components:
//!
//! - **Signal/Slot System**: Synchronous, type-safe callbacks
//! - **Attribute Reflection**: Declarative attribute-to-property tables
//! - **Element Registry**: Explicit, idempotent element definitions
//! - **Logging**: `tracing` targets, spans and helper macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_listbox_core::Signal;
//!
//! // Create a signal that notifies when the selected values change
//! let changed = Signal::<Vec<String>>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = changed.connect(|values| {
//!     println!("Selected: {:?}", values);
//! });
//!
//! // Emit the signal
//! changed.emit(vec!["banana".to_string()]);
//!
//! // Disconnect when done
//! changed.disconnect(conn_id);
//! ```

pub mod attribute;
mod error;
pub mod logging;
pub mod registry;
pub mod signal;

pub use attribute::{AttributeKind, AttributeSpec, AttributeTable, AttributeValue};
pub use error::{AttributeError, ListboxCoreError, RegistryError, Result, SignalError};
pub use logging::PerfSpan;
pub use registry::ElementRegistry;
pub use signal::{ConnectionGuard, ConnectionId, Signal};

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);
static_assertions::assert_impl_all!(ConnectionGuard<String>: Send, Sync);
