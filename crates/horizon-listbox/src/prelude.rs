//! Prelude module for Horizon Listbox.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use horizon_listbox::prelude::*;
//! ```

// ============================================================================
// Host
// ============================================================================

pub use crate::host::{FormValue, Listbox, ListboxEvent};

// ============================================================================
// Controller
// ============================================================================

pub use crate::controller::{ControllerConfig, OptionListController};
pub use crate::provider::ItemProvider;
pub use crate::selection::{SelectOutcome, SelectionMode, SelectionResult};

// ============================================================================
// Options
// ============================================================================

pub use crate::option::{ListOption, OptionId, OptionList};

// ============================================================================
// Input
// ============================================================================

pub use crate::events::{Key, KeyPressEvent, KeyboardModifiers, PointerEvent, PointerEventKind};

// ============================================================================
// Signals
// ============================================================================

pub use horizon_listbox_core::Signal;
