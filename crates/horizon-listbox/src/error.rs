//! Error types for the listbox components.

use horizon_listbox_core::{AttributeError, RegistryError};

use crate::option::OptionId;

/// Result type alias for listbox operations.
pub type Result<T> = std::result::Result<T, ListboxError>;

/// Errors raised by option list and host operations.
///
/// Controller actions never return these; they log and degrade to no-ops.
#[derive(Debug, thiserror::Error)]
pub enum ListboxError {
    /// The option id does not refer to an option in the list.
    #[error("Unknown or removed option {0:?}")]
    UnknownOption(OptionId),

    /// Attribute reflection failed.
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    /// Element registration failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
