//! Error types for Horizon Listbox.
//!
//! The interaction controller never surfaces errors: rejected operations are
//! logged and degrade to no-ops. The types here cover the plumbing around it
//! (attribute coercion, element registration, signal bookkeeping).

/// The main error type for Horizon Listbox core operations.
#[derive(Debug, thiserror::Error)]
pub enum ListboxCoreError {
    /// Attribute-related error.
    #[error("Attribute error: {0}")]
    Attribute(#[from] AttributeError),
    /// Registry-related error.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Signal-related error.
    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),
}

/// Errors raised while reflecting an attribute onto a property.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// The attribute is not part of the element's reflection table.
    #[error("Unknown attribute '{name}'")]
    Unknown {
        /// The attribute name that was looked up.
        name: String,
    },
}

impl AttributeError {
    /// Create an unknown-attribute error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::Unknown { name: name.into() }
    }
}

/// Element registry errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A definition with this name already exists.
    #[error("Element '{0}' is already defined")]
    AlreadyDefined(String),
    /// The name is not a valid element name.
    #[error("Invalid element name '{0}': must be lowercase ASCII and contain a hyphen")]
    InvalidName(String),
}

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("Invalid or disconnected connection ID")]
    InvalidConnection,
}

/// A specialized Result type for Horizon Listbox core operations.
pub type Result<T> = std::result::Result<T, ListboxCoreError>;
