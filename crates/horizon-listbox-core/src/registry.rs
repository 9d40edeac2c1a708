//! Element registry.
//!
//! [`ElementRegistry`] maps element names to factories. It is an explicit
//! value that callers create and pass around; there is no process-wide
//! instance. Registration through [`ElementRegistry::define`] is idempotent:
//! defining a name that already exists keeps the first definition.
//!
//! # Example
//!
//! ```
//! use horizon_listbox_core::ElementRegistry;
//!
//! let mut registry: ElementRegistry<fn() -> &'static str> = ElementRegistry::new();
//! assert!(registry.define("hl-listbox", || "listbox").unwrap());
//! assert!(!registry.define("hl-listbox", || "other").unwrap());
//! assert_eq!((registry.get("hl-listbox").unwrap())(), "listbox");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::error::RegistryError;

/// A registry of named element factories.
pub struct ElementRegistry<F> {
    definitions: BTreeMap<String, F>,
}

impl<F> Default for ElementRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for ElementRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRegistry")
            .field("names", &self.definitions.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<F> ElementRegistry<F> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            definitions: BTreeMap::new(),
        }
    }

    /// Register `factory` under `name` if the name is not yet defined.
    ///
    /// Returns `Ok(true)` if the definition was inserted and `Ok(false)` if
    /// the name was already defined (the existing definition is kept).
    pub fn define(&mut self, name: &str, factory: F) -> Result<bool, RegistryError> {
        validate_name(name)?;
        if self.definitions.contains_key(name) {
            crate::listbox_trace!(element = name, "element already defined, keeping existing");
            return Ok(false);
        }
        self.definitions.insert(name.to_owned(), factory);
        tracing::debug!(target: "horizon_listbox_core::registry", element = name, "element defined");
        Ok(true)
    }

    /// Register `factory` under `name`, failing if the name is already defined.
    pub fn try_define(&mut self, name: &str, factory: F) -> Result<(), RegistryError> {
        if self.define(name, factory)? {
            Ok(())
        } else {
            Err(RegistryError::AlreadyDefined(name.to_owned()))
        }
    }

    /// Look up the factory for `name`.
    pub fn get(&self, name: &str) -> Option<&F> {
        self.definitions.get(name)
    }

    /// Whether `name` has been defined.
    pub fn is_defined(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// All defined names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry has no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    let valid = name.contains('-')
        && name.starts_with(|c: char| c.is_ascii_lowercase())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(RegistryError::InvalidName(name.to_owned()))
    }
}
