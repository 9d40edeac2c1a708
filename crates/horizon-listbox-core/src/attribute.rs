//! Declarative attribute reflection.
//!
//! Elements describe their reflected attributes as a static table of
//! [`AttributeSpec`] entries. A single dispatch entry point,
//! [`AttributeTable::coerce`], looks up the attribute, applies the coercion
//! rule for its [`AttributeKind`], and hands back a typed [`AttributeValue`]
//! that the element applies to the matching property.
//!
//! # Example
//!
//! ```
//! use horizon_listbox_core::attribute::{AttributeKind, AttributeSpec, AttributeTable};
//!
//! static TABLE: AttributeTable = AttributeTable::new(&[
//!     AttributeSpec::new("multiple", "multiple", AttributeKind::Boolean),
//!     AttributeSpec::new("name", "name", AttributeKind::OptionalString),
//! ]);
//!
//! let (spec, value) = TABLE.coerce("multiple", Some("")).unwrap();
//! assert_eq!(spec.property, "multiple");
//! assert_eq!(value.as_bool(), Some(true));
//! ```

use std::fmt;

use crate::error::AttributeError;

/// Coercion rule applied to a raw attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Presence means `true`, absence means `false`. The value text is ignored.
    Boolean,
    /// The raw text, or the empty string when absent.
    String,
    /// The raw text, or `None` when absent.
    OptionalString,
}

/// Mapping between one attribute name and the property it reflects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    /// The attribute name as it appears on the element.
    pub name: &'static str,
    /// The property the attribute reflects to.
    pub property: &'static str,
    /// How raw values are coerced.
    pub kind: AttributeKind,
}

impl AttributeSpec {
    /// Create a new attribute mapping.
    pub const fn new(name: &'static str, property: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            property,
            kind,
        }
    }

    /// Coerce a raw attribute value according to this mapping's kind.
    pub fn coerce(&self, raw: Option<&str>) -> AttributeValue {
        match self.kind {
            AttributeKind::Boolean => AttributeValue::Bool(raw.is_some()),
            AttributeKind::String => AttributeValue::Text(Some(raw.unwrap_or_default().to_owned())),
            AttributeKind::OptionalString => AttributeValue::Text(raw.map(str::to_owned)),
        }
    }
}

/// A coerced attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A boolean property value.
    Bool(bool),
    /// A textual property value, `None` when the attribute is absent.
    Text(Option<String>),
}

impl AttributeValue {
    /// Returns the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Returns the text value, if this is present text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => value.as_deref(),
            Self::Bool(_) => None,
        }
    }

    /// Consumes the value and returns the owned text, if any.
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(value) => value,
            Self::Bool(_) => None,
        }
    }

    /// Render the value back to its attribute form.
    ///
    /// `None` means the attribute should be removed from the element.
    pub fn to_attribute(&self) -> Option<String> {
        match self {
            Self::Bool(true) => Some(String::new()),
            Self::Bool(false) => None,
            Self::Text(value) => value.clone(),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Text(Some(value)) => write!(f, "{value:?}"),
            Self::Text(None) => write!(f, "(absent)"),
        }
    }
}

/// A static reflection table for one element type.
#[derive(Debug, Clone, Copy)]
pub struct AttributeTable {
    specs: &'static [AttributeSpec],
}

impl AttributeTable {
    /// Create a table from a static slice of mappings.
    pub const fn new(specs: &'static [AttributeSpec]) -> Self {
        Self { specs }
    }

    /// Look up the mapping for an attribute name.
    pub fn spec(&self, name: &str) -> Option<&'static AttributeSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Iterate over all mappings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static AttributeSpec> {
        self.specs.iter()
    }

    /// Coerce a raw attribute change into a typed property value.
    ///
    /// This is the single dispatch function all reflected attributes go
    /// through. Unknown names are reported as [`AttributeError::Unknown`].
    pub fn coerce(
        &self,
        name: &str,
        raw: Option<&str>,
    ) -> Result<(&'static AttributeSpec, AttributeValue), AttributeError> {
        let spec = self.spec(name).ok_or_else(|| {
            crate::listbox_debug!(attribute = name, "attribute not in reflection table");
            AttributeError::unknown(name)
        })?;
        let value = spec.coerce(raw);
        tracing::trace!(target: "horizon_listbox_core::attribute", attribute = name, property = spec.property, %value, "attribute reflected");
        Ok((spec, value))
    }
}
