//! Options and the option list arena.
//!
//! A [`ListOption`] is the unit of selection. Options live in an
//! [`OptionList`], an arena keyed by [`OptionId`] plus the ordered child
//! sequence of the host. The arena hands out stable ids: an id stays valid
//! while its option is in the list and becomes stale once it is removed,
//! which the controller detects by re-querying rather than trusting a stored
//! reference.
//!
//! `selected` and `focused` are readable by anyone but writable only from
//! inside this crate. The option list controller is their single writer.

use std::fmt;

use slotmap::{new_key_type, SlotMap};

use horizon_listbox_core::{AttributeKind, AttributeSpec, AttributeTable};

use crate::error::{ListboxError, Result};

new_key_type! {
    /// A stable handle to an option in an [`OptionList`].
    ///
    /// The handle is opaque to the controller. It becomes stale when the
    /// option is removed from its list.
    pub struct OptionId;
}

/// Reflected attributes of an option element.
///
/// `selected` is deliberately absent: selection is owned by the controller.
pub static OPTION_ATTRIBUTES: AttributeTable = AttributeTable::new(&[
    AttributeSpec::new("value", "value", AttributeKind::OptionalString),
    AttributeSpec::new("label", "label", AttributeKind::String),
    AttributeSpec::new("disabled", "disabled", AttributeKind::Boolean),
    AttributeSpec::new("hidden", "hidden", AttributeKind::Boolean),
]);

/// A selectable option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOption {
    value: Option<String>,
    label: String,
    selected: bool,
    focused: bool,
    disabled: bool,
    hidden: bool,
}

impl ListOption {
    /// Create an option with a label and no value.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Create an option whose label and value are the same text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: Some(text.clone()),
            label: text,
            ..Self::default()
        }
    }

    /// Set the submitted value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Mark the option as disabled.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark the option as hidden.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Set the initial selection state, as authored in markup.
    ///
    /// Once the option is part of a list, only the controller changes it.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// The logical value submitted with a form, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the option is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the option has virtual focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the option is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the option is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

/// Custom filter excluding options from the eligible sequence.
///
/// Returns `true` for options that should be skipped.
pub type SkipPredicate = Box<dyn Fn(OptionId, &ListOption) -> bool + Send + Sync>;

/// The options of one host, in child order.
#[derive(Default)]
pub struct OptionList {
    options: SlotMap<OptionId, ListOption>,
    order: Vec<OptionId>,
    skip: Option<SkipPredicate>,
}

impl fmt::Debug for OptionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionList")
            .field("options", &self.order.iter().map(|id| &self.options[*id]).collect::<Vec<_>>())
            .field("skip", &self.skip.is_some())
            .finish()
    }
}

impl OptionList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option and return its id.
    pub fn push(&mut self, option: ListOption) -> OptionId {
        let id = self.options.insert(option);
        self.order.push(id);
        id
    }

    /// Insert an option at `index` in child order.
    ///
    /// An index past the end appends.
    pub fn insert_at(&mut self, index: usize, option: ListOption) -> OptionId {
        let id = self.options.insert(option);
        let index = index.min(self.order.len());
        self.order.insert(index, id);
        id
    }

    /// Remove an option. Its id becomes stale.
    pub fn remove(&mut self, id: OptionId) -> Option<ListOption> {
        let option = self.options.remove(id)?;
        self.order.retain(|existing| *existing != id);
        Some(option)
    }

    /// Get an option by id.
    pub fn get(&self, id: OptionId) -> Option<&ListOption> {
        self.options.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: OptionId) -> Option<&mut ListOption> {
        self.options.get_mut(id)
    }

    /// Whether `id` refers to an option in this list, eligible or not.
    pub fn contains_id(&self, id: OptionId) -> bool {
        self.options.contains_key(id)
    }

    /// All option ids in child order, including ineligible ones.
    pub fn children(&self) -> &[OptionId] {
        &self.order
    }

    /// Number of options, including ineligible ones.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the list has no options.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Find the first option in child order with the given value.
    pub fn find_by_value(&self, value: &str) -> Option<OptionId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.options[*id].value() == Some(value))
    }

    /// Install a skip predicate, replacing any previous one.
    pub fn set_skip<F>(&mut self, skip: F)
    where
        F: Fn(OptionId, &ListOption) -> bool + Send + Sync + 'static,
    {
        self.skip = Some(Box::new(skip));
    }

    /// Remove the skip predicate.
    pub fn clear_skip(&mut self) {
        self.skip = None;
    }

    /// Whether the skip predicate excludes this option.
    pub(crate) fn is_skipped(&self, id: OptionId, option: &ListOption) -> bool {
        self.skip.as_ref().is_some_and(|skip| skip(id, option))
    }

    /// Enable or disable an option.
    pub fn set_disabled(&mut self, id: OptionId, disabled: bool) -> Result<()> {
        self.option_entry(id)?.disabled = disabled;
        Ok(())
    }

    /// Show or hide an option.
    pub fn set_hidden(&mut self, id: OptionId, hidden: bool) -> Result<()> {
        self.option_entry(id)?.hidden = hidden;
        Ok(())
    }

    /// Change an option's value.
    pub fn set_value(&mut self, id: OptionId, value: Option<String>) -> Result<()> {
        self.option_entry(id)?.value = value;
        Ok(())
    }

    /// Change an option's label.
    pub fn set_label(&mut self, id: OptionId, label: impl Into<String>) -> Result<()> {
        self.option_entry(id)?.label = label.into();
        Ok(())
    }

    /// Reflect an attribute change on an option element.
    pub fn set_attribute(&mut self, id: OptionId, name: &str, raw: Option<&str>) -> Result<()> {
        let (spec, value) = OPTION_ATTRIBUTES.coerce(name, raw)?;
        let option = self.option_entry(id)?;
        match spec.property {
            "value" => option.value = value.into_text(),
            "label" => option.label = value.into_text().unwrap_or_default(),
            "disabled" => option.disabled = value.as_bool().unwrap_or_default(),
            "hidden" => option.hidden = value.as_bool().unwrap_or_default(),
            _ => {}
        }
        Ok(())
    }

    fn option_entry(&mut self, id: OptionId) -> Result<&mut ListOption> {
        self.options.get_mut(id).ok_or(ListboxError::UnknownOption(id))
    }
}

impl FromIterator<ListOption> for OptionList {
    fn from_iter<I: IntoIterator<Item = ListOption>>(iter: I) -> Self {
        let mut list = Self::new();
        for option in iter {
            list.push(option);
        }
        list
    }
}

/// Typed capability check for "is this an option".
///
/// Event targets and path entries implement this so dispatch code can find
/// the option under the pointer without matching on element names.
pub trait OptionHandle {
    /// The option this handle refers to, if it refers to one.
    fn option_id(&self) -> Option<OptionId>;
}

impl OptionHandle for OptionId {
    fn option_id(&self) -> Option<OptionId> {
        Some(*self)
    }
}
