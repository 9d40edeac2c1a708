//! The listbox host component.
//!
//! [`Listbox`] is what an embedding UI talks to. It owns the options and an
//! [`OptionListController`], forwards input to the controller, and turns the
//! controller's signals into host-level [`ListboxEvent`]s:
//!
//! 1. one `Unselected` per option the selection deselected,
//! 2. `Selected` or `Unselected` for the target's final state,
//! 3. exactly one `Change` carrying every selected value.
//!
//! Focus moves become `FocusChange`. Events are delivered through
//! [`Listbox::events`] after each operation settles, and are also queued for
//! hosts that poll with [`Listbox::drain_events`].
//!
//! # Example
//!
//! ```
//! use horizon_listbox::{Key, KeyPressEvent, ListOption, Listbox, ListboxEvent};
//!
//! let mut listbox = Listbox::builder()
//!     .name("fruit")
//!     .options(["apple", "banana", "orange"].map(ListOption::with_text))
//!     .build();
//!
//! listbox.handle_key_press(&mut KeyPressEvent::plain(Key::ArrowDown));
//!
//! let events = listbox.drain_events();
//! assert!(events.contains(&ListboxEvent::Change { selected: vec!["apple".into()] }));
//! assert_eq!(listbox.form_value().as_single(), Some("apple"));
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use horizon_listbox_core::{AttributeKind, AttributeSpec, AttributeTable, ElementRegistry, Signal};

use crate::controller::{ControllerConfig, OptionListController};
use crate::error::{ListboxError, Result};
use crate::events::{KeyPressEvent, PointerEvent};
use crate::option::{ListOption, OptionId, OptionList};
use crate::selection::{SelectOutcome, SelectionMode, SelectionResult};

/// Element name of the listbox host.
pub const LISTBOX_ELEMENT: &str = "hl-listbox";

/// Element name of an option.
pub const OPTION_ELEMENT: &str = "hl-option";

/// Reflected attributes of the listbox host.
pub static LISTBOX_ATTRIBUTES: AttributeTable = AttributeTable::new(&[
    AttributeSpec::new("multiple", "multiple", AttributeKind::Boolean),
    AttributeSpec::new("name", "name", AttributeKind::OptionalString),
    AttributeSpec::new("required", "required", AttributeKind::Boolean),
]);

/// Host-level notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListboxEvent {
    /// An option became selected.
    Selected(OptionId),
    /// An option became unselected.
    Unselected(OptionId),
    /// The selection settled. Carries the values of all selected options.
    Change {
        /// Selected values in option order.
        selected: Vec<String>,
    },
    /// Virtual focus moved. `None` means focus was cleared.
    FocusChange(Option<OptionId>),
}

impl ListboxEvent {
    fn from_selection(result: &SelectionResult) -> Vec<Self> {
        let mut events: Vec<Self> = result
            .items_to_deselect
            .iter()
            .map(|&id| Self::Unselected(id))
            .collect();
        if let Some(id) = result.item {
            events.push(if result.selected {
                Self::Selected(id)
            } else {
                Self::Unselected(id)
            });
        }
        events.push(Self::Change {
            selected: result.selected_values.clone(),
        });
        events
    }
}

/// The value a listbox contributes to form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// Single-select: the selected value, if any.
    Single(Option<String>),
    /// Multi-select: every selected value.
    Multiple(Vec<String>),
}

impl FormValue {
    /// The single value, if this is a single-select value.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => value.as_deref(),
            Self::Multiple(_) => None,
        }
    }

    /// All values as a slice-like list.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => value.as_deref().into_iter().collect(),
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(value) => value.is_none(),
            Self::Multiple(values) => values.is_empty(),
        }
    }
}

/// Listbox configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxConfig {
    /// Selection mode.
    pub mode: SelectionMode,
    /// Form field name.
    pub name: Option<String>,
    /// Whether a selection is required for the form to be valid.
    pub required: bool,
    /// Whether events are queued for [`Listbox::drain_events`].
    ///
    /// Hosts that only subscribe to [`Listbox::events`] can turn this off so
    /// the queue does not grow.
    pub record_events: bool,
}

impl Default for ListboxConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::default(),
            name: None,
            required: false,
            record_events: true,
        }
    }
}

/// Builder for [`Listbox`].
#[derive(Debug, Default)]
pub struct ListboxBuilder {
    config: ListboxConfig,
    options: Vec<ListOption>,
}

impl ListboxBuilder {
    /// Choose multi-toggle (`true`) or single-exclusive (`false`) selection.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.config.mode = SelectionMode::from_multiple(multiple);
        self
    }

    /// Set the form field name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// Require a selection for the form to be valid.
    pub fn required(mut self, required: bool) -> Self {
        self.config.required = required;
        self
    }

    /// Enable or disable the polling queue.
    pub fn record_events(mut self, record: bool) -> Self {
        self.config.record_events = record;
        self
    }

    /// Add an option.
    pub fn option(mut self, option: ListOption) -> Self {
        self.options.push(option);
        self
    }

    /// Add several options.
    pub fn options(mut self, options: impl IntoIterator<Item = ListOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Build the listbox.
    ///
    /// In single-exclusive mode, if several options were authored selected
    /// only the first eligible one keeps its selection. No events are
    /// reported for this normalization.
    pub fn build(self) -> Listbox {
        let mut listbox = Listbox::with_config(self.config);
        for option in self.options {
            listbox.items.push(option);
        }
        let Listbox { controller, items, .. } = &mut listbox;
        controller.selection_changed.set_blocked(true);
        controller.normalize_selection(items);
        controller.selection_changed.set_blocked(false);
        listbox
    }
}

/// A listbox: options, an interaction controller and form semantics.
pub struct Listbox {
    items: OptionList,
    controller: OptionListController,
    name: Option<String>,
    required: bool,
    record_events: bool,
    pending: Arc<Mutex<Vec<ListboxEvent>>>,
    queue: Vec<ListboxEvent>,

    /// Emitted for every host-level event, in order, once an operation has
    /// settled.
    pub events: Signal<ListboxEvent>,
}

impl std::fmt::Debug for Listbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listbox")
            .field("mode", &self.mode())
            .field("name", &self.name)
            .field("required", &self.required)
            .field("items", &self.items)
            .field("queued_events", &self.queue.len())
            .finish()
    }
}

impl Default for Listbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Listbox {
    /// Create an empty single-select listbox.
    pub fn new() -> Self {
        Self::with_config(ListboxConfig::default())
    }

    /// Create a builder.
    pub fn builder() -> ListboxBuilder {
        ListboxBuilder::default()
    }

    /// Create an empty listbox with the given configuration.
    pub fn with_config(config: ListboxConfig) -> Self {
        let controller = OptionListController::new(ControllerConfig::new().with_mode(config.mode));
        let pending = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&pending);
        controller.selection_changed.connect(move |result: &SelectionResult| {
            sink.lock().extend(ListboxEvent::from_selection(result));
        });
        let sink = Arc::clone(&pending);
        controller.focus_changed.connect(move |&id: &Option<OptionId>| {
            sink.lock().push(ListboxEvent::FocusChange(id));
        });

        Self {
            items: OptionList::new(),
            controller,
            name: config.name,
            required: config.required,
            record_events: config.record_events,
            pending,
            queue: Vec::new(),
            events: Signal::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The options, in child order.
    pub fn items(&self) -> &OptionList {
        &self.items
    }

    /// Look up an option.
    pub fn option(&self, id: OptionId) -> Option<&ListOption> {
        self.items.get(id)
    }

    /// The interaction controller.
    pub fn controller(&self) -> &OptionListController {
        &self.controller
    }

    /// The selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.controller.mode()
    }

    /// The focused option, if still eligible.
    pub fn focused_item(&self) -> Option<OptionId> {
        self.controller.focused_item(&self.items)
    }

    /// Selected eligible options.
    pub fn selected_items(&self) -> Vec<OptionId> {
        self.controller.selected_items(&self.items)
    }

    /// Values of the selected eligible options.
    pub fn selected_values(&self) -> Vec<String> {
        self.controller.selected_values(&self.items)
    }

    /// Take the events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<ListboxEvent> {
        std::mem::take(&mut self.queue)
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Append an option.
    ///
    /// In single-exclusive mode an option added as selected does not replace
    /// an existing selection: the most recently selected option wins, or the
    /// first selected one in order if nothing was selected by the user.
    pub fn add_option(&mut self, option: ListOption) -> OptionId {
        let id = self.items.push(option);
        self.refresh();
        id
    }

    /// Insert an option at `index` in child order.
    pub fn insert_option(&mut self, index: usize, option: ListOption) -> OptionId {
        let id = self.items.insert_at(index, option);
        self.refresh();
        id
    }

    /// Remove an option.
    ///
    /// If it was focused, focus is dropped and a `FocusChange(None)` is
    /// reported.
    pub fn remove_option(&mut self, id: OptionId) -> Result<ListOption> {
        let option = self.items.remove(id).ok_or(ListboxError::UnknownOption(id))?;
        tracing::debug!(target: "horizon_listbox::host", ?id, "option removed");
        self.refresh();
        Ok(option)
    }

    /// Enable or disable an option.
    pub fn set_option_disabled(&mut self, id: OptionId, disabled: bool) -> Result<()> {
        self.items.set_disabled(id, disabled)?;
        self.refresh();
        Ok(())
    }

    /// Show or hide an option.
    pub fn set_option_hidden(&mut self, id: OptionId, hidden: bool) -> Result<()> {
        self.items.set_hidden(id, hidden)?;
        self.refresh();
        Ok(())
    }

    /// Reflect an attribute change on one of the options.
    pub fn set_option_attribute(&mut self, id: OptionId, name: &str, raw: Option<&str>) -> Result<()> {
        self.items.set_attribute(id, name, raw)?;
        self.refresh();
        Ok(())
    }

    /// Exclude options matching `skip` from navigation and selection.
    pub fn set_filter<F>(&mut self, skip: F)
    where
        F: Fn(OptionId, &ListOption) -> bool + Send + Sync + 'static,
    {
        self.items.set_skip(skip);
        self.refresh();
    }

    /// Remove the filter.
    pub fn clear_filter(&mut self) {
        self.items.clear_skip();
        self.refresh();
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// Reflect an attribute change on the listbox itself.
    pub fn set_attribute(&mut self, name: &str, raw: Option<&str>) -> Result<()> {
        let (spec, value) = LISTBOX_ATTRIBUTES.coerce(name, raw)?;
        tracing::debug!(target: "horizon_listbox::host", attribute = name, %value, "listbox attribute changed");
        match spec.property {
            "multiple" => {
                let mode = SelectionMode::from_multiple(value.as_bool().unwrap_or_default());
                self.dispatch(|controller, items| controller.set_mode(items, mode));
            }
            "name" => self.name = value.into_text(),
            "required" => self.required = value.as_bool().unwrap_or_default(),
            _ => {}
        }
        Ok(())
    }

    /// The current attribute form of a reflected property.
    pub fn attribute(&self, name: &str) -> Option<String> {
        let spec = LISTBOX_ATTRIBUTES.spec(name)?;
        let value = match spec.property {
            "multiple" => spec.coerce(self.mode().is_multiple().then_some("")),
            "name" => spec.coerce(self.name.as_deref()),
            "required" => spec.coerce(self.required.then_some("")),
            _ => return None,
        };
        value.to_attribute()
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Forward a key press.
    pub fn handle_key_press(&mut self, event: &mut KeyPressEvent) -> bool {
        self.dispatch(|controller, items| controller.handle_key_press(items, event))
    }

    /// Forward a pointer event.
    pub fn handle_pointer(&mut self, event: &mut PointerEvent) -> bool {
        self.dispatch(|controller, items| controller.handle_pointer(items, event))
    }

    /// Focus an option.
    pub fn set_focus(&mut self, id: Option<OptionId>) -> Option<OptionId> {
        self.dispatch(|controller, items| controller.set_focus(items, id))
    }

    /// Focus the first eligible option.
    pub fn focus_first(&mut self) -> Option<OptionId> {
        self.dispatch(|controller, items| controller.focus_first(items))
    }

    /// Focus the last eligible option.
    pub fn focus_last(&mut self) -> Option<OptionId> {
        self.dispatch(|controller, items| controller.focus_last(items))
    }

    /// Focus the next eligible option, wrapping.
    pub fn focus_next(&mut self) -> Option<OptionId> {
        self.dispatch(|controller, items| controller.focus_next(items))
    }

    /// Focus the previous eligible option, wrapping.
    pub fn focus_prev(&mut self) -> Option<OptionId> {
        self.dispatch(|controller, items| controller.focus_prev(items))
    }

    /// Clear virtual focus.
    pub fn focus_blur(&mut self) {
        self.dispatch(|controller, items| controller.focus_blur(items));
    }

    /// Select an option according to the selection mode.
    pub fn select(&mut self, id: Option<OptionId>) -> SelectOutcome {
        self.dispatch(|controller, items| controller.select(items, id))
    }

    /// Select the first option carrying `value`.
    pub fn select_by_value(&mut self, value: &str) -> SelectOutcome {
        let id = self.items.find_by_value(value);
        if id.is_none() {
            tracing::debug!(target: "horizon_listbox::host", value, "no option with this value");
        }
        self.select(id)
    }

    /// Select the focused option.
    pub fn select_focused(&mut self) -> SelectOutcome {
        self.dispatch(|controller, items| controller.select_focused(items))
    }

    /// Focus and select the first eligible option.
    pub fn select_first(&mut self) -> SelectOutcome {
        self.dispatch(|controller, items| controller.select_first(items))
    }

    /// Focus and select the last eligible option.
    pub fn select_last(&mut self) -> SelectOutcome {
        self.dispatch(|controller, items| controller.select_last(items))
    }

    /// Focus and select the next option.
    pub fn select_next(&mut self) -> SelectOutcome {
        self.dispatch(|controller, items| controller.select_next(items))
    }

    /// Focus and select the previous option.
    pub fn select_prev(&mut self) -> SelectOutcome {
        self.dispatch(|controller, items| controller.select_prev(items))
    }

    /// Deselect everything.
    pub fn deselect_all(&mut self) -> Option<SelectionResult> {
        self.dispatch(|controller, items| controller.deselect_all(items))
    }

    // =========================================================================
    // Accessibility
    // =========================================================================

    /// The option to announce as active, mirroring `aria-activedescendant`.
    pub fn aria_activedescendant(&self) -> Option<OptionId> {
        self.focused_item()
    }

    /// Mirrors `aria-multiselectable`.
    pub fn aria_multiselectable(&self) -> bool {
        self.mode().is_multiple()
    }

    /// Mirrors `aria-selected` on an option. Unknown ids report `false`.
    pub fn aria_selected(&self, id: OptionId) -> bool {
        self.items.get(id).is_some_and(ListOption::is_selected)
    }

    // =========================================================================
    // Form
    // =========================================================================

    /// The form field name.
    pub fn form_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether a selection is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The value submitted with a form.
    pub fn form_value(&self) -> FormValue {
        let values = self.selected_values();
        match self.mode() {
            SelectionMode::SingleExclusive => FormValue::Single(values.into_iter().next()),
            SelectionMode::MultiToggle => FormValue::Multiple(values),
        }
    }

    /// Constraint validation: a required listbox needs a selection.
    pub fn is_valid(&self) -> bool {
        !self.required || !self.selected_items().is_empty()
    }

    /// Reset the form control: clear the selection and focus.
    pub fn form_reset(&mut self) {
        tracing::debug!(target: "horizon_listbox::host", "form reset");
        self.dispatch(|controller, items| {
            controller.deselect_all(items);
            controller.focus_blur(items);
        });
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Settle controller state after the option set or eligibility changed.
    ///
    /// Drops a focus that became ineligible, then restores single selection
    /// for options that became eligible again while still flagged selected.
    fn refresh(&mut self) {
        self.dispatch(|controller, items| {
            controller.revalidate(items);
            controller.normalize_selection(items);
        });
    }

    fn dispatch<R>(&mut self, action: impl FnOnce(&mut OptionListController, &mut OptionList) -> R) -> R {
        let result = action(&mut self.controller, &mut self.items);
        self.flush();
        result
    }

    fn flush(&mut self) {
        let events = std::mem::take(&mut *self.pending.lock());
        if events.is_empty() {
            return;
        }
        tracing::trace!(target: "horizon_listbox::host", count = events.len(), "delivering events");
        for event in events {
            self.events.emit(event.clone());
            if self.record_events {
                self.queue.push(event);
            }
        }
    }
}

static_assertions::assert_impl_all!(Listbox: Send, Sync);

/// An element created by a registry factory.
#[derive(Debug)]
pub enum Element {
    /// A listbox host.
    Listbox(Box<Listbox>),
    /// A standalone option, not yet part of a listbox.
    Option(ListOption),
}

impl Element {
    /// The element name this element was registered under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Listbox(_) => LISTBOX_ELEMENT,
            Self::Option(_) => OPTION_ELEMENT,
        }
    }
}

/// Factory stored in an [`ElementRegistry`].
pub type ElementFactory = fn() -> Element;

/// Define the listbox and option elements.
///
/// Safe to call more than once; existing definitions are kept.
pub fn register_defaults(registry: &mut ElementRegistry<ElementFactory>) -> Result<()> {
    registry.define(LISTBOX_ELEMENT, || Element::Listbox(Box::new(Listbox::new())))?;
    registry.define(OPTION_ELEMENT, || Element::Option(ListOption::default()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Key, PointerEventKind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fruit(multiple: bool) -> (Listbox, Vec<OptionId>) {
        let listbox = Listbox::builder()
            .multiple(multiple)
            .options(["apple", "banana", "orange"].map(ListOption::with_text))
            .build();
        let ids = listbox.items().children().to_vec();
        (listbox, ids)
    }

    fn without_focus(events: Vec<ListboxEvent>) -> Vec<ListboxEvent> {
        events
            .into_iter()
            .filter(|event| !matches!(event, ListboxEvent::FocusChange(_)))
            .collect()
    }

    #[test]
    fn test_select_event_order() {
        let (mut listbox, ids) = fruit(false);
        listbox.select(Some(ids[0]));
        listbox.drain_events();

        listbox.select(Some(ids[1]));
        assert_eq!(
            listbox.drain_events(),
            vec![
                ListboxEvent::FocusChange(Some(ids[1])),
                ListboxEvent::Unselected(ids[0]),
                ListboxEvent::Selected(ids[1]),
                ListboxEvent::Change {
                    selected: vec!["banana".into()]
                },
            ]
        );
    }

    #[test]
    fn test_multi_toggle_off_reports_unselected() {
        let (mut listbox, ids) = fruit(true);
        listbox.select(Some(ids[2]));
        listbox.select(Some(ids[2]));

        assert_eq!(
            without_focus(listbox.drain_events()),
            vec![
                ListboxEvent::Selected(ids[2]),
                ListboxEvent::Change {
                    selected: vec!["orange".into()]
                },
                ListboxEvent::Unselected(ids[2]),
                ListboxEvent::Change { selected: vec![] },
            ]
        );
    }

    #[test]
    fn test_events_signal_matches_queue() {
        let (mut listbox, _) = fruit(false);
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        listbox.events.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        listbox.handle_key_press(&mut KeyPressEvent::plain(Key::ArrowDown));
        let queued = listbox.drain_events();
        assert!(!queued.is_empty());
        assert_eq!(count.load(Ordering::SeqCst), queued.len());
    }

    #[test]
    fn test_record_events_off() {
        let mut listbox = Listbox::builder()
            .record_events(false)
            .option(ListOption::with_text("apple"))
            .build();
        listbox.select_next();
        assert!(listbox.drain_events().is_empty());
        assert_eq!(listbox.selected_values(), vec!["apple"]);
    }

    #[test]
    fn test_builder_normalizes_single_selection() {
        let mut listbox = Listbox::builder()
            .option(ListOption::with_text("apple").with_selected(true))
            .option(ListOption::with_text("banana").with_selected(true))
            .build();
        assert_eq!(listbox.selected_values(), vec!["apple"]);
        assert!(listbox.drain_events().is_empty());
    }

    #[test]
    fn test_add_selected_option_in_single_mode() {
        let (mut listbox, _) = fruit(false);
        listbox.select_by_value("banana");
        listbox.add_option(ListOption::with_text("kiwi").with_selected(true));
        assert_eq!(listbox.selected_values(), vec!["banana"]);
    }

    #[test]
    fn test_remove_focused_option_reports_blur() {
        let (mut listbox, ids) = fruit(false);
        listbox.set_focus(Some(ids[1]));
        listbox.drain_events();

        listbox.remove_option(ids[1]).unwrap();
        assert_eq!(listbox.drain_events(), vec![ListboxEvent::FocusChange(None)]);
        assert_eq!(listbox.aria_activedescendant(), None);
        assert!(matches!(
            listbox.remove_option(ids[1]),
            Err(ListboxError::UnknownOption(_))
        ));
    }

    #[test]
    fn test_disabling_focused_option_reports_blur() {
        let (mut listbox, ids) = fruit(true);
        listbox.focus_first();
        listbox.drain_events();

        listbox.set_option_attribute(ids[0], "disabled", Some("")).unwrap();
        assert_eq!(listbox.drain_events(), vec![ListboxEvent::FocusChange(None)]);
        assert_eq!(listbox.focus_next(), Some(ids[1]));
    }

    #[test]
    fn test_multiple_attribute_switches_mode() {
        let (mut listbox, ids) = fruit(true);
        listbox.select(Some(ids[0]));
        listbox.select(Some(ids[2]));
        assert!(listbox.aria_multiselectable());
        assert_eq!(listbox.attribute("multiple").as_deref(), Some(""));

        listbox.set_attribute("multiple", None).unwrap();
        assert!(!listbox.aria_multiselectable());
        assert_eq!(listbox.attribute("multiple"), None);
        assert_eq!(listbox.selected_values(), vec!["apple"]);
        assert_eq!(listbox.form_value(), FormValue::Single(Some("apple".into())));
    }

    #[test]
    fn test_name_and_required_attributes() {
        let (mut listbox, _) = fruit(false);
        listbox.set_attribute("name", Some("fruit")).unwrap();
        listbox.set_attribute("required", Some("")).unwrap();

        assert_eq!(listbox.form_name(), Some("fruit"));
        assert_eq!(listbox.attribute("name").as_deref(), Some("fruit"));
        assert!(listbox.is_required());
        assert!(!listbox.is_valid());

        listbox.select_by_value("orange");
        assert!(listbox.is_valid());

        assert!(matches!(
            listbox.set_attribute("size", Some("4")),
            Err(ListboxError::Attribute(_))
        ));
    }

    #[test]
    fn test_form_value_multiple() {
        let (mut listbox, ids) = fruit(true);
        assert!(listbox.form_value().is_empty());
        listbox.select(Some(ids[2]));
        listbox.select(Some(ids[0]));
        assert_eq!(
            listbox.form_value(),
            FormValue::Multiple(vec!["apple".into(), "orange".into()])
        );
        assert_eq!(listbox.form_value().values(), vec!["apple", "orange"]);
    }

    #[test]
    fn test_form_reset() {
        let (mut listbox, ids) = fruit(true);
        listbox.set_focus(Some(ids[1]));
        listbox.select_focused();
        listbox.drain_events();

        listbox.form_reset();
        assert!(listbox.selected_items().is_empty());
        assert_eq!(listbox.focused_item(), None);
        assert_eq!(
            listbox.drain_events(),
            vec![
                ListboxEvent::Unselected(ids[1]),
                ListboxEvent::Change { selected: vec![] },
                ListboxEvent::FocusChange(None),
            ]
        );
    }

    #[test]
    fn test_aria_selected() {
        let (mut listbox, ids) = fruit(false);
        listbox.select(Some(ids[1]));
        assert!(listbox.aria_selected(ids[1]));
        assert!(!listbox.aria_selected(ids[0]));
        assert_eq!(listbox.aria_activedescendant(), Some(ids[1]));
    }

    #[test]
    fn test_select_first_and_last() {
        let (mut listbox, ids) = fruit(false);
        assert!(listbox.select_last().is_applied());
        assert_eq!(listbox.selected_items(), vec![ids[2]]);
        assert!(listbox.select_first().is_applied());
        assert_eq!(listbox.selected_items(), vec![ids[0]]);
        assert_eq!(listbox.focused_item(), Some(ids[0]));
    }

    #[test]
    fn test_builder_blocks_normalization_events() {
        let mut listbox = Listbox::builder()
            .option(ListOption::with_text("apple").with_selected(true))
            .option(ListOption::with_text("banana").with_selected(true))
            .build();
        assert!(listbox.drain_events().is_empty());
        assert_eq!(listbox.selected_values(), vec!["apple"]);
        assert!(!listbox.controller().selection_changed.is_blocked());

        listbox.select_by_value("banana");
        assert!(listbox
            .drain_events()
            .contains(&ListboxEvent::Change { selected: vec!["banana".into()] }));
    }

    #[test]
    fn test_select_by_unknown_value() {
        let (mut listbox, _) = fruit(false);
        assert_eq!(listbox.select_by_value("mango"), SelectOutcome::Ignored);
        assert!(listbox.drain_events().is_empty());
    }

    #[test]
    fn test_filter_excludes_from_navigation() {
        let (mut listbox, ids) = fruit(false);
        listbox.set_filter(|_, option| option.label().starts_with('b'));
        assert_eq!(listbox.focus_next(), Some(ids[0]));
        assert_eq!(listbox.focus_next(), Some(ids[2]));

        listbox.clear_filter();
        assert_eq!(listbox.focus_prev(), Some(ids[1]));
    }

    #[test]
    fn test_pointer_through_host() {
        let (mut listbox, ids) = fruit(false);
        let mut click = PointerEvent::on_option(PointerEventKind::Click, ids[2]);
        assert!(listbox.handle_pointer(&mut click));
        assert_eq!(listbox.selected_values(), vec!["orange"]);
    }

    #[test]
    fn test_register_defaults_is_idempotent() {
        let mut registry: ElementRegistry<ElementFactory> = ElementRegistry::new();
        register_defaults(&mut registry).unwrap();
        register_defaults(&mut registry).unwrap();

        assert_eq!(registry.len(), 2);
        let listbox = (registry.get(LISTBOX_ELEMENT).unwrap())();
        assert_eq!(listbox.name(), LISTBOX_ELEMENT);
        let option = (registry.get(OPTION_ELEMENT).unwrap())();
        assert!(matches!(option, Element::Option(_)));
    }
}
