//! The option list interaction controller.
//!
//! [`OptionListController`] turns a host and its options into a keyboard
//! navigable, single- or multi-select list. It owns the navigation, virtual
//! focus and selection algorithms; the options themselves stay with the
//! [`ItemProvider`] and are passed into every call.
//!
//! # Virtual focus
//!
//! Focus here is a highlight tracked by the controller. Real input focus
//! stays on the host. At most one eligible option has `focused == true`.
//!
//! # Re-validation
//!
//! Every operation starts by querying the provider. If the remembered focused
//! option has become ineligible (removed, hidden, disabled, skipped) the
//! controller clears its flag, forgets it, emits `focus_changed(None)` and
//! then carries on as if nothing was focused. It never refocuses elsewhere on
//! its own.
//!
//! # Failure model
//!
//! Nothing here returns an error or panics on bad input:
//!
//! - `None` operands are ignored.
//! - Selecting an option outside the eligible sequence is logged at `error`
//!   and rejected.
//! - Selecting a disabled option is logged at `warn` and rejected.
//! - Navigation over an empty sequence does nothing and returns `None`.
//!
//! # Example
//!
//! ```
//! use horizon_listbox::{ControllerConfig, ListOption, OptionList, OptionListController};
//!
//! let mut items: OptionList = ["apple", "banana", "orange"]
//!     .into_iter()
//!     .map(ListOption::with_text)
//!     .collect();
//! let mut controller = OptionListController::new(ControllerConfig::default());
//!
//! controller.select_next(&mut items);
//! controller.select_next(&mut items);
//! assert_eq!(controller.selected_values(&items), vec!["banana"]);
//! ```

use horizon_listbox_core::logging::span_names;
use horizon_listbox_core::Signal;

use crate::option::{ListOption, OptionId};
use crate::provider::ItemProvider;
use crate::selection::{RejectReason, SelectOutcome, SelectionMode, SelectionResult};

/// Configuration for an [`OptionListController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerConfig {
    /// The selection mode.
    pub mode: SelectionMode,
}

impl ControllerConfig {
    /// Default configuration: single-exclusive selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection mode.
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Observable focus state of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No option has virtual focus.
    Idle,
    /// The given eligible option has virtual focus.
    Focused(OptionId),
}

/// Navigation, focus and selection over an [`ItemProvider`]'s options.
///
/// # Signals
///
/// - `selection_changed`: Emitted once per applied selection, after mutation
/// - `focus_changed`: Emitted whenever virtual focus is set or cleared
#[derive(Debug)]
pub struct OptionListController {
    mode: SelectionMode,
    focused: Option<OptionId>,
    last_selected: Option<OptionId>,

    /// Emitted after a selection has been applied.
    pub selection_changed: Signal<SelectionResult>,

    /// Emitted when virtual focus moves. `None` means focus was cleared.
    pub focus_changed: Signal<Option<OptionId>>,
}

impl Default for OptionListController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl OptionListController {
    /// Creates a controller with the given configuration.
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            mode: config.mode,
            focused: None,
            last_selected: None,
            selection_changed: Signal::new(),
            focus_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Mode
    // =========================================================================

    /// Gets the selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Sets the selection mode.
    ///
    /// Switching to single-exclusive keeps one selected option and deselects
    /// the rest, see [`normalize_selection`](Self::normalize_selection).
    pub fn set_mode<P>(&mut self, items: &mut P, mode: SelectionMode) -> Option<SelectionResult>
    where
        P: ItemProvider + ?Sized,
    {
        self.mode = mode;
        self.normalize_selection(items)
    }

    /// Restore "at most one selected" in single-exclusive mode.
    ///
    /// Options that were selected while hidden, disabled or skipped keep their
    /// flag and can collide with the current selection once they become
    /// eligible again. The most recently selected option wins; without one,
    /// the first selected option in order wins. Emits `selection_changed` if
    /// anything was deselected. Does nothing in multi-toggle mode.
    pub fn normalize_selection<P>(&mut self, items: &mut P) -> Option<SelectionResult>
    where
        P: ItemProvider + ?Sized,
    {
        if self.mode.is_multiple() {
            return None;
        }
        let selected = self.selected_items(items);
        if selected.len() < 2 {
            return None;
        }
        let keep = self
            .last_selected
            .filter(|id| selected.contains(id))
            .unwrap_or(selected[0]);
        tracing::debug!(target: "horizon_listbox::controller", ?keep, count = selected.len(), "normalizing single selection");
        let extra: Vec<OptionId> = selected.into_iter().filter(|&id| id != keep).collect();
        self.deselect(items, extra)
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// The focused option, if it is still eligible.
    ///
    /// This is a read-only check; use [`revalidate`](Self::revalidate) to
    /// also drop a stale focus.
    pub fn focused_item<P>(&self, items: &P) -> Option<OptionId>
    where
        P: ItemProvider + ?Sized,
    {
        self.focused.filter(|&id| items.is_eligible(id))
    }

    /// Current focus state.
    pub fn state<P>(&self, items: &P) -> ControllerState
    where
        P: ItemProvider + ?Sized,
    {
        match self.focused_item(items) {
            Some(id) => ControllerState::Focused(id),
            None => ControllerState::Idle,
        }
    }

    /// Drop focus if the focused option is no longer eligible.
    ///
    /// Returns the focused option after re-validation.
    pub fn revalidate<P>(&mut self, items: &mut P) -> Option<OptionId>
    where
        P: ItemProvider + ?Sized,
    {
        let eligible = items.query();
        self.recover_focus(items, &eligible)
    }

    /// Give virtual focus to `item`.
    ///
    /// `None` is ignored. Options that are not eligible are refused.
    /// Returns the option that received focus.
    pub fn set_focus<P>(&mut self, items: &mut P, item: Option<OptionId>) -> Option<OptionId>
    where
        P: ItemProvider + ?Sized,
    {
        let id = item?;
        let eligible = items.query();
        self.recover_focus(items, &eligible);
        if !eligible.contains(&id) {
            tracing::warn!(target: "horizon_listbox::controller", ?id, "cannot focus an option that is disabled or not in the list");
            return None;
        }
        self.apply_focus(items, id);
        Some(id)
    }

    /// Clear virtual focus without navigating.
    pub fn focus_blur<P>(&mut self, items: &mut P)
    where
        P: ItemProvider + ?Sized,
    {
        if let Some(previous) = self.focused.take() {
            if let Some(option) = items.option_mut(previous) {
                option.set_focused(false);
            }
            tracing::trace!(target: "horizon_listbox::controller", ?previous, "focus cleared");
            self.focus_changed.emit(None);
        }
    }

    /// Focus the first eligible option.
    pub fn focus_first<P>(&mut self, items: &mut P) -> Option<OptionId>
    where
        P: ItemProvider + ?Sized,
    {
        self.focus_by(items, |eligible, _| eligible.first().copied())
    }

    /// Focus the last eligible option.
    pub fn focus_last<P>(&mut self, items: &mut P) -> Option<OptionId>
    where
        P: ItemProvider + ?Sized,
    {
        self.focus_by(items, |eligible, _| eligible.last().copied())
    }

    /// Focus the option after the focused one, wrapping to the first.
    ///
    /// Without a focused option this behaves like [`focus_first`](Self::focus_first).
    pub fn focus_next<P>(&mut self, items: &mut P) -> Option<OptionId>
    where
        P: ItemProvider + ?Sized,
    {
        self.focus_by(items, |eligible, current| match current {
            Some(index) => Some(eligible[(index + 1) % eligible.len()]),
            None => eligible.first().copied(),
        })
    }

    /// Focus the option before the focused one, wrapping to the last.
    ///
    /// Without a focused option this behaves like [`focus_last`](Self::focus_last).
    pub fn focus_prev<P>(&mut self, items: &mut P) -> Option<OptionId>
    where
        P: ItemProvider + ?Sized,
    {
        self.focus_by(items, |eligible, current| match current {
            Some(index) => Some(eligible[(index + eligible.len() - 1) % eligible.len()]),
            None => eligible.last().copied(),
        })
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select `item` according to the selection mode.
    ///
    /// In single-exclusive mode every other selected option is deselected,
    /// the target is selected and focus moves to it. In multi-toggle mode the
    /// target's state is flipped and focus stays where it is.
    pub fn select<P>(&mut self, items: &mut P, item: Option<OptionId>) -> SelectOutcome
    where
        P: ItemProvider + ?Sized,
    {
        let Some(id) = item else {
            return SelectOutcome::Ignored;
        };
        let _span = tracing::trace_span!(target: "horizon_listbox::controller", span_names::SELECT, ?id).entered();

        match items.option(id) {
            None => {
                tracing::error!(target: "horizon_listbox::controller", ?id, "cannot select an option that is not part of this list");
                return SelectOutcome::Rejected(RejectReason::Foreign);
            }
            Some(option) if option.is_disabled() => {
                tracing::warn!(target: "horizon_listbox::controller", ?id, "cannot select a disabled option");
                return SelectOutcome::Rejected(RejectReason::Disabled);
            }
            Some(_) => {}
        }

        let eligible = items.query();
        if !eligible.contains(&id) {
            tracing::error!(target: "horizon_listbox::controller", ?id, "cannot select an option that is not currently eligible");
            return SelectOutcome::Rejected(RejectReason::Foreign);
        }
        let focused = self.recover_focus(items, &eligible);

        let (items_to_deselect, should_toggle, new_focus_target) = match self.mode {
            SelectionMode::SingleExclusive => {
                let others: Vec<OptionId> = eligible
                    .iter()
                    .copied()
                    .filter(|&other| {
                        other != id && items.option(other).is_some_and(ListOption::is_selected)
                    })
                    .collect();
                (others, false, Some(id))
            }
            SelectionMode::MultiToggle => (Vec::new(), true, focused),
        };

        for &other in &items_to_deselect {
            if let Some(option) = items.option_mut(other) {
                option.set_selected(false);
            }
        }

        let selected = match items.option_mut(id) {
            Some(option) => {
                let selected = !should_toggle || !option.is_selected();
                option.set_selected(selected);
                selected
            }
            None => false,
        };
        if selected {
            self.last_selected = Some(id);
        } else if self.last_selected == Some(id) {
            self.last_selected = None;
        }

        if !should_toggle {
            if let Some(target) = new_focus_target {
                self.apply_focus(items, target);
            }
        }

        let result = SelectionResult {
            item: Some(id),
            items_to_deselect,
            should_toggle,
            new_focus_target,
            selected,
            selected_values: self.selected_values(items),
        };
        tracing::trace!(target: "horizon_listbox::controller", ?id, selected, deselected = result.items_to_deselect.len(), "selection applied");
        self.selection_changed.emit(result.clone());
        SelectOutcome::Applied(result)
    }

    /// Select the focused option.
    pub fn select_focused<P>(&mut self, items: &mut P) -> SelectOutcome
    where
        P: ItemProvider + ?Sized,
    {
        let focused = self.revalidate(items);
        self.select_target(items, focused)
    }

    /// Focus and select the first eligible option.
    pub fn select_first<P>(&mut self, items: &mut P) -> SelectOutcome
    where
        P: ItemProvider + ?Sized,
    {
        let target = self.focus_first(items);
        self.select_target(items, target)
    }

    /// Focus and select the last eligible option.
    pub fn select_last<P>(&mut self, items: &mut P) -> SelectOutcome
    where
        P: ItemProvider + ?Sized,
    {
        let target = self.focus_last(items);
        self.select_target(items, target)
    }

    /// Focus and select the next option, wrapping.
    pub fn select_next<P>(&mut self, items: &mut P) -> SelectOutcome
    where
        P: ItemProvider + ?Sized,
    {
        let target = self.focus_next(items);
        self.select_target(items, target)
    }

    /// Focus and select the previous option, wrapping.
    pub fn select_prev<P>(&mut self, items: &mut P) -> SelectOutcome
    where
        P: ItemProvider + ?Sized,
    {
        let target = self.focus_prev(items);
        self.select_target(items, target)
    }

    /// Deselect every selected eligible option.
    ///
    /// Emits one `selection_changed` without a target if anything changed.
    pub fn deselect_all<P>(&mut self, items: &mut P) -> Option<SelectionResult>
    where
        P: ItemProvider + ?Sized,
    {
        let selected = self.selected_items(items);
        self.deselect(items, selected)
    }

    // =========================================================================
    // Derived accessors
    // =========================================================================

    /// Selected eligible options, in eligible order.
    pub fn selected_items<P>(&self, items: &P) -> Vec<OptionId>
    where
        P: ItemProvider + ?Sized,
    {
        items
            .query()
            .into_iter()
            .filter(|&id| items.option(id).is_some_and(ListOption::is_selected))
            .collect()
    }

    /// Values of the selected eligible options, skipping options without one.
    pub fn selected_values<P>(&self, items: &P) -> Vec<String>
    where
        P: ItemProvider + ?Sized,
    {
        self.selected_items(items)
            .into_iter()
            .filter_map(|id| items.option(id).and_then(ListOption::value).map(str::to_owned))
            .collect()
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn select_target<P>(&mut self, items: &mut P, target: Option<OptionId>) -> SelectOutcome
    where
        P: ItemProvider + ?Sized,
    {
        match target {
            Some(id) => self.select(items, Some(id)),
            None => SelectOutcome::Ignored,
        }
    }

    fn focus_by<P, F>(&mut self, items: &mut P, pick: F) -> Option<OptionId>
    where
        P: ItemProvider + ?Sized,
        F: FnOnce(&[OptionId], Option<usize>) -> Option<OptionId>,
    {
        let eligible = items.query();
        let current = self
            .recover_focus(items, &eligible)
            .and_then(|id| eligible.iter().position(|&other| other == id));
        if eligible.is_empty() {
            tracing::trace!(target: "horizon_listbox::controller", "no eligible options to focus");
            return None;
        }
        let target = pick(&eligible, current)?;
        self.apply_focus(items, target);
        Some(target)
    }

    fn apply_focus<P>(&mut self, items: &mut P, id: OptionId)
    where
        P: ItemProvider + ?Sized,
    {
        if let Some(previous) = self.focused.replace(id) {
            if previous != id {
                if let Some(option) = items.option_mut(previous) {
                    option.set_focused(false);
                }
            }
        }
        if let Some(option) = items.option_mut(id) {
            option.set_focused(true);
        }
        tracing::trace!(target: "horizon_listbox::controller", ?id, "focus moved");
        self.focus_changed.emit(Some(id));
    }

    fn recover_focus<P>(&mut self, items: &mut P, eligible: &[OptionId]) -> Option<OptionId>
    where
        P: ItemProvider + ?Sized,
    {
        let id = self.focused?;
        if eligible.contains(&id) {
            return Some(id);
        }
        tracing::debug!(target: "horizon_listbox::controller", ?id, "focused option is no longer eligible, dropping focus");
        if let Some(option) = items.option_mut(id) {
            option.set_focused(false);
        }
        self.focused = None;
        self.focus_changed.emit(None);
        None
    }

    fn deselect<P>(&mut self, items: &mut P, ids: Vec<OptionId>) -> Option<SelectionResult>
    where
        P: ItemProvider + ?Sized,
    {
        if ids.is_empty() {
            return None;
        }
        for &id in &ids {
            if let Some(option) = items.option_mut(id) {
                option.set_selected(false);
            }
        }
        if self.last_selected.is_some_and(|id| ids.contains(&id)) {
            self.last_selected = None;
        }
        let result = SelectionResult {
            item: None,
            items_to_deselect: ids,
            should_toggle: false,
            new_focus_target: self.revalidate(items),
            selected: false,
            selected_values: self.selected_values(items),
        };
        tracing::trace!(target: "horizon_listbox::controller", deselected = result.items_to_deselect.len(), "selection cleared");
        self.selection_changed.emit(result.clone());
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::OptionList;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn fruit(selected: &[bool]) -> (OptionList, Vec<OptionId>) {
        let mut list = OptionList::new();
        let ids = ["apple", "banana", "orange"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                list.push(ListOption::with_text(name).with_selected(selected.get(i).copied().unwrap_or(false)))
            })
            .collect();
        (list, ids)
    }

    fn single() -> OptionListController {
        OptionListController::new(ControllerConfig::new())
    }

    fn multi() -> OptionListController {
        OptionListController::new(ControllerConfig::new().with_mode(SelectionMode::MultiToggle))
    }

    fn record_focus(controller: &OptionListController) -> Arc<Mutex<Vec<Option<OptionId>>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        controller.focus_changed.connect(move |&id| seen_clone.lock().push(id));
        seen
    }

    fn record_selection(controller: &OptionListController) -> Arc<Mutex<Vec<SelectionResult>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        controller.selection_changed.connect(move |result| seen_clone.lock().push(result.clone()));
        seen
    }

    #[test]
    fn test_controller_creation() {
        let controller = single();
        let (list, _) = fruit(&[]);
        assert_eq!(controller.mode(), SelectionMode::SingleExclusive);
        assert_eq!(controller.state(&list), ControllerState::Idle);
    }

    #[test]
    fn test_focus_next_wraps() {
        let (mut list, ids) = fruit(&[]);
        let mut controller = single();
        let seen = record_focus(&controller);

        for _ in 0..4 {
            controller.focus_next(&mut list);
        }

        let expected: Vec<_> = [0, 1, 2, 0].iter().map(|&i| Some(ids[i])).collect();
        assert_eq!(*seen.lock(), expected);
        assert!(list.get(ids[0]).unwrap().is_focused());
        assert!(!list.get(ids[2]).unwrap().is_focused());
    }

    #[test]
    fn test_focus_prev_wraps_and_starts_at_last() {
        let (mut list, ids) = fruit(&[]);
        let mut controller = single();

        assert_eq!(controller.focus_prev(&mut list), Some(ids[2]));
        assert_eq!(controller.focus_prev(&mut list), Some(ids[1]));
        assert_eq!(controller.focus_prev(&mut list), Some(ids[0]));
        assert_eq!(controller.focus_prev(&mut list), Some(ids[2]));
    }

    #[test]
    fn test_focus_next_cycles_back_for_every_length() {
        for n in 1..6 {
            let mut list: OptionList = (0..n).map(|i| ListOption::with_text(i.to_string())).collect();
            let mut controller = single();
            for start in 0..n {
                let origin = list.query()[start];
                controller.set_focus(&mut list, Some(origin));
                for _ in 0..n {
                    controller.focus_next(&mut list);
                }
                assert_eq!(controller.focused_item(&list), Some(origin));
            }
        }
    }

    #[test]
    fn test_prev_undoes_next() {
        let (mut list, ids) = fruit(&[]);
        let mut controller = single();
        for &id in &ids {
            controller.set_focus(&mut list, Some(id));
            controller.focus_next(&mut list);
            assert_eq!(controller.focus_prev(&mut list), Some(id));
        }
    }

    #[test]
    fn test_single_item_refocuses_itself() {
        let mut list = OptionList::new();
        let only = list.push(ListOption::with_text("only"));
        let mut controller = single();
        let seen = record_focus(&controller);

        controller.focus_next(&mut list);
        controller.focus_next(&mut list);
        controller.focus_prev(&mut list);

        assert_eq!(*seen.lock(), vec![Some(only); 3]);
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let mut list = OptionList::new();
        let mut controller = single();
        let seen = record_focus(&controller);

        assert_eq!(controller.focus_next(&mut list), None);
        assert_eq!(controller.focus_prev(&mut list), None);
        assert_eq!(controller.focus_first(&mut list), None);
        assert_eq!(controller.focus_last(&mut list), None);
        assert_eq!(controller.select_next(&mut list), SelectOutcome::Ignored);
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_focus_skips_disabled() {
        let (mut list, ids) = fruit(&[]);
        list.set_disabled(ids[1], true).unwrap();
        let mut controller = single();

        assert_eq!(controller.focus_next(&mut list), Some(ids[0]));
        assert_eq!(controller.focus_next(&mut list), Some(ids[2]));
        assert_eq!(controller.set_focus(&mut list, Some(ids[1])), None);
        assert_eq!(controller.focused_item(&list), Some(ids[2]));
    }

    #[test]
    fn test_set_focus_none_is_noop() {
        let (mut list, ids) = fruit(&[]);
        let mut controller = single();
        controller.set_focus(&mut list, Some(ids[0]));
        assert_eq!(controller.set_focus(&mut list, None), None);
        assert_eq!(controller.focused_item(&list), Some(ids[0]));
    }

    #[test]
    fn test_focus_blur() {
        let (mut list, ids) = fruit(&[]);
        let mut controller = single();
        let seen = record_focus(&controller);

        controller.focus_first(&mut list);
        controller.focus_blur(&mut list);
        controller.focus_blur(&mut list);

        assert_eq!(*seen.lock(), vec![Some(ids[0]), None]);
        assert!(!list.get(ids[0]).unwrap().is_focused());
        assert_eq!(controller.state(&list), ControllerState::Idle);
    }

    #[test]
    fn test_removed_focus_recovers() {
        let (mut list, ids) = fruit(&[]);
        let mut controller = single();
        let seen = record_focus(&controller);

        controller.set_focus(&mut list, Some(ids[1]));
        list.remove(ids[1]);
        assert_eq!(controller.state(&list), ControllerState::Idle);

        assert_eq!(controller.focus_next(&mut list), Some(ids[0]));
        assert_eq!(*seen.lock(), vec![Some(ids[1]), None, Some(ids[0])]);
    }

    #[test]
    fn test_hidden_focus_recovers_and_clears_flag() {
        let (mut list, ids) = fruit(&[]);
        let mut controller = single();

        controller.set_focus(&mut list, Some(ids[2]));
        list.set_hidden(ids[2], true).unwrap();

        assert_eq!(controller.revalidate(&mut list), None);
        assert!(!list.get(ids[2]).unwrap().is_focused());
    }

    #[test]
    fn test_removing_last_item_leaves_idle() {
        let mut list = OptionList::new();
        let only = list.push(ListOption::with_text("only"));
        let mut controller = single();
        controller.focus_first(&mut list);
        list.remove(only);

        assert_eq!(controller.focus_prev(&mut list), None);
        assert_eq!(controller.state(&list), ControllerState::Idle);
    }

    #[test]
    fn test_single_select_replaces_selection() {
        let (mut list, ids) = fruit(&[true]);
        let mut controller = single();
        let seen = record_selection(&controller);

        let outcome = controller.select(&mut list, Some(ids[1]));
        let result = outcome.result().unwrap();

        assert_eq!(result.items_to_deselect, vec![ids[0]]);
        assert!(!result.should_toggle);
        assert_eq!(result.new_focus_target, Some(ids[1]));
        assert!(result.selected);
        assert_eq!(result.selected_values, vec!["banana"]);
        assert!(!list.get(ids[0]).unwrap().is_selected());
        assert!(list.get(ids[1]).unwrap().is_selected());
        assert_eq!(controller.focused_item(&list), Some(ids[1]));
        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn test_single_select_same_item_stays_selected() {
        let (mut list, ids) = fruit(&[]);
        let mut controller = single();

        controller.select(&mut list, Some(ids[0]));
        let outcome = controller.select(&mut list, Some(ids[0]));

        assert!(outcome.result().unwrap().selected);
        assert!(outcome.result().unwrap().items_to_deselect.is_empty());
        assert_eq!(controller.selected_items(&list), vec![ids[0]]);
    }

    #[test]
    fn test_single_mode_at_most_one_selected() {
        let (mut list, ids) = fruit(&[]);
        let mut controller = single();
        for step in [0, 2, 1, 1, 0, 2, 2] {
            controller.select(&mut list, Some(ids[step]));
            assert!(controller.selected_items(&list).len() <= 1);
        }
        assert_eq!(controller.selected_values(&list), vec!["orange"]);
    }

    #[test]
    fn test_multi_select_toggles_without_moving_focus() {
        let (mut list, ids) = fruit(&[true, true]);
        let mut controller = multi();
        controller.set_focus(&mut list, Some(ids[0]));

        let outcome = controller.select(&mut list, Some(ids[2]));
        let result = outcome.result().unwrap();

        assert!(result.items_to_deselect.is_empty());
        assert!(result.should_toggle);
        assert_eq!(result.new_focus_target, Some(ids[0]));
        assert_eq!(result.selected_values, vec!["apple", "banana", "orange"]);
        assert_eq!(controller.focused_item(&list), Some(ids[0]));
    }

    #[test]
    fn test_multi_toggle_is_involutive() {
        let (mut list, ids) = fruit(&[true]);
        let mut controller = multi();

        controller.select(&mut list, Some(ids[0]));
        assert!(!list.get(ids[0]).unwrap().is_selected());
        controller.select(&mut list, Some(ids[0]));
        assert!(list.get(ids[0]).unwrap().is_selected());
    }

    #[test]
    fn test_select_disabled_is_rejected() {
        let (mut list, ids) = fruit(&[]);
        list.set_disabled(ids[1], true).unwrap();
        let mut controller = single();
        let selections = record_selection(&controller);
        let focus = record_focus(&controller);
        let before = format!("{list:?}");

        let outcome = controller.select(&mut list, Some(ids[1]));

        assert_eq!(outcome, SelectOutcome::Rejected(RejectReason::Disabled));
        assert_eq!(format!("{list:?}"), before);
        assert!(selections.lock().is_empty());
        assert!(focus.lock().is_empty());
    }

    #[test]
    fn test_select_foreign_is_rejected() {
        let (mut list, ids) = fruit(&[]);
        let mut controller = single();
        let selections = record_selection(&controller);

        let removed = list.push(ListOption::with_text("kiwi"));
        list.remove(removed);
        assert_eq!(
            controller.select(&mut list, Some(removed)),
            SelectOutcome::Rejected(RejectReason::Foreign)
        );

        list.set_hidden(ids[0], true).unwrap();
        assert_eq!(
            controller.select(&mut list, Some(ids[0])),
            SelectOutcome::Rejected(RejectReason::Foreign)
        );
        assert!(!list.get(ids[0]).unwrap().is_selected());
        assert!(selections.lock().is_empty());
    }

    #[test]
    fn test_select_none_is_ignored() {
        let (mut list, _) = fruit(&[]);
        let mut controller = single();
        assert_eq!(controller.select(&mut list, None), SelectOutcome::Ignored);
        assert_eq!(controller.select_focused(&mut list), SelectOutcome::Ignored);
    }

    #[test]
    fn test_single_select_emits_focus_before_selection() {
        let (mut list, ids) = fruit(&[]);
        let mut controller = single();
        let order = Arc::new(Mutex::new(Vec::new()));

        let order_clone = order.clone();
        controller.focus_changed.connect(move |_| order_clone.lock().push("focus"));
        let order_clone = order.clone();
        controller.selection_changed.connect(move |_| order_clone.lock().push("selection"));

        controller.select(&mut list, Some(ids[2]));
        assert_eq!(*order.lock(), vec!["focus", "selection"]);
    }

    #[test]
    fn test_selected_values_skip_missing_values() {
        let mut list = OptionList::new();
        let labelled = list.push(ListOption::new("no value"));
        let valued = list.push(ListOption::with_text("kiwi"));
        let mut controller = multi();

        controller.select(&mut list, Some(labelled));
        controller.select(&mut list, Some(valued));

        assert_eq!(controller.selected_items(&list), vec![labelled, valued]);
        assert_eq!(controller.selected_values(&list), vec!["kiwi"]);
    }

    #[test]
    fn test_convenience_wrappers() {
        let (mut list, ids) = fruit(&[]);
        let mut controller = single();

        controller.select_last(&mut list);
        assert_eq!(controller.selected_items(&list), vec![ids[2]]);
        controller.select_next(&mut list);
        assert_eq!(controller.selected_items(&list), vec![ids[0]]);
        controller.select_prev(&mut list);
        assert_eq!(controller.selected_items(&list), vec![ids[2]]);
        controller.select_first(&mut list);
        assert_eq!(controller.selected_items(&list), vec![ids[0]]);
        controller.focus_next(&mut list);
        controller.select_focused(&mut list);
        assert_eq!(controller.selected_items(&list), vec![ids[1]]);
    }

    #[test]
    fn test_deselect_all() {
        let (mut list, ids) = fruit(&[true, false, true]);
        let mut controller = multi();
        let seen = record_selection(&controller);

        let result = controller.deselect_all(&mut list).unwrap();

        assert_eq!(result.item, None);
        assert_eq!(result.items_to_deselect, vec![ids[0], ids[2]]);
        assert!(result.selected_values.is_empty());
        assert!(controller.deselect_all(&mut list).is_none());
        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn test_reappearing_selection_yields_to_latest_choice() {
        let (mut list, ids) = fruit(&[]);
        let mut controller = single();
        controller.select(&mut list, Some(ids[0]));
        list.set_hidden(ids[0], true).unwrap();
        controller.select(&mut list, Some(ids[1]));
        list.set_hidden(ids[0], false).unwrap();
        assert_eq!(controller.selected_items(&list), vec![ids[0], ids[1]]);

        let result = controller.normalize_selection(&mut list).unwrap();

        assert_eq!(result.items_to_deselect, vec![ids[0]]);
        assert_eq!(controller.selected_values(&list), vec!["banana"]);
        assert!(controller.normalize_selection(&mut list).is_none());
    }

    #[test]
    fn test_normalize_without_choice_keeps_first() {
        let (mut list, ids) = fruit(&[false, true, true]);
        let mut controller = single();
        controller.normalize_selection(&mut list);
        assert_eq!(controller.selected_items(&list), vec![ids[1]]);
    }

    #[test]
    fn test_normalize_is_noop_in_multi_mode() {
        let (mut list, _) = fruit(&[true, true]);
        let mut controller = multi();
        assert!(controller.normalize_selection(&mut list).is_none());
        assert_eq!(controller.selected_items(&list).len(), 2);
    }

    #[test]
    fn test_switching_to_single_keeps_first_selection() {
        let (mut list, ids) = fruit(&[true, true, true]);
        let mut controller = multi();

        let result = controller.set_mode(&mut list, SelectionMode::SingleExclusive).unwrap();

        assert_eq!(result.items_to_deselect, vec![ids[1], ids[2]]);
        assert_eq!(controller.selected_values(&list), vec!["apple"]);
        assert!(controller.set_mode(&mut list, SelectionMode::MultiToggle).is_none());
    }
}
