//! Keyboard dispatch.
//!
//! The key table is data: [`keymap`] maps a key and modifiers to the
//! sequence of controller actions for the current selection mode, and
//! [`OptionListController::handle_key_press`] runs it.
//!
//! | Key | single-exclusive | multi-toggle | multi-toggle + Shift |
//! |---|---|---|---|
//! | ArrowDown | select next | focus next | focus next, select focused |
//! | ArrowUp | select prev | focus prev | focus prev, select focused |
//! | Home | select first | focus first | focus first, select focused |
//! | End | select last | focus last | focus last, select focused |
//! | Space / Enter | select focused | select focused | select focused |
//!
//! In a single-select list the arrow keys are the only way to change the
//! selection, so they select. In a multi-select list they only move focus and
//! Shift extends the selection.

use horizon_listbox_core::PerfSpan;
use horizon_listbox_core::logging::span_names;

use crate::controller::OptionListController;
use crate::events::{Key, KeyPressEvent, KeyboardModifiers};
use crate::provider::ItemProvider;
use crate::selection::SelectionMode;

/// One step of a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Focus the first eligible option.
    FocusFirst,
    /// Focus the last eligible option.
    FocusLast,
    /// Focus the next option, wrapping.
    FocusNext,
    /// Focus the previous option, wrapping.
    FocusPrev,
    /// Focus and select the first eligible option.
    SelectFirst,
    /// Focus and select the last eligible option.
    SelectLast,
    /// Focus and select the next option, wrapping.
    SelectNext,
    /// Focus and select the previous option, wrapping.
    SelectPrev,
    /// Select the focused option.
    SelectFocused,
}

/// The actions bound to `key` in `mode`. Empty when the key is unbound.
pub fn keymap(mode: SelectionMode, key: Key, modifiers: KeyboardModifiers) -> &'static [KeyAction] {
    use KeyAction::*;

    match (mode, key, modifiers.shift) {
        (_, key, _) if key.is_activation() => &[SelectFocused],

        (SelectionMode::SingleExclusive, Key::ArrowDown, _) => &[SelectNext],
        (SelectionMode::SingleExclusive, Key::ArrowUp, _) => &[SelectPrev],
        (SelectionMode::SingleExclusive, Key::Home, _) => &[SelectFirst],
        (SelectionMode::SingleExclusive, Key::End, _) => &[SelectLast],

        (SelectionMode::MultiToggle, Key::ArrowDown, false) => &[FocusNext],
        (SelectionMode::MultiToggle, Key::ArrowUp, false) => &[FocusPrev],
        (SelectionMode::MultiToggle, Key::Home, false) => &[FocusFirst],
        (SelectionMode::MultiToggle, Key::End, false) => &[FocusLast],

        (SelectionMode::MultiToggle, Key::ArrowDown, true) => &[FocusNext, SelectFocused],
        (SelectionMode::MultiToggle, Key::ArrowUp, true) => &[FocusPrev, SelectFocused],
        (SelectionMode::MultiToggle, Key::Home, true) => &[FocusFirst, SelectFocused],
        (SelectionMode::MultiToggle, Key::End, true) => &[FocusLast, SelectFocused],

        _ => &[],
    }
}

impl OptionListController {
    /// Handle a key press forwarded by the host.
    ///
    /// Returns `true` if the key was bound. Bound keys have their default
    /// action prevented and are accepted so enclosing containers do not
    /// handle them again. Modifier-only presses and unbound keys are left
    /// untouched.
    pub fn handle_key_press<P>(&mut self, items: &mut P, event: &mut KeyPressEvent) -> bool
    where
        P: ItemProvider + ?Sized,
    {
        if event.key.is_modifier() {
            return false;
        }

        let actions = keymap(self.mode(), event.key, event.modifiers);
        if actions.is_empty() {
            tracing::trace!(target: "horizon_listbox::keyboard", key = ?event.key, "key not bound, passing through");
            return false;
        }

        let _span = PerfSpan::new(span_names::KEY_DISPATCH);
        tracing::trace!(target: "horizon_listbox::keyboard", key = ?event.key, ?actions, "dispatching key");
        event.base.prevent_default();
        event.base.accept();

        for action in actions {
            self.run_action(items, *action);
        }
        true
    }

    /// Run a single key action.
    pub fn run_action<P>(&mut self, items: &mut P, action: KeyAction)
    where
        P: ItemProvider + ?Sized,
    {
        match action {
            KeyAction::FocusFirst => {
                self.focus_first(items);
            }
            KeyAction::FocusLast => {
                self.focus_last(items);
            }
            KeyAction::FocusNext => {
                self.focus_next(items);
            }
            KeyAction::FocusPrev => {
                self.focus_prev(items);
            }
            KeyAction::SelectFirst => {
                self.select_first(items);
            }
            KeyAction::SelectLast => {
                self.select_last(items);
            }
            KeyAction::SelectNext => {
                self.select_next(items);
            }
            KeyAction::SelectPrev => {
                self.select_prev(items);
            }
            KeyAction::SelectFocused => {
                self.select_focused(items);
            }
        }
    }
}
