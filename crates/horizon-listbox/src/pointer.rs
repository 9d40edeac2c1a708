//! Pointer dispatch.
//!
//! Hover moves virtual focus the same way arrow keys do, so whatever the user
//! is "on" is what Enter, Space or a click acts on. Leaving the focused option
//! clears focus. A click selects; in multi-toggle mode it also focuses the
//! option first. Disabled options never react.

use crate::controller::OptionListController;
use crate::events::{PointerEvent, PointerEventKind};
use crate::provider::ItemProvider;

impl OptionListController {
    /// Handle a pointer event forwarded by the host.
    ///
    /// Returns `true` if the event changed focus or selection; such events are
    /// accepted.
    pub fn handle_pointer<P>(&mut self, items: &mut P, event: &mut PointerEvent) -> bool
    where
        P: ItemProvider + ?Sized,
    {
        let Some(id) = event.target_option() else {
            return false;
        };
        if !items.is_eligible(id) {
            tracing::trace!(target: "horizon_listbox::pointer", ?id, kind = ?event.kind, "pointer on ineligible option ignored");
            return false;
        }

        let handled = match event.kind {
            PointerEventKind::Over => {
                if self.focused_item(items) == Some(id) {
                    false
                } else {
                    self.set_focus(items, Some(id)).is_some()
                }
            }
            PointerEventKind::Out => {
                if self.focused_item(items) == Some(id) {
                    self.focus_blur(items);
                    true
                } else {
                    false
                }
            }
            PointerEventKind::Click => {
                if self.mode().is_multiple() {
                    self.set_focus(items, Some(id));
                }
                self.select(items, Some(id)).is_applied()
            }
        };

        if handled {
            event.base.accept();
        }
        handled
    }
}
