//! Selection modes and the result of a selection operation.

use crate::option::OptionId;

/// How choosing an option affects the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Choosing an option deselects every other option (default).
    ///
    /// Focus follows selection in this mode.
    #[default]
    SingleExclusive,
    /// Choosing an option flips only its own state.
    ///
    /// Selection never moves focus in this mode.
    MultiToggle,
}

impl SelectionMode {
    /// Whether this mode allows more than one selected option.
    pub fn is_multiple(self) -> bool {
        self == Self::MultiToggle
    }

    /// The mode implied by a `multiple` flag.
    pub fn from_multiple(multiple: bool) -> Self {
        if multiple {
            Self::MultiToggle
        } else {
            Self::SingleExclusive
        }
    }
}

/// The computed and applied effect of one selection operation.
///
/// Emitted through `selection_changed` after every flag has been written, so
/// `selected` and `selected_values` describe the settled state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    /// The option the operation targeted.
    ///
    /// `None` for bulk operations such as clearing the selection.
    pub item: Option<OptionId>,
    /// Options that were deselected, in eligible order.
    pub items_to_deselect: Vec<OptionId>,
    /// Whether the target was toggled rather than forced on.
    pub should_toggle: bool,
    /// Where focus is after the operation.
    pub new_focus_target: Option<OptionId>,
    /// Final selected state of `item`. `false` when there is no target.
    pub selected: bool,
    /// Values of all selected eligible options after the operation.
    pub selected_values: Vec<String>,
}

/// Why a selection request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The option is not in the current eligible sequence.
    Foreign,
    /// The option is disabled.
    Disabled,
}

/// Outcome of a selection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The selection was applied and `selection_changed` was emitted.
    Applied(SelectionResult),
    /// There was nothing to select.
    Ignored,
    /// The request was rejected without mutating anything.
    Rejected(RejectReason),
}

impl SelectOutcome {
    /// Whether the selection was applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The applied result, if any.
    pub fn result(&self) -> Option<&SelectionResult> {
        match self {
            Self::Applied(result) => Some(result),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_single() {
        assert_eq!(SelectionMode::default(), SelectionMode::SingleExclusive);
        assert!(!SelectionMode::default().is_multiple());
    }

    #[test]
    fn test_from_multiple() {
        assert_eq!(SelectionMode::from_multiple(true), SelectionMode::MultiToggle);
        assert_eq!(SelectionMode::from_multiple(false), SelectionMode::SingleExclusive);
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(!SelectOutcome::Ignored.is_applied());
        assert_eq!(SelectOutcome::Rejected(RejectReason::Disabled).result(), None);
    }
}
