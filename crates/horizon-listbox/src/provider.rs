//! The item provider contract.
//!
//! An [`ItemProvider`] answers one question: which options are eligible right
//! now, and in what order. The controller asks on every operation and never
//! keeps the answer, so options can be added, removed, hidden or disabled
//! between calls without leaving the controller pointing at stale items.

use crate::option::{ListOption, OptionId, OptionList};

/// Source of the eligible option sequence for one host.
///
/// `query` must be deterministic and free of side effects. It excludes
/// hidden, disabled and skip-matched options.
pub trait ItemProvider {
    /// The current eligible options, in order.
    fn query(&self) -> Vec<OptionId>;

    /// Look up an option, eligible or not.
    fn option(&self, id: OptionId) -> Option<&ListOption>;

    /// Mutable access for the controller.
    ///
    /// Flag setters on [`ListOption`] are crate-private, so implementors
    /// outside this crate cannot use this to change selection or focus.
    fn option_mut(&mut self, id: OptionId) -> Option<&mut ListOption>;

    /// Whether `id` is currently eligible.
    fn is_eligible(&self, id: OptionId) -> bool {
        self.query().contains(&id)
    }
}

impl OptionList {
    /// Query with an additional, ad-hoc skip predicate on top of the stored one.
    pub fn query_with<F>(&self, skip: F) -> Vec<OptionId>
    where
        F: Fn(OptionId, &ListOption) -> bool,
    {
        self.children()
            .iter()
            .copied()
            .filter(|&id| {
                self.get(id).is_some_and(|option| {
                    !option.is_hidden()
                        && !option.is_disabled()
                        && !self.is_skipped(id, option)
                        && !skip(id, option)
                })
            })
            .collect()
    }
}

impl ItemProvider for OptionList {
    fn query(&self) -> Vec<OptionId> {
        self.query_with(|_, _| false)
    }

    fn option(&self, id: OptionId) -> Option<&ListOption> {
        self.get(id)
    }

    fn option_mut(&mut self, id: OptionId) -> Option<&mut ListOption> {
        self.get_mut(id)
    }
}
