//! Debug visualization for option lists.
//!
//! [`OptionListDebug`] renders every option of an [`OptionList`] with its
//! focus, selection and eligibility state:
//!
//! ```text
//! Option List (3 options, 2 eligible):
//! ├── ☐ apple = "apple"
//! ├── ▸ ☑ banana = "banana"
//! └── ☐ orange = "orange" (disabled)
//! ```

use std::fmt::{self, Write as FmtWrite};

use crate::option::{ListOption, OptionList};
use crate::provider::ItemProvider;

/// Style options for option list visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStyle {
    /// ASCII characters only.
    Ascii,
    /// Unicode box-drawing characters and check boxes.
    #[default]
    Unicode,
    /// A single line, options separated by commas.
    Compact,
}

/// Configuration for option list debug output.
#[derive(Debug, Clone)]
pub struct ListFormatOptions {
    /// The style of visualization.
    pub style: ListStyle,
    /// Whether to show option values.
    pub show_values: bool,
    /// Whether to include ineligible options.
    pub show_ineligible: bool,
}

impl Default for ListFormatOptions {
    fn default() -> Self {
        Self {
            style: ListStyle::default(),
            show_values: true,
            show_ineligible: true,
        }
    }
}

impl ListFormatOptions {
    /// Create options for minimal output: compact, eligible options only.
    pub fn minimal() -> Self {
        Self {
            style: ListStyle::Compact,
            show_values: false,
            show_ineligible: false,
        }
    }
}

/// Debug utility for visualizing option lists.
#[derive(Debug, Clone, Default)]
pub struct OptionListDebug {
    options: ListFormatOptions,
}

impl OptionListDebug {
    /// Create a visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: ListFormatOptions) -> Self {
        Self { options }
    }

    /// Format `list`.
    pub fn format(&self, list: &OptionList) -> String {
        let eligible = list.query();
        let rows: Vec<_> = list
            .children()
            .iter()
            .filter_map(|&id| {
                let option = list.get(id)?;
                let is_eligible = eligible.contains(&id);
                (is_eligible || self.options.show_ineligible).then_some((option, is_eligible))
            })
            .collect();

        let mut output = String::new();
        if self.options.style == ListStyle::Compact {
            let entries: Vec<String> = rows
                .iter()
                .map(|(option, is_eligible)| self.format_row(option, *is_eligible))
                .collect();
            output.push_str(&entries.join(", "));
            return output;
        }

        // Infallible: writing to a String.
        let _ = writeln!(
            output,
            "Option List ({} options, {} eligible):",
            list.len(),
            eligible.len()
        );
        if rows.is_empty() {
            output.push_str("  (empty)\n");
        }
        let count = rows.len();
        for (i, (option, is_eligible)) in rows.into_iter().enumerate() {
            let connector = match (self.options.style, i + 1 == count) {
                (ListStyle::Ascii, false) => "+-- ",
                (ListStyle::Ascii, true) => "`-- ",
                (_, false) => "\u{251c}\u{2500}\u{2500} ",
                (_, true) => "\u{2514}\u{2500}\u{2500} ",
            };
            output.push_str(connector);
            output.push_str(&self.format_row(option, is_eligible));
            output.push('\n');
        }
        output
    }

    fn format_row(&self, option: &ListOption, is_eligible: bool) -> String {
        let (focus, checked, unchecked) = match self.options.style {
            ListStyle::Unicode => ("\u{25b8} ", "\u{2611} ", "\u{2610} "),
            ListStyle::Ascii => ("> ", "[x] ", "[ ] "),
            ListStyle::Compact => (">", "*", ""),
        };

        let mut row = String::new();
        if option.is_focused() {
            row.push_str(focus);
        }
        row.push_str(if option.is_selected() { checked } else { unchecked });
        row.push_str(if option.label().is_empty() { "(unlabelled)" } else { option.label() });

        if self.options.show_values {
            if let Some(value) = option.value() {
                let _ = write!(row, " = {value:?}");
            }
        }
        if option.is_disabled() {
            row.push_str(" (disabled)");
        } else if option.is_hidden() {
            row.push_str(" (hidden)");
        } else if !is_eligible {
            row.push_str(" (skipped)");
        }
        row
    }
}

impl fmt::Display for OptionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&OptionListDebug::new().format(self))
    }
}
