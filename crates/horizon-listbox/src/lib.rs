//! Horizon Listbox - accessible single- and multi-select option lists.
//!
//! The crate is built around [`OptionListController`], which implements
//! navigation, virtual focus and selection over any [`ItemProvider`]. The
//! [`Listbox`] host wires a controller to an [`OptionList`], translates its
//! signals into [`ListboxEvent`]s and adds form and ARIA semantics.
//!
//! # Example
//!
//! ```
//! use horizon_listbox::prelude::*;
//!
//! let mut listbox = Listbox::builder()
//!     .multiple(true)
//!     .options(["apple", "banana", "orange"].map(ListOption::with_text))
//!     .build();
//!
//! // Shift+ArrowDown moves focus and extends the selection.
//! let mut event = KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::SHIFT);
//! assert!(listbox.handle_key_press(&mut event));
//! assert!(event.base.is_default_prevented());
//!
//! assert_eq!(listbox.selected_values(), vec!["apple"]);
//! ```

pub mod controller;
pub mod debug;
mod error;
pub mod events;
pub mod host;
pub mod keyboard;
pub mod option;
pub mod pointer;
pub mod prelude;
pub mod provider;
pub mod selection;

pub use horizon_listbox_core::{ConnectionGuard, ConnectionId, ElementRegistry, Signal};

pub use controller::{ControllerConfig, ControllerState, OptionListController};
pub use debug::{ListFormatOptions, ListStyle, OptionListDebug};
pub use error::{ListboxError, Result};
pub use events::{EventBase, Key, KeyPressEvent, KeyboardModifiers, PathNode, PointerEvent, PointerEventKind};
pub use host::{
    register_defaults, Element, ElementFactory, FormValue, Listbox, ListboxBuilder, ListboxConfig, ListboxEvent,
    LISTBOX_ATTRIBUTES, LISTBOX_ELEMENT, OPTION_ELEMENT,
};
pub use keyboard::{keymap, KeyAction};
pub use option::{ListOption, OptionHandle, OptionId, OptionList, SkipPredicate, OPTION_ATTRIBUTES};
pub use provider::ItemProvider;
pub use selection::{RejectReason, SelectOutcome, SelectionMode, SelectionResult};
