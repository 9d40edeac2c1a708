//! Input event types forwarded from the host.
//!
//! The host translates raw platform input into these types and hands them to
//! the controller. Handlers mark events they consume: [`EventBase::accept`]
//! stops propagation to enclosing containers and
//! [`EventBase::prevent_default`] suppresses the platform's default action
//! (scrolling on arrow keys, activation on Space).

use crate::option::{OptionHandle, OptionId};

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };
}

/// Common data for all forwarded events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
    default_prevented: bool,
}

impl EventBase {
    /// Create a new, unhandled event base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    /// Check if the platform default action was suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Suppress the platform default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Keyboard keys relevant to list interaction.
///
/// Printable keys arrive as [`Key::Character`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Backspace,
    Delete,
    Enter,
    NumpadEnter,
    Tab,
    Escape,

    // Whitespace
    Space,

    // Modifiers (also tracked via KeyboardModifiers, but delivered as key events)
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    MetaLeft,
    MetaRight,

    /// A printable character.
    Character(char),

    /// Unknown/unmapped key.
    Unknown(u16),
}

impl Key {
    /// Check if this is a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Key::ShiftLeft
                | Key::ShiftRight
                | Key::ControlLeft
                | Key::ControlRight
                | Key::AltLeft
                | Key::AltRight
                | Key::MetaLeft
                | Key::MetaRight
        )
    }

    /// Check if this key activates the focused option.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::NumpadEnter | Key::Space)
    }
}

/// Key press event, forwarded by the host while it has input focus.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
        }
    }

    /// Create a key press without modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE)
    }
}

/// An entry in a pointer event's path, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathNode {
    /// An option element.
    Option(OptionId),
    /// Any other element, by name. Never treated as an option.
    Element(&'static str),
}

impl OptionHandle for PathNode {
    fn option_id(&self) -> Option<OptionId> {
        match self {
            Self::Option(id) => Some(*id),
            Self::Element(_) => None,
        }
    }
}

/// The kind of pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// The pointer entered an element.
    Over,
    /// The pointer left an element.
    Out,
    /// The primary button was clicked.
    Click,
}

/// Pointer event, forwarded by the host for its subtree.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    /// Base event data.
    pub base: EventBase,
    /// What happened.
    pub kind: PointerEventKind,
    /// Elements from the innermost target outwards.
    pub path: Vec<PathNode>,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(kind: PointerEventKind, path: Vec<PathNode>) -> Self {
        Self {
            base: EventBase::new(),
            kind,
            path,
        }
    }

    /// Pointer event whose innermost target is an option.
    pub fn on_option(kind: PointerEventKind, id: OptionId) -> Self {
        Self::new(kind, vec![PathNode::Option(id)])
    }

    /// The innermost option on the path, if any.
    pub fn target_option(&self) -> Option<OptionId> {
        self.path.iter().find_map(OptionHandle::option_id)
    }
}
