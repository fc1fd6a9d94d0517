//! Input events delivered to a widget by the host UI.

use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Only Ctrl held.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };
}

/// An input event targeted at a single widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// The control's text changed to `value`.
    TextChanged { value: String },
    /// The control lost keyboard focus.
    FocusLost,
    /// A key was pressed while the control had focus.
    KeyPressed { key: String, modifiers: Modifiers },
}

impl InputEvent {
    pub fn text_changed(value: impl Into<String>) -> Self {
        Self::TextChanged { value: value.into() }
    }

    pub fn key_pressed(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self::KeyPressed {
            key: key.into(),
            modifiers,
        }
    }
}
