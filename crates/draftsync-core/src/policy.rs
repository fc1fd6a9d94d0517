//! Commit policy: which input events turn a draft into a committed value.

use serde::{Deserialize, Serialize};

use crate::error::WidgetResult;
use crate::event::{InputEvent, Modifiers};

/// A keyboard shortcut that commits the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shortcut {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Default for Shortcut {
    fn default() -> Self {
        Self {
            key: "Enter".to_string(),
            ctrl: true,
            shift: false,
            alt: false,
        }
    }
}

impl Shortcut {
    /// Check if a key press triggers this shortcut.
    ///
    /// Every required modifier must be held. Extra modifiers are ignored.
    pub fn matches(&self, key: &str, modifiers: Modifiers) -> bool {
        self.key == key
            && (!self.ctrl || modifiers.ctrl)
            && (!self.shift || modifiers.shift)
            && (!self.alt || modifiers.alt)
    }

    /// Format the shortcut for display (e.g., "Ctrl+Enter").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.alt {
            parts.push("Alt");
        }
        parts.push(self.key.as_str());
        parts.join("+")
    }
}

/// What the controller should do with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the draft. Never commits.
    Edit(String),
    /// Forward the draft to the state manager.
    Commit,
    /// Nothing to do.
    Ignore,
}

/// Commit triggers for a text widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitPolicy {
    /// Commit a dirty draft when the control loses focus.
    pub commit_on_blur: bool,
    /// Commit a dirty draft on this key press.
    pub shortcut: Shortcut,
}

impl Default for CommitPolicy {
    fn default() -> Self {
        Self {
            commit_on_blur: true,
            shortcut: Shortcut::default(),
        }
    }
}

impl CommitPolicy {
    /// Parse a policy from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> WidgetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check if `event` would commit a dirty draft.
    pub fn is_trigger(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::TextChanged { .. } => false,
            InputEvent::FocusLost => self.commit_on_blur,
            InputEvent::KeyPressed { key, modifiers } => self.shortcut.matches(key, *modifiers),
        }
    }

    /// Decide what `event` means for a widget whose draft is `dirty`.
    pub fn evaluate(&self, event: &InputEvent, dirty: bool) -> Action {
        match event {
            InputEvent::TextChanged { value } => Action::Edit(value.clone()),
            _ if dirty && self.is_trigger(event) => Action::Commit,
            _ => Action::Ignore,
        }
    }
}
