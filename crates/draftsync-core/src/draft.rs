//! Per-widget draft value tracking.

use crate::error::{WidgetError, WidgetResult};

/// Whether a widget holds an unforwarded edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftPhase {
    /// Nothing to forward. Either no edit yet or the last edit was committed.
    #[default]
    Clean,
    /// The draft was edited since the last commit.
    Dirty,
}

/// What the user typed into a widget but has not necessarily committed.
///
/// A store is created empty when the widget mounts and dropped when it
/// unmounts. Once a draft exists it is never cleared again: committing only
/// resets the dirty flag, so the displayed text stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftValueStore {
    /// The value specified by the user via the UI. `None` until the first edit.
    value: Option<String>,
    /// True if `value` has not yet been handed to the state manager.
    dirty: bool,
}

impl DraftValueStore {
    /// Create an empty store with no draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new draft value. Any string is accepted.
    pub fn record_edit(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
        self.dirty = true;
    }

    /// The text to display: the draft if one exists, otherwise `default`.
    pub fn resolve_display_value<'a>(&'a self, default: &'a str) -> &'a str {
        self.value.as_deref().unwrap_or(default)
    }

    /// Clear the dirty flag and return the value that is now committed.
    ///
    /// Fails with [`WidgetError::NoDraft`] when no edit was ever recorded.
    pub fn mark_committed(&mut self) -> WidgetResult<&str> {
        let value = self.value.as_deref().ok_or(WidgetError::NoDraft)?;
        self.dirty = false;
        Ok(value)
    }

    /// The current draft, if the user has edited the widget.
    pub fn draft(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Check if the draft still has to be forwarded.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn phase(&self) -> DraftPhase {
        if self.dirty {
            DraftPhase::Dirty
        } else {
            DraftPhase::Clean
        }
    }
}
