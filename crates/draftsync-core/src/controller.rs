//! Commit controller: routes input events into a widget's draft store and
//! forwards committed drafts to the remote state manager.

use crate::draft::DraftValueStore;
use crate::event::InputEvent;
use crate::policy::{Action, CommitPolicy};
use crate::remote::RemoteWidgetStateManager;

/// What handling a single event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// The draft was replaced.
    Edited,
    /// The draft was forwarded to the state manager.
    Committed(String),
    /// Nothing changed.
    Ignored,
}

impl EventOutcome {
    /// The committed value, if this outcome is a commit.
    pub fn committed(&self) -> Option<&str> {
        match self {
            Self::Committed(value) => Some(value),
            _ => None,
        }
    }
}

/// Decides when a widget's draft is committed.
///
/// The controller holds no draft itself: the store is owned by the widget
/// instance and lent to [`handle_event`](Self::handle_event) for each event.
#[derive(Debug, Clone)]
pub struct CommitController {
    widget_id: String,
    policy: CommitPolicy,
}

impl CommitController {
    /// Create a controller for `widget_id` with the default policy
    /// (commit on blur and on Ctrl+Enter).
    pub fn new(widget_id: impl Into<String>) -> Self {
        Self::with_policy(widget_id, CommitPolicy::default())
    }

    /// Create a controller with a custom commit policy.
    pub fn with_policy(widget_id: impl Into<String>, policy: CommitPolicy) -> Self {
        Self {
            widget_id: widget_id.into(),
            policy,
        }
    }

    pub fn widget_id(&self) -> &str {
        &self.widget_id
    }

    pub fn policy(&self) -> &CommitPolicy {
        &self.policy
    }

    /// Handle one input event.
    ///
    /// Text changes replace the draft. Commit triggers forward a dirty draft
    /// exactly once; while clean they do nothing, so repeated triggers never
    /// produce duplicate writes.
    pub fn handle_event(
        &self,
        store: &mut DraftValueStore,
        event: &InputEvent,
        remote: &mut dyn RemoteWidgetStateManager,
    ) -> EventOutcome {
        match self.policy.evaluate(event, store.is_dirty()) {
            Action::Edit(value) => {
                log::trace!("Widget {} edited ({} bytes)", self.widget_id, value.len());
                store.record_edit(value);
                EventOutcome::Edited
            }
            Action::Commit => EventOutcome::Committed(self.commit(store, remote)),
            Action::Ignore => {
                if self.policy.is_trigger(event) {
                    log::debug!("Widget {} is clean, skipping commit", self.widget_id);
                }
                EventOutcome::Ignored
            }
        }
    }

    /// Handle a batch of events in delivery order.
    ///
    /// Returns the values committed along the way.
    pub fn handle_events<'e>(
        &self,
        store: &mut DraftValueStore,
        events: impl IntoIterator<Item = &'e InputEvent>,
        remote: &mut dyn RemoteWidgetStateManager,
    ) -> Vec<String> {
        events
            .into_iter()
            .filter_map(|event| match self.handle_event(store, event, remote) {
                EventOutcome::Committed(value) => Some(value),
                _ => None,
            })
            .collect()
    }

    /// Forward the draft and mark it committed.
    ///
    /// Fire-and-forget: the dirty flag is cleared without waiting for the
    /// state manager to acknowledge the write.
    fn commit(&self, store: &mut DraftValueStore, remote: &mut dyn RemoteWidgetStateManager) -> String {
        // Commit triggers are gated on dirty, and dirty implies a draft.
        let value = match store.mark_committed() {
            Ok(value) => value.to_owned(),
            Err(err) => panic!("widget {}: {}", self.widget_id, err),
        };
        remote.set_string_value(&self.widget_id, &value);
        log::debug!("Widget {} committed", self.widget_id);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Modifiers;
    use crate::remote::WidgetStateManager;

    /// Records every write in order.
    #[derive(Default)]
    struct RecordingManager {
        writes: Vec<(String, String)>,
    }

    impl RemoteWidgetStateManager for RecordingManager {
        fn set_string_value(&mut self, widget_id: &str, value: &str) {
            self.writes.push((widget_id.to_string(), value.to_string()));
        }
    }

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn ctrl_enter() -> InputEvent {
        InputEvent::key_pressed("Enter", Modifiers::CTRL)
    }

    fn write(id: &str, value: &str) -> (String, String) {
        (id.to_string(), value.to_string())
    }

    #[test]
    fn test_no_edits_displays_default() {
        let store = DraftValueStore::new();
        assert_eq!(store.resolve_display_value("hello"), "hello");
    }

    #[test]
    fn test_type_then_blur_commits_once() {
        init_logging();
        let controller = CommitController::new("w1");
        let mut store = DraftValueStore::new();
        let mut remote = RecordingManager::default();

        controller.handle_event(&mut store, &InputEvent::text_changed("hello world"), &mut remote);
        assert!(remote.writes.is_empty());

        let outcome = controller.handle_event(&mut store, &InputEvent::FocusLost, &mut remote);
        assert_eq!(outcome.committed(), Some("hello world"));
        assert_eq!(remote.writes, vec![write("w1", "hello world")]);
        assert!(!store.is_dirty());
        assert_eq!(store.resolve_display_value("hello"), "hello world");
    }

    #[test]
    fn test_blur_while_clean_is_noop() {
        let controller = CommitController::new("w1");
        let mut store = DraftValueStore::new();
        let mut remote = RecordingManager::default();

        let outcome = controller.handle_event(&mut store, &InputEvent::FocusLost, &mut remote);
        assert_eq!(outcome, EventOutcome::Ignored);
        assert!(remote.writes.is_empty());
    }

    #[test]
    fn test_enter_without_ctrl_does_not_commit() {
        let controller = CommitController::new("w1");
        let mut store = DraftValueStore::new();
        let mut remote = RecordingManager::default();

        controller.handle_event(&mut store, &InputEvent::text_changed("abc"), &mut remote);
        let outcome = controller.handle_event(
            &mut store,
            &InputEvent::key_pressed("Enter", Modifiers::default()),
            &mut remote,
        );

        assert_eq!(outcome, EventOutcome::Ignored);
        assert!(remote.writes.is_empty());
        assert!(store.is_dirty());
        assert_eq!(store.resolve_display_value("hello"), "abc");
    }

    #[test]
    fn test_other_keys_never_commit() {
        let controller = CommitController::new("w1");
        let mut store = DraftValueStore::new();
        let mut remote = RecordingManager::default();

        controller.handle_event(&mut store, &InputEvent::text_changed("abc"), &mut remote);
        for key in ["a", "Tab", "Escape", "Space"] {
            controller.handle_event(&mut store, &InputEvent::key_pressed(key, Modifiers::CTRL), &mut remote);
        }
        assert!(remote.writes.is_empty());
        assert!(store.is_dirty());
    }

    #[test]
    fn test_ctrl_enter_commits() {
        let controller = CommitController::new("w1");
        let mut store = DraftValueStore::new();
        let mut remote = RecordingManager::default();

        controller.handle_event(&mut store, &InputEvent::text_changed("abc"), &mut remote);
        let outcome = controller.handle_event(&mut store, &ctrl_enter(), &mut remote);

        assert_eq!(outcome, EventOutcome::Committed("abc".into()));
        assert_eq!(remote.writes, vec![write("w1", "abc")]);
    }

    #[test]
    fn test_ctrl_enter_while_clean_is_noop() {
        let controller = CommitController::new("w1");
        let mut store = DraftValueStore::new();
        let mut remote = RecordingManager::default();

        assert_eq!(
            controller.handle_event(&mut store, &ctrl_enter(), &mut remote),
            EventOutcome::Ignored
        );
        assert!(remote.writes.is_empty());
    }

    #[test]
    fn test_blur_then_ctrl_enter_writes_once() {
        let controller = CommitController::new("w1");
        let mut store = DraftValueStore::new();
        let mut remote = RecordingManager::default();

        let events = [
            InputEvent::text_changed("abc"),
            InputEvent::FocusLost,
            ctrl_enter(),
            InputEvent::FocusLost,
        ];
        let committed = controller.handle_events(&mut store, &events, &mut remote);

        assert_eq!(committed, vec!["abc".to_string()]);
        assert_eq!(remote.writes.len(), 1);
    }

    #[test]
    fn test_second_edit_produces_second_write() {
        let controller = CommitController::new("w1");
        let mut store = DraftValueStore::new();
        let mut remote = RecordingManager::default();

        let events = [
            InputEvent::text_changed("abc"),
            InputEvent::FocusLost,
            InputEvent::text_changed("abcd"),
            ctrl_enter(),
        ];
        controller.handle_events(&mut store, &events, &mut remote);

        assert_eq!(remote.writes, vec![write("w1", "abc"), write("w1", "abcd")]);
    }

    #[test]
    fn test_recommitting_same_text_after_edit_writes_again() {
        let controller = CommitController::new("w1");
        let mut store = DraftValueStore::new();
        let mut remote = RecordingManager::default();

        let events = [
            InputEvent::text_changed("abc"),
            InputEvent::FocusLost,
            InputEvent::text_changed("abc"),
            InputEvent::FocusLost,
        ];
        controller.handle_events(&mut store, &events, &mut remote);

        assert_eq!(remote.writes.len(), 2);
    }

    #[test]
    fn test_display_tracks_every_edit() {
        let controller = CommitController::new("w1");
        let mut store = DraftValueStore::new();
        let mut remote = RecordingManager::default();

        for value in ["h", "he", "hel", "", "x"] {
            controller.handle_event(&mut store, &InputEvent::text_changed(value), &mut remote);
            assert_eq!(store.resolve_display_value("default"), value);
            assert!(store.is_dirty());
        }
        assert!(remote.writes.is_empty());
    }

    #[test]
    fn test_blur_disabled_by_policy() {
        let policy = CommitPolicy {
            commit_on_blur: false,
            ..Default::default()
        };
        let controller = CommitController::with_policy("w1", policy);
        let mut store = DraftValueStore::new();
        let mut remote = RecordingManager::default();

        let events = [InputEvent::text_changed("abc"), InputEvent::FocusLost];
        assert!(controller.handle_events(&mut store, &events, &mut remote).is_empty());

        controller.handle_event(&mut store, &ctrl_enter(), &mut remote);
        assert_eq!(remote.writes, vec![write("w1", "abc")]);
    }

    #[test]
    fn test_commit_reaches_state_manager() {
        init_logging();
        let controller = CommitController::new("notes");
        let mut store = DraftValueStore::new();
        let mut manager = WidgetStateManager::new();

        controller.handle_event(&mut store, &InputEvent::text_changed("draft"), &mut manager);
        assert!(!manager.has_outgoing());

        controller.handle_event(&mut store, &InputEvent::FocusLost, &mut manager);
        assert_eq!(manager.string_value("notes"), Some("draft"));
        assert_eq!(manager.take_outgoing().len(), 1);

        controller.handle_event(&mut store, &InputEvent::FocusLost, &mut manager);
        assert!(!manager.has_outgoing());
    }

    #[test]
    #[should_panic(expected = "value is undefined")]
    fn test_commit_without_draft_panics() {
        let controller = CommitController::new("w1");
        let mut store = DraftValueStore::new();
        let mut remote = RecordingManager::default();
        controller.commit(&mut store, &mut remote);
    }
}
