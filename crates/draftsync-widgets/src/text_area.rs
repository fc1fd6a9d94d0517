//! Multiline text input with a deferred commit.

use draftsync_core::{
    CommitController, CommitPolicy, DraftValueStore, InputEvent, Modifiers,
    RemoteWidgetStateManager, WidgetSpec,
};
use egui::{Context, Id, Response, RichText, TextEdit, Ui};

use crate::{sizing, theme};

/// Response from showing a [`TextArea`].
pub struct TextAreaResponse {
    /// The underlying egui Response of the text edit
    pub response: Response,
    /// The value committed this frame, if any
    pub committed: Option<String>,
}

/// A labelled multiline text input.
///
/// What the user types is kept as a draft in egui memory, keyed by the widget
/// id, and only reaches the state manager on blur or on the commit shortcut.
/// Until the first edit the control shows the spec's default value.
pub struct TextArea<'a> {
    spec: &'a WidgetSpec,
    policy: CommitPolicy,
}

impl<'a> TextArea<'a> {
    /// Create a text area for `spec` with the default commit policy.
    pub fn new(spec: &'a WidgetSpec) -> Self {
        Self {
            spec,
            policy: CommitPolicy::default(),
        }
    }

    /// Set the commit policy.
    pub fn policy(mut self, policy: CommitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Memory id of the draft for a widget.
    pub fn state_id(widget_id: &str) -> Id {
        Id::new(("draftsync.text_area", widget_id))
    }

    /// Get the draft state of a mounted widget.
    pub fn draft(ctx: &Context, widget_id: &str) -> Option<DraftValueStore> {
        ctx.data(|d| d.get_temp(Self::state_id(widget_id)))
    }

    /// Drop the draft of an unmounted widget.
    pub fn forget(ctx: &Context, widget_id: &str) {
        let id = Self::state_id(widget_id);
        let removed = ctx.data_mut(|d| {
            let store = d.get_temp::<DraftValueStore>(id);
            d.remove::<DraftValueStore>(id);
            store
        });
        if let Some(store) = removed {
            if store.is_dirty() {
                log::debug!("Widget {} unmounted with an uncommitted draft", widget_id);
            }
        }
    }

    /// Show the widget, forwarding commits to `remote`.
    pub fn show(self, ui: &mut Ui, remote: &mut dyn RemoteWidgetStateManager) -> TextAreaResponse {
        let spec = self.spec;
        let state_id = Self::state_id(&spec.id);
        let mut store: DraftValueStore = ui.data(|d| d.get_temp(state_id)).unwrap_or_default();
        let controller = CommitController::with_policy(spec.id.clone(), self.policy);

        let inner = ui.vertical(|ui| {
            ui.set_width(spec.width);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&spec.label)
                        .size(sizing::LABEL_SIZE)
                        .color(if spec.disabled { theme::TEXT_MUTED } else { theme::TEXT }),
                );
                if store.is_dirty() {
                    ui.label(
                        RichText::new(commit_hint(controller.policy()))
                            .size(sizing::HINT_SIZE)
                            .color(theme::TEXT_MUTED),
                    );
                }
            });
            ui.add_space(sizing::LABEL_GAP);

            let mut text = store.resolve_display_value(&spec.default_value).to_owned();
            let edit = TextEdit::multiline(&mut text)
                .id(state_id.with("edit"))
                .desired_width(spec.width)
                .desired_rows(sizing::TEXT_AREA_ROWS);
            let response = ui.add_enabled(!spec.disabled, edit);
            (response, text)
        });
        let (response, text) = inner.inner;

        let events = collect_events(ui, &response, text);
        if !events.is_empty() {
            log::trace!("Widget {} events: {:?}", controller.widget_id(), events);
        }
        let committed = controller
            .handle_events(&mut store, &events, remote)
            .pop();

        ui.data_mut(|d| d.insert_temp(state_id, store));

        TextAreaResponse { response, committed }
    }
}

/// Translate this frame's egui input into widget events, in the order the
/// controller must see them: text change, key presses, focus loss.
fn collect_events(ui: &Ui, response: &Response, text: String) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if response.changed() {
        events.push(InputEvent::TextChanged { value: text });
    }
    if response.has_focus() || response.lost_focus() {
        ui.input(|i| {
            for event in &i.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    events.push(key_event(*key, *modifiers));
                }
            }
        });
    }
    if response.lost_focus() {
        events.push(InputEvent::FocusLost);
    }
    events
}

/// Hint shown next to the label while a draft is uncommitted.
fn commit_hint(policy: &CommitPolicy) -> String {
    format!("Press {} to apply", policy.shortcut.format())
}

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> InputEvent {
    InputEvent::KeyPressed {
        key: key.name().to_string(),
        modifiers: Modifiers {
            shift: modifiers.shift,
            ctrl: modifiers.ctrl,
            alt: modifiers.alt,
            meta: modifiers.mac_cmd,
        },
    }
}
