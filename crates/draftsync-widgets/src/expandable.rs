//! Expandable header: a label with a "Hide"/"Show" toggle.
//!
//! The header is stateless. The caller owns the expanded flag and flips it
//! when the response reports a toggle.

use egui::{Label, Layout, RichText, Sense, Ui};

use crate::{sizing, theme};

/// Text of the toggle affordance.
pub fn toggle_text(expanded: bool) -> &'static str {
    if expanded { "Hide" } else { "Show" }
}

/// Response from showing an [`Expandable`].
pub struct ExpandableResponse<R> {
    /// Whether the toggle was clicked this frame
    pub toggled: bool,
    /// Return value of the contents, if they were shown
    pub inner: Option<R>,
}

/// Wraps contents in a collapsible section.
pub struct Expandable<'a> {
    label: &'a str,
    expanded: bool,
    expandable: bool,
}

impl<'a> Expandable<'a> {
    /// Create an expandable section.
    pub fn new(label: &'a str, expanded: bool) -> Self {
        Self {
            label,
            expanded,
            expandable: true,
        }
    }

    /// Set whether a header is drawn at all. Non-expandable sections always
    /// show their contents.
    pub fn expandable(mut self, expandable: bool) -> Self {
        self.expandable = expandable;
        self
    }

    pub fn show<R>(self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> ExpandableResponse<R> {
        if !self.expandable {
            return ExpandableResponse {
                toggled: false,
                inner: Some(add_contents(ui)),
            };
        }

        let mut toggled = false;
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(self.label)
                    .size(sizing::LABEL_SIZE)
                    .strong()
                    .color(theme::TEXT),
            );
            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                let toggle = Label::new(
                    RichText::new(toggle_text(self.expanded))
                        .size(sizing::LABEL_SIZE)
                        .color(theme::ACCENT),
                )
                .sense(Sense::click());
                toggled = ui.add(toggle).clicked();
            });
        });

        let inner = self.expanded.then(|| add_contents(ui));
        ExpandableResponse { toggled, inner }
    }
}
