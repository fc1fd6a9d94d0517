//! Server-supplied widget description.

use serde::{Deserialize, Serialize};

use crate::error::WidgetResult;

/// Description of a text widget as sent by the server for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSpec {
    /// Unique widget identifier, used to address remote writes.
    pub id: String,
    /// Label shown above the control.
    pub label: String,
    /// Value displayed until the user edits the widget.
    #[serde(rename = "value", default)]
    pub default_value: String,
    #[serde(default)]
    pub disabled: bool,
    /// Layout width in points.
    #[serde(default = "default_width")]
    pub width: f32,
}

fn default_width() -> f32 {
    DEFAULT_WIDTH
}

/// Width used when the element does not carry one.
pub const DEFAULT_WIDTH: f32 = 300.0;

impl WidgetSpec {
    /// Create an enabled widget spec with the default width.
    pub fn new(id: impl Into<String>, label: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            default_value: default_value.into(),
            disabled: false,
            width: DEFAULT_WIDTH,
        }
    }

    /// Set the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the layout width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Parse a spec from the element JSON the server sends.
    pub fn from_json(json: &str) -> WidgetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
