//! egui widgets bound to draftsync draft values.
//!
//! - **TextArea**: multiline input that keeps a local draft and commits it
//!   to the widget state manager on blur or Ctrl+Enter
//! - **Expandable**: stateless header that shows "Hide" or "Show"

pub mod expandable;
pub mod text_area;

pub use expandable::{toggle_text, Expandable, ExpandableResponse};
pub use text_area::{TextArea, TextAreaResponse};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Label font size
    pub const LABEL_SIZE: f32 = 12.0;
    /// Commit hint font size
    pub const HINT_SIZE: f32 = 10.0;
    /// Space between a label and its control
    pub const LABEL_GAP: f32 = 4.0;
    /// Rows shown by a text area before it scrolls
    pub const TEXT_AREA_ROWS: usize = 4;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Toggle/link color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
}
