//! Error types for the draft protocol.

use thiserror::Error;

/// Widget errors.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// A commit was attempted before any edit was recorded.
    #[error("Assertion error: value is undefined")]
    NoDraft,
    /// Malformed JSON for a widget element or commit policy.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;
