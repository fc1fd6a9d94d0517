//! Remote widget state manager.
//!
//! The state manager is the system of record for widget values. Widgets hand
//! it committed values and never wait for an answer: whatever happens to the
//! write afterwards (delivery, retries, backend errors) is not their concern.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Receiver of committed widget values.
pub trait RemoteWidgetStateManager {
    /// Record `value` as the current value of `widget_id`.
    fn set_string_value(&mut self, widget_id: &str, value: &str);
}

/// The value of one widget as sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetStateEntry {
    pub id: String,
    pub string_value: String,
}

/// Messages sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Ask the backend to rerun with the given widget values.
    Rerun { widgets: Vec<WidgetStateEntry> },
}

/// Client-side widget value store.
///
/// Every write queues a rerun request carrying the full set of known widget
/// values. The application drains the queue with [`take_outgoing`] and owns the
/// transport.
///
/// [`take_outgoing`]: WidgetStateManager::take_outgoing
#[derive(Debug, Clone, Default)]
pub struct WidgetStateManager {
    /// Last value per widget id. Ordered so rerun payloads are stable.
    values: BTreeMap<String, String>,
    /// Pending outgoing messages (JSON).
    outgoing: Vec<String>,
}

impl WidgetStateManager {
    /// Create an empty state manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the last value written for a widget.
    pub fn string_value(&self, widget_id: &str) -> Option<&str> {
        self.values.get(widget_id).map(String::as_str)
    }

    /// Number of widgets with a stored value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Take pending outgoing messages (drains the queue).
    pub fn take_outgoing(&mut self) -> Vec<String> {
        std::mem::take(&mut self.outgoing)
    }

    /// Check if there are pending outgoing messages.
    pub fn has_outgoing(&self) -> bool {
        !self.outgoing.is_empty()
    }

    fn queue_rerun(&mut self) {
        let widgets = self
            .values
            .iter()
            .map(|(id, value)| WidgetStateEntry {
                id: id.clone(),
                string_value: value.clone(),
            })
            .collect();
        let msg = ClientMessage::Rerun { widgets };
        match serde_json::to_string(&msg) {
            Ok(json) => {
                log::info!("Queued rerun with {} widget value(s)", self.values.len());
                self.outgoing.push(json);
            }
            Err(e) => log::error!("Failed to serialize rerun message: {}", e),
        }
    }
}

impl RemoteWidgetStateManager for WidgetStateManager {
    fn set_string_value(&mut self, widget_id: &str, value: &str) {
        self.values.insert(widget_id.to_string(), value.to_string());
        self.queue_rerun();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_by_default() {
        let manager = WidgetStateManager::new();
        assert!(manager.is_empty());
        assert!(!manager.has_outgoing());
        assert_eq!(manager.string_value("w1"), None);
    }

    #[test]
    fn test_set_value_stores_and_queues() {
        let mut manager = WidgetStateManager::new();
        manager.set_string_value("w1", "hello");

        assert_eq!(manager.string_value("w1"), Some("hello"));
        assert_eq!(manager.len(), 1);

        let outgoing = manager.take_outgoing();
        assert_eq!(outgoing.len(), 1);
        assert!(!manager.has_outgoing());

        let msg: ClientMessage = serde_json::from_str(&outgoing[0]).unwrap();
        assert_eq!(
            msg,
            ClientMessage::Rerun {
                widgets: vec![WidgetStateEntry {
                    id: "w1".into(),
                    string_value: "hello".into(),
                }],
            }
        );
    }

    #[test]
    fn test_rerun_carries_all_widgets_sorted() {
        let mut manager = WidgetStateManager::new();
        manager.set_string_value("w2", "second");
        manager.set_string_value("w1", "first");
        manager.set_string_value("w2", "second again");

        let outgoing = manager.take_outgoing();
        assert_eq!(outgoing.len(), 3);

        let ClientMessage::Rerun { widgets } = serde_json::from_str::<ClientMessage>(&outgoing[2]).unwrap();
        let ids: Vec<_> = widgets.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["w1", "w2"]);
        assert_eq!(widgets[1].string_value, "second again");
    }

    #[test]
    fn test_message_wire_format() {
        let mut manager = WidgetStateManager::new();
        manager.set_string_value("w1", "x");
        let outgoing = manager.take_outgoing();
        assert_eq!(
            outgoing[0],
            r#"{"type":"rerun","widgets":[{"id":"w1","string_value":"x"}]}"#
        );
    }
}
