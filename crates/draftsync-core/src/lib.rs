//! draftsync Core Library
//!
//! Platform-agnostic draft tracking for server-driven input widgets.
//! A widget keeps what the user typed locally and forwards it to the
//! remote widget state manager only when a commit trigger fires.

pub mod controller;
pub mod draft;
pub mod element;
pub mod error;
pub mod event;
pub mod policy;
pub mod remote;

pub use controller::{CommitController, EventOutcome};
pub use draft::{DraftPhase, DraftValueStore};
pub use element::WidgetSpec;
pub use error::{WidgetError, WidgetResult};
pub use event::{InputEvent, Modifiers};
pub use policy::{Action, CommitPolicy, Shortcut};
pub use remote::{ClientMessage, RemoteWidgetStateManager, WidgetStateEntry, WidgetStateManager};
