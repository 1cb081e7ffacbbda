//! ClipboardModifier Application Orchestration Layer
//!
//! This crate owns the history store, the change notification bus, the
//! clipboard poller and the user-invoked use cases.

pub mod app_paths;
pub mod event;
pub mod history;
pub mod runtime;
pub mod usecases;

pub use event::{NotificationBus, SubscriptionHandle};
pub use history::HistoryStore;
pub use runtime::{Poller, PollerError, PollerHandle, PollerState};
