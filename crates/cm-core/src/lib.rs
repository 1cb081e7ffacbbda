//! # cm-core
//!
//! Core domain models and ports for ClipboardModifier.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod event;
pub mod ports;
pub mod transform;

// Re-export commonly used types at the crate root
pub use clipboard::{compute_entry_hash, ClipboardEntry, RecordOutcome};
pub use config::AppConfig;
pub use event::HistoryEvent;
pub use transform::{ModifierScript, TransformError};
