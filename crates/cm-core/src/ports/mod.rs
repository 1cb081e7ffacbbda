//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `cm-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or domains?**
//! 3. **Is it implemented by the infrastructure or platform layer?**
//!
//! If all three answers are **yes**, place it in `cm-core/ports`.
//! Otherwise, place it in the relevant `domain` submodule.

pub mod app_dirs;
mod clipboard;
mod clock;
pub mod errors;
mod history;
mod history_observer;
mod transform;

pub use app_dirs::AppDirsPort;
pub use clipboard::ClipboardSourcePort;
pub use clock::ClockPort;
pub use errors::AppDirsError;
pub use history::HistoryPersistencePort;
pub use history_observer::HistoryObserver;
pub use transform::{ScriptEnginePort, TextTransformPort};
