//! User-invoked use cases.
//!
//! Clipboard sampling is not a use case here; it is driven by the
//! [`crate::runtime::Poller`].

pub mod apply_modifier;

pub use apply_modifier::ApplyModifier;
