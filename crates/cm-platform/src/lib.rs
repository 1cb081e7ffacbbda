//! # cm-platform
//!
//! Platform-specific implementations for ClipboardModifier.
//!
//! This crate contains infrastructure implementations that interact with
//! the operating system.

pub mod app_dirs;
pub mod clipboard;
