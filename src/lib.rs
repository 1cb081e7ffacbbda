//! # clipmod
//!
//! Process composition for the clipboard history service: command line,
//! configuration, tracing, dependency wiring and the run loop.

pub mod bootstrap;
