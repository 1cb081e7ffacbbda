//! Text transformation model.
//!
//! A modifier is a named script that defines `modify(input) -> output`.
//! Evaluation belongs to an engine behind [`crate::ports::ScriptEnginePort`].

use thiserror::Error;

/// Name of the function every modifier script must define.
pub const ENTRY_POINT: &str = "modify";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierScript {
    pub name: String,
    pub description: String,
    pub source: String,
}

impl ModifierScript {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            source: source.into(),
        }
    }

    /// Script with no description, e.g. loaded from a user file.
    pub fn from_source(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(name, String::new(), source)
    }
}

/// Why a script could not produce a transformed text.
///
/// Callers of the best-effort path never see this; they get the input back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("script failed to parse: {0}")]
    Parse(String),

    #[error("script does not define `modify`")]
    MissingEntryPoint,

    #[error("script raised an error: {0}")]
    Runtime(String),

    #[error("script exceeded its time budget of {budget_ms} ms")]
    Timeout { budget_ms: u64 },

    #[error("script returned a {type_name} instead of a string")]
    NonText { type_name: String },
}
