use crate::{ModifierScript, TransformError};

/// Embeddable interpreter that evaluates modifier scripts.
///
/// Each evaluation must run in a fresh context under a time budget.
pub trait ScriptEnginePort: Send + Sync {
    /// Evaluate `script` and call its `modify` entry point with `input`.
    fn try_apply(&self, script: &ModifierScript, input: &str) -> Result<String, TransformError>;

    /// Best-effort evaluation: any failure yields `input` unchanged.
    fn apply(&self, script: &ModifierScript, input: &str) -> String {
        match self.try_apply(script, input) {
            Ok(output) => output,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    script = %script.name,
                    error = %_err,
                    "modifier script failed, passing input through"
                );
                input.to_string()
            }
        }
    }
}

/// A named text-to-text capability.
///
/// Implemented by native builtins and by (engine, script) pairs alike, so
/// callers do not care whether a transform is scripted.
pub trait TextTransformPort: Send + Sync {
    fn name(&self) -> &str;

    fn apply(&self, input: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingEngine;

    impl ScriptEnginePort for FailingEngine {
        fn try_apply(&self, _: &ModifierScript, _: &str) -> Result<String, TransformError> {
            Err(TransformError::Runtime("boom".into()))
        }
    }

    struct UpperEngine;

    impl ScriptEnginePort for UpperEngine {
        fn try_apply(&self, _: &ModifierScript, input: &str) -> Result<String, TransformError> {
            Ok(input.to_uppercase())
        }
    }

    #[test]
    fn apply_falls_back_to_input_on_error() {
        let script = ModifierScript::from_source("broken", "");
        assert_eq!(FailingEngine.apply(&script, "hello"), "hello");
    }

    #[test]
    fn apply_returns_engine_output_on_success() {
        let script = ModifierScript::from_source("upper", "");
        assert_eq!(UpperEngine.apply(&script, "hello"), "HELLO");
    }
}
