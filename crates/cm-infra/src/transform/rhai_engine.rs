use std::time::{Duration, Instant};

use rhai::module_resolvers::DummyModuleResolver;
use rhai::{Dynamic, Engine, EvalAltResult, Scope};
use tracing::{debug, debug_span};

use cm_core::ports::ScriptEnginePort;
use cm_core::transform::ENTRY_POINT;
use cm_core::{ModifierScript, TransformError};

pub const DEFAULT_SCRIPT_TIMEOUT: Duration = Duration::from_millis(500);

const MAX_CALL_LEVELS: usize = 64;
const MAX_STRING_SIZE: usize = 16 * 1024 * 1024;

/// Evaluates modifier scripts with the embedded `rhai` interpreter.
///
/// Every call builds a new `Engine`, `Scope` and `AST`, so nothing a script
/// defines survives into the next call. Scripts have no filesystem, network
/// or process access and cannot `import` modules; `print` and `debug` go to
/// tracing.
pub struct RhaiScriptEngine {
    timeout: Duration,
}

impl RhaiScriptEngine {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn build_engine(&self, script_name: &str, deadline: Instant) -> Engine {
        let mut engine = Engine::new();
        // The default resolver loads `import`ed modules from disk.
        engine.set_module_resolver(DummyModuleResolver::new());
        engine.set_max_call_levels(MAX_CALL_LEVELS);
        engine.set_max_string_size(MAX_STRING_SIZE);

        engine.on_progress(move |_ops| {
            if Instant::now() >= deadline {
                Some(Dynamic::UNIT)
            } else {
                None
            }
        });

        let name = script_name.to_string();
        engine.on_print(move |text| debug!(script = %name, "{}", text));
        let name = script_name.to_string();
        engine.on_debug(move |text, _source, pos| {
            debug!(script = %name, position = %pos, "{}", text)
        });

        engine
    }

    fn classify(&self, err: &EvalAltResult) -> TransformError {
        match root_cause(err) {
            EvalAltResult::ErrorTerminated(..) => TransformError::Timeout {
                budget_ms: self.timeout.as_millis() as u64,
            },
            EvalAltResult::ErrorFunctionNotFound(signature, _)
                if is_entry_point_signature(signature) =>
            {
                TransformError::MissingEntryPoint
            }
            other => TransformError::Runtime(other.to_string()),
        }
    }
}

impl Default for RhaiScriptEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT_TIMEOUT)
    }
}

impl ScriptEnginePort for RhaiScriptEngine {
    fn try_apply(&self, script: &ModifierScript, input: &str) -> Result<String, TransformError> {
        let span = debug_span!(
            "infra.rhai.apply",
            script = %script.name,
            input_len = input.len(),
        );
        let _enter = span.enter();

        let deadline = Instant::now() + self.timeout;
        let engine = self.build_engine(&script.name, deadline);

        let ast = engine
            .compile(&script.source)
            .map_err(|e| TransformError::Parse(e.to_string()))?;

        if !ast.iter_functions().any(|f| f.name == ENTRY_POINT) {
            return Err(TransformError::MissingEntryPoint);
        }

        let mut scope = Scope::new();
        let result: Dynamic = engine
            .call_fn(&mut scope, &ast, ENTRY_POINT, (input.to_string(),))
            .map_err(|e| self.classify(&e))?;

        let type_name = result.type_name();
        let output = result.into_string().map_err(|_| TransformError::NonText {
            type_name: type_name.to_string(),
        })?;

        debug!(output_len = output.len(), "modifier script applied");
        Ok(output)
    }
}

/// Errors raised inside a script function arrive wrapped once per call frame.
fn root_cause(err: &EvalAltResult) -> &EvalAltResult {
    let mut current = err;
    while let EvalAltResult::ErrorInFunctionCall(_, _, inner, _) = current {
        current = inner.as_ref();
    }
    current
}

fn is_entry_point_signature(signature: &str) -> bool {
    signature == ENTRY_POINT || signature.starts_with(&format!("{ENTRY_POINT} ("))
}
