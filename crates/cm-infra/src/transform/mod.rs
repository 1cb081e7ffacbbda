mod builtin;
mod rhai_engine;
mod scripts;

pub use builtin::{find_native, native_modifiers, ScriptedTransform, Utf8ToHex};
pub use rhai_engine::{RhaiScriptEngine, DEFAULT_SCRIPT_TIMEOUT};
pub use scripts::{builtin_modifiers, find_builtin, UTF8_TO_HEX_SCRIPT};
