pub mod history;
pub mod time;
pub mod transform;

pub use history::JsonFileHistoryRepository;
pub use time::SystemClock;
pub use transform::{
    builtin_modifiers, native_modifiers, RhaiScriptEngine, ScriptedTransform, Utf8ToHex,
};
