use std::sync::Arc;

use cm_core::ports::{ScriptEnginePort, TextTransformPort};
use cm_core::ModifierScript;

/// Native counterpart of the `utf8-to-hex` script.
pub struct Utf8ToHex;

impl Utf8ToHex {
    pub const NAME: &'static str = "utf8-to-hex-native";
    pub const DESCRIPTION: &'static str = "Hex-encode the UTF-8 bytes of the text (no script engine)";
}

impl TextTransformPort for Utf8ToHex {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&self, input: &str) -> String {
        hex::encode_upper(input.as_bytes())
    }
}

/// Transforms implemented in Rust, as `(name, description)` pairs.
pub fn native_modifiers() -> Vec<(&'static str, &'static str)> {
    vec![(Utf8ToHex::NAME, Utf8ToHex::DESCRIPTION)]
}

pub fn find_native(name: &str) -> Option<Arc<dyn TextTransformPort>> {
    match name {
        Utf8ToHex::NAME => Some(Arc::new(Utf8ToHex)),
        _ => None,
    }
}

/// A modifier script bound to the engine that evaluates it.
pub struct ScriptedTransform {
    engine: Arc<dyn ScriptEnginePort>,
    script: ModifierScript,
}

impl ScriptedTransform {
    pub fn new(engine: Arc<dyn ScriptEnginePort>, script: ModifierScript) -> Self {
        Self { engine, script }
    }

    pub fn script(&self) -> &ModifierScript {
        &self.script
    }
}

impl TextTransformPort for ScriptedTransform {
    fn name(&self) -> &str {
        &self.script.name
    }

    fn apply(&self, input: &str) -> String {
        self.engine.apply(&self.script, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_to_hex_encodes_bytes_upper_case() {
        assert_eq!(Utf8ToHex.apply("AB"), "4142");
        assert_eq!(Utf8ToHex.apply(""), "");
        assert_eq!(Utf8ToHex.apply("\n"), "0A");
        assert_eq!(Utf8ToHex.apply("é"), "C3A9");
    }

    #[test]
    fn native_catalogue_resolves_by_name() {
        for (name, _) in native_modifiers() {
            let transform = find_native(name).expect("listed native modifier resolves");
            assert_eq!(transform.name(), name);
        }
        assert!(find_native("utf8-to-hex").is_none());
    }
}
