//! Modifier scripts shipped with the application.

use cm_core::ModifierScript;

/// Hex-encodes the UTF-8 bytes of the input, upper-case, two digits per byte.
pub const UTF8_TO_HEX_SCRIPT: &str = r#"
fn modify(input) {
    let out = "";
    for byte in input.to_blob() {
        if byte < 16 {
            out += "0";
        }
        out += to_hex(byte);
    }
    out.to_upper()
}
"#;

const UPPERCASE_SCRIPT: &str = r#"
fn modify(input) {
    input.to_upper()
}
"#;

const TRIM_SCRIPT: &str = r#"
fn modify(input) {
    let text = input;
    text.trim();
    text
}
"#;

pub fn builtin_modifiers() -> Vec<ModifierScript> {
    vec![
        ModifierScript::new(
            "utf8-to-hex",
            "Hex-encode the UTF-8 bytes of the text",
            UTF8_TO_HEX_SCRIPT,
        ),
        ModifierScript::new("uppercase", "Convert the text to upper case", UPPERCASE_SCRIPT),
        ModifierScript::new("trim", "Strip leading and trailing whitespace", TRIM_SCRIPT),
    ]
}

pub fn find_builtin(name: &str) -> Option<ModifierScript> {
    builtin_modifiers().into_iter().find(|m| m.name == name)
}
