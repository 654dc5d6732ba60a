pub mod client;
pub mod method;

/// Escape `*/` sequences that would prematurely close JSDoc comment blocks.
pub(crate) fn escape_jsdoc(value: String) -> String {
    value.replace("*/", "*\\/")
}
