//! JSON serialization with configurable indentation.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::FormatOptions;

/// Serialize `value` honouring the indentation and minify options.
pub fn to_json<T: Serialize + ?Sized>(value: &T, options: &FormatOptions) -> String {
    let result = match options.effective_indent() {
        None => serde_json::to_string(value),
        Some(width) => pretty(value, width),
    };
    // ABI entries and signature strings only contain string keys
    result.expect("ABI values always serialize to JSON")
}

fn pretty<T: Serialize + ?Sized>(value: &T, width: usize) -> serde_json::Result<String> {
    let indent = " ".repeat(width);
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
