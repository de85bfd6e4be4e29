//! Parsing ABI text into entries.

use serde::Deserialize;
use serde_json::Value;

use super::entry::AbiEntry;
use super::error::ParseError;

/// Parse a JSON array of ABI entries.
///
/// Fails as a whole: either every element is a valid entry or nothing is
/// returned. Constructor, fallback and receive entries are kept.
pub fn parse_abi(text: &str) -> Result<Vec<AbiEntry>, ParseError> {
    let value: Value = serde_json::from_str(text)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ParseError::NotAList {
                found: describe(&other),
            })
        }
    };

    let entries = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            AbiEntry::deserialize(item).map_err(|e| ParseError::InvalidEntry {
                index,
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = entries.len(), "parsed ABI");
    Ok(entries)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
