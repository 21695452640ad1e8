use std::{fs, path::Path};

use serde_json::Value;

use crate::error::JanitorError;

/// Parse the default-locale message file content and return its top-level
/// keys as the token set, in insertion order.
///
/// Only first-level keys are tokens; a flat message catalog is expected,
/// and anything nested below the top level is ignored.
pub fn parse_tokens(content: &str) -> Result<Vec<String>, String> {
    let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;

    match value {
        Value::Object(map) => Ok(map.keys().cloned().collect()),
        other => Err(format!(
            "expected a JSON object at the top level, found {}",
            json_type_name(&other)
        )),
    }
}

/// Load the token set from the default-locale message file.
///
/// Any failure (missing file, unreadable, invalid JSON, non-object top
/// level) is `InvalidTokenFile` and fatal to the invoking command: no
/// partial token list is usable.
pub fn load_tokens(path: &Path) -> Result<Vec<String>, JanitorError> {
    let content = fs::read_to_string(path).map_err(|e| JanitorError::InvalidTokenFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    parse_tokens(&content).map_err(|reason| JanitorError::InvalidTokenFile {
        path: path.to_path_buf(),
        reason,
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
