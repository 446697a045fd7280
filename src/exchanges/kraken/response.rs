use crate::core::errors::ExchangeError;
use serde_json::Value;
use tracing::warn;

/// Marker for a real error code; other prefixes (`W`) are warnings
const ERROR_MARKER: char = 'E';

/// Turn a parsed response body into the call result
///
/// A body whose `error` list holds an `E`-prefixed entry fails with the
/// first such code, marker stripped. Warnings alone do not fail the call:
/// they are logged and the body is returned like any other success.
pub fn normalize(body: Value) -> Result<Value, ExchangeError> {
    let messages = error_messages(&body);
    if messages.is_empty() {
        return Ok(body);
    }

    let code = messages
        .iter()
        .find_map(|m| m.strip_prefix(ERROR_MARKER))
        .map(str::to_string);
    if let Some(code) = code {
        return Err(ExchangeError::Remote { code, messages });
    }

    for message in &messages {
        warn!(warning = %message, "Kraken API returned a warning");
    }
    Ok(body)
}

/// Entries of the `error` field; a bare string counts as a single entry
fn error_messages(body: &Value) -> Vec<String> {
    match body.get("error") {
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| match entry {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}
