//! JSON decoding of CLI output.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Diagnostics embedded in the report are cut to this many characters.
pub const MAX_DIAGNOSTIC_CHARS: usize = 200;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("path={path} error={source}")]
    Path {
        path: String,
        source: serde_json::Error,
    },
    #[error("trailing data: {0}")]
    Trailing(serde_json::Error),
}

/// Decode `output` as `T`, logging the JSON path that failed.
pub fn decode<T: DeserializeOwned>(output: &str, what: &str) -> Result<T, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_str(output);
    let parsed: Result<T, DecodeError> =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| DecodeError::Path {
            path: e.path().to_string(),
            source: e.into_inner(),
        });
    let parsed = parsed.and_then(|v| {
        deserializer.end().map_err(DecodeError::Trailing)?;
        Ok(v)
    });

    if let Err(e) = &parsed {
        log::warn!("Error parsing {what}: {e}");
        log::trace!("OUTPUT START:\n\n{output}\n\nOUTPUT END\n");
    }
    parsed
}

/// Decode a JSON array listing where empty output means nothing is listed.
pub fn decode_list<T: DeserializeOwned>(output: &str, what: &str) -> Result<Vec<T>, DecodeError> {
    if output.is_empty() {
        log::debug!("Empty {what} listing");
        return Ok(vec![]);
    }
    decode(output, what)
}

/// First `max` characters of `s`.
pub fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// `s` cut for embedding in the report.
pub fn diagnostic(s: &str) -> String {
    truncate(s, MAX_DIAGNOSTIC_CHARS)
}
