use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i64,
}

/// Serializes an options list into the TEXT column encoding.
///
/// JSON is used so the round trip is lossless for arbitrary strings,
/// including embedded quotes, commas, and the empty list.
pub fn encode_options(options: &[String]) -> AppResult<String> {
    Ok(serde_json::to_string(options)?)
}

/// Parses an options column back into the ordered list it was written from.
pub fn decode_options(encoded: &str) -> AppResult<Vec<String>> {
    Ok(serde_json::from_str(encoded)?)
}
