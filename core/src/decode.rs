//! Response body decoding.
//!
//! The service reports failures with an `{"error": ...}` body rather than
//! only through the status line, so the body is first read as a generic
//! object and the shape is picked by which marker key is present.

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::types::{ActivityResponse, ErrorResult, Idea};

const IDEA_MARKER: &str = "activity";
const ERROR_MARKER: &str = "error";

/// Decode a response body into exactly one `ActivityResponse` case.
///
/// An `activity` key wins over an `error` key; the service never sends both.
/// Idea fields that are missing or `null` decode to zero values. Invalid
/// JSON, non-object JSON, or a field of the wrong type is a `DecodeError`.
pub fn decode(bytes: &[u8]) -> Result<ActivityResponse, DecodeError> {
    let object: Map<String, Value> = serde_json::from_slice(bytes)?;

    let response = if object.contains_key(IDEA_MARKER) {
        let idea: Idea = serde_json::from_value(Value::Object(object))?;
        ActivityResponse::Idea(idea)
    } else if object.contains_key(ERROR_MARKER) {
        let rejected: ErrorResult = serde_json::from_value(Value::Object(object))?;
        ActivityResponse::Rejected(rejected)
    } else {
        ActivityResponse::Empty
    };

    log::debug!(
        "decoded response as {}",
        match &response {
            ActivityResponse::Idea(_) => "idea",
            ActivityResponse::Rejected(_) => "error result",
            ActivityResponse::Empty => "empty object",
        }
    );
    Ok(response)
}
