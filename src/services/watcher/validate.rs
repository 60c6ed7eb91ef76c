use serde_json::Value;

use super::types::WatchError;

/// Shape-checks a raw API payload before any field is read.
///
/// This is the single gate that turns "the API returned garbage" into one
/// typed failure instead of a panic deeper in the pipeline. Returns the
/// record list unchanged.
pub fn check_response(response: &Value) -> Result<&[Value], WatchError> {
    let object = response
        .as_object()
        .ok_or_else(|| WatchError::Schema("response is not a JSON object".to_string()))?;

    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| WatchError::Schema("missing 'homeworks' key".to_string()))?;

    let records = homeworks
        .as_array()
        .ok_or_else(|| WatchError::Schema("'homeworks' is not a list".to_string()))?;

    tracing::debug!("response shape verified, {} record(s)", records.len());
    Ok(records)
}
