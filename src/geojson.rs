use crate::MyError;

use geojson::GeoJson;
use serde_json::Value;

// An empty column means the shape is absent, which is not an error.
pub fn parse_shape(column: &'static str, field: &str) -> Result<Option<Value>, MyError> {
    if field.is_empty() {
        return Ok(None);
    }

    serde_json::from_str(field)
        .map(Some)
        .map_err(|err| MyError::MalformedPayload {
            column,
            reason: err.to_string(),
        })
}

// Stricter check used by check-dataset --strict. The server itself only
// requires well-formed json, not valid geojson.
pub fn validate_shape_strict(field: &str) -> Result<(), String> {
    field
        .parse::<GeoJson>()
        .map(|_| ())
        .map_err(|err| err.to_string())
}
