use crate::scan_import::domain::{ScanResult, REQUIRED_FIELDS};
use crate::shared::error::ValidationError;
use serde_json::{Map, Value};

/// Field name reported when the document itself has the wrong shape
const ROOT_FIELD: &str = "<root>";

/// Stored scans use this key for the scan window; an uploaded field of the
/// same name cannot be kept
const SCAN_WINDOW_FIELD: &str = "scan";

/// ScanValidator service checking the shape of an uploaded scan document
///
/// Pure function of its input: no I/O, no side effects.
pub struct ScanValidator;

impl ScanValidator {
    /// Validates a parsed JSON value and types it as a `ScanResult`
    ///
    /// The document must be a JSON object whose required fields are all
    /// present and hold a JSON object or array. Arrays stay accepted because
    /// some scanner versions emit collections such as `projects` as arrays;
    /// `null` is rejected. Unrecognised top-level fields are carried in
    /// `extra`, except `scan`, which is dropped.
    ///
    /// # Errors
    /// Returns `ValidationError::ShapeMismatch` naming the first offending field
    pub fn validate(raw: Value) -> Result<ScanResult, ValidationError> {
        let mut document = match raw {
            Value::Object(map) => map,
            other => {
                return Err(ValidationError::shape_mismatch(
                    ROOT_FIELD,
                    format!("must be a JSON object, found {}", json_kind(&other)),
                ))
            }
        };

        for field in REQUIRED_FIELDS {
            match document.get(field) {
                None => return Err(ValidationError::shape_mismatch(field, "is missing")),
                Some(Value::Object(_)) | Some(Value::Array(_)) => {}
                Some(other) => {
                    return Err(ValidationError::shape_mismatch(
                        field,
                        format!("must be an object, found {}", json_kind(other)),
                    ))
                }
            }
        }

        Ok(ScanResult {
            id: take_optional(&mut document, "id"),
            scan_start: take_optional(&mut document, "scan_start"),
            scan_end: take_optional(&mut document, "scan_end"),
            organisation: take_required(&mut document, "organisation"),
            projects: take_required(&mut document, "projects"),
            build_definitions: take_required(&mut document, "build_definitions"),
            builds: take_required(&mut document, "builds"),
            protected_resources: take_required(&mut document, "protected_resources"),
            stats: take_optional(&mut document, "stats"),
            commits: take_optional(&mut document, "commits"),
            committer_stats: take_optional(&mut document, "committer_stats"),
            build_service_accounts: take_optional(&mut document, "build_service_accounts"),
            artifacts: take_optional(&mut document, "artifacts"),
            extra: {
                document.remove(SCAN_WINDOW_FIELD);
                document
            },
        })
    }
}

/// Human-readable JSON type name used in shape mismatch messages
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Presence was checked above.
fn take_required(document: &mut Map<String, Value>, field: &str) -> Value {
    document.remove(field).unwrap_or(Value::Null)
}

fn take_optional(document: &mut Map<String, Value>, field: &str) -> Option<Value> {
    document.remove(field).filter(|value| !value.is_null())
}
