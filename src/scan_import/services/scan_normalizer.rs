use crate::scan_import::domain::scan::{empty_array, empty_object};
use crate::scan_import::domain::{Scan, ScanResult, ScanWindow};
use serde_json::Value;

/// ScanNormalizer service mapping a validated `ScanResult` to a `Scan`
///
/// This is the single place where defaults for missing collections live.
pub struct ScanNormalizer;

impl ScanNormalizer {
    /// Normalizes a validated scan result
    ///
    /// - `scan_start`/`scan_end` move into the nested `scan` window
    /// - `stats` and `committer_stats` default to `{}`; `commits`,
    ///   `build_service_accounts` and `artifacts` default to `[]` when absent
    ///   or falsy
    /// - everything else passes through unchanged
    pub fn normalize(result: ScanResult) -> Scan {
        Scan {
            id: result.id,
            scan: ScanWindow {
                start: result.scan_start,
                end: result.scan_end,
            },
            organisation: result.organisation,
            projects: result.projects,
            protected_resources: result.protected_resources,
            build_definitions: result.build_definitions,
            builds: result.builds,
            stats: or_default(result.stats, empty_object),
            commits: or_default(result.commits, empty_array),
            committer_stats: or_default(result.committer_stats, empty_object),
            build_service_accounts: or_default(result.build_service_accounts, empty_array),
            artifacts: or_default(result.artifacts, empty_array),
            extra: result.extra,
        }
    }
}

fn or_default(value: Option<Value>, default: fn() -> Value) -> Value {
    match value {
        Some(v) if !is_falsy(&v) => v,
        _ => default(),
    }
}

/// JSON values the scanner uses to mean "nothing here"
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
