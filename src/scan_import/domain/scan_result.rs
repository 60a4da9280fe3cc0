use serde_json::{Map, Value};

/// Top-level fields every uploaded scan result must carry as objects
pub const REQUIRED_FIELDS: [&str; 5] = [
    "organisation",
    "projects",
    "build_definitions",
    "builds",
    "protected_resources",
];

/// ScanResult - a scanner document that passed shape validation
///
/// The nested content stays as raw JSON: the scanner owns its schema and this
/// crate only reads selected parts of it. Required collections are guaranteed
/// to be JSON objects or arrays; optional fields are `None` when absent or null.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub id: Option<Value>,
    pub scan_start: Option<Value>,
    pub scan_end: Option<Value>,
    pub organisation: Value,
    pub projects: Value,
    pub build_definitions: Value,
    pub builds: Value,
    pub protected_resources: Value,
    pub stats: Option<Value>,
    pub commits: Option<Value>,
    pub committer_stats: Option<Value>,
    pub build_service_accounts: Option<Value>,
    pub artifacts: Option<Value>,
    /// Top-level fields not listed above, kept verbatim
    pub extra: Map<String, Value>,
}
