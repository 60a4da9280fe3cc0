use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Start and end timestamps of the scanner run, as reported by the scanner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Value>,
}

/// Scan - one imported snapshot of an organisation's inventory
///
/// This is the record handed to the scan store. Optional collections are
/// always populated (empty when the upload had none), so readers never have
/// to distinguish "absent" from "empty".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub scan: ScanWindow,
    pub organisation: Value,
    pub projects: Value,
    pub protected_resources: Value,
    pub build_definitions: Value,
    pub builds: Value,
    #[serde(default = "empty_object")]
    pub stats: Value,
    #[serde(default = "empty_array")]
    pub commits: Value,
    #[serde(default = "empty_object")]
    pub committer_stats: Value,
    #[serde(default = "empty_array")]
    pub build_service_accounts: Value,
    #[serde(default = "empty_array")]
    pub artifacts: Value,
    /// Scanner fields this crate does not model; stored next to the others
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub(crate) fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

pub(crate) fn empty_array() -> Value {
    Value::Array(Vec::new())
}

impl Scan {
    /// Returns the scanner-assigned id as a string key, if there is one
    ///
    /// String ids are used as-is; numeric ids are rendered in decimal.
    /// Empty strings and other JSON types yield `None`.
    pub fn id_key(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_scan(id: Option<Value>) -> Scan {
        Scan {
            id,
            scan: ScanWindow::default(),
            organisation: json!({}),
            projects: json!({}),
            protected_resources: json!({}),
            build_definitions: json!({}),
            builds: json!({}),
            stats: empty_object(),
            commits: empty_array(),
            committer_stats: empty_object(),
            build_service_accounts: empty_array(),
            artifacts: empty_array(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_id_key_string() {
        let scan = minimal_scan(Some(json!("scan-2024-05")));
        assert_eq!(scan.id_key().as_deref(), Some("scan-2024-05"));
    }

    #[test]
    fn test_id_key_number() {
        let scan = minimal_scan(Some(json!(42)));
        assert_eq!(scan.id_key().as_deref(), Some("42"));
    }

    #[test]
    fn test_id_key_missing_or_blank() {
        assert!(minimal_scan(None).id_key().is_none());
        assert!(minimal_scan(Some(json!("  "))).id_key().is_none());
        assert!(minimal_scan(Some(json!({"nested": true}))).id_key().is_none());
    }

    #[test]
    fn test_scan_window_omits_missing_bounds() {
        let scan = minimal_scan(None);
        let value = serde_json::to_value(&scan).unwrap();
        assert_eq!(value["scan"], json!({}));
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_deserialize_fills_missing_collections() {
        let stored = json!({
            "organisation": {"name": "contoso"},
            "projects": {},
            "protected_resources": {},
            "build_definitions": {},
            "builds": {}
        });
        let scan: Scan = serde_json::from_value(stored).unwrap();
        assert_eq!(scan.commits, json!([]));
        assert_eq!(scan.committer_stats, json!({}));
        assert_eq!(scan.scan, ScanWindow::default());
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let mut scan = minimal_scan(Some(json!("scan-1")));
        scan.extra.insert("scanner_version".to_string(), json!("3.2.0"));

        let value = serde_json::to_value(&scan).unwrap();
        assert_eq!(value["scanner_version"], "3.2.0");

        let restored: Scan = serde_json::from_value(value).unwrap();
        assert_eq!(restored, scan);
    }
}
