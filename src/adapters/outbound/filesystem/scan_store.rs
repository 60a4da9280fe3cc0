use crate::ports::outbound::{ScanListing, ScanStore, UnreadableScan};
use crate::scan_import::domain::Scan;
use crate::shared::error::ObservesError;
use crate::shared::security::{
    validate_file_size, validate_not_symlink, validate_path_segment, validate_regular_file,
    MAX_FILE_SIZE,
};
use crate::shared::Result;
use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Directory below the store directory holding one JSON file per scan
pub const SCANS_DIR_NAME: &str = "scans";

/// JsonScanStore adapter persisting scans as pretty-printed JSON files
///
/// Layout: `<store_dir>/scans/<id>.json`. A scan without an id is stored
/// under a fresh UUID v4, which is also written into its `id` field. Adding a
/// scan whose id is already stored replaces the file.
pub struct JsonScanStore {
    store_dir: PathBuf,
}

impl JsonScanStore {
    pub fn new(store_dir: impl Into<PathBuf>) -> Self {
        Self {
            store_dir: store_dir.into(),
        }
    }

    pub fn scans_dir(&self) -> PathBuf {
        self.store_dir.join(SCANS_DIR_NAME)
    }

    fn scan_path(&self, id: &str) -> Result<PathBuf> {
        validate_path_segment(id, "Scan id").map_err(|e| ObservesError::InvalidScanId {
            id: id.to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.scans_dir().join(format!("{}.json", id)))
    }

    fn read_scan(path: &Path) -> Result<Scan> {
        validate_regular_file(path, "stored scan")?;
        let metadata = fs::metadata(path)?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        let content = fs::read_to_string(path).map_err(|e| ObservesError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        serde_json::from_str(&content)
            .with_context(|| format!("Stored scan {} is not valid", path.display()))
    }
}

impl ScanStore for JsonScanStore {
    fn add_scan(&self, scan: &Scan) -> Result<String> {
        let id = scan.id_key().unwrap_or_else(|| Uuid::new_v4().to_string());
        let path = self.scan_path(&id)?;

        let mut stored = scan.clone();
        if stored.id_key().is_none() {
            stored.id = Some(Value::String(id.clone()));
        }

        let scans_dir = self.scans_dir();
        fs::create_dir_all(&scans_dir).map_err(|e| ObservesError::FileWriteError {
            path: scans_dir.clone(),
            details: e.to_string(),
        })?;

        if fs::symlink_metadata(&path).is_ok() {
            validate_not_symlink(&path, "write")?;
        }

        // Temp file in the same directory, then rename over the target.
        let mut temp_file = tempfile::NamedTempFile::new_in(&scans_dir)?;
        serde_json::to_writer_pretty(&mut temp_file, &stored)?;
        temp_file.write_all(b"\n")?;
        temp_file
            .persist(&path)
            .map_err(|e| ObservesError::FileWriteError {
                path: path.clone(),
                details: e.to_string(),
            })?;

        Ok(id)
    }

    fn delete_scan(&self, id: &str) -> Result<()> {
        let path = self.scan_path(id)?;
        if fs::symlink_metadata(&path).is_err() {
            return Err(ObservesError::ScanNotFound { id: id.to_string() }.into());
        }

        validate_not_symlink(&path, "delete")?;
        fs::remove_file(&path).map_err(|e| ObservesError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(())
    }

    fn list_scans(&self) -> Result<ScanListing> {
        let scans_dir = self.scans_dir();
        if !scans_dir.is_dir() {
            return Ok(ScanListing::default());
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(&scans_dir)
            .with_context(|| format!("Failed to list {}", scans_dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut listing = ScanListing::default();
        for path in paths {
            match Self::read_scan(&path) {
                Ok(scan) => listing.scans.push(scan),
                Err(e) => listing.unreadable.push(UnreadableScan {
                    path,
                    reason: format!("{:#}", e),
                }),
            }
        }
        Ok(listing)
    }

    fn get_scan(&self, id: &str) -> Result<Option<Scan>> {
        let path = self.scan_path(id)?;
        if fs::symlink_metadata(&path).is_err() {
            return Ok(None);
        }
        Self::read_scan(&path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_import::services::{ScanNormalizer, ScanValidator};
    use serde_json::json;
    use tempfile::TempDir;

    fn scan(id: Option<&str>, organisation: &str) -> Scan {
        let mut raw = json!({
            "organisation": {"name": organisation},
            "projects": {},
            "build_definitions": {},
            "builds": {},
            "protected_resources": {}
        });
        if let Some(id) = id {
            raw["id"] = json!(id);
        }
        ScanNormalizer::normalize(ScanValidator::validate(raw).unwrap())
    }

    #[test]
    fn test_add_and_get_scan() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonScanStore::new(temp_dir.path());

        let id = store.add_scan(&scan(Some("scan-1"), "acme")).unwrap();
        assert_eq!(id, "scan-1");
        assert!(temp_dir.path().join("scans/scan-1.json").is_file());

        let stored = store.get_scan("scan-1").unwrap().unwrap();
        assert_eq!(stored, scan(Some("scan-1"), "acme"));
        assert!(store.get_scan("scan-2").unwrap().is_none());
    }

    #[test]
    fn test_add_scan_without_id_assigns_uuid() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonScanStore::new(temp_dir.path());

        let id = store.add_scan(&scan(None, "acme")).unwrap();
        assert!(Uuid::parse_str(&id).is_ok());

        let stored = store.get_scan(&id).unwrap().unwrap();
        assert_eq!(stored.id_key().as_deref(), Some(id.as_str()));
    }

    #[test]
    fn test_add_scan_with_existing_id_replaces_it() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonScanStore::new(temp_dir.path());

        store.add_scan(&scan(Some("scan-1"), "acme")).unwrap();
        store.add_scan(&scan(Some("scan-1"), "contoso")).unwrap();

        let scans = store.list_scans().unwrap().scans;
        assert_eq!(scans.len(), 1);
        assert_eq!(scans[0].organisation["name"], "contoso");
    }

    #[test]
    fn test_list_scans_sorted_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonScanStore::new(temp_dir.path());
        assert_eq!(store.list_scans().unwrap(), ScanListing::default());

        store.add_scan(&scan(Some("b"), "acme")).unwrap();
        store.add_scan(&scan(Some("a"), "acme")).unwrap();

        let ids: Vec<String> = store
            .list_scans()
            .unwrap()
            .scans
            .iter()
            .filter_map(Scan::id_key)
            .collect();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_list_scans_skips_unreadable_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonScanStore::new(temp_dir.path());
        store.add_scan(&scan(Some("good"), "acme")).unwrap();
        fs::write(store.scans_dir().join("broken.json"), "not json").unwrap();

        let listing = store.list_scans().unwrap();
        assert_eq!(listing.scans.len(), 1);
        assert_eq!(listing.unreadable.len(), 1);
        assert_eq!(
            listing.unreadable[0].path,
            store.scans_dir().join("broken.json")
        );
        assert!(listing.unreadable[0].reason.contains("is not valid"));
    }

    #[test]
    fn test_delete_scan() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonScanStore::new(temp_dir.path());
        store.add_scan(&scan(Some("scan-1"), "acme")).unwrap();

        store.delete_scan("scan-1").unwrap();
        assert!(store.list_scans().unwrap().scans.is_empty());

        let error = store.delete_scan("scan-1").unwrap_err();
        assert!(format!("{}", error).contains("Scan not found"));
    }

    #[test]
    fn test_rejects_path_traversal_ids() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonScanStore::new(temp_dir.path());

        assert!(store.add_scan(&scan(Some("../escape"), "acme")).is_err());
        assert!(store.get_scan("..").is_err());
        assert!(store.delete_scan("a/b").is_err());
    }
}
