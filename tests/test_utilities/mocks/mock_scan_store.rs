use observes::prelude::*;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// In-memory ScanStore; clones share the same scans
#[derive(Default, Clone)]
pub struct MockScanStore {
    scans: Arc<Mutex<BTreeMap<String, Scan>>>,
    add_calls: Arc<Mutex<usize>>,
    list_calls: Arc<Mutex<usize>>,
    unreadable: Vec<UnreadableScan>,
    should_fail: bool,
}

impl MockScanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails
    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_scan(self, scan: Scan) -> Self {
        self.add_scan(&scan).unwrap();
        *self.add_calls.lock().unwrap() = 0;
        self
    }

    /// Every listing also reports this file as unreadable
    pub fn with_unreadable(mut self, path: &str, reason: &str) -> Self {
        self.unreadable.push(UnreadableScan {
            path: PathBuf::from(path),
            reason: reason.to_string(),
        });
        self
    }

    pub fn add_calls(&self) -> usize {
        *self.add_calls.lock().unwrap()
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    pub fn scan_count(&self) -> usize {
        self.scans.lock().unwrap().len()
    }

    fn check(&self) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock scan store failure");
        }
        Ok(())
    }
}

impl ScanStore for MockScanStore {
    fn add_scan(&self, scan: &Scan) -> Result<String> {
        self.check()?;
        let mut scans = self.scans.lock().unwrap();
        let id = scan
            .id_key()
            .unwrap_or_else(|| format!("generated-{}", scans.len() + 1));
        scans.insert(id.clone(), scan.clone());
        *self.add_calls.lock().unwrap() += 1;
        Ok(id)
    }

    fn delete_scan(&self, id: &str) -> Result<()> {
        self.check()?;
        self.scans.lock().unwrap().remove(id);
        Ok(())
    }

    fn list_scans(&self) -> Result<ScanListing> {
        self.check()?;
        *self.list_calls.lock().unwrap() += 1;
        Ok(ScanListing {
            scans: self.scans.lock().unwrap().values().cloned().collect(),
            unreadable: self.unreadable.clone(),
        })
    }

    fn get_scan(&self, id: &str) -> Result<Option<Scan>> {
        self.check()?;
        Ok(self.scans.lock().unwrap().get(id).cloned())
    }
}
